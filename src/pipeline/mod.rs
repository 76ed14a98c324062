mod outcome;
mod runner;

pub use outcome::{AnalysisOutcome, AnalysisRequest, AnalysisResult, PipelineStage};
pub use runner::{AnalysisPipeline, ChartRenderer};
