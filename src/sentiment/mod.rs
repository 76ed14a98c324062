mod scorer;

pub use scorer::SentimentScorer;
