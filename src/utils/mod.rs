mod time_utils;

pub use time_utils::{
    TimeUtils, date_to_epoch_ms, date_to_epoch_sec, epoch_ms_to_date_string, normalize_timestamp,
    parse_anchor_date, today_utc,
};
