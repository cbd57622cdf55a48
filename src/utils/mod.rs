mod perf;
mod time_utils;

pub use time_utils::{
    AppInstant, TimeUtils, date_to_epoch_days, date_to_string, epoch_days_to_date, format_delay,
    now_utc, today_utc,
};
