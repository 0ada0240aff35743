//! Pure date-label helpers for the cards
//!
//! Both helpers are total over optional input and read only the interval's
//! START instant; the end instant never influences the labels.

use crate::suggestion::DateInterval;

/// Full weekday name of the interval's start ("Monday"), or `""` when the
/// interval is absent.
pub fn day_of_week(interval: Option<&DateInterval>) -> String {
    match interval {
        Some(interval) => interval.start.format("%A").to_string(),
        None => String::new(),
    }
}

/// "Month Day" rendering of the interval's start ("March 4"), or `""` when
/// the interval is absent.
pub fn format_date(interval: Option<&DateInterval>) -> String {
    match interval {
        Some(interval) => interval.start.format("%B %-d").to_string(),
        None => String::new(),
    }
}
