//! Clock port trait.

use chrono::{DateTime, FixedOffset};

use crate::domain::YearMonth;

/// Supplies "now" to the report service so tests can pin it.
pub trait DateTimeProvider: Send + Sync + 'static {
    /// The current timezone-aware timestamp.
    fn zoned_date_time_now(&self) -> DateTime<FixedOffset>;

    /// The current year-month. Derived from `zoned_date_time_now` unless overridden.
    fn year_month_now(&self) -> YearMonth {
        YearMonth::of(&self.zoned_date_time_now())
    }
}
