//! Clock adapters.

use chrono::{DateTime, FixedOffset, Offset, Utc};

use payments_types::DateTimeProvider;

/// Wall clock, reported in a fixed UTC offset.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    offset: FixedOffset,
}

impl SystemClock {
    pub fn new(offset: FixedOffset) -> Self {
        Self { offset }
    }

    pub fn utc() -> Self {
        Self::new(Utc.fix())
    }
}

impl DateTimeProvider for SystemClock {
    fn zoned_date_time_now(&self) -> DateTime<FixedOffset> {
        Utc::now().with_timezone(&self.offset)
    }
}

/// Clock that always reports the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    now: DateTime<FixedOffset>,
}

impl FixedClock {
    pub fn new(now: DateTime<FixedOffset>) -> Self {
        Self { now }
    }
}

impl DateTimeProvider for FixedClock {
    fn zoned_date_time_now(&self) -> DateTime<FixedOffset> {
        self.now
    }
}

/// Either clock, picked at startup from configuration.
#[derive(Debug, Clone, Copy)]
pub enum Clock {
    System(SystemClock),
    Fixed(FixedClock),
}

/// Builds the clock for a run.
///
/// A pinned instant keeps its own offset unless `offset` is given. The wall
/// clock reports in `offset`, or UTC when none is given.
pub fn build_clock(
    offset: Option<FixedOffset>,
    pinned_now: Option<DateTime<FixedOffset>>,
) -> Clock {
    match (pinned_now, offset) {
        (Some(now), Some(offset)) => Clock::Fixed(FixedClock::new(now.with_timezone(&offset))),
        (Some(now), None) => Clock::Fixed(FixedClock::new(now)),
        (None, Some(offset)) => Clock::System(SystemClock::new(offset)),
        (None, None) => Clock::System(SystemClock::utc()),
    }
}

impl DateTimeProvider for Clock {
    fn zoned_date_time_now(&self) -> DateTime<FixedOffset> {
        match self {
            Clock::System(clock) => clock.zoned_date_time_now(),
            Clock::Fixed(clock) => clock.zoned_date_time_now(),
        }
    }
}
