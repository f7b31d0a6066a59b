//! Calendar-day windowing for the operator queue.

use chrono::{DateTime, Local, LocalResult, NaiveDate, NaiveTime, TimeDelta, Utc};

/// Half-open UTC interval `[start, end)` covering one local calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayWindow {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl DayWindow {
    /// Computes the window of the local calendar day containing `now`.
    ///
    /// The start is the local midnight of `now`'s calendar day and the end
    /// is the next local midnight, so the window spans the whole calendar
    /// day even when a DST transition makes it shorter or longer than 24
    /// hours. Each midnight is resolved against the local timezone: when a
    /// transition makes it ambiguous the earlier instant wins, and when it
    /// does not exist the instant is derived from the current UTC offset
    /// instead.
    #[must_use]
    pub fn containing(now: DateTime<Local>) -> Self {
        let date = now.date_naive();
        let fallback_offset_seconds = i64::from(now.offset().local_minus_utc());

        Self {
            start: resolve_local_midnight(date, fallback_offset_seconds),
            end: resolve_local_midnight(date + TimeDelta::days(1), fallback_offset_seconds),
        }
    }

    /// Builds a window from explicit bounds, primarily for tests and
    /// adapters replaying persisted queries.
    #[must_use]
    pub const fn from_bounds(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    /// Inclusive start of the window.
    #[must_use]
    pub const fn start(&self) -> DateTime<Utc> {
        self.start
    }

    /// Exclusive end of the window.
    #[must_use]
    pub const fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// Returns `true` when `instant` falls inside the half-open interval.
    #[must_use]
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start <= instant && instant < self.end
    }
}

/// Resolves the local midnight of `date` to a UTC instant.
fn resolve_local_midnight(date: NaiveDate, fallback_offset_seconds: i64) -> DateTime<Utc> {
    let midnight = date.and_time(NaiveTime::MIN);
    match midnight.and_local_timezone(Local) {
        LocalResult::Single(instant) | LocalResult::Ambiguous(instant, _) => {
            instant.with_timezone(&Utc)
        }
        LocalResult::None => (midnight - TimeDelta::seconds(fallback_offset_seconds)).and_utc(),
    }
}
