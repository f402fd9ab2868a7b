//! The absolute-instant capability the engine computes over.
//!
//! The engine never interprets calendars or timezones. It only needs to order
//! instants, shift an instant by a [`TimeDelta`], and measure the elapsed time
//! between two instants. Any host type offering those three operations can
//! implement [`Instant`]; implementations are provided for every chrono
//! `DateTime<Tz>` and for `NaiveDateTime`.
//!
//! All arithmetic is absolute: a 24-hour cycle is 86 400 elapsed seconds,
//! not "the same wall-clock time tomorrow".

use std::fmt::Debug;

use chrono::{DateTime, NaiveDateTime, TimeDelta, TimeZone};

const NANOS_PER_SECOND: i128 = 1_000_000_000;

/// An absolute point in time.
pub trait Instant: Clone + Ord + Debug {
    /// The instant `delta` after `self` (before it, if `delta` is negative).
    fn add_delta(&self, delta: TimeDelta) -> Self;

    /// Signed elapsed time from `earlier` to `self`.
    fn delta_since(&self, earlier: &Self) -> TimeDelta;
}

impl<Tz: TimeZone> Instant for DateTime<Tz> {
    fn add_delta(&self, delta: TimeDelta) -> Self {
        self.clone() + delta
    }

    fn delta_since(&self, earlier: &Self) -> TimeDelta {
        self.clone() - earlier.clone()
    }
}

impl Instant for NaiveDateTime {
    fn add_delta(&self, delta: TimeDelta) -> Self {
        *self + delta
    }

    fn delta_since(&self, earlier: &Self) -> TimeDelta {
        *self - *earlier
    }
}

/// Reduce `delta` modulo `period` into `[0, period)`.
///
/// Euclidean, so negative offsets wrap forward: `-1h mod 24h == 23h`.
/// Exact to the nanosecond.
///
/// # Panics
///
/// Panics if `period` is not positive.
pub fn wrap_offset(delta: TimeDelta, period: TimeDelta) -> TimeDelta {
    assert!(
        period > TimeDelta::zero(),
        "cycle period must be positive, got {period}"
    );
    let wrapped = total_nanos(delta).rem_euclid(total_nanos(period));
    // `wrapped < period`, and a TimeDelta always fits i64 nanoseconds below ~292 years.
    TimeDelta::nanoseconds(wrapped as i64)
}

/// Sort a list of instants ascending. Stable.
pub fn sort_instants<T: Instant>(instants: &mut [T]) {
    instants.sort();
}

fn total_nanos(delta: TimeDelta) -> i128 {
    i128::from(delta.num_seconds()) * NANOS_PER_SECOND + i128::from(delta.subsec_nanos())
}

/// Compact rendering for log fields and error details, e.g. `"17h 30m"`.
pub(crate) fn format_delta(delta: TimeDelta) -> String {
    let sign = if delta < TimeDelta::zero() { "-" } else { "" };
    let minutes = delta.num_minutes().unsigned_abs();
    format!("{sign}{}h {}m", minutes / 60, minutes % 60)
}
