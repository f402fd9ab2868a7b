//! Choose where the first "day" of a recurring schedule ends.
//!
//! For schedules that run across midnight, midnight is a poor place to cut.
//! The cut that disturbs no booking and leaves the most slack is the start of
//! the longest idle stretch in the schedule's daily pattern.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::blocks::Block;
use crate::cycle::{wrap_blocks_with_period, CycleOptions};
use crate::error::{DaybreakError, Result};
use crate::gaps::{cycle_coverage, gaps_with_period, is_always_busy, longest_gap};
use crate::instant::{format_delta, Instant};

/// How the day boundary was chosen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayBoundary<T = DateTime<Utc>> {
    /// Where the longest idle stretch begins, on the cycle anchored at the
    /// first block's start.
    pub end_of_first_day: T,
    /// Index of the chosen gap; the last index is the wrap-around gap when
    /// one exists.
    pub gap_index: usize,
    /// Length of the chosen gap.
    pub idle_minutes: i64,
    /// Busy time per cycle after merging all days.
    pub busy_minutes: i64,
    /// Number of merged blocks in the cycle.
    pub cycle_blocks: usize,
}

/// The instant at which the first day of `blocks` should end, using a 24-hour
/// cycle.
///
/// # Errors
///
/// Returns [`DaybreakError::EmptyInput`] if `blocks` is empty, or
/// [`DaybreakError::NoIdleGap`] if the schedule is busy at every moment of
/// the cycle.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use daybreak_engine::{blockify, end_of_first_day, new_event, Booking};
///
/// let at = |h| Utc.with_ymd_and_hms(2026, 3, 2, h, 0, 0).unwrap();
/// let event = new_event(&[
///     Booking::spanning(at(8), at(10)),
///     Booking::spanning(at(10), at(11)),
///     Booking::spanning(at(14), at(15)),
/// ]);
/// let end = end_of_first_day(&blockify(&event)).unwrap();
/// assert_eq!(end, at(15));
/// ```
pub fn end_of_first_day<T: Instant>(blocks: &[Block<T>]) -> Result<T> {
    end_of_first_day_with_options(blocks, &CycleOptions::default())
}

/// [`end_of_first_day`] with a configurable cycle.
///
/// # Errors
///
/// As [`end_of_first_day`], plus [`DaybreakError::InvalidCycle`] for a
/// non-positive period.
pub fn end_of_first_day_with_options<T: Instant>(
    blocks: &[Block<T>],
    options: &CycleOptions,
) -> Result<T> {
    day_boundary(blocks, options).map(|boundary| boundary.end_of_first_day)
}

/// Compute the day boundary of `blocks` together with the numbers behind it.
///
/// # Errors
///
/// Returns [`DaybreakError::InvalidCycle`] for a non-positive period,
/// [`DaybreakError::EmptyInput`] if `blocks` is empty, or
/// [`DaybreakError::NoIdleGap`] if the merged cycle has no idle moment.
pub fn day_boundary<T: Instant>(
    blocks: &[Block<T>],
    options: &CycleOptions,
) -> Result<DayBoundary<T>> {
    options.validate()?;
    if blocks.is_empty() {
        return Err(DaybreakError::EmptyInput(
            "no blocks to derive a day boundary from".to_string(),
        ));
    }

    let period = options.period;
    let cycle = wrap_blocks_with_period(blocks, period);
    let busy = cycle_coverage(&cycle);
    if is_always_busy(&cycle, period) {
        return Err(DaybreakError::NoIdleGap(format!(
            "busy for {} of every {} cycle",
            format_delta(busy),
            format_delta(period)
        )));
    }

    // Not always busy, so there is at least one interior or wrap-around gap.
    let gaps = gaps_with_period(&cycle, period);
    let gap_index = longest_gap(&gaps);
    let boundary = DayBoundary {
        end_of_first_day: cycle[gap_index].end.clone(),
        gap_index,
        idle_minutes: gaps[gap_index].num_minutes(),
        busy_minutes: busy.num_minutes(),
        cycle_blocks: cycle.len(),
    };

    tracing::debug!(
        end_of_first_day = ?boundary.end_of_first_day,
        gap_index,
        idle = %format_delta(gaps[gap_index]),
        busy = %format_delta(busy),
        cycle_blocks = boundary.cycle_blocks,
        "selected day boundary"
    );
    Ok(boundary)
}
