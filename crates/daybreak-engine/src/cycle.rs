//! Fold absolute blocks onto a single repeating cycle.
//!
//! Every block is re-expressed as an offset from a reference instant (the
//! first block's start), taken modulo the cycle period. Blocks that cross the
//! wrap point are split in two. Projecting several real days onto one cycle
//! can make intervals overlap that were far apart before, so
//! [`wrap_blocks`] runs the projected intervals through
//! [`blockify`](crate::blockify) again to obtain the merged "typical day".

use chrono::{DateTime, TimeDelta, Utc};

use crate::blocks::{blockify, Block};
use crate::booking::{new_event, Booking};
use crate::error::{DaybreakError, Result};
use crate::instant::{format_delta, wrap_offset, Instant};

// ── Cycle options ───────────────────────────────────────────────────────────

/// Options for the `_with_options` entry points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleOptions {
    /// Length of the repeating cycle. Defaults to 24 hours.
    pub period: TimeDelta,
}

impl Default for CycleOptions {
    fn default() -> Self {
        Self {
            period: TimeDelta::hours(24),
        }
    }
}

impl CycleOptions {
    /// # Errors
    ///
    /// Returns [`DaybreakError::InvalidCycle`] if the period is not positive.
    pub fn validate(&self) -> Result<()> {
        if self.period <= TimeDelta::zero() {
            return Err(DaybreakError::InvalidCycle(format!(
                "period must be positive, got {}",
                format_delta(self.period)
            )));
        }
        Ok(())
    }
}

// ── wrap_durations ──────────────────────────────────────────────────────────

/// One busy sub-interval of the cycle, as offsets from the reference instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleSpan {
    pub start: TimeDelta,
    pub end: TimeDelta,
}

/// Blocks projected onto one cycle.
///
/// Every span satisfies `0 <= start <= end <= period`, and the first span
/// starts at `0`. Spans follow block order, with the tails of blocks that
/// cross the wrap point appended at the end, so they are not sorted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrappedDuration<T = DateTime<Utc>> {
    pub reference: T,
    pub period: TimeDelta,
    pub spans: Vec<CycleSpan>,
}

impl<T> WrappedDuration<T> {
    pub fn starts(&self) -> impl Iterator<Item = TimeDelta> + '_ {
        self.spans.iter().map(|s| s.start)
    }

    pub fn ends(&self) -> impl Iterator<Item = TimeDelta> + '_ {
        self.spans.iter().map(|s| s.end)
    }
}

/// Project `blocks` onto a 24-hour cycle.
///
/// See [`wrap_durations_with_period`].
///
/// # Panics
///
/// Panics if `blocks` is empty.
pub fn wrap_durations<T: Instant>(blocks: &[Block<T>]) -> WrappedDuration<T> {
    wrap_durations_with_period(blocks, CycleOptions::default().period)
}

/// Project `blocks` onto a cycle of length `period`, relative to the first
/// block's start.
///
/// A block lasting a whole period or longer is busy at every point of any
/// cycle; the projection then collapses to the single span `[0, period]` and
/// the structure of all other blocks is discarded.
///
/// # Panics
///
/// Panics if `blocks` is empty or `period` is not positive.
pub fn wrap_durations_with_period<T: Instant>(
    blocks: &[Block<T>],
    period: TimeDelta,
) -> WrappedDuration<T> {
    assert!(
        !blocks.is_empty(),
        "cannot project an empty block sequence onto the cycle"
    );
    assert!(
        period > TimeDelta::zero(),
        "cycle period must be positive, got {period}"
    );
    let reference = blocks[0].start.clone();
    let zero = TimeDelta::zero();

    if let Some(long) = blocks.iter().find(|b| b.duration() >= period) {
        // Blocks that fit inside the cycle lose their shape here too.
        if blocks.len() > 1 {
            tracing::warn!(
                block_start = ?long.start,
                block_duration = %format_delta(long.duration()),
                discarded_blocks = blocks.len() - 1,
                "block spans a full cycle; collapsing projection to the whole cycle"
            );
        }
        return WrappedDuration {
            reference,
            period,
            spans: vec![CycleSpan {
                start: zero,
                end: period,
            }],
        };
    }

    let mut spans = Vec::with_capacity(blocks.len());
    let mut tails = Vec::new();
    for block in blocks {
        let start = wrap_offset(block.start.delta_since(&reference), period);
        let mut end = wrap_offset(block.end.delta_since(&reference), period);
        if end == zero && block.duration() > zero {
            // Ends exactly on the wrap point: close at the period instead of
            // leaving a zero-length tail.
            end = period;
        }

        if start > end {
            spans.push(CycleSpan { start, end: period });
            tails.push(CycleSpan { start: zero, end });
        } else {
            spans.push(CycleSpan { start, end });
        }
    }
    spans.extend(tails);

    WrappedDuration {
        reference,
        period,
        spans,
    }
}

// ── durations_to_bookings ───────────────────────────────────────────────────

/// Turn projected spans back into bookings anchored at the reference instant.
pub fn durations_to_bookings<T: Instant>(wrapped: &WrappedDuration<T>) -> Vec<Booking<T>> {
    wrapped
        .spans
        .iter()
        .map(|span| Booking {
            start: wrapped.reference.add_delta(span.start),
            end: wrapped.reference.add_delta(span.end),
        })
        .collect()
}

// ── wrap_blocks ─────────────────────────────────────────────────────────────

/// Merged 24-hour activity pattern of `blocks`.
///
/// See [`wrap_blocks_with_period`].
///
/// # Panics
///
/// Panics if `blocks` is empty.
pub fn wrap_blocks<T: Instant>(blocks: &[Block<T>]) -> Vec<Block<T>> {
    wrap_blocks_with_period(blocks, CycleOptions::default().period)
}

/// Project `blocks` onto a cycle of length `period` and re-block the result.
///
/// The returned blocks belong to a fresh synthetic event whose bookings all
/// lie in `[reference, reference + period]`, where `reference` is
/// `blocks[0].start`. They are sorted, disjoint and separated by strictly
/// positive gaps, and the first one starts at `reference`.
///
/// # Panics
///
/// Panics if `blocks` is empty or `period` is not positive.
pub fn wrap_blocks_with_period<T: Instant>(
    blocks: &[Block<T>],
    period: TimeDelta,
) -> Vec<Block<T>> {
    let wrapped = wrap_durations_with_period(blocks, period);
    let event = new_event(&durations_to_bookings(&wrapped));
    blockify(&event)
}
