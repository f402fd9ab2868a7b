//! Idle time between cycle-projected blocks.

use chrono::TimeDelta;

use crate::blocks::Block;
use crate::cycle::CycleOptions;
use crate::instant::Instant;

/// Idle intervals of a 24-hour cycle.
///
/// See [`gaps_with_period`].
///
/// # Panics
///
/// Panics if `cycle_blocks` is empty.
pub fn gaps<T: Instant>(cycle_blocks: &[Block<T>]) -> Vec<TimeDelta> {
    gaps_with_period(cycle_blocks, CycleOptions::default().period)
}

/// Idle intervals between consecutive cycle blocks, plus the wrap-around gap.
///
/// Entry `i < len - 1` is the gap from `cycle_blocks[i].end` to
/// `cycle_blocks[i + 1].start`. The wrap-around gap, from the last block's end
/// to the first block's start one period later, is appended only when it is
/// positive. The result therefore has `len` entries when the cycle has a
/// wrap-around gap and `len - 1` when it does not; either way gap `i` begins
/// at `cycle_blocks[i].end`.
///
/// # Panics
///
/// Panics if `cycle_blocks` is empty.
pub fn gaps_with_period<T: Instant>(
    cycle_blocks: &[Block<T>],
    period: TimeDelta,
) -> Vec<TimeDelta> {
    let (Some(first), Some(last)) = (cycle_blocks.first(), cycle_blocks.last()) else {
        panic!("cannot compute gaps of an empty block sequence");
    };

    let mut gaps: Vec<TimeDelta> = cycle_blocks
        .windows(2)
        .map(|pair| pair[1].start.delta_since(&pair[0].end))
        .collect();

    let wrap_around = first.start.add_delta(period).delta_since(&last.end);
    if wrap_around > TimeDelta::zero() {
        gaps.push(wrap_around);
    }
    gaps
}

/// Index of the longest gap. Ties go to the earliest.
///
/// # Panics
///
/// Panics if `gaps` is empty.
pub fn longest_gap(gaps: &[TimeDelta]) -> usize {
    assert!(!gaps.is_empty(), "cannot pick the longest of zero gaps");
    let mut best = 0;
    for (i, gap) in gaps.iter().enumerate().skip(1) {
        if *gap > gaps[best] {
            best = i;
        }
    }
    best
}

/// Total busy time covered by `cycle_blocks`.
pub fn cycle_coverage<T: Instant>(cycle_blocks: &[Block<T>]) -> TimeDelta {
    cycle_blocks
        .iter()
        .fold(TimeDelta::zero(), |acc, b| acc + b.duration())
}

/// Whether `cycle_blocks` leave no idle moment in a cycle of `period`.
///
/// Only meaningful for cycle-projected blocks, which are disjoint.
pub fn is_always_busy<T: Instant>(cycle_blocks: &[Block<T>], period: TimeDelta) -> bool {
    cycle_coverage(cycle_blocks) >= period
}
