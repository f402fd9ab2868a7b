//! Sweep an event's sorted bookings into maximal contiguous blocks.
//!
//! A block is a run of bookings that overlap or touch, with a true gap on
//! both sides. Bookings that touch (one ends exactly when the next starts)
//! belong to the same block, so no zero-length gap is ever produced.

use std::sync::Arc;

use chrono::{DateTime, TimeDelta, Utc};

use crate::booking::{Booking, Event};
use crate::instant::Instant;

/// A maximal busy run inside one [`Event`].
///
/// `[seed, last)` indexes the member bookings in `event.bookings()`.
/// `start` is the seed booking's start and `end` the latest end among the
/// members. The block shares the event read-only and never copies bookings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block<T = DateTime<Utc>> {
    pub event: Arc<Event<T>>,
    pub seed: usize,
    pub last: usize,
    pub start: T,
    pub end: T,
}

impl<T: Instant> Block<T> {
    pub fn event(&self) -> &Event<T> {
        &self.event
    }

    /// The member bookings, in start order.
    pub fn bookings(&self) -> &[Booking<T>] {
        &self.event.bookings()[self.seed..self.last]
    }

    pub fn duration(&self) -> TimeDelta {
        self.end.delta_since(&self.start)
    }
}

/// Partition `event` into blocks ordered by start.
///
/// The blocks tile the booking indices exactly: the first starts at `0`, each
/// `seed` equals the previous `last`, and the final `last` is `event.len()`.
/// Adjacent blocks are separated by a strictly positive gap. An empty event
/// yields no blocks.
pub fn blockify<T: Instant>(event: &Arc<Event<T>>) -> Vec<Block<T>> {
    let mut blocks = Vec::new();
    let mut seed = 0;

    while seed < event.len() {
        let block = grow_block(event, seed);
        seed = block.last;
        blocks.push(block);
    }

    tracing::debug!(
        bookings = event.len(),
        blocks = blocks.len(),
        "blockified event"
    );
    blocks
}

/// Grow one block from `seed` until the first booking that starts after the
/// running end.
fn grow_block<T: Instant>(event: &Arc<Event<T>>, seed: usize) -> Block<T> {
    let bookings = event.bookings();
    let start = bookings[seed].start.clone();
    let mut end = bookings[seed].end.clone();
    let mut last = seed + 1;

    // A booking nested inside the running end does not extend it, but the
    // scan keeps going: a later booking may still start before `end` and
    // finish after it.
    for booking in &bookings[last..] {
        if booking.start > end {
            break;
        }
        if booking.end > end {
            end = booking.end.clone();
        }
        last += 1;
    }

    Block {
        event: Arc::clone(event),
        seed,
        last,
        start,
        end,
    }
}
