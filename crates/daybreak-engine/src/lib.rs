//! # daybreak-engine
//!
//! Deterministic day-boundary detection for schedules that span several
//! calendar days.
//!
//! Night shifts, on-call rotations and multi-day conferences rarely respect
//! midnight. This crate merges a schedule's bookings into contiguous busy
//! blocks, folds those blocks onto a single 24-hour cycle to expose the
//! recurring pattern, and picks the longest idle stretch of that cycle as the
//! place where one "day" of the schedule ends and the next begins.
//!
//! ## Modules
//!
//! - [`instant`] — The [`Instant`] capability plus cycle arithmetic helpers
//! - [`booking`] — [`Booking`] and the start-sorted [`Event`]
//! - [`blocks`] — Sweep sorted bookings into maximal contiguous [`Block`]s
//! - [`cycle`] — Project blocks onto one cycle and re-merge them
//! - [`gaps`] — Idle intervals between cycle blocks, including the wrap-around
//! - [`boundary`] — Compose the above into the end of the first day
//! - [`error`] — Error types

pub mod blocks;
pub mod booking;
pub mod boundary;
pub mod cycle;
pub mod error;
pub mod gaps;
pub mod instant;

pub use blocks::{blockify, Block};
pub use booking::{new_event, Booking, Event};
pub use boundary::{
    day_boundary, end_of_first_day, end_of_first_day_with_options, DayBoundary,
};
pub use cycle::{
    durations_to_bookings, wrap_blocks, wrap_blocks_with_period, wrap_durations,
    wrap_durations_with_period, CycleOptions, CycleSpan, WrappedDuration,
};
pub use error::{DaybreakError, Result};
pub use gaps::{cycle_coverage, gaps, gaps_with_period, is_always_busy, longest_gap};
pub use instant::{sort_instants, wrap_offset, Instant};
