//! Bookings and the start-sorted events that own them.
//!
//! A [`Booking`] is one occupied interval `[start, end]`. An [`Event`] is the
//! full schedule: it copies its bookings on construction, sorts them by start
//! and never changes them afterwards, so the [`Block`](crate::Block)s derived
//! from it can refer to bookings by index.

use std::sync::Arc;

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{DaybreakError, Result};
use crate::instant::Instant;

/// One occupied interval. `start <= end`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking<T = DateTime<Utc>> {
    pub start: T,
    pub end: T,
}

impl<T: Instant> Booking<T> {
    /// Build a booking, rejecting one that ends before it starts.
    ///
    /// # Errors
    ///
    /// Returns [`DaybreakError::InvalidBooking`] if `end` is before `start`.
    pub fn new(start: T, end: T) -> Result<Self> {
        if end < start {
            return Err(DaybreakError::InvalidBooking(format!(
                "end {end:?} is before start {start:?}"
            )));
        }
        Ok(Self { start, end })
    }

    /// The booking between two instants given in either order.
    pub fn spanning(a: T, b: T) -> Self {
        if b < a {
            Self { start: b, end: a }
        } else {
            Self { start: a, end: b }
        }
    }

    pub fn duration(&self) -> TimeDelta {
        self.end.delta_since(&self.start)
    }
}

/// A schedule: bookings sorted ascending by start.
///
/// Bookings with equal starts keep their input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event<T = DateTime<Utc>> {
    bookings: Vec<Booking<T>>,
}

impl<T: Instant> Event<T> {
    /// Copy `bookings` into a new event, sorted by start.
    pub fn new(bookings: &[Booking<T>]) -> Self {
        Self::from(bookings.to_vec())
    }

    pub fn bookings(&self) -> &[Booking<T>] {
        &self.bookings
    }

    pub fn len(&self) -> usize {
        self.bookings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bookings.is_empty()
    }
}

impl<T: Instant> From<Vec<Booking<T>>> for Event<T> {
    fn from(mut bookings: Vec<Booking<T>>) -> Self {
        // `sort_by` is stable: equal starts keep their relative order.
        bookings.sort_by(|a, b| a.start.cmp(&b.start));
        Self { bookings }
    }
}

/// Build a shared [`Event`] ready to be passed to [`blockify`](crate::blockify).
pub fn new_event<T: Instant>(bookings: &[Booking<T>]) -> Arc<Event<T>> {
    Arc::new(Event::new(bookings))
}
