//! Error types for daybreak-engine operations.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DaybreakError {
    #[error("Empty input: {0}")]
    EmptyInput(String),

    #[error("No idle gap: {0}")]
    NoIdleGap(String),

    #[error("Invalid booking: {0}")]
    InvalidBooking(String),

    #[error("Invalid cycle: {0}")]
    InvalidCycle(String),
}

pub type Result<T> = std::result::Result<T, DaybreakError>;
