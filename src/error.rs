//! Error types for the algorithm entry points.

use std::fmt;

/// Precondition violations signaled by the fallible entry points.
///
/// All variants are local input errors. Nothing is retried or recovered
/// internally, and the failing call performs no mutation before returning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DivConqError {
    /// `select` was asked for a rank outside `1..=len`.
    RankOutOfRange { k: usize, len: usize },

    /// Closest-pair search needs at least two points.
    InsufficientPoints(usize),
}

impl fmt::Display for DivConqError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DivConqError::RankOutOfRange { k, len } => {
                write!(
                    f,
                    "rank out of range: k={} for a sequence of length {}",
                    k, len
                )
            }
            DivConqError::InsufficientPoints(n) => {
                write!(f, "insufficient points: need at least 2, got {}", n)
            }
        }
    }
}

impl std::error::Error for DivConqError {}
