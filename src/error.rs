//! Error types.
use std::{fmt, io};

use thiserror::Error;

/// Result type used throughout this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced while enumerating, composing or rendering.
#[derive(Debug, Error)]
pub enum Error {
    /// The requested group degree is not usable.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Two permutations of different degree were composed.
    #[error("cannot compose permutations of degree {left} and {right}")]
    DimensionMismatch { left: usize, right: usize },

    /// Enumeration and composition disagree. This is a logic error.
    #[error("invariant violated: {0}")]
    InvariantViolation(String),

    /// The table does not fit the enumeration it is rendered with.
    #[error("render error: {0}")]
    Render(String),

    #[error("formatting failed: {0}")]
    Fmt(#[from] fmt::Error),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}
