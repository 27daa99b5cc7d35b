//! Error types for the intro sequencer

use thiserror::Error;

/// Errors found while validating an [`IntroConfig`](crate::IntroConfig)
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Shard grid must have at least one row and one column, got {rows}x{cols}")]
    EmptyGrid { rows: u16, cols: u16 },

    #[error("Too many reveal steps: {count} (max {max})")]
    TooManyRevealSteps { count: usize, max: usize },

    #[error("Rotation bound must be a finite, non-negative angle, got {0}")]
    InvalidRotation(f32),

    #[error("Watchdog must be longer than zero milliseconds")]
    ZeroWatchdog,
}

/// Errors returned by [`IntroHandle`](crate::IntroHandle) operations
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DriverError {
    /// The driver finished, was cancelled, or its future was dropped.
    #[error("Intro driver is no longer running")]
    Closed,
}
