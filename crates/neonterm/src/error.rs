//! Error taxonomy for the presentation layer
//!
//! Configuration violations (zero widths, inverted progress counters,
//! double-start) fail fast at the call site; they indicate a programming
//! error in the caller and are never recovered internally. Unrecognized
//! menu input is silently ignored and never surfaces here.

use thiserror::Error;

/// Errors reported by the rendering and animation engine.
#[derive(Error, Debug)]
pub enum UiError {
    /// A width of zero, or too small for the requested content.
    #[error("invalid display width: {0}")]
    BadWidth(usize),

    /// A spinner tick interval of zero.
    #[error("spinner tick interval must be non-zero")]
    BadInterval,

    /// Progress counters violate `current <= total`.
    #[error("invalid progress: current {current} exceeds total {total}")]
    BadProgress {
        /// Offending current value.
        current: u64,
        /// Declared total.
        total: u64,
    },

    /// `start` was called on a spinner that is already running.
    #[error("spinner is already running")]
    AlreadyRunning,

    /// The spinner ticking thread panicked before it could be joined.
    #[error("spinner ticker thread panicked")]
    Ticker,

    /// An interactive menu was opened with no options.
    #[error("menu requires at least one option")]
    EmptyMenu,

    /// Terminal write failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
