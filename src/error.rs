//! Error types for the engine boundary.
//!
//! Two kinds of failure cross the public API:
//!
//! - **Caller errors** (`EngineError::InvalidPlayerCount`,
//!   `EngineError::InvalidTileValue`): rejected synchronously before any
//!   state is mutated.
//! - **Sink errors** (`SinkError`): the persistence collaborator failed.
//!   The engine does not retry; it aborts the run and surfaces the error so
//!   the external layer can record a failed status.
//!
//! Broken *internal* invariants (removing a tile that is not present,
//! selecting a move from an empty legal set, attaching an unplayable tile)
//! are not represented here. They are bugs in the engine, not runtime
//! conditions, and panic with diagnostic context.

use thiserror::Error;

/// Errors surfaced by game setup and the turn loop.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Player count outside the supported 2..=4 range.
    #[error("number of players must be between 2 and 4 inclusive, got {0}")]
    InvalidPlayerCount(usize),

    /// A tile was constructed with a pip value outside 0..=6.
    #[error("tile value out of bounds: [{left}|{right}]")]
    InvalidTileValue {
        /// Requested left pip value.
        left: u8,
        /// Requested right pip value.
        right: u8,
    },

    /// The persistence sink rejected a snapshot or result record.
    #[error("persistence sink failure")]
    Sink(#[from] SinkError),
}

/// Failure reported by a [`ProgressSink`](crate::progress::ProgressSink)
/// implementation.
///
/// The engine treats any sink failure as fatal for the current run.
#[derive(Debug, Error)]
#[error("sink write failed: {message}")]
pub struct SinkError {
    /// Human-readable description of the failure.
    pub message: String,

    /// Underlying cause, when the sink has one (I/O, database driver, ...).
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl SinkError {
    /// Create a sink error from a message alone.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    /// Create a sink error wrapping an underlying cause.
    #[must_use]
    pub fn with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}
