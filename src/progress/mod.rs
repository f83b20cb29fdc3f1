//! Persistence boundary: snapshot and result records plus the sink trait.
//!
//! The engine is write-only towards this boundary. After every atomic
//! state change (a player fully dealt, the starting move, each draw, each
//! play, each pass) it emits a [`Snapshot`]; at termination it emits one
//! [`ResultRecord`]. What happens to the records (database rows, HTTP
//! responses, nothing at all) is the sink implementation's business.
//!
//! Status codes on the wire keep the values the persisted schema has always
//! used: 98 for a blocked game, 99 for an empty-hand win, 101 for an
//! aborted run.

pub mod encode;

use serde::{Deserialize, Serialize};

use crate::core::player::PlayerId;
use crate::error::SinkError;

/// Opaque session token; the engine only ever tags records with it.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    /// Wrap an externally issued session token.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The raw token.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One persisted state snapshot.
///
/// `step` is a monotonically increasing sequence number, starting at 1,
/// never reused or decremented; replaying snapshots ordered by it
/// reconstructs the run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Session the record belongs to.
    pub session: SessionId,
    /// The player whose action produced this snapshot.
    pub player: PlayerId,
    /// Strict replay ordering key.
    pub step: u64,
    /// Encoded hand of the acting player.
    pub hand: String,
    /// Encoded chain, left end to right end.
    pub chain: String,
    /// Encoded boneyard in draw order.
    pub boneyard: String,
}

/// Distinct tags for how a run ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResultStatus {
    /// Boneyard empty and every player passed; winners by lowest pip sum.
    BlockedWin,
    /// A player emptied their hand; sole winner.
    EmptyHandWin,
    /// The run aborted; written by the external layer, never by the engine.
    Failed,
}

impl ResultStatus {
    /// The persisted status code for this outcome.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            ResultStatus::BlockedWin => 98,
            ResultStatus::EmptyHandWin => 99,
            ResultStatus::Failed => 101,
        }
    }
}

/// The final record emitted once per run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultRecord {
    /// Session the record belongs to.
    pub session: SessionId,
    /// How the game ended.
    pub status: ResultStatus,
    /// Winner ids; exactly one for an empty-hand win, one or more for a
    /// blocked game, empty for a failed run.
    pub winners: Vec<PlayerId>,
}

/// Write-only persistence sink.
///
/// Failures are not retried by the engine; they abort the run and surface
/// as [`EngineError::Sink`](crate::error::EngineError::Sink).
pub trait ProgressSink {
    /// Record one state snapshot.
    fn record_snapshot(&mut self, snapshot: Snapshot) -> Result<(), SinkError>;

    /// Record the terminal result.
    fn record_result(&mut self, result: ResultRecord) -> Result<(), SinkError>;
}

/// In-memory sink for tests and dry runs.
#[derive(Clone, Debug, Default)]
pub struct MemorySink {
    snapshots: Vec<Snapshot>,
    result: Option<ResultRecord>,
}

impl MemorySink {
    /// Create an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All snapshots recorded so far, in emission order.
    #[must_use]
    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    /// The terminal result, once recorded.
    #[must_use]
    pub fn result(&self) -> Option<&ResultRecord> {
        self.result.as_ref()
    }
}

impl ProgressSink for MemorySink {
    fn record_snapshot(&mut self, snapshot: Snapshot) -> Result<(), SinkError> {
        self.snapshots.push(snapshot);
        Ok(())
    }

    fn record_result(&mut self, result: ResultRecord) -> Result<(), SinkError> {
        if self.result.is_some() {
            return Err(SinkError::new(format!(
                "result for session {} already recorded",
                result.session
            )));
        }
        self.result = Some(result);
        Ok(())
    }
}
