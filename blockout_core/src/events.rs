//! Timer events.
//!
//! Every state change in the timer engine produces an `Event`. Commands and
//! ticks return the events they raised; consumers (the CLI, a future GUI)
//! subscribe by consuming those return values.

use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    /// Timer started from the beginning of the session.
    Started {
        total_seconds: u32,
        at: DateTime<Utc>,
    },
    /// Timer paused; elapsed time is preserved.
    Paused {
        elapsed_seconds: u32,
        at: DateTime<Utc>,
    },
    /// Timer reset to zero.
    Reset { at: DateTime<Utc> },
    /// One second of wall-clock time elapsed while running.
    Tick {
        elapsed_seconds: u32,
        at: DateTime<Utc>,
    },
    /// Elapsed time reached the session total; the engine stopped itself.
    Finished {
        elapsed_seconds: u32,
        at: DateTime<Utc>,
    },
    /// The active block ends in exactly one minute.
    WarningRaised {
        block_index: usize,
        /// Index of the upcoming block, when one exists. The warning still
        /// fires on the final block (source behavior); consumers that want
        /// to suppress it there can check for `None`.
        next_block_index: Option<usize>,
        at: DateTime<Utc>,
    },
    /// The pending warning was cleared (timeout, command, or session end).
    WarningCleared { at: DateTime<Utc> },
}
