//! Timeline calculator: derived view state for a session at a point in time.
//!
//! `compute_view` is a pure function of `(Session, elapsed_seconds)`. It is
//! recomputed from scratch on every tick rather than updated incrementally,
//! which keeps the derived fields immune to drift.

use crate::session::Session;
use serde::Serialize;

/// The block whose time range contains the current elapsed-time value
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ActiveBlock {
    /// Position in the session (0-indexed).
    pub index: usize,
    pub seconds_in: u32,
    pub seconds_remaining: u32,
    /// 0.0 .. 1.0 progress within this block.
    pub progress: f64,
}

/// Derived timeline state; never stored, always recomputed
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TimelineView {
    /// `None` when the session is empty or elapsed time has reached the end.
    pub active: Option<ActiveBlock>,
    pub elapsed_seconds: u32,
    pub total_seconds: u32,
    pub total_remaining_seconds: u32,
    /// 0.0 .. 1.0 progress through the whole session, clamped at 1.
    pub session_progress: f64,
}

impl TimelineView {
    /// Progress within the active block, or 0 when no block is active
    pub fn block_progress(&self) -> f64 {
        self.active.map(|a| a.progress).unwrap_or(0.0)
    }
}

/// Compute the derived timeline view for `session` at `elapsed_seconds`.
///
/// A boundary second belongs to the block it is entering, not the one
/// ending: the active block is the first block whose cumulative upper bound
/// is strictly greater than the elapsed time.
pub fn compute_view(session: &Session, elapsed_seconds: u32) -> TimelineView {
    let total_seconds = session.total_seconds();
    let total_remaining_seconds = total_seconds.saturating_sub(elapsed_seconds);

    let session_progress = if total_seconds == 0 {
        0.0
    } else {
        (f64::from(elapsed_seconds) / f64::from(total_seconds)).min(1.0)
    };

    let mut active = None;
    if !session.is_empty() && elapsed_seconds < total_seconds {
        let mut accumulated = 0u32;
        for (index, block) in session.blocks().iter().enumerate() {
            let duration = block.duration_seconds();
            if elapsed_seconds < accumulated + duration {
                let seconds_in = elapsed_seconds - accumulated;
                active = Some(ActiveBlock {
                    index,
                    seconds_in,
                    seconds_remaining: duration - seconds_in,
                    progress: f64::from(seconds_in) / f64::from(duration),
                });
                break;
            }
            accumulated += duration;
        }
    }

    TimelineView {
        active,
        elapsed_seconds,
        total_seconds,
        total_remaining_seconds,
        session_progress,
    }
}
