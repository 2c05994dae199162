//! Timer engine: drives elapsed time through the session.
//!
//! The engine is a tick-driven state machine with no internal thread; the
//! caller invokes `tick()` once per wall-clock second while the timer runs
//! (see [`crate::ticker`] for the stock tick source). State is two
//! orthogonal fields - `running` and `elapsed_seconds` - rather than a
//! strict enum, because "paused mid-session" and "reset to zero" differ
//! only by the elapsed count.
//!
//! ## Transitions
//!
//! - `start`: restart from zero (no resume-from-pause via start); no-op on
//!   an empty session.
//! - `pause`: stop ticking, keep elapsed time.
//! - `reset` / `session_cleared`: stop ticking, zero elapsed time.
//! - `tick`: advance one second; auto-stops at the session total. This is
//!   the only state-driven auto-stop.
//!
//! All derived fields come from a fresh [`compute_view`] after each tick,
//! never from incremental bookkeeping.

use crate::events::Event;
use crate::session::Session;
use crate::timeline::compute_view;
use chrono::Utc;

/// The warning fires when exactly this many seconds remain in a block.
const WARNING_LEAD_SECONDS: u32 = 60;
/// A raised warning auto-clears after this many ticks (wall-clock seconds).
const WARNING_DISPLAY_TICKS: u32 = 3;

#[derive(Clone, Copy, Debug)]
struct PendingWarning {
    ticks_left: u32,
}

/// Tick-driven countdown timer over a [`Session`].
///
/// The engine never mutates the session; it only reads durations from it.
#[derive(Clone, Debug, Default)]
pub struct TimerEngine {
    running: bool,
    elapsed_seconds: u32,
    warning: Option<PendingWarning>,
}

impl TimerEngine {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn elapsed_seconds(&self) -> u32 {
        self.elapsed_seconds
    }

    /// True while a raised warning has not yet been cleared
    pub fn warning_active(&self) -> bool {
        self.warning.is_some()
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Start the timer from the beginning of the session.
    ///
    /// Always restarts from zero; only `pause` preserves position, and only
    /// continued ticking (not `start`) resumes from it. No-op when the
    /// session is empty.
    pub fn start(&mut self, session: &Session) -> Vec<Event> {
        if session.is_empty() {
            tracing::debug!("Ignoring start on empty session");
            return Vec::new();
        }

        let mut events = self.clear_warning();
        self.elapsed_seconds = 0;
        self.running = true;
        events.push(Event::Started {
            total_seconds: session.total_seconds(),
            at: Utc::now(),
        });
        events
    }

    /// Stop ticking, preserving elapsed time
    pub fn pause(&mut self) -> Vec<Event> {
        let mut events = self.clear_warning();
        if self.running {
            self.running = false;
            events.push(Event::Paused {
                elapsed_seconds: self.elapsed_seconds,
                at: Utc::now(),
            });
        }
        events
    }

    /// Stop ticking and zero elapsed time
    pub fn reset(&mut self) -> Vec<Event> {
        let mut events = self.clear_warning();
        self.running = false;
        self.elapsed_seconds = 0;
        events.push(Event::Reset { at: Utc::now() });
        events
    }

    /// The one Session-to-Timer integration point: clearing the session
    /// forces an implicit reset.
    pub fn session_cleared(&mut self) -> Vec<Event> {
        self.reset()
    }

    /// Advance one second of wall-clock time.
    ///
    /// Ignored unless running, so a tick that was already in flight when
    /// the engine was paused or reset cannot mutate state.
    pub fn tick(&mut self, session: &Session) -> Vec<Event> {
        if !self.running {
            return Vec::new();
        }

        self.elapsed_seconds += 1;
        let mut events = vec![Event::Tick {
            elapsed_seconds: self.elapsed_seconds,
            at: Utc::now(),
        }];

        let view = compute_view(session, self.elapsed_seconds);

        // Age out a previously raised warning.
        let expired = match &mut self.warning {
            Some(_) if view.active.is_none() => true,
            Some(warning) => {
                warning.ticks_left -= 1;
                warning.ticks_left == 0
            }
            None => false,
        };
        if expired {
            events.extend(self.clear_warning());
        }

        // Exact equality: the warning fires on one tick per boundary, and
        // sub-minute blocks never reach it.
        if let Some(active) = view.active {
            if active.seconds_remaining == WARNING_LEAD_SECONDS {
                self.warning = Some(PendingWarning {
                    ticks_left: WARNING_DISPLAY_TICKS,
                });
                let next_block_index =
                    (active.index + 1 < session.len()).then(|| active.index + 1);
                events.push(Event::WarningRaised {
                    block_index: active.index,
                    next_block_index,
                    at: Utc::now(),
                });
            }
        }

        if self.elapsed_seconds >= session.total_seconds() {
            self.running = false;
            events.push(Event::Finished {
                elapsed_seconds: self.elapsed_seconds,
                at: Utc::now(),
            });
        }

        events
    }

    // ── Internal ─────────────────────────────────────────────────────

    fn clear_warning(&mut self) -> Vec<Event> {
        if self.warning.take().is_some() {
            vec![Event::WarningCleared { at: Utc::now() }]
        } else {
            Vec::new()
        }
    }
}
