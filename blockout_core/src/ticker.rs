//! Wall-clock tick source.
//!
//! The timer engine itself has no thread; a [`Ticker`] supplies the
//! once-per-second heartbeat over a channel. The handle owns the background
//! thread: `stop()` (also run on drop) raises a flag and joins, so no tick
//! can be delivered after the handle is released. Cancelling on every exit
//! path from the running state is what keeps a stale tick from mutating
//! state after a logical reset.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Cancellable periodic tick source
pub struct Ticker {
    stop: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
    rx: Receiver<()>,
}

impl Ticker {
    /// Spawn a tick thread firing once per `interval`
    pub fn start(interval: Duration) -> Self {
        let stop = Arc::new(AtomicBool::new(false));
        let (tx, rx) = mpsc::channel();
        let handle = thread::spawn({
            let stop = Arc::clone(&stop);
            move || run_tick_loop(interval, stop, tx)
        });

        Self {
            stop,
            handle: Some(handle),
            rx,
        }
    }

    /// Block until the next tick; `None` once the ticker has stopped
    pub fn recv(&self) -> Option<()> {
        self.rx.recv().ok()
    }

    /// Stop the tick thread and wait for it to exit
    pub fn stop(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                tracing::warn!("Tick thread panicked");
            }
        }
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.stop();
    }
}

fn run_tick_loop(interval: Duration, stop: Arc<AtomicBool>, tx: Sender<()>) {
    loop {
        thread::sleep(interval);
        if stop.load(Ordering::Relaxed) {
            return;
        }
        // Receiver gone means the handle was dropped mid-sleep.
        if tx.send(()).is_err() {
            return;
        }
    }
}
