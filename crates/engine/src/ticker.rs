//! Host-owned cooperative scheduler.
//!
//! The life engine is free of any notion of timers; the host loop owns a
//! `Ticker`, asks it whether a step is due, and calls `step()` itself.
//! Because everything runs on one thread, steps can never overlap and
//! cancellation has no in-flight state to unwind.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct Ticker {
    interval: Duration,
    last_fire: Option<Instant>,
}

impl Ticker {
    /// A stopped ticker with the given step interval.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_fire: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn set_interval(&mut self, interval: Duration) {
        self.interval = interval;
    }

    pub fn is_running(&self) -> bool {
        self.last_fire.is_some()
    }

    /// Start ticking; the first step is due one interval after `now`.
    pub fn start_at(&mut self, now: Instant) {
        self.last_fire = Some(now);
    }

    /// Cancel the pending step. Immediate; nothing to unwind.
    pub fn stop(&mut self) {
        self.last_fire = None;
    }

    pub fn toggle_at(&mut self, now: Instant) {
        if self.is_running() {
            self.stop();
        } else {
            self.start_at(now);
        }
    }

    /// Whether a step is due at `now`. Consumes the elapsed interval when
    /// it fires.
    pub fn due(&mut self, now: Instant) -> bool {
        match self.last_fire {
            Some(last) if now.duration_since(last) >= self.interval => {
                self.last_fire = Some(now);
                true
            }
            _ => false,
        }
    }

    /// Time remaining until the next step, if running. Used by the host as
    /// an input-poll timeout.
    pub fn time_to_next(&self, now: Instant) -> Option<Duration> {
        self.last_fire
            .map(|last| self.interval.saturating_sub(now.duration_since(last)))
    }
}
