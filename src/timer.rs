//! Frame-clock stopwatch.
//!
//! An explicit {Idle, Running, Stopped} state machine driven by the frame
//! timestamp rather than a wall clock, so a tick can be replayed in tests
//! with exact times. `start` is idempotent: starting a running stopwatch
//! never resets its elapsed time.

#[derive(Clone, Copy, Debug, PartialEq)]
enum Phase {
    Idle,
    Running { started_at_ms: f64 },
    Stopped { elapsed_ms: f64 },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stopwatch {
    phase: Phase,
}

impl Default for Stopwatch {
    fn default() -> Self {
        Self::new()
    }
}

impl Stopwatch {
    pub fn new() -> Self {
        Self { phase: Phase::Idle }
    }

    /// Start (or resume) the stopwatch at `now_ms`. No-op while running.
    pub fn start(&mut self, now_ms: f64) {
        match self.phase {
            Phase::Idle => self.phase = Phase::Running {
                started_at_ms: now_ms,
            },
            Phase::Running { .. } => {}
            // Resume preserving accumulated time
            Phase::Stopped { elapsed_ms } => {
                self.phase = Phase::Running {
                    started_at_ms: now_ms - elapsed_ms,
                }
            }
        }
    }

    /// Pause, freezing the elapsed reading. No-op unless running.
    pub fn stop(&mut self, now_ms: f64) {
        if let Phase::Running { started_at_ms } = self.phase {
            self.phase = Phase::Stopped {
                elapsed_ms: now_ms - started_at_ms,
            };
        }
    }

    /// Return to idle; elapsed reads zero again.
    pub fn reset(&mut self) {
        self.phase = Phase::Idle;
    }

    /// True once started, whether currently running or paused.
    pub fn is_active(&self) -> bool {
        self.phase != Phase::Idle
    }

    pub fn is_running(&self) -> bool {
        matches!(self.phase, Phase::Running { .. })
    }

    pub fn elapsed_ms(&self, now_ms: f64) -> f64 {
        match self.phase {
            Phase::Idle => 0.0,
            Phase::Running { started_at_ms } => (now_ms - started_at_ms).max(0.0),
            Phase::Stopped { elapsed_ms } => elapsed_ms,
        }
    }

    pub fn elapsed_sec(&self, now_ms: f64) -> f64 {
        self.elapsed_ms(now_ms) / 1000.0
    }
}
