//! Repeating phase timer that makes the wave travel.

use std::time::{Duration, Instant};

/// Advances a phase linearly from `0` to `cycle` over `duration`, then restarts
/// at `0`.
///
/// The clock never reads the system time on its own; callers pass the frame
/// timestamp, which keeps frames reproducible.
#[derive(Clone, Debug)]
pub struct PhaseClock {
    cycle: f32,
    duration: Duration,
    started_at: Option<Instant>,
    phase: f32,
    disposed: bool,
}

impl PhaseClock {
    /// Creates a stopped clock at phase `0`.
    pub fn new(cycle: f32, duration: Duration) -> Self {
        Self {
            cycle,
            duration,
            started_at: None,
            phase: 0.0,
            disposed: false,
        }
    }

    /// Phase computed by the most recent [`tick`](Self::tick).
    pub fn phase(&self) -> f32 {
        self.phase
    }

    /// Phase value at which the clock wraps back to `0`.
    pub fn cycle(&self) -> f32 {
        self.cycle
    }

    /// Length of one cycle.
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Returns `true` while the clock advances on every tick.
    pub fn is_running(&self) -> bool {
        self.started_at.is_some()
    }

    /// Returns `true` once [`dispose`](Self::dispose) has been called.
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Starts (or resumes) advancing from the current phase.
    ///
    /// Has no effect on a running or disposed clock.
    pub fn start(&mut self, now: Instant) {
        if self.disposed || self.started_at.is_some() {
            return;
        }
        let offset = self.elapsed_for_phase(self.phase);
        self.started_at = Some(now.checked_sub(offset).unwrap_or(now));
    }

    /// Freezes the phase at its current value.
    pub fn pause(&mut self) {
        self.started_at = None;
    }

    /// Stops the clock permanently.
    pub fn dispose(&mut self) {
        self.pause();
        self.disposed = true;
    }

    /// Changes the cycle span and length, keeping the current position within
    /// the cycle.
    pub fn reconfigure(&mut self, cycle: f32, duration: Duration, now: Instant) {
        if cycle == self.cycle && duration == self.duration {
            return;
        }
        let fraction = if self.cycle > 0.0 {
            self.phase / self.cycle
        } else {
            0.0
        };
        let was_running = self.is_running();
        self.cycle = cycle;
        self.duration = duration;
        self.phase = cycle * fraction;
        self.started_at = None;
        if was_running {
            self.start(now);
        }
    }

    /// Advances the phase to `now` and returns it. A paused clock returns the
    /// frozen phase.
    pub fn tick(&mut self, now: Instant) -> f32 {
        let Some(started_at) = self.started_at else {
            return self.phase;
        };
        let duration = self.duration.as_secs_f64();
        if duration <= 0.0 {
            return self.phase;
        }
        let elapsed = now.saturating_duration_since(started_at).as_secs_f64();
        let fraction = (elapsed % duration) / duration;
        self.phase = (self.cycle as f64 * fraction) as f32;
        self.phase
    }

    fn elapsed_for_phase(&self, phase: f32) -> Duration {
        if self.cycle <= 0.0 {
            return Duration::ZERO;
        }
        let fraction = (phase / self.cycle).clamp(0.0, 1.0);
        self.duration.mul_f32(fraction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CYCLE: f32 = 100.0;

    fn clock() -> PhaseClock {
        PhaseClock::new(CYCLE, Duration::from_millis(1000))
    }

    fn assert_close(actual: f32, expected: f32) {
        assert!(
            (actual - expected).abs() < 1e-3,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_stopped_clock_stays_at_zero() {
        let mut clock = clock();
        let t0 = Instant::now();
        assert_eq!(clock.tick(t0 + Duration::from_millis(500)), 0.0);
        assert!(!clock.is_running());
    }

    #[test]
    fn test_advances_linearly_and_restarts() {
        let mut clock = clock();
        let t0 = Instant::now();
        clock.start(t0);
        assert_close(clock.tick(t0 + Duration::from_millis(250)), 25.0);
        assert_close(clock.tick(t0 + Duration::from_millis(999)), 99.9);
        assert_close(clock.tick(t0 + Duration::from_millis(1000)), 0.0);
        assert_close(clock.tick(t0 + Duration::from_millis(1250)), 25.0);
        assert_close(clock.tick(t0 + Duration::from_millis(5500)), 50.0);
    }

    #[test]
    fn test_pause_freezes_and_resume_continues() {
        let mut clock = clock();
        let t0 = Instant::now();
        clock.start(t0);
        clock.tick(t0 + Duration::from_millis(400));
        clock.pause();
        assert_close(clock.tick(t0 + Duration::from_millis(900)), 40.0);
        assert_close(clock.tick(t0 + Duration::from_millis(950)), 40.0);

        clock.start(t0 + Duration::from_millis(2000));
        assert_close(clock.tick(t0 + Duration::from_millis(2100)), 50.0);
    }

    #[test]
    fn test_dispose_prevents_restart() {
        let mut clock = clock();
        let t0 = Instant::now();
        clock.start(t0);
        clock.tick(t0 + Duration::from_millis(300));
        clock.dispose();
        clock.start(t0 + Duration::from_millis(400));
        assert!(!clock.is_running());
        assert!(clock.is_disposed());
        assert_close(clock.tick(t0 + Duration::from_millis(800)), 30.0);
    }

    #[test]
    fn test_reconfigure_keeps_cycle_position() {
        let mut clock = clock();
        let t0 = Instant::now();
        clock.start(t0);
        clock.tick(t0 + Duration::from_millis(500));
        clock.reconfigure(10.0, Duration::from_millis(2000), t0 + Duration::from_millis(500));
        assert_close(clock.phase(), 5.0);
        assert_close(clock.tick(t0 + Duration::from_millis(1000)), 7.5);
    }
}
