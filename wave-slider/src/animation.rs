//! Short tweens used to smooth amplitude and color changes.

use std::time::{Duration, Instant};

use crate::color::Color;

/// Cubic ease-in-out mapping.
/// Input: linear progress in [0.0, 1.0].
/// Output: eased progress in [0.0, 1.0].
pub(crate) fn easing(progress: f32) -> f32 {
    let t = progress.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// Values that can be interpolated by an [`Animated`] tween.
pub trait Lerp: Copy + PartialEq {
    /// Interpolates between `self` and `other` at `fraction` in `[0, 1]`.
    fn lerp(self, other: Self, fraction: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(self, other: Self, fraction: f32) -> Self {
        self + (other - self) * fraction
    }
}

impl Lerp for Color {
    fn lerp(self, other: Self, fraction: f32) -> Self {
        Color::lerp(self, other, fraction)
    }
}

/// A value that eases toward its target over a fixed duration.
///
/// Retargeting mid-flight starts the new tween from the value currently shown,
/// so a quick drag start/stop never jumps.
#[derive(Clone, Copy, Debug)]
pub struct Animated<T: Lerp> {
    from: T,
    to: T,
    value: T,
    started_at: Option<Instant>,
    duration: Duration,
}

impl<T: Lerp> Animated<T> {
    /// Creates a settled tween at `initial`.
    pub fn new(initial: T, duration: Duration) -> Self {
        Self {
            from: initial,
            to: initial,
            value: initial,
            started_at: None,
            duration,
        }
    }

    /// Value the tween is heading to.
    pub fn target(&self) -> T {
        self.to
    }

    /// Value computed by the most recent [`sample`](Self::sample).
    pub fn value(&self) -> T {
        self.value
    }

    /// Returns `true` while the tween has not reached its target.
    pub fn is_running(&self) -> bool {
        self.started_at.is_some()
    }

    /// Starts easing toward `target`. A repeated target is ignored.
    pub fn animate_to(&mut self, target: T, now: Instant) {
        if target == self.to {
            return;
        }
        self.from = self.sample(now);
        self.to = target;
        if self.duration.is_zero() {
            self.snap_to(target);
        } else {
            self.started_at = Some(now);
        }
    }

    /// Jumps straight to `target` without animating.
    pub fn snap_to(&mut self, target: T) {
        self.from = target;
        self.to = target;
        self.value = target;
        self.started_at = None;
    }

    /// Advances the tween to `now` and returns the current value.
    pub fn sample(&mut self, now: Instant) -> T {
        let Some(started_at) = self.started_at else {
            return self.value;
        };
        let elapsed = now.saturating_duration_since(started_at);
        let fraction = (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0);
        if fraction >= 1.0 {
            self.started_at = None;
            self.value = self.to;
        } else {
            self.value = self.from.lerp(self.to, easing(fraction));
        }
        self.value
    }
}
