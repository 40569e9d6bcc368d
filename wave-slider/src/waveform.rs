//! Sine-wave sampling for the active segment of the track.
//!
//! The sampler is a pure function of its inputs: every call to
//! [`WaveSampler::points`] walks the same sequence again, so the result can be
//! drawn, measured and compared without caching.
//!
//! For each integer `x` in `0..=round(width * value)`:
//!
//! ```text
//! shifted_x = reverse_direction ? x + phase : x - phase
//! y = center_y - amplitude * sin(frequency * shifted_x)
//! ```
//!
//! A zero amplitude collapses every point onto `center_y`; flatlining relies on
//! that rather than on a separate code path.

use derive_setters::Setters;
use glam::Vec2;
use lyon_path::{Path, math::point};

/// Inputs of one wave sample pass.
#[derive(Clone, Copy, Debug, PartialEq, Setters)]
pub struct WaveSampler {
    /// Slider value in `[0.0, 1.0]`. Out-of-range values are clamped.
    pub value: f32,
    /// Full track width in pixels.
    pub track_width: f32,
    /// Peak height of the wave in pixels.
    pub amplitude: f32,
    /// Angular frequency in radians per pixel.
    pub frequency: f32,
    /// Current phase offset.
    pub phase: f32,
    /// Move the wave to the left instead of the right.
    pub reverse_direction: bool,
    /// Vertical center line of the track.
    pub center_y: f32,
}

impl Default for WaveSampler {
    fn default() -> Self {
        Self {
            value: 0.0,
            track_width: 0.0,
            amplitude: 0.0,
            frequency: 1.0,
            phase: 0.0,
            reverse_direction: false,
            center_y: 0.0,
        }
    }
}

impl WaveSampler {
    /// The value actually sampled: clamped to `[0, 1]`, with NaN treated as 0.
    pub fn clamped_value(&self) -> f32 {
        if self.value.is_nan() {
            0.0
        } else {
            self.value.clamp(0.0, 1.0)
        }
    }

    /// Last sampled x coordinate, `round(track_width * value)`.
    pub fn end_x(&self) -> u32 {
        let width = if self.track_width.is_finite() {
            self.track_width.max(0.0)
        } else {
            0.0
        };
        (width * self.clamped_value()).round() as u32
    }

    /// Number of points produced by [`points`](Self::points).
    pub fn point_count(&self) -> usize {
        self.end_x() as usize + 1
    }

    /// Y coordinate of the wave at `x`.
    pub fn y_at(&self, x: f32) -> f32 {
        let shifted_x = if self.reverse_direction {
            x + self.phase
        } else {
            x - self.phase
        };
        self.center_y - self.amplitude * (self.frequency * shifted_x).sin()
    }

    /// Lazily samples the wave from `x = 0` to [`end_x`](Self::end_x).
    pub fn points(&self) -> WavePoints {
        WavePoints {
            sampler: *self,
            next: 0,
            end: self.end_x(),
            exhausted: false,
        }
    }

    /// Builds a drawable polyline through the sampled points.
    pub fn path(&self) -> Path {
        wave_path(self.points())
    }
}

/// Iterator over the sampled wave points, produced by [`WaveSampler::points`].
#[derive(Clone, Debug)]
pub struct WavePoints {
    sampler: WaveSampler,
    next: u32,
    end: u32,
    exhausted: bool,
}

impl Iterator for WavePoints {
    type Item = Vec2;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let x = self.next;
        if x >= self.end {
            self.exhausted = true;
        } else {
            self.next += 1;
        }
        let x = x as f32;
        Some(Vec2::new(x, self.sampler.y_at(x)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = if self.exhausted {
            0
        } else {
            (self.end - self.next) as usize + 1
        };
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for WavePoints {}

/// Connects `points` into an open polyline path.
///
/// A single point yields a zero-length subpath so round stroke caps still draw
/// a dot at the start of the track.
pub fn wave_path(points: impl IntoIterator<Item = Vec2>) -> Path {
    let mut builder = Path::builder();
    let mut points = points.into_iter();
    if let Some(first) = points.next() {
        builder.begin(point(first.x, first.y));
        let mut last = first;
        for p in points {
            builder.line_to(point(p.x, p.y));
            last = p;
        }
        if last == first {
            builder.line_to(point(first.x, first.y));
        }
        builder.end(false);
    }
    builder.build()
}
