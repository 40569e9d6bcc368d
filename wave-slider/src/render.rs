//! Frame description of a wave slider track and the canvas it is drawn into.
//!
//! A [`TrackFrame`] is a complete, owned snapshot of one frame. Hosts either
//! read its fields directly or replay it onto their drawing surface with
//! [`TrackFrame::draw`].

use glam::Vec2;
use lyon_path::Path;
use smallvec::SmallVec;

use crate::{
    color::Color,
    colors::SliderColors,
    thumb::{Thumb, ThumbContext},
    waveform::wave_path,
};

/// Amplitudes at or below this are treated as a flat line.
pub(crate) const FLAT_EPSILON: f32 = 1e-3;

/// Slack when comparing a tick fraction against a snapped value; the two are
/// computed differently and can disagree in the last bits.
const TICK_EPSILON: f32 = 1e-5;

/// Shape of stroke ends.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StrokeCap {
    /// Flat end at the exact endpoint.
    Butt,
    /// Semicircular end.
    #[default]
    Round,
    /// Square end extending half the stroke width.
    Square,
}

/// Stroke style for lines, paths and points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    /// Stroke width in pixels.
    pub width: f32,
    /// End cap style.
    pub cap: StrokeCap,
}

impl Stroke {
    /// A round-capped stroke of the given width.
    pub const fn round(width: f32) -> Self {
        Self {
            width,
            cap: StrokeCap::Round,
        }
    }
}

/// Drawing surface supplied by the host.
pub trait Canvas {
    /// Strokes an open or closed path.
    fn draw_path(&mut self, path: &Path, color: Color, stroke: Stroke);

    /// Fills a closed path.
    fn fill_path(&mut self, path: &Path, color: Color);

    /// Strokes a straight line.
    fn draw_line(&mut self, start: Vec2, end: Vec2, color: Color, stroke: Stroke);

    /// Draws each point as a dot of the stroke width.
    fn draw_points(&mut self, points: &[Vec2], color: Color, stroke: Stroke);
}

/// Fractions of the `steps + 2` tick positions, including both ends.
pub fn tick_fractions(steps: usize) -> SmallVec<[f32; 16]> {
    if steps == 0 {
        return SmallVec::new();
    }
    let denom = steps as f32 + 1.0;
    (0..=steps + 1).map(|i| i as f32 / denom).collect()
}

/// One resolved tick mark.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tick {
    /// Position along the track in `[0, 1]`.
    pub fraction: f32,
    /// Position in track coordinates.
    pub position: Vec2,
    /// Whether the tick lies within the active range `[0, value]`.
    pub in_active_range: bool,
    /// Resolved color; transparent while the wave passes over it.
    pub color: Color,
}

/// Inputs to [`resolve_ticks`].
pub(crate) struct TickInputs<'a> {
    pub steps: usize,
    pub value: f32,
    pub track_width: f32,
    pub center_y: f32,
    pub amplitude: f32,
    pub enabled: bool,
    pub colors: &'a SliderColors,
}

/// Places and colors the tick marks.
///
/// Ticks under a waving active segment are made transparent; they only show
/// in the active range once the wave has flattened.
pub(crate) fn resolve_ticks(inputs: TickInputs<'_>) -> SmallVec<[Tick; 16]> {
    let flat = inputs.amplitude.abs() <= FLAT_EPSILON;
    tick_fractions(inputs.steps)
        .into_iter()
        .map(|fraction| {
            let in_active_range = fraction <= inputs.value + TICK_EPSILON;
            let color = if !in_active_range {
                inputs.colors.inactive_tick_color(inputs.enabled)
            } else if flat {
                inputs.colors.active_tick_color(inputs.enabled)
            } else {
                Color::TRANSPARENT
            };
            Tick {
                fraction,
                position: Vec2::new(inputs.track_width * fraction, inputs.center_y),
                in_active_range,
                color,
            }
        })
        .collect()
}

/// Everything needed to draw one frame of the slider track.
#[derive(Clone, Debug, PartialEq)]
pub struct TrackFrame {
    /// Track size in pixels.
    pub size: Vec2,
    /// Vertical center line of the track.
    pub center_y: f32,
    /// Clamped slider value.
    pub value: f32,
    /// Phase the wave was sampled with.
    pub phase: f32,
    /// Smoothed amplitude the wave was sampled with.
    pub amplitude: f32,
    /// Sampled points of the active segment.
    pub wave_points: Vec<Vec2>,
    /// Color of the active segment.
    pub active_color: Color,
    /// Start of the straight inactive segment.
    pub inactive_start: Vec2,
    /// End of the straight inactive segment.
    pub inactive_end: Vec2,
    /// Color of the inactive segment.
    pub inactive_color: Color,
    /// Stroke used for the wave and the inactive segment.
    pub stroke: Stroke,
    /// Stroke used for tick points.
    pub tick_stroke: Stroke,
    /// Tick marks, empty for a continuous slider.
    pub ticks: SmallVec<[Tick; 16]>,
    /// Thumb shape.
    pub thumb: Thumb,
    /// Thumb center.
    pub thumb_center: Vec2,
    /// Thumb color.
    pub thumb_color: Color,
}

impl TrackFrame {
    /// Drawable polyline of the active segment.
    pub fn wave_path(&self) -> Path {
        wave_path(self.wave_points.iter().copied())
    }

    /// Returns `true` when the wave is drawn as a straight line.
    pub fn is_flat(&self) -> bool {
        self.amplitude.abs() <= FLAT_EPSILON
    }

    /// Returns `true` when some of the track lies past the thumb.
    pub fn has_inactive_segment(&self) -> bool {
        self.inactive_end.x > self.inactive_start.x
    }

    /// Replays the frame: wave, inactive segment, ticks, then thumb.
    pub fn draw(&self, canvas: &mut dyn Canvas) {
        canvas.draw_path(&self.wave_path(), self.active_color, self.stroke);

        if self.has_inactive_segment() {
            canvas.draw_line(
                self.inactive_start,
                self.inactive_end,
                self.inactive_color,
                self.stroke,
            );
        }

        let mut groups: SmallVec<[(Color, SmallVec<[Vec2; 16]>); 2]> = SmallVec::new();
        for tick in self.ticks.iter().filter(|t| !t.color.is_transparent()) {
            match groups.iter().position(|(color, _)| *color == tick.color) {
                Some(index) => groups[index].1.push(tick.position),
                None => groups.push((tick.color, SmallVec::from_slice(&[tick.position]))),
            }
        }
        for (color, points) in &groups {
            canvas.draw_points(points, *color, self.tick_stroke);
        }

        self.thumb.draw(
            canvas,
            ThumbContext {
                center: self.thumb_center,
                color: self.thumb_color,
            },
        );
    }
}
