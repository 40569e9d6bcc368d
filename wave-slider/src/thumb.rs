//! Thumb shapes drawn at the current slider value.
//!
//! The built-in shapes mirror the classic wave slider set: a tall pill, a
//! rounded square, a circle and a rotated diamond. Anything else can be drawn
//! through [`ThumbRenderer`].

use std::{fmt, sync::Arc};

use glam::Vec2;
use lyon_path::{
    Path, Winding,
    builder::BorderRadii,
    math::{Angle, Box2D, Transform, point, vector},
};

use crate::{color::Color, render::Canvas};

/// Geometry of the built-in thumbs, in pixels.
pub struct ThumbDefaults;

impl ThumbDefaults {
    /// Pill width.
    pub const PILL_WIDTH: f32 = 6.0;
    /// Pill height.
    pub const PILL_HEIGHT: f32 = 30.0;
    /// Square edge length.
    pub const SQUARE_SIZE: f32 = 20.0;
    /// Square corner radius.
    pub const SQUARE_CORNER_RADIUS: f32 = 5.0;
    /// Circle diameter.
    pub const CIRCLE_DIAMETER: f32 = 20.0;
    /// Diamond edge length before rotation.
    pub const DIAMOND_SIZE: f32 = 18.0;
    /// Diamond corner radius.
    pub const DIAMOND_CORNER_RADIUS: f32 = 2.0;
}

/// Everything a thumb renderer needs to draw itself.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ThumbContext {
    /// Thumb center in track coordinates.
    pub center: Vec2,
    /// Color resolved from the palette and the `enabled` flag.
    pub color: Color,
}

/// Draws a custom thumb.
pub trait ThumbRenderer: Send + Sync {
    /// Draws the thumb into `canvas`.
    fn draw(&self, canvas: &mut dyn Canvas, context: ThumbContext);
}

impl<F> ThumbRenderer for F
where
    F: Fn(&mut dyn Canvas, ThumbContext) + Send + Sync,
{
    fn draw(&self, canvas: &mut dyn Canvas, context: ThumbContext) {
        self(canvas, context)
    }
}

/// Thumb shape of a wave slider.
#[derive(Clone, Default)]
pub enum Thumb {
    /// Tall rounded bar.
    #[default]
    Pill,
    /// Rounded square.
    Square,
    /// Circle.
    Circle,
    /// Rounded square rotated by 45 degrees.
    Diamond,
    /// Caller-supplied renderer.
    Custom(Arc<dyn ThumbRenderer>),
}

impl Thumb {
    /// Wraps a custom renderer.
    pub fn custom(renderer: impl ThumbRenderer + 'static) -> Self {
        Self::Custom(Arc::new(renderer))
    }

    /// Outline of a built-in thumb centered at `center`. Custom thumbs have
    /// none.
    pub fn path(&self, center: Vec2) -> Option<Path> {
        let mut builder = Path::builder();
        match self {
            Thumb::Pill => {
                let rect =
                    centered_box(center, ThumbDefaults::PILL_WIDTH, ThumbDefaults::PILL_HEIGHT);
                let radii = BorderRadii::new(ThumbDefaults::PILL_WIDTH / 2.0);
                builder.add_rounded_rectangle(&rect, &radii, Winding::Positive);
            }
            Thumb::Square => {
                let rect =
                    centered_box(center, ThumbDefaults::SQUARE_SIZE, ThumbDefaults::SQUARE_SIZE);
                let radii = BorderRadii::new(ThumbDefaults::SQUARE_CORNER_RADIUS);
                builder.add_rounded_rectangle(&rect, &radii, Winding::Positive);
            }
            Thumb::Circle => {
                builder.add_circle(
                    point(center.x, center.y),
                    ThumbDefaults::CIRCLE_DIAMETER / 2.0,
                    Winding::Positive,
                );
            }
            Thumb::Diamond => {
                let rect =
                    centered_box(center, ThumbDefaults::DIAMOND_SIZE, ThumbDefaults::DIAMOND_SIZE);
                let radii = BorderRadii::new(ThumbDefaults::DIAMOND_CORNER_RADIUS);
                builder.add_rounded_rectangle(&rect, &radii, Winding::Positive);
                let rotation = Transform::translation(-center.x, -center.y)
                    .then_rotate(Angle::degrees(45.0))
                    .then_translate(vector(center.x, center.y));
                return Some(builder.build().transformed(&rotation));
            }
            Thumb::Custom(_) => return None,
        }
        Some(builder.build())
    }

    /// Draws the thumb.
    pub fn draw(&self, canvas: &mut dyn Canvas, context: ThumbContext) {
        match self {
            Thumb::Custom(renderer) => renderer.draw(canvas, context),
            builtin => {
                if let Some(path) = builtin.path(context.center) {
                    canvas.fill_path(&path, context.color);
                }
            }
        }
    }
}

fn centered_box(center: Vec2, width: f32, height: f32) -> Box2D {
    Box2D::new(
        point(center.x - width / 2.0, center.y - height / 2.0),
        point(center.x + width / 2.0, center.y + height / 2.0),
    )
}

impl PartialEq for Thumb {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Thumb::Pill, Thumb::Pill)
            | (Thumb::Square, Thumb::Square)
            | (Thumb::Circle, Thumb::Circle)
            | (Thumb::Diamond, Thumb::Diamond) => true,
            (Thumb::Custom(a), Thumb::Custom(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Debug for Thumb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Thumb::Pill => f.write_str("Pill"),
            Thumb::Square => f.write_str("Square"),
            Thumb::Circle => f.write_str("Circle"),
            Thumb::Diamond => f.write_str("Diamond"),
            Thumb::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}
