//! Minimal SVG canvas for dumping frames to disk.

use std::fmt::Write as _;

use lyon_path::{Event, Path};
use wave_slider::{
    Vec2,
    color::Color,
    render::{Canvas, Stroke, StrokeCap},
};

pub struct SvgCanvas {
    width: f32,
    height: f32,
    body: String,
}

impl SvgCanvas {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            body: String::new(),
        }
    }

    pub fn finish(self) -> String {
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n{body}</svg>\n",
            w = self.width,
            h = self.height,
            body = self.body
        )
    }
}

fn path_data(path: &Path) -> String {
    let mut data = String::new();
    for event in path.iter() {
        // Writing to a String cannot fail.
        let _ = match event {
            Event::Begin { at } => write!(data, "M{} {} ", at.x, at.y),
            Event::Line { to, .. } => write!(data, "L{} {} ", to.x, to.y),
            Event::Quadratic { ctrl, to, .. } => {
                write!(data, "Q{} {} {} {} ", ctrl.x, ctrl.y, to.x, to.y)
            }
            Event::Cubic {
                ctrl1, ctrl2, to, ..
            } => write!(
                data,
                "C{} {} {} {} {} {} ",
                ctrl1.x, ctrl1.y, ctrl2.x, ctrl2.y, to.x, to.y
            ),
            Event::End { close: true, .. } => write!(data, "Z "),
            Event::End { close: false, .. } => Ok(()),
        };
    }
    data.trim_end().to_string()
}

fn paint(kind: &str, color: Color) -> String {
    format!(
        "{kind}=\"{}\" {kind}-opacity=\"{}\"",
        color.to_hex_string(),
        color.a
    )
}

fn linecap(cap: StrokeCap) -> &'static str {
    match cap {
        StrokeCap::Butt => "butt",
        StrokeCap::Round => "round",
        StrokeCap::Square => "square",
    }
}

fn stroke_attrs(color: Color, stroke: Stroke) -> String {
    format!(
        "fill=\"none\" {} stroke-width=\"{}\" stroke-linecap=\"{}\" stroke-linejoin=\"round\"",
        paint("stroke", color),
        stroke.width,
        linecap(stroke.cap)
    )
}

impl Canvas for SvgCanvas {
    fn draw_path(&mut self, path: &Path, color: Color, stroke: Stroke) {
        let _ = writeln!(
            self.body,
            "  <path d=\"{}\" {}/>",
            path_data(path),
            stroke_attrs(color, stroke)
        );
    }

    fn fill_path(&mut self, path: &Path, color: Color) {
        let _ = writeln!(
            self.body,
            "  <path d=\"{}\" {}/>",
            path_data(path),
            paint("fill", color)
        );
    }

    fn draw_line(&mut self, start: Vec2, end: Vec2, color: Color, stroke: Stroke) {
        let _ = writeln!(
            self.body,
            "  <line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" {}/>",
            start.x,
            start.y,
            end.x,
            end.y,
            stroke_attrs(color, stroke)
        );
    }

    fn draw_points(&mut self, points: &[Vec2], color: Color, stroke: Stroke) {
        let half = stroke.width / 2.0;
        let fill = paint("fill", color);
        for point in points {
            let _ = match stroke.cap {
                StrokeCap::Round => writeln!(
                    self.body,
                    "  <circle cx=\"{}\" cy=\"{}\" r=\"{half}\" {fill}/>",
                    point.x, point.y
                ),
                StrokeCap::Butt | StrokeCap::Square => writeln!(
                    self.body,
                    "  <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" {fill}/>",
                    point.x - half,
                    point.y - half,
                    stroke.width,
                    stroke.width
                ),
            };
        }
    }
}
