//! An animated wave slider for headless and custom-rendered UIs.
//!
//! The active part of the track is drawn as a travelling sine wave that can
//! flatten while the thumb is dragged; the rest of the track is a straight
//! line. The crate owns the state and the geometry, while the host owns the
//! window, the input source and the drawing surface.
//!
//! # Usage
//!
//! 1. Build [`WaveSliderArgs`](controller::WaveSliderArgs) and create a
//!    [`WaveSliderController`](controller::WaveSliderController).
//! 2. Report the track size and forward pointer or drag events.
//! 3. On every frame, call
//!    [`WaveSliderController::frame`](controller::WaveSliderController::frame)
//!    and draw the returned [`TrackFrame`](render::TrackFrame) onto your
//!    [`Canvas`](render::Canvas).
//!
//! # Example
//!
//! ```
//! use std::time::{Duration, Instant};
//!
//! use wave_slider::{
//!     controller::{WaveSliderArgs, WaveSliderController},
//!     params::{WaveAnimationOptions, WaveParams},
//!     theme::ColorScheme,
//!     thumb::Thumb,
//! };
//!
//! let wave = WaveParams::new(12.0, 0.05)
//!     .expect("valid wave")
//!     .steps(4)
//!     .animation_options(WaveAnimationOptions::default().reverse_direction(true));
//! let args = WaveSliderArgs::themed(&ColorScheme::dark())
//!     .value(0.6)
//!     .thumb(Thumb::Diamond)
//!     .wave(wave);
//!
//! let mut controller = WaveSliderController::new(args).expect("valid args");
//! controller.set_track_size(320.0, 48.0);
//!
//! let start = Instant::now();
//! let first = controller.frame(start);
//! let next = controller.frame(start + Duration::from_millis(16));
//! assert_ne!(first.phase, next.phase);
//! assert_eq!(next.ticks.len(), 6);
//! ```
#![deny(missing_docs, clippy::unwrap_used)]

mod animation;

pub mod color;
pub mod colors;
pub mod controller;
pub mod error;
pub mod interaction;
pub mod params;
pub mod phase_clock;
pub mod prop;
pub mod render;
pub mod theme;
pub mod thumb;
pub mod waveform;

pub use glam::Vec2;
pub use lyon_path;

pub use crate::{
    color::Color,
    colors::SliderColors,
    controller::{FrameScheduler, WaveSliderArgs, WaveSliderController},
    error::WaveSliderError,
    interaction::{DragInteraction, InteractionState, PointerEvent},
    params::{WaveAnimationOptions, WaveParams, WaveSliderDefaults},
    render::{Canvas, Stroke, StrokeCap, TrackFrame},
    thumb::Thumb,
};
