use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use wave_slider::{
    controller::WaveSliderArgs,
    params::{WaveAnimationOptions, WaveParams},
    theme::ColorScheme,
    thumb::Thumb,
};

#[derive(Parser, Debug)]
#[command(name = "wave-slider-demo")]
#[command(version, about = "Render a scripted wave slider session to SVG frames", long_about = None)]
pub struct Cli {
    /// Track width in pixels
    #[arg(long, default_value_t = 320.0)]
    pub width: f32,
    /// Track height in pixels
    #[arg(long, default_value_t = 64.0)]
    pub height: f32,
    /// Initial slider value in [0, 1]
    #[arg(long, default_value_t = 0.3)]
    pub value: f32,
    /// Wave amplitude in pixels
    #[arg(long, default_value_t = 15.0)]
    pub amplitude: f32,
    /// Wave frequency in radians per pixel
    #[arg(long, default_value_t = 0.07)]
    pub frequency: f32,
    /// Discrete steps between the ends (0 = continuous)
    #[arg(long, default_value_t = 0)]
    pub steps: usize,
    /// Length of one phase cycle in milliseconds
    #[arg(long = "duration-ms", default_value_t = 1000)]
    pub duration_ms: u64,
    /// Simulated frames per second
    #[arg(long, default_value_t = 30)]
    pub fps: u32,
    /// Number of frames to render
    #[arg(long, default_value_t = 60)]
    pub frames: u32,
    /// Thumb shape
    #[arg(long, value_enum, default_value_t = ThumbKind::Pill)]
    pub thumb: ThumbKind,
    /// Move the wave to the left
    #[arg(long)]
    pub reverse: bool,
    /// Keep the wave while dragging
    #[arg(long = "no-flatline")]
    pub no_flatline: bool,
    /// Flat while idle, waving while dragging
    #[arg(long = "reverse-flatline")]
    pub reverse_flatline: bool,
    /// Freeze the wave phase
    #[arg(long)]
    pub still: bool,
    /// Render the slider disabled
    #[arg(long)]
    pub disabled: bool,
    /// Use the dark color scheme
    #[arg(long)]
    pub dark: bool,
    /// Skip the scripted drag gesture
    #[arg(long = "no-drag")]
    pub no_drag: bool,
    /// Directory the SVG frames are written to
    #[arg(short, long, default_value = "wave-slider-frames")]
    pub output: PathBuf,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ThumbKind {
    Pill,
    Square,
    Circle,
    Diamond,
}

impl From<ThumbKind> for Thumb {
    fn from(kind: ThumbKind) -> Self {
        match kind {
            ThumbKind::Pill => Thumb::Pill,
            ThumbKind::Square => Thumb::Square,
            ThumbKind::Circle => Thumb::Circle,
            ThumbKind::Diamond => Thumb::Diamond,
        }
    }
}

impl Cli {
    pub fn frame_interval(&self) -> std::time::Duration {
        std::time::Duration::from_secs_f64(1.0 / f64::from(self.fps.max(1)))
    }

    pub fn slider_args(&self) -> Result<WaveSliderArgs> {
        let options = WaveAnimationOptions::default()
            .reverse_direction(self.reverse)
            .flatline_on_drag(!self.no_flatline)
            .reverse_flatline(self.reverse_flatline)
            .animate_wave(!self.still);
        let wave = WaveParams::new(self.amplitude, self.frequency)
            .context("Invalid wave shape")?
            .steps(self.steps)
            .animation_duration(std::time::Duration::from_millis(self.duration_ms))
            .animation_options(options);
        wave.validate().context("Invalid wave animation")?;

        let scheme = if self.dark {
            ColorScheme::dark()
        } else {
            ColorScheme::light()
        };
        Ok(WaveSliderArgs::themed(&scheme)
            .value(self.value)
            .enabled(!self.disabled)
            .thumb(self.thumb.into())
            .wave(wave))
    }
}
