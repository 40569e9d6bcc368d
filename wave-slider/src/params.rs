//! Wave shape and animation configuration.
//!
//! ## Usage
//!
//! Build a [`WaveParams`] with [`WaveParams::new`] (or take the default) and
//! adjust the remaining fields with the generated setters.

use std::{f32::consts::PI, time::Duration};

use derive_setters::Setters;

use crate::{
    colors::SliderColors, error::WaveSliderError, interaction::InteractionState,
    theme::ColorProvider,
};

/// Defaults shared by the wave slider configuration types.
pub struct WaveSliderDefaults;

impl WaveSliderDefaults {
    /// Default wave height in pixels.
    pub const AMPLITUDE: f32 = 15.0;
    /// Default angular frequency in radians per pixel.
    pub const FREQUENCY: f32 = 0.07;
    /// Default length of one phase cycle.
    pub const ANIMATION_DURATION: Duration = Duration::from_millis(1000);
    /// Default stroke width of the wave and the inactive track.
    pub const STROKE_WIDTH: f32 = 8.0;
    /// Stroke width used for tick points.
    pub const TICK_STROKE_WIDTH: f32 = 5.0;
    /// How long the amplitude takes to settle after a drag starts or stops.
    pub const AMPLITUDE_ANIMATION_DURATION: Duration = Duration::from_millis(250);
    /// How long the thumb takes to change color when `enabled` toggles.
    pub const THUMB_COLOR_ANIMATION_DURATION: Duration = Duration::from_millis(150);

    /// Default palette derived from the provided theme.
    pub fn colors(provider: &impl ColorProvider) -> SliderColors {
        SliderColors::from_provider(provider)
    }

    /// Default animation options.
    pub fn animation_options() -> WaveAnimationOptions {
        WaveAnimationOptions::default()
    }

    /// Default wave parameters.
    pub fn wave_params() -> WaveParams {
        WaveParams::default()
    }
}

/// Policies controlling how the wave moves and reacts to dragging.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Setters)]
pub struct WaveAnimationOptions {
    /// Move the wave to the left instead of the right.
    pub reverse_direction: bool,
    /// Flatten the wave while the thumb is dragged.
    pub flatline_on_drag: bool,
    /// Animate the wave continuously.
    pub animate_wave: bool,
    /// Invert `flatline_on_drag`: flat by default, waving while dragged.
    pub reverse_flatline: bool,
}

impl Default for WaveAnimationOptions {
    fn default() -> Self {
        Self {
            reverse_direction: false,
            flatline_on_drag: true,
            animate_wave: true,
            reverse_flatline: false,
        }
    }
}

impl WaveAnimationOptions {
    /// Amplitude the wave should settle at for the given interaction state.
    pub fn target_amplitude(&self, amplitude: f32, state: InteractionState) -> f32 {
        if !self.flatline_on_drag {
            return amplitude;
        }
        let dragging = state.is_dragging();
        match (self.reverse_flatline, dragging) {
            (false, true) | (true, false) => 0.0,
            (false, false) | (true, true) => amplitude,
        }
    }
}

/// Shape and animation parameters of the wave.
#[derive(Clone, Copy, Debug, PartialEq, Setters)]
pub struct WaveParams {
    #[setters(skip)]
    amplitude: f32,
    #[setters(skip)]
    frequency: f32,
    /// Animation policies.
    pub animation_options: WaveAnimationOptions,
    /// Number of discrete steps between the ends. `0` means continuous.
    pub steps: usize,
    /// Time the phase takes to run through one full cycle.
    pub animation_duration: Duration,
    /// Stroke width of the wave and the inactive track, in pixels.
    pub stroke_width: f32,
}

impl WaveParams {
    /// Creates wave parameters, rejecting a negative amplitude or a
    /// non-positive frequency.
    pub fn new(amplitude: f32, frequency: f32) -> Result<Self, WaveSliderError> {
        let params = Self {
            amplitude,
            frequency,
            ..Self::default()
        };
        params.validate()?;
        Ok(params)
    }

    /// Peak height of the wave in pixels.
    pub fn amplitude(&self) -> f32 {
        self.amplitude
    }

    /// Angular frequency of the wave in radians per pixel.
    pub fn frequency(&self) -> f32 {
        self.frequency
    }

    /// Checks every field, including those set through setters.
    pub fn validate(&self) -> Result<(), WaveSliderError> {
        if !self.amplitude.is_finite() || self.amplitude < 0.0 {
            return Err(WaveSliderError::InvalidAmplitude(self.amplitude));
        }
        if !self.frequency.is_finite() || self.frequency <= 0.0 {
            return Err(WaveSliderError::InvalidFrequency(self.frequency));
        }
        if self.animation_duration.is_zero() {
            return Err(WaveSliderError::ZeroAnimationDuration);
        }
        if !self.stroke_width.is_finite() || self.stroke_width < 0.0 {
            return Err(WaveSliderError::InvalidStrokeWidth(self.stroke_width));
        }
        Ok(())
    }

    /// Phase reached at the end of one animation cycle.
    pub fn phase_cycle(&self) -> f32 {
        self.frequency * 1000.0 * 4.0 * PI
    }

    /// Amplitude the wave should settle at for the given interaction state.
    pub fn target_amplitude(&self, state: InteractionState) -> f32 {
        self.animation_options.target_amplitude(self.amplitude, state)
    }
}

impl Default for WaveParams {
    fn default() -> Self {
        Self {
            amplitude: WaveSliderDefaults::AMPLITUDE,
            frequency: WaveSliderDefaults::FREQUENCY,
            animation_options: WaveAnimationOptions::default(),
            steps: 0,
            animation_duration: WaveSliderDefaults::ANIMATION_DURATION,
            stroke_width: WaveSliderDefaults::STROKE_WIDTH,
        }
    }
}
