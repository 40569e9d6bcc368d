//! Configuration errors reported when a slider is constructed.

use thiserror::Error;

/// Errors raised when wave parameters are rejected.
///
/// These are reported when arguments are handed to the controller, never while
/// a frame is being rendered.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WaveSliderError {
    /// Amplitude was negative or not finite.
    #[error("wave amplitude must be finite and non-negative, got {0}")]
    InvalidAmplitude(f32),
    /// Frequency was zero, negative or not finite.
    #[error("wave frequency must be finite and positive, got {0}")]
    InvalidFrequency(f32),
    /// The phase animation cycle has no length.
    #[error("wave animation duration must be greater than zero")]
    ZeroAnimationDuration,
    /// Stroke width was negative or not finite.
    #[error("track stroke width must be finite and non-negative, got {0}")]
    InvalidStrokeWidth(f32),
}
