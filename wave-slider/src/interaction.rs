//! Drag state and pointer-to-value mapping.

/// Whether the thumb is currently being dragged.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InteractionState {
    /// No drag in progress.
    #[default]
    Idle,
    /// The user is dragging the thumb.
    Dragging,
}

impl InteractionState {
    /// Returns `true` in the [`Dragging`](Self::Dragging) state.
    pub fn is_dragging(self) -> bool {
        matches!(self, Self::Dragging)
    }

    /// Applies a drag event and returns the next state.
    pub fn apply(self, event: DragInteraction) -> Self {
        match event {
            DragInteraction::Start => Self::Dragging,
            DragInteraction::Stop | DragInteraction::Cancel => Self::Idle,
        }
    }
}

/// Drag lifecycle events emitted by a gesture source.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragInteraction {
    /// A drag began.
    Start,
    /// A drag ended normally.
    Stop,
    /// A drag was interrupted by the host.
    Cancel,
}

/// Raw pointer input in track-local coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    /// The pointer went down at `x`.
    Pressed {
        /// Horizontal position relative to the track start.
        x: f32,
    },
    /// The pointer moved to `x`.
    Moved {
        /// Horizontal position relative to the track start.
        x: f32,
    },
    /// The pointer was lifted.
    Released,
    /// The host took the pointer away (e.g. a parent started scrolling).
    Cancelled,
}

/// Snaps `value` to the nearest of `steps + 2` evenly spaced positions.
///
/// With `steps == 0` the value is only clamped to `[0, 1]`.
pub fn snap_fraction(value: f32, steps: usize) -> f32 {
    if steps == 0 {
        return value.clamp(0.0, 1.0);
    }
    let denom = steps as f32 + 1.0;
    let step = 1.0 / denom;
    ((value / step).round() * step).clamp(0.0, 1.0)
}

/// Maps a track-local x coordinate to a slider value.
/// Returns `None` for an empty track.
pub fn position_to_value(x: f32, track_width: f32) -> Option<f32> {
    if !track_width.is_finite() || track_width <= 0.0 || !x.is_finite() {
        return None;
    }
    Some((x / track_width).clamp(0.0, 1.0))
}
