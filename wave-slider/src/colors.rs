//! The ten-color palette of a wave slider.

use derive_setters::Setters;

use crate::{
    color::Color,
    theme::{ColorProvider, ColorScheme},
};

/// Colors for every part of the slider in its enabled and disabled states.
///
/// Use [`SliderColors::from_scheme`] (or
/// [`WaveSliderDefaults::colors`](crate::params::WaveSliderDefaults::colors))
/// to start from theme defaults and override individual entries with the
/// generated setters.
#[derive(Clone, Copy, Debug, PartialEq, Setters)]
pub struct SliderColors {
    /// Thumb color while enabled.
    pub thumb: Color,
    /// Wave (active track) color while enabled.
    pub active_track: Color,
    /// Straight remainder of the track while enabled.
    pub inactive_track: Color,
    /// Tick color inside the active range while enabled.
    pub active_tick: Color,
    /// Tick color outside the active range while enabled.
    pub inactive_tick: Color,
    /// Thumb color while disabled.
    pub disabled_thumb: Color,
    /// Wave color while disabled.
    pub disabled_active_track: Color,
    /// Straight remainder color while disabled.
    pub disabled_inactive_track: Color,
    /// Active-range tick color while disabled.
    pub disabled_active_tick: Color,
    /// Inactive-range tick color while disabled.
    pub disabled_inactive_tick: Color,
}

impl SliderColors {
    /// Derives the default palette from a color scheme.
    pub fn from_scheme(scheme: &ColorScheme) -> Self {
        Self {
            thumb: scheme.primary,
            active_track: scheme.primary,
            inactive_track: scheme.primary_container,
            active_tick: scheme.surface_variant,
            inactive_tick: scheme.primary.with_alpha(0.5),
            disabled_thumb: scheme.secondary_container,
            disabled_active_track: scheme.secondary_container,
            disabled_inactive_track: scheme.primary_container.with_alpha(0.5),
            disabled_active_tick: scheme.primary.with_alpha(0.5),
            disabled_inactive_tick: scheme.primary.with_alpha(0.3),
        }
    }

    /// Derives the default palette from any [`ColorProvider`].
    pub fn from_provider(provider: &impl ColorProvider) -> Self {
        Self::from_scheme(&provider.color_scheme())
    }

    /// Thumb color for the given enabled state.
    pub fn thumb_color(&self, enabled: bool) -> Color {
        if enabled {
            self.thumb
        } else {
            self.disabled_thumb
        }
    }

    /// Wave color for the given enabled state.
    pub fn active_track_color(&self, enabled: bool) -> Color {
        if enabled {
            self.active_track
        } else {
            self.disabled_active_track
        }
    }

    /// Inactive track color for the given enabled state.
    pub fn inactive_track_color(&self, enabled: bool) -> Color {
        if enabled {
            self.inactive_track
        } else {
            self.disabled_inactive_track
        }
    }

    /// Active-range tick color for the given enabled state.
    pub fn active_tick_color(&self, enabled: bool) -> Color {
        if enabled {
            self.active_tick
        } else {
            self.disabled_active_tick
        }
    }

    /// Inactive-range tick color for the given enabled state.
    pub fn inactive_tick_color(&self, enabled: bool) -> Color {
        if enabled {
            self.inactive_tick
        } else {
            self.disabled_inactive_tick
        }
    }
}

impl Default for SliderColors {
    fn default() -> Self {
        Self::from_scheme(&ColorScheme::default())
    }
}
