//! Theme colors the slider falls back to when no palette is supplied.
//!
//! ## Usage
//!
//! Implement [`ColorProvider`] on your app theme, or use one of the baseline
//! [`ColorScheme`]s directly.

use crate::color::Color;

/// The Material color roles the wave slider reads its defaults from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorScheme {
    /// Indicates if the scheme is dark mode (`true`) or light mode (`false`).
    pub is_dark: bool,
    /// The primary color of the scheme.
    pub primary: Color,
    /// A container color for `primary`.
    pub primary_container: Color,
    /// A container color for `secondary`.
    pub secondary_container: Color,
    /// A variant of the surface color.
    pub surface_variant: Color,
}

impl ColorScheme {
    /// Baseline light scheme (seed `#6750A4`).
    pub const fn light() -> Self {
        Self {
            is_dark: false,
            primary: Color::from_hex(0x6750A4),
            primary_container: Color::from_hex(0xEADDFF),
            secondary_container: Color::from_hex(0xE8DEF8),
            surface_variant: Color::from_hex(0xE7E0EC),
        }
    }

    /// Baseline dark scheme (seed `#6750A4`).
    pub const fn dark() -> Self {
        Self {
            is_dark: true,
            primary: Color::from_hex(0xD0BCFF),
            primary_container: Color::from_hex(0x4F378B),
            secondary_container: Color::from_hex(0x4A4458),
            surface_variant: Color::from_hex(0x49454F),
        }
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::light()
    }
}

/// Supplies the color scheme used to derive default slider colors.
pub trait ColorProvider {
    /// Returns the scheme currently in effect.
    fn color_scheme(&self) -> ColorScheme;
}

impl ColorProvider for ColorScheme {
    fn color_scheme(&self) -> ColorScheme {
        *self
    }
}
