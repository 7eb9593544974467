//! Configuration type definitions

use embedded_graphics_core::pixelcolor::Rgb888;

use super::compiled;

/// Panel width in pixels
pub const PANEL_WIDTH: usize = 128;

/// Panel height in pixels
pub const PANEL_HEIGHT: usize = 32;

/// Maximum label text length
pub const LABEL_LEN: usize = 32;

/// Maximum length of the numeric WPM text
pub const WPM_TEXT_LEN: usize = 8;

/// Layer name table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LayerConfig {
    /// Names in keymap order
    pub names: &'static [&'static str],
    /// Shown for indices past the end of `names`
    pub unknown: &'static str,
}

impl LayerConfig {
    /// Name for a layer index, or the unknown marker
    pub fn name(&self, index: u8) -> &'static str {
        self.names
            .get(usize::from(index))
            .copied()
            .unwrap_or(self.unknown)
    }

    /// Name of the default (index 0) layer
    pub fn default_name(&self) -> &'static str {
        self.name(0)
    }
}

impl Default for LayerConfig {
    fn default() -> Self {
        Self {
            names: compiled::LAYER_NAMES,
            unknown: compiled::UNKNOWN_LAYER,
        }
    }
}

/// Typing speed bar configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WpmConfig {
    /// Bar upper bound; readings above pin the bar here
    pub max: u16,
    /// Lowest value of the mid band
    pub mid_threshold: u16,
    /// Lowest value of the high band
    pub high_threshold: u16,
    /// Bar fill below `mid_threshold`
    pub low_color: Rgb888,
    /// Bar fill from `mid_threshold` up to `high_threshold`
    pub mid_color: Rgb888,
    /// Bar fill from `high_threshold` up
    pub high_color: Rgb888,
}

impl Default for WpmConfig {
    fn default() -> Self {
        Self {
            max: compiled::WPM_MAX,
            mid_threshold: compiled::WPM_MID_THRESHOLD,
            high_threshold: compiled::WPM_HIGH_THRESHOLD,
            low_color: compiled::WPM_LOW_COLOR,
            mid_color: compiled::WPM_MID_COLOR,
            high_color: compiled::WPM_HIGH_COLOR,
        }
    }
}

/// Complete status screen configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StatusConfig {
    /// Layer name table
    pub layers: LayerConfig,
    /// Typing speed bar
    pub wpm: WpmConfig,
}
