//! Typing speed presentation: numeric text, bar value and color band

use core::fmt::Write;

use embedded_graphics_core::pixelcolor::Rgb888;
use heapless::String;

use crate::config::{WpmConfig, WPM_TEXT_LEN};

/// Color band of the WPM bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SpeedBand {
    Low,
    Mid,
    High,
}

impl WpmConfig {
    /// Band for a reading
    pub fn band(&self, wpm: u16) -> SpeedBand {
        if wpm < self.mid_threshold {
            SpeedBand::Low
        } else if wpm < self.high_threshold {
            SpeedBand::Mid
        } else {
            SpeedBand::High
        }
    }

    /// Fill color for a band
    pub fn color(&self, band: SpeedBand) -> Rgb888 {
        match band {
            SpeedBand::Low => self.low_color,
            SpeedBand::Mid => self.mid_color,
            SpeedBand::High => self.high_color,
        }
    }

    /// Bar value for a reading
    pub fn bar_value(&self, wpm: u16) -> u16 {
        wpm.min(self.max)
    }
}

/// Numeric WPM text, right-justified in three columns
pub fn wpm_text(wpm: u16) -> String<WPM_TEXT_LEN> {
    let mut text = String::new();
    let _ = write!(text, "{:>3}", wpm);
    text
}
