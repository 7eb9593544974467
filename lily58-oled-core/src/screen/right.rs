//! Right half: WPM header, numeric value and speed bar
//!
//! ```text
//! ┌────────────────────────────┐
//! │ WPM                     87 │
//! │                            │
//! │ [██████████             ]  │
//! └────────────────────────────┘
//! ```

use heapless::String;

use crate::config::{StatusConfig, WpmConfig, PANEL_WIDTH, WPM_TEXT_LEN};
use crate::traits::{Align, Animation, RenderSurface, SurfaceExt};
use crate::wpm::{wpm_text, SpeedBand};

/// Header label text
pub const WPM_HEADER: &str = "WPM";

/// Horizontal margin of the labels and the bar
const MARGIN: i16 = 2;

/// Bar width in pixels
const BAR_WIDTH: u16 = PANEL_WIDTH as u16 - 2 * MARGIN as u16;

/// Bar height in pixels
const BAR_HEIGHT: u16 = 10;

/// Right screen state
#[derive(Debug, Clone)]
pub struct RightScreen<H> {
    header: Option<H>,
    value_label: Option<H>,
    bar: Option<H>,
    value_text: String<WPM_TEXT_LEN>,
    bar_value: u16,
    band: SpeedBand,
}

impl<H: Copy> RightScreen<H> {
    /// Create the header, the value label and the bar, all visible at zero
    pub fn build<S>(surface: &mut S, config: &StatusConfig) -> Self
    where
        S: RenderSurface<Handle = H>,
    {
        let header = surface.place_label(WPM_HEADER, Align::TopLeft, (MARGIN, 0), false);

        let value_text = wpm_text(0);
        let value_label = surface.place_label(&value_text, Align::TopRight, (-MARGIN, 0), false);

        let band = config.wpm.band(0);
        let bar = surface.create_bar(0, config.wpm.max).ok();
        if let Some(bar) = bar {
            surface.set_size(bar, BAR_WIDTH, BAR_HEIGHT).ok();
            surface.align(bar, Align::BottomMid, 0, -MARGIN).ok();
            surface.set_bar_value(bar, 0, Animation::Off).ok();
            surface.set_bar_color(bar, config.wpm.color(band)).ok();
        }

        Self {
            header,
            value_label,
            bar,
            value_text,
            bar_value: 0,
            band,
        }
    }

    /// Show a new typing speed
    ///
    /// Skipped entirely unless both the value label and the bar exist.
    pub fn apply_wpm<S>(&mut self, surface: &mut S, config: &WpmConfig, wpm: u16)
    where
        S: RenderSurface<Handle = H>,
    {
        let (Some(value_label), Some(bar)) = (self.value_label, self.bar) else {
            return;
        };

        self.value_text = wpm_text(wpm);
        surface.set_text(value_label, &self.value_text).ok();

        self.bar_value = config.bar_value(wpm);
        surface.set_bar_value(bar, self.bar_value, Animation::On).ok();

        let band = config.band(wpm);
        if band != self.band {
            trace!("wpm band {:?} -> {:?}", self.band, band);
        }
        self.band = band;
        surface.set_bar_color(bar, config.color(band)).ok();
    }
}

impl<H> RightScreen<H> {
    /// Last numeric text
    pub fn value_text(&self) -> &str {
        &self.value_text
    }

    /// Last bar value
    pub fn bar_value(&self) -> u16 {
        self.bar_value
    }

    /// Last color band
    pub fn band(&self) -> SpeedBand {
        self.band
    }

    /// Header element, if it was created
    pub fn header(&self) -> Option<&H> {
        self.header.as_ref()
    }

    /// Value label element, if it was created
    pub fn value_label(&self) -> Option<&H> {
        self.value_label.as_ref()
    }

    /// Bar element, if it was created
    pub fn bar(&self) -> Option<&H> {
        self.bar.as_ref()
    }
}
