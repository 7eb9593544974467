//! Left half: idle logo, then layer name and held modifiers
//!
//! ```text
//! ┌────────────────────────────┐
//! │ [Logo - shown until typed] │
//! │ LAYER: QWERTY              │
//! │ Ctl Sft                    │
//! └────────────────────────────┘
//! ```

use heapless::String;

use crate::config::{LayerConfig, StatusConfig, LABEL_LEN, LILY58_LOGO};
use crate::hid::{modifier_text, ModFlags, NO_MODIFIERS};
use crate::layer::layer_text;
use crate::traits::{Align, RenderSurface, SurfaceExt};

/// Left margin of the status labels
const LABEL_X: i16 = 2;

/// Vertical offset of the layer label
const LAYER_LABEL_Y: i16 = 2;

/// Vertical offset of the modifier label
const MODS_LABEL_Y: i16 = 16;

/// Which content the left panel shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LeftView {
    /// Idle logo, before any layer change
    Logo,
    /// Layer and modifier labels
    Status,
}

/// Left screen state
#[derive(Debug, Clone)]
pub struct LeftScreen<H> {
    logo: Option<H>,
    layer_label: Option<H>,
    mods_label: Option<H>,
    view: LeftView,
    layer_text: String<LABEL_LEN>,
    modifier_text: String<LABEL_LEN>,
}

impl<H: Copy> LeftScreen<H> {
    /// Create the logo and the (hidden) status labels
    pub fn build<S>(surface: &mut S, config: &StatusConfig) -> Self
    where
        S: RenderSurface<Handle = H>,
    {
        let logo = surface.create_image(&LILY58_LOGO).ok();
        if let Some(logo) = logo {
            surface.align(logo, Align::Center, 0, 0).ok();
        }

        let layer_text = layer_text(&config.layers, 0);
        let layer_label =
            surface.place_label(&layer_text, Align::TopLeft, (LABEL_X, LAYER_LABEL_Y), true);

        let mut modifier_text = String::new();
        let _ = modifier_text.push_str(NO_MODIFIERS);
        let mods_label =
            surface.place_label(&modifier_text, Align::TopLeft, (LABEL_X, MODS_LABEL_Y), true);

        Self {
            logo,
            layer_label,
            mods_label,
            view: LeftView::Logo,
            layer_text,
            modifier_text,
        }
    }

    /// Show a new active layer
    ///
    /// The first call swaps the logo for the status labels; the swap is never
    /// undone. Skipped entirely if the layer label does not exist.
    pub fn apply_layer<S>(&mut self, surface: &mut S, layers: &LayerConfig, index: u8)
    where
        S: RenderSurface<Handle = H>,
    {
        if self.layer_label.is_none() {
            return;
        }

        self.layer_text = layer_text(layers, index);
        surface.update_text(self.layer_label, &self.layer_text);

        if self.view == LeftView::Logo {
            trace!("left status labels revealed");
            self.view = LeftView::Status;
        }
        surface.hide(self.logo);
        surface.show(self.layer_label);
        surface.show(self.mods_label);
    }

    /// Show a new modifier set
    ///
    /// Visibility is left alone; only a layer change reveals the labels.
    pub fn apply_modifiers<S>(&mut self, surface: &mut S, mods: ModFlags)
    where
        S: RenderSurface<Handle = H>,
    {
        if self.mods_label.is_none() {
            return;
        }

        self.modifier_text = modifier_text(mods);
        surface.update_text(self.mods_label, &self.modifier_text);
    }
}

impl<H> LeftScreen<H> {
    /// Current view
    pub fn view(&self) -> LeftView {
        self.view
    }

    /// Last layer label text
    pub fn layer_text(&self) -> &str {
        &self.layer_text
    }

    /// Last modifier label text
    pub fn modifier_text(&self) -> &str {
        &self.modifier_text
    }

    /// Logo element, if it was created
    pub fn logo(&self) -> Option<&H> {
        self.logo.as_ref()
    }

    /// Layer label element, if it was created
    pub fn layer_label(&self) -> Option<&H> {
        self.layer_label.as_ref()
    }

    /// Modifier label element, if it was created
    pub fn mods_label(&self) -> Option<&H> {
        self.mods_label.as_ref()
    }
}
