//! Retained-mode render surface trait
//!
//! The host's graphics library keeps the element tree and redraws it; the
//! widget only creates elements once and mutates their properties.

use embedded_graphics_core::pixelcolor::Rgb888;

use crate::config::ImageAsset;

/// Errors reported by a render surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SurfaceError {
    /// No room for another element
    Full,
    /// Handle does not refer to a live element
    InvalidHandle,
    /// Text does not fit the element's buffer
    TextTooLong,
    /// Operation does not apply to this kind of element
    WrongKind,
}

/// Anchor of an element within its parent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Align {
    #[default]
    TopLeft,
    TopMid,
    TopRight,
    Center,
    BottomLeft,
    BottomMid,
    BottomRight,
}

/// Whether a value change may be animated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Animation {
    #[default]
    Off,
    On,
}

/// Retained-mode rendering surface
///
/// Provides the element operations the status screens need. Handles are
/// cheap copies owned by the surface; the widget keeps them only to mutate
/// the elements it created.
pub trait RenderSurface {
    /// Reference to an element on this surface
    type Handle: Copy;

    /// Set the background color of the whole surface
    fn set_background(&mut self, color: Rgb888) -> Result<(), SurfaceError>;

    /// Create a visible image element
    fn create_image(&mut self, image: &'static ImageAsset) -> Result<Self::Handle, SurfaceError>;

    /// Create a visible text label
    fn create_label(&mut self, text: &str) -> Result<Self::Handle, SurfaceError>;

    /// Create a visible bar covering `min..=max`, starting at `min`
    fn create_bar(&mut self, min: u16, max: u16) -> Result<Self::Handle, SurfaceError>;

    /// Set the size of an element in pixels
    fn set_size(&mut self, handle: Self::Handle, width: u16, height: u16)
        -> Result<(), SurfaceError>;

    /// Position an element relative to an anchor of the surface
    fn align(
        &mut self,
        handle: Self::Handle,
        align: Align,
        x_offset: i16,
        y_offset: i16,
    ) -> Result<(), SurfaceError>;

    /// Hide or reveal an element
    fn set_hidden(&mut self, handle: Self::Handle, hidden: bool) -> Result<(), SurfaceError>;

    /// Check whether an element is hidden
    fn is_hidden(&self, handle: Self::Handle) -> Result<bool, SurfaceError>;

    /// Replace the text of a label
    fn set_text(&mut self, handle: Self::Handle, text: &str) -> Result<(), SurfaceError>;

    /// Set the text color of a label
    fn set_text_color(&mut self, handle: Self::Handle, color: Rgb888)
        -> Result<(), SurfaceError>;

    /// Set the value of a bar
    ///
    /// With [`Animation::On`] the surface may animate towards the new value.
    fn set_bar_value(
        &mut self,
        handle: Self::Handle,
        value: u16,
        animation: Animation,
    ) -> Result<(), SurfaceError>;

    /// Set the fill color of a bar's indicator
    fn set_bar_color(&mut self, handle: Self::Handle, color: Rgb888) -> Result<(), SurfaceError>;
}

impl<T: RenderSurface + ?Sized> RenderSurface for &mut T {
    type Handle = T::Handle;

    fn set_background(&mut self, color: Rgb888) -> Result<(), SurfaceError> {
        (**self).set_background(color)
    }

    fn create_image(&mut self, image: &'static ImageAsset) -> Result<Self::Handle, SurfaceError> {
        (**self).create_image(image)
    }

    fn create_label(&mut self, text: &str) -> Result<Self::Handle, SurfaceError> {
        (**self).create_label(text)
    }

    fn create_bar(&mut self, min: u16, max: u16) -> Result<Self::Handle, SurfaceError> {
        (**self).create_bar(min, max)
    }

    fn set_size(
        &mut self,
        handle: Self::Handle,
        width: u16,
        height: u16,
    ) -> Result<(), SurfaceError> {
        (**self).set_size(handle, width, height)
    }

    fn align(
        &mut self,
        handle: Self::Handle,
        align: Align,
        x_offset: i16,
        y_offset: i16,
    ) -> Result<(), SurfaceError> {
        (**self).align(handle, align, x_offset, y_offset)
    }

    fn set_hidden(&mut self, handle: Self::Handle, hidden: bool) -> Result<(), SurfaceError> {
        (**self).set_hidden(handle, hidden)
    }

    fn is_hidden(&self, handle: Self::Handle) -> Result<bool, SurfaceError> {
        (**self).is_hidden(handle)
    }

    fn set_text(&mut self, handle: Self::Handle, text: &str) -> Result<(), SurfaceError> {
        (**self).set_text(handle, text)
    }

    fn set_text_color(
        &mut self,
        handle: Self::Handle,
        color: Rgb888,
    ) -> Result<(), SurfaceError> {
        (**self).set_text_color(handle, color)
    }

    fn set_bar_value(
        &mut self,
        handle: Self::Handle,
        value: u16,
        animation: Animation,
    ) -> Result<(), SurfaceError> {
        (**self).set_bar_value(handle, value, animation)
    }

    fn set_bar_color(&mut self, handle: Self::Handle, color: Rgb888) -> Result<(), SurfaceError> {
        (**self).set_bar_color(handle, color)
    }
}

/// Helpers that tolerate missing elements
///
/// An element that failed to build is `None`; updating it is a silent no-op.
/// Surface errors during updates are dropped the same way: the screen simply
/// keeps its previous content.
pub trait SurfaceExt: RenderSurface {
    /// Reveal an element if it exists
    fn show(&mut self, handle: Option<Self::Handle>) {
        if let Some(handle) = handle {
            self.set_hidden(handle, false).ok();
        }
    }

    /// Hide an element if it exists
    fn hide(&mut self, handle: Option<Self::Handle>) {
        if let Some(handle) = handle {
            self.set_hidden(handle, true).ok();
        }
    }

    /// Replace label text if the label exists
    fn update_text(&mut self, handle: Option<Self::Handle>, text: &str) {
        if let Some(handle) = handle {
            self.set_text(handle, text).ok();
        }
    }

    /// Create a white label at an anchor, optionally hidden
    ///
    /// Returns `None` if the label could not be created.
    fn place_label(
        &mut self,
        text: &str,
        align: Align,
        offset: (i16, i16),
        hidden: bool,
    ) -> Option<Self::Handle> {
        use embedded_graphics_core::pixelcolor::RgbColor;

        let handle = self.create_label(text).ok()?;
        self.set_text_color(handle, Rgb888::WHITE).ok();
        self.align(handle, align, offset.0, offset.1).ok();
        if hidden {
            self.set_hidden(handle, true).ok();
        }
        Some(handle)
    }
}

// Blanket implementation for all RenderSurface types
impl<T: RenderSurface + ?Sized> SurfaceExt for T {}
