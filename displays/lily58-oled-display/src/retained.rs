//! Retained element store
//!
//! Keeps the element tree the status screens build, with the same dirty
//! tracking the painter uses to decide when to redraw.

use embedded_graphics::pixelcolor::{Rgb888, RgbColor};
use heapless::{String, Vec};
use lily58_oled_core::config::{ImageAsset, LABEL_LEN};
use lily58_oled_core::{Align, Animation, RenderSurface, SurfaceError};

/// Maximum elements on one surface
pub const MAX_ELEMENTS: usize = 8;

/// Handle to an element of a [`RetainedSurface`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ElementId(u8);

impl ElementId {
    /// Position in creation order
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Bar range, value and fill
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BarState {
    pub min: u16,
    pub max: u16,
    pub value: u16,
    pub color: Rgb888,
    /// Whether the last value change asked for animation
    pub animated: bool,
}

impl BarState {
    /// Filled share of `span` pixels
    pub fn filled(&self, span: u32) -> u32 {
        let range = u32::from(self.max.saturating_sub(self.min));
        if range == 0 {
            return 0;
        }
        let value = u32::from(self.value.clamp(self.min, self.max) - self.min);
        span * value / range
    }
}

/// What an element draws
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElementKind {
    Image(&'static ImageAsset),
    Label(String<LABEL_LEN>),
    Bar(BarState),
}

/// One element of the tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub kind: ElementKind,
    pub hidden: bool,
    pub align: Align,
    pub offset: (i16, i16),
    /// Explicit size; images and labels size themselves when `None`
    pub size: Option<(u16, u16)>,
    pub text_color: Rgb888,
}

impl Element {
    fn new(kind: ElementKind) -> Self {
        Self {
            kind,
            hidden: false,
            align: Align::TopLeft,
            offset: (0, 0),
            size: None,
            text_color: Rgb888::WHITE,
        }
    }
}

/// Fixed-capacity retained-mode surface
#[derive(Debug, Clone)]
pub struct RetainedSurface {
    elements: Vec<Element, MAX_ELEMENTS>,
    background: Rgb888,
    /// Whether the surface changed since the last paint
    dirty: bool,
}

impl Default for RetainedSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl RetainedSurface {
    /// Create an empty surface
    pub const fn new() -> Self {
        Self {
            elements: Vec::new(),
            background: Rgb888::BLACK,
            dirty: true,
        }
    }

    /// Background color
    pub fn background(&self) -> Rgb888 {
        self.background
    }

    /// Look up an element
    pub fn element(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(id.index())
    }

    /// All elements with their ids, in creation (paint) order
    pub fn elements(&self) -> impl Iterator<Item = (ElementId, &Element)> {
        self.elements
            .iter()
            .enumerate()
            .map(|(i, e)| (ElementId(i as u8), e))
    }

    /// Number of elements
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Check if no element exists
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Number of elements that are not hidden
    pub fn visible_count(&self) -> usize {
        self.elements.iter().filter(|e| !e.hidden).count()
    }

    /// Text of a label
    pub fn text(&self, id: ElementId) -> Option<&str> {
        match &self.element(id)?.kind {
            ElementKind::Label(text) => Some(text.as_str()),
            _ => None,
        }
    }

    /// State of a bar
    pub fn bar(&self, id: ElementId) -> Option<&BarState> {
        match &self.element(id)?.kind {
            ElementKind::Bar(bar) => Some(bar),
            _ => None,
        }
    }

    /// Check if the surface needs repainting
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Mark surface as clean (after painting)
    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }

    /// Mark surface as dirty (needs repaint)
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    fn push(&mut self, kind: ElementKind) -> Result<ElementId, SurfaceError> {
        let id = ElementId(self.elements.len() as u8);
        self.elements
            .push(Element::new(kind))
            .map_err(|_| SurfaceError::Full)?;
        self.dirty = true;
        Ok(id)
    }

    /// Mutable element access; any access marks the surface dirty
    fn get_mut(&mut self, id: ElementId) -> Result<&mut Element, SurfaceError> {
        let element = self
            .elements
            .get_mut(id.index())
            .ok_or(SurfaceError::InvalidHandle)?;
        self.dirty = true;
        Ok(element)
    }

    fn bar_mut(&mut self, id: ElementId) -> Result<&mut BarState, SurfaceError> {
        match &mut self.get_mut(id)?.kind {
            ElementKind::Bar(bar) => Ok(bar),
            _ => Err(SurfaceError::WrongKind),
        }
    }
}

fn label_text(text: &str) -> Result<String<LABEL_LEN>, SurfaceError> {
    let mut label = String::new();
    label
        .push_str(text)
        .map_err(|_| SurfaceError::TextTooLong)?;
    Ok(label)
}

impl RenderSurface for RetainedSurface {
    type Handle = ElementId;

    fn set_background(&mut self, color: Rgb888) -> Result<(), SurfaceError> {
        self.background = color;
        self.dirty = true;
        Ok(())
    }

    fn create_image(&mut self, image: &'static ImageAsset) -> Result<ElementId, SurfaceError> {
        self.push(ElementKind::Image(image))
    }

    fn create_label(&mut self, text: &str) -> Result<ElementId, SurfaceError> {
        let text = label_text(text)?;
        self.push(ElementKind::Label(text))
    }

    fn create_bar(&mut self, min: u16, max: u16) -> Result<ElementId, SurfaceError> {
        self.push(ElementKind::Bar(BarState {
            min,
            max: max.max(min),
            value: min,
            color: Rgb888::WHITE,
            animated: false,
        }))
    }

    fn set_size(&mut self, id: ElementId, width: u16, height: u16) -> Result<(), SurfaceError> {
        self.get_mut(id)?.size = Some((width, height));
        Ok(())
    }

    fn align(
        &mut self,
        id: ElementId,
        align: Align,
        x_offset: i16,
        y_offset: i16,
    ) -> Result<(), SurfaceError> {
        let element = self.get_mut(id)?;
        element.align = align;
        element.offset = (x_offset, y_offset);
        Ok(())
    }

    fn set_hidden(&mut self, id: ElementId, hidden: bool) -> Result<(), SurfaceError> {
        self.get_mut(id)?.hidden = hidden;
        Ok(())
    }

    fn is_hidden(&self, id: ElementId) -> Result<bool, SurfaceError> {
        self.element(id)
            .map(|e| e.hidden)
            .ok_or(SurfaceError::InvalidHandle)
    }

    fn set_text(&mut self, id: ElementId, text: &str) -> Result<(), SurfaceError> {
        let text = label_text(text)?;
        match &mut self.get_mut(id)?.kind {
            ElementKind::Label(current) => {
                *current = text;
                Ok(())
            }
            _ => Err(SurfaceError::WrongKind),
        }
    }

    fn set_text_color(&mut self, id: ElementId, color: Rgb888) -> Result<(), SurfaceError> {
        let element = self.get_mut(id)?;
        match element.kind {
            ElementKind::Label(_) => {
                element.text_color = color;
                Ok(())
            }
            _ => Err(SurfaceError::WrongKind),
        }
    }

    fn set_bar_value(
        &mut self,
        id: ElementId,
        value: u16,
        animation: Animation,
    ) -> Result<(), SurfaceError> {
        let bar = self.bar_mut(id)?;
        bar.value = value.clamp(bar.min, bar.max);
        bar.animated = animation == Animation::On;
        Ok(())
    }

    fn set_bar_color(&mut self, id: ElementId, color: Rgb888) -> Result<(), SurfaceError> {
        self.bar_mut(id)?.color = color;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lily58_oled_core::{build_screen, Side, StatusConfig, LILY58_LOGO};

    fn layout(element: &Element) -> (Align, (i16, i16), Option<(u16, u16)>) {
        (element.align, element.offset, element.size)
    }

    #[test]
    fn test_new_surface() {
        let surface = RetainedSurface::new();
        assert!(surface.is_empty());
        assert!(surface.is_dirty());
        assert_eq!(surface.background(), Rgb888::BLACK);
    }

    #[test]
    fn test_label_lifecycle() {
        let mut surface = RetainedSurface::new();
        let id = surface.create_label("hello").unwrap();

        assert_eq!(surface.text(id), Some("hello"));
        assert_eq!(surface.is_hidden(id), Ok(false));

        surface.set_text(id, "world").unwrap();
        surface.set_hidden(id, true).unwrap();
        assert_eq!(surface.text(id), Some("world"));
        assert_eq!(surface.is_hidden(id), Ok(true));
        assert_eq!(surface.visible_count(), 0);
    }

    #[test]
    fn test_label_too_long() {
        let mut surface = RetainedSurface::new();
        let long = "0123456789012345678901234567890123456789";
        assert_eq!(surface.create_label(long), Err(SurfaceError::TextTooLong));

        let id = surface.create_label("ok").unwrap();
        assert_eq!(surface.set_text(id, long), Err(SurfaceError::TextTooLong));
        assert_eq!(surface.text(id), Some("ok"));
    }

    #[test]
    fn test_capacity() {
        let mut surface = RetainedSurface::new();
        for _ in 0..MAX_ELEMENTS {
            surface.create_image(&LILY58_LOGO).unwrap();
        }
        assert_eq!(surface.create_label("x"), Err(SurfaceError::Full));
        assert_eq!(surface.len(), MAX_ELEMENTS);
    }

    #[test]
    fn test_bar_value_clamped_to_range() {
        let mut surface = RetainedSurface::new();
        let id = surface.create_bar(0, 200).unwrap();

        surface.set_bar_value(id, 250, Animation::On).unwrap();
        let bar = surface.bar(id).unwrap();
        assert_eq!(bar.value, 200);
        assert!(bar.animated);
        assert_eq!(bar.filled(120), 120);

        surface.set_bar_value(id, 50, Animation::Off).unwrap();
        let bar = surface.bar(id).unwrap();
        assert_eq!(bar.value, 50);
        assert!(!bar.animated);
        assert_eq!(bar.filled(120), 30);
    }

    #[test]
    fn test_wrong_kind_and_handle() {
        let mut surface = RetainedSurface::new();
        let label = surface.create_label("x").unwrap();
        let image = surface.create_image(&LILY58_LOGO).unwrap();

        assert_eq!(
            surface.set_bar_value(label, 1, Animation::Off),
            Err(SurfaceError::WrongKind)
        );
        assert_eq!(surface.set_text(image, "y"), Err(SurfaceError::WrongKind));
        assert_eq!(
            surface.set_text_color(image, Rgb888::WHITE),
            Err(SurfaceError::WrongKind)
        );
        assert_eq!(
            surface.set_hidden(ElementId(7), true),
            Err(SurfaceError::InvalidHandle)
        );
    }

    #[test]
    fn test_dirty_tracking() {
        let mut surface = RetainedSurface::new();
        let id = surface.create_label("x").unwrap();
        surface.mark_clean();
        assert!(!surface.is_dirty());

        surface.set_text(id, "y").unwrap();
        assert!(surface.is_dirty());

        surface.mark_clean();
        let _ = surface.is_hidden(id);
        assert!(!surface.is_dirty());
    }

    #[test]
    fn test_left_layout() {
        let mut surface = RetainedSurface::new();
        build_screen(&mut surface, Side::Left, &StatusConfig::default());
        let elements: std::vec::Vec<_> = surface.elements().map(|(_, e)| e).collect();

        assert_eq!(elements.len(), 3);
        assert!(matches!(elements[0].kind, ElementKind::Image(_)));
        assert_eq!(layout(elements[0]), (Align::Center, (0, 0), None));
        assert!(!elements[0].hidden);

        for (element, y) in elements[1..].iter().zip([2, 16]) {
            assert!(matches!(element.kind, ElementKind::Label(_)));
            assert_eq!(layout(element), (Align::TopLeft, (2, y), None));
            assert_eq!(element.text_color, Rgb888::WHITE);
            assert!(element.hidden);
        }
    }

    #[test]
    fn test_right_layout() {
        let mut surface = RetainedSurface::new();
        build_screen(&mut surface, Side::Right, &StatusConfig::default());
        let ids: std::vec::Vec<_> = surface.elements().map(|(id, _)| id).collect();
        assert_eq!(ids.len(), 3);

        let header = surface.element(ids[0]).unwrap();
        assert_eq!(surface.text(ids[0]), Some("WPM"));
        assert_eq!(layout(header), (Align::TopLeft, (2, 0), None));
        assert_eq!(header.text_color, Rgb888::WHITE);

        let value = surface.element(ids[1]).unwrap();
        assert_eq!(surface.text(ids[1]), Some("  0"));
        assert_eq!(layout(value), (Align::TopRight, (-2, 0), None));
        assert_eq!(value.text_color, Rgb888::WHITE);

        let bar = surface.element(ids[2]).unwrap();
        assert_eq!(layout(bar), (Align::BottomMid, (0, -2), Some((124, 10))));
        let state = surface.bar(ids[2]).unwrap();
        assert_eq!((state.min, state.max, state.value), (0, 200, 0));
        assert_eq!(state.color, StatusConfig::default().wpm.low_color);

        assert_eq!(surface.visible_count(), 3);
    }
}
