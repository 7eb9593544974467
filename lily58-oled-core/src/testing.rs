//! In-memory surface for unit tests

use embedded_graphics_core::pixelcolor::{Rgb888, RgbColor};

use crate::config::ImageAsset;
use crate::traits::{Align, Animation, RenderSurface, SurfaceError};

#[derive(Debug, Clone)]
enum Kind {
    Image,
    Label(std::string::String),
    Bar {
        min: u16,
        max: u16,
        value: u16,
        color: Rgb888,
        animated: bool,
    },
}

#[derive(Debug, Clone)]
struct Element {
    kind: Kind,
    hidden: bool,
}

/// Records element state; refuses to create more than `capacity` elements
#[derive(Debug, Clone)]
pub struct MockSurface {
    elements: Vec<Element>,
    capacity: usize,
    background: Rgb888,
}

impl MockSurface {
    pub fn new() -> Self {
        Self::with_capacity(usize::MAX)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            elements: Vec::new(),
            capacity,
            background: Rgb888::WHITE,
        }
    }

    fn push(&mut self, kind: Kind) -> Result<usize, SurfaceError> {
        if self.elements.len() >= self.capacity {
            return Err(SurfaceError::Full);
        }
        self.elements.push(Element {
            kind,
            hidden: false,
        });
        Ok(self.elements.len() - 1)
    }

    fn get(&mut self, handle: usize) -> Result<&mut Element, SurfaceError> {
        self.elements
            .get_mut(handle)
            .ok_or(SurfaceError::InvalidHandle)
    }

    pub fn background(&self) -> Rgb888 {
        self.background
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn visible_count(&self) -> usize {
        self.elements.iter().filter(|e| !e.hidden).count()
    }

    pub fn hidden(&self, handle: usize) -> bool {
        self.elements[handle].hidden
    }

    pub fn text(&self, handle: usize) -> &str {
        match &self.elements[handle].kind {
            Kind::Label(text) => text,
            other => panic!("element {} is not a label: {:?}", handle, other),
        }
    }

    fn bar(&self, handle: usize) -> (u16, u16, u16, Rgb888, bool) {
        match self.elements[handle].kind {
            Kind::Bar {
                min,
                max,
                value,
                color,
                animated,
            } => (min, max, value, color, animated),
            ref other => panic!("element {} is not a bar: {:?}", handle, other),
        }
    }

    pub fn bar_range(&self, handle: usize) -> (u16, u16) {
        let (min, max, ..) = self.bar(handle);
        (min, max)
    }

    pub fn bar_value(&self, handle: usize) -> u16 {
        self.bar(handle).2
    }

    pub fn bar_color(&self, handle: usize) -> Rgb888 {
        self.bar(handle).3
    }

    pub fn bar_animated(&self, handle: usize) -> bool {
        self.bar(handle).4
    }
}

impl RenderSurface for MockSurface {
    type Handle = usize;

    fn set_background(&mut self, color: Rgb888) -> Result<(), SurfaceError> {
        self.background = color;
        Ok(())
    }

    fn create_image(&mut self, _image: &'static ImageAsset) -> Result<usize, SurfaceError> {
        self.push(Kind::Image)
    }

    fn create_label(&mut self, text: &str) -> Result<usize, SurfaceError> {
        self.push(Kind::Label(text.into()))
    }

    fn create_bar(&mut self, min: u16, max: u16) -> Result<usize, SurfaceError> {
        self.push(Kind::Bar {
            min,
            max,
            value: min,
            color: Rgb888::WHITE,
            animated: false,
        })
    }

    fn set_size(&mut self, handle: usize, _width: u16, _height: u16) -> Result<(), SurfaceError> {
        self.get(handle).map(|_| ())
    }

    fn align(
        &mut self,
        handle: usize,
        _align: Align,
        _x_offset: i16,
        _y_offset: i16,
    ) -> Result<(), SurfaceError> {
        self.get(handle).map(|_| ())
    }

    fn set_hidden(&mut self, handle: usize, hidden: bool) -> Result<(), SurfaceError> {
        self.get(handle)?.hidden = hidden;
        Ok(())
    }

    fn is_hidden(&self, handle: usize) -> Result<bool, SurfaceError> {
        self.elements
            .get(handle)
            .map(|e| e.hidden)
            .ok_or(SurfaceError::InvalidHandle)
    }

    fn set_text(&mut self, handle: usize, text: &str) -> Result<(), SurfaceError> {
        match &mut self.get(handle)?.kind {
            Kind::Label(current) => {
                *current = text.into();
                Ok(())
            }
            _ => Err(SurfaceError::WrongKind),
        }
    }

    fn set_text_color(&mut self, handle: usize, _color: Rgb888) -> Result<(), SurfaceError> {
        self.get(handle).map(|_| ())
    }

    fn set_bar_value(
        &mut self,
        handle: usize,
        new_value: u16,
        animation: Animation,
    ) -> Result<(), SurfaceError> {
        match &mut self.get(handle)?.kind {
            Kind::Bar {
                value, animated, ..
            } => {
                *value = new_value;
                *animated = animation == Animation::On;
                Ok(())
            }
            _ => Err(SurfaceError::WrongKind),
        }
    }

    fn set_bar_color(&mut self, handle: usize, new_color: Rgb888) -> Result<(), SurfaceError> {
        match &mut self.get(handle)?.kind {
            Kind::Bar { color, .. } => {
                *color = new_color;
                Ok(())
            }
            _ => Err(SurfaceError::WrongKind),
        }
    }
}
