//! Framebuffer and painter
//!
//! `Framebuffer` uses the SSD1306/SH1106 page layout: 8 vertical pixels per
//! byte, one page per 8 rows, so a host driver can stream `pages()` as-is.

use core::convert::Infallible;

use embedded_graphics::image::{Image, ImageRaw};
use embedded_graphics::mono_font::ascii::FONT_6X10;
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::{BinaryColor, Rgb888};
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::{Baseline, Text};
use lily58_oled_core::config::{PANEL_HEIGHT, PANEL_WIDTH};
use lily58_oled_core::Align;

use crate::retained::{BarState, Element, ElementKind, RetainedSurface};

/// Number of 8-row pages
pub const PAGES: usize = PANEL_HEIGHT / 8;

/// Default bar size when none was set
const DEFAULT_BAR_SIZE: (u16, u16) = (PANEL_WIDTH as u16 - 4, 10);

/// Gap between the bar outline and its fill
const BAR_INSET: u32 = 2;

/// Monochrome panel framebuffer
#[derive(Clone, PartialEq, Eq)]
pub struct Framebuffer {
    pages: [[u8; PANEL_WIDTH]; PAGES],
}

impl Default for Framebuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl Framebuffer {
    /// Create a blank framebuffer
    pub const fn new() -> Self {
        Self {
            pages: [[0; PANEL_WIDTH]; PAGES],
        }
    }

    /// Raw page data, page 0 first
    pub fn pages(&self) -> &[[u8; PANEL_WIDTH]; PAGES] {
        &self.pages
    }

    /// Check whether a pixel is lit; out-of-bounds pixels are dark
    pub fn pixel(&self, x: usize, y: usize) -> bool {
        if x >= PANEL_WIDTH || y >= PANEL_HEIGHT {
            return false;
        }
        self.pages[y / 8][x] & (1 << (y % 8)) != 0
    }

    /// Number of lit pixels inside `area`
    pub fn lit_in(&self, area: Rectangle) -> usize {
        area.points()
            .filter(|p| p.x >= 0 && p.y >= 0 && self.pixel(p.x as usize, p.y as usize))
            .count()
    }

    /// Number of lit pixels on the whole panel
    pub fn lit(&self) -> usize {
        self.pages
            .iter()
            .flatten()
            .map(|byte| byte.count_ones() as usize)
            .sum()
    }
}

impl core::fmt::Debug for Framebuffer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Framebuffer")
            .field("lit", &self.lit())
            .finish()
    }
}

impl OriginDimensions for Framebuffer {
    fn size(&self) -> Size {
        Size::new(PANEL_WIDTH as u32, PANEL_HEIGHT as u32)
    }
}

impl DrawTarget for Framebuffer {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            let (Ok(x), Ok(y)) = (usize::try_from(point.x), usize::try_from(point.y)) else {
                continue;
            };
            if x >= PANEL_WIDTH || y >= PANEL_HEIGHT {
                continue;
            }

            let bit = 1 << (y % 8);
            match color {
                BinaryColor::On => self.pages[y / 8][x] |= bit,
                BinaryColor::Off => self.pages[y / 8][x] &= !bit,
            }
        }
        Ok(())
    }
}

/// Map a surface color onto a monochrome panel: anything but black is lit
fn to_binary(color: Rgb888) -> BinaryColor {
    if color == Rgb888::BLACK {
        BinaryColor::Off
    } else {
        BinaryColor::On
    }
}

/// Pixel size an element occupies
fn element_size(element: &Element) -> Size {
    if let Some((w, h)) = element.size {
        return Size::new(u32::from(w), u32::from(h));
    }
    match &element.kind {
        ElementKind::Image(asset) => Size::new(u32::from(asset.width), u32::from(asset.height)),
        ElementKind::Label(text) => {
            let glyph = FONT_6X10.character_size;
            Size::new(glyph.width * text.chars().count() as u32, glyph.height)
        }
        ElementKind::Bar(_) => Size::new(
            u32::from(DEFAULT_BAR_SIZE.0),
            u32::from(DEFAULT_BAR_SIZE.1),
        ),
    }
}

/// Top-left corner of an element of `size` anchored inside `area`
fn place(area: &Rectangle, align: Align, offset: (i16, i16), size: Size) -> Point {
    let free_w = area.size.width as i32 - size.width as i32;
    let free_h = area.size.height as i32 - size.height as i32;

    let x = match align {
        Align::TopLeft | Align::BottomLeft => 0,
        Align::TopMid | Align::Center | Align::BottomMid => free_w / 2,
        Align::TopRight | Align::BottomRight => free_w,
    };
    let y = match align {
        Align::TopLeft | Align::TopMid | Align::TopRight => 0,
        Align::Center => free_h / 2,
        Align::BottomLeft | Align::BottomMid | Align::BottomRight => free_h,
    };

    area.top_left + Point::new(x + i32::from(offset.0), y + i32::from(offset.1))
}

fn draw_bar<D>(bar: &BarState, frame: Rectangle, target: &mut D) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    frame
        .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1))
        .draw(target)?;

    let inner_w = frame.size.width.saturating_sub(2 * BAR_INSET);
    let inner_h = frame.size.height.saturating_sub(2 * BAR_INSET);
    let filled = bar.filled(inner_w);
    if filled == 0 || inner_h == 0 {
        return Ok(());
    }

    let inset = BAR_INSET as i32;
    Rectangle::new(frame.top_left + Point::new(inset, inset), Size::new(filled, inner_h))
        .into_styled(PrimitiveStyle::with_fill(to_binary(bar.color)))
        .draw(target)
}

/// Paint every visible element of `surface` onto `target`
///
/// Clears to the background first, then draws elements in creation order.
pub fn paint<D>(surface: &RetainedSurface, target: &mut D) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    target.clear(to_binary(surface.background()))?;
    let area = target.bounding_box();

    for (_, element) in surface.elements().filter(|(_, e)| !e.hidden) {
        let size = element_size(element);
        let origin = place(&area, element.align, element.offset, size);

        match &element.kind {
            ElementKind::Image(asset) => {
                let raw = ImageRaw::<BinaryColor>::new(asset.data, u32::from(asset.width));
                Image::new(&raw, origin).draw(target)?;
            }
            ElementKind::Label(text) => {
                let style = MonoTextStyle::new(&FONT_6X10, to_binary(element.text_color));
                Text::with_baseline(text, origin, style, Baseline::Top).draw(target)?;
            }
            ElementKind::Bar(bar) => {
                draw_bar(bar, Rectangle::new(origin, size), target)?;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use lily58_oled_core::{
        build_screen, ModFlags, RenderSurface, Side, StatusConfig, StatusListener, StatusWidget,
    };

    fn painted(surface: &RetainedSurface) -> Framebuffer {
        let mut fb = Framebuffer::new();
        paint(surface, &mut fb).unwrap();
        fb
    }

    fn rows(top: i32, height: u32) -> Rectangle {
        Rectangle::new(Point::new(0, top), Size::new(PANEL_WIDTH as u32, height))
    }

    #[test]
    fn test_framebuffer_page_layout() {
        let mut fb = Framebuffer::new();
        Pixel(Point::new(3, 9), BinaryColor::On).draw(&mut fb).unwrap();

        assert!(fb.pixel(3, 9));
        assert_eq!(fb.pages()[1][3], 0b0000_0010);
        assert_eq!(fb.lit(), 1);

        // Out of bounds is ignored
        Pixel(Point::new(-1, 40), BinaryColor::On).draw(&mut fb).unwrap();
        assert_eq!(fb.lit(), 1);
    }

    #[test]
    fn test_place_anchors() {
        let area = Rectangle::new(Point::zero(), Size::new(128, 32));
        let size = Size::new(18, 10);

        assert_eq!(place(&area, Align::TopLeft, (2, 2), size), Point::new(2, 2));
        assert_eq!(place(&area, Align::TopRight, (-2, 0), size), Point::new(108, 0));
        assert_eq!(place(&area, Align::Center, (0, 0), size), Point::new(55, 11));
        assert_eq!(place(&area, Align::BottomMid, (0, -2), size), Point::new(55, 20));
    }

    #[test]
    fn test_idle_left_shows_logo_only() {
        let mut surface = RetainedSurface::new();
        let screen = build_screen(&mut surface, Side::Left, &StatusConfig::default());
        assert_eq!(screen.side(), Side::Left);
        let fb = painted(&surface);

        // First wordmark row starts with 0x3C: pixels 2..=5 lit
        assert!(!fb.pixel(1, 1));
        assert!(fb.pixel(2, 1));
        assert!(fb.pixel(5, 1));
        assert!(!fb.pixel(6, 1));

        // Logo occupies rows 1 and 2 only
        assert_eq!(fb.lit_in(rows(3, 29)), 0);
    }

    #[test]
    fn test_left_after_layer_change() {
        let mut surface = RetainedSurface::new();
        {
            let mut widget = StatusWidget::new(&mut surface, Side::Left, StatusConfig::default());
            widget.on_layer_changed(1);
            widget.on_modifiers_changed(ModFlags::LEFT_SHIFT);
        }
        let fb = painted(&surface);

        // Layer label at y=2, modifier label at y=16
        assert!(fb.lit_in(rows(2, 10)) > 0);
        assert!(fb.lit_in(rows(16, 10)) > 0);
        // Logo gone: row 1 at x=2 was a logo pixel, labels start lower
        assert!(!fb.pixel(2, 1));
    }

    #[test]
    fn test_right_bar_fill() {
        let mut surface = RetainedSurface::new();
        let fb_zero;
        let fb_half;
        let fb_full;
        {
            let mut widget = StatusWidget::new(&mut surface, Side::Right, StatusConfig::default());
            fb_zero = painted(widget.surface());
            widget.on_wpm_changed(100);
            fb_half = painted(widget.surface());
            widget.on_wpm_changed(250);
            fb_full = painted(widget.surface());
        }

        // Bar is 124x10 at (2, 20); fill is inset by 2 and 120 wide
        let fill = |fb: &Framebuffer, x: usize| fb.pixel(x, 25);
        assert!(!fill(&fb_zero, 10));
        assert!(fill(&fb_half, 10));
        assert!(fill(&fb_half, 63));
        assert!(!fill(&fb_half, 64));
        assert!(fill(&fb_full, 123));
        // Outline always drawn
        assert!(fb_zero.pixel(2, 25));
        assert!(fb_zero.pixel(125, 25));
    }

    #[test]
    fn test_hidden_elements_not_painted() {
        let mut surface = RetainedSurface::new();
        let id = surface.create_label("HIDDEN").unwrap();
        surface.set_hidden(id, true).unwrap();

        assert_eq!(painted(&surface).lit(), 0);
    }

    #[test]
    fn test_background_fill() {
        let mut surface = RetainedSurface::new();
        surface.set_background(Rgb888::WHITE).unwrap();

        assert_eq!(painted(&surface).lit(), PANEL_WIDTH * PANEL_HEIGHT);
    }
}
