//! Status screens for both halves
//!
//! Each half builds its layout once into the host surface and keeps the
//! handles plus a copy of what it last displayed.

pub mod left;
pub mod right;

pub use left::{LeftScreen, LeftView};
pub use right::RightScreen;

use embedded_graphics_core::pixelcolor::{Rgb888, RgbColor};

use crate::config::StatusConfig;
use crate::side::Side;
use crate::traits::RenderSurface;

/// Screen state of whichever half this firmware drives
#[derive(Debug, Clone)]
pub enum StatusScreen<H> {
    Left(LeftScreen<H>),
    Right(RightScreen<H>),
}

impl<H> StatusScreen<H> {
    /// Side this screen was built for
    pub fn side(&self) -> Side {
        match self {
            StatusScreen::Left(_) => Side::Left,
            StatusScreen::Right(_) => Side::Right,
        }
    }

    /// Left screen state, if this is the left half
    pub fn as_left(&self) -> Option<&LeftScreen<H>> {
        match self {
            StatusScreen::Left(screen) => Some(screen),
            StatusScreen::Right(_) => None,
        }
    }

    /// Right screen state, if this is the right half
    pub fn as_right(&self) -> Option<&RightScreen<H>> {
        match self {
            StatusScreen::Right(screen) => Some(screen),
            StatusScreen::Left(_) => None,
        }
    }
}

/// Build the static layout for a side
///
/// Never fails: elements the surface cannot create are left out and every
/// later update to them is skipped.
pub fn build_screen<S: RenderSurface>(
    surface: &mut S,
    side: Side,
    config: &StatusConfig,
) -> StatusScreen<S::Handle> {
    debug!("building status screen for {:?} half", side);

    surface.set_background(Rgb888::BLACK).ok();

    match side {
        Side::Left => StatusScreen::Left(LeftScreen::build(surface, config)),
        Side::Right => StatusScreen::Right(RightScreen::build(surface, config)),
    }
}
