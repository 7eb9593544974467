//! Host-agnostic status screen logic for the Lily58 OLED panels
//!
//! This crate contains everything the status widget does that does not
//! depend on a particular keyboard firmware or graphics library:
//!
//! - Side selection (left/central vs right/peripheral half)
//! - Build-time configuration (layer names, WPM bands and colors, logo)
//! - Screen builders for both halves
//! - Reducers that turn layer, modifier and WPM notifications into
//!   label text, visibility and bar updates
//! - The traits the host implements (`RenderSurface`, `KeyboardHost`)
//!
//! # Architecture
//!
//! The host owns event dispatch and rendering. At display init it calls
//! [`build_status_screen`], which builds the layout for this half into the
//! host's retained-mode surface. Afterwards the host forwards each
//! notification to the returned [`StatusWidget`] through the
//! [`StatusListener`] trait. Every handler returns [`Propagation::Bubble`]
//! so other subscribers still see the event.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

#[macro_use]
mod fmt;

pub mod config;
pub mod events;
pub mod hid;
pub mod layer;
pub mod screen;
pub mod shared;
pub mod side;
pub mod traits;
pub mod widget;
pub mod wpm;

#[cfg(test)]
mod testing;

// Re-export key types
pub use config::{ImageAsset, StatusConfig, LILY58_LOGO};
pub use events::{Propagation, StatusEvent};
pub use hid::{ModFlags, Modifier};
pub use screen::{build_screen, LeftScreen, LeftView, RightScreen, StatusScreen};
pub use shared::SharedStatus;
pub use side::{resolve_side, Side};
pub use traits::{Align, Animation, KeyboardHost, RenderSurface, SurfaceError, SurfaceExt};
pub use widget::{build_status_screen, StatusListener, StatusWidget};
pub use wpm::SpeedBand;
