//! Reference surface and painter for the Lily58 status screens
//!
//! This crate provides:
//! - `RetainedSurface`, a fixed-capacity element store implementing the
//!   core `RenderSurface` trait
//! - `Framebuffer`, a page-organized 128x32 monochrome buffer implementing
//!   `embedded_graphics::draw_target::DrawTarget`
//! - `paint`, which draws the visible elements of a surface onto any
//!   `BinaryColor` draw target
//!
//! # Architecture
//!
//! Hosts with their own graphics library implement `RenderSurface` for it
//! and do not need this crate. Hosts that only have a pixel buffer (or an
//! SSD1306-style page buffer) can keep the element tree in a
//! `RetainedSurface` and repaint whenever it reports itself dirty.

#![cfg_attr(not(test), no_std)]

pub mod render;
pub mod retained;

// Re-export key types
pub use render::{paint, Framebuffer, PAGES};
pub use retained::{BarState, Element, ElementId, ElementKind, RetainedSurface, MAX_ELEMENTS};
