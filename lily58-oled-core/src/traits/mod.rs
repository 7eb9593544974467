//! Host abstraction traits
//!
//! These traits define the interface between the status widget and the
//! keyboard firmware hosting it.

pub mod host;
pub mod surface;

pub use host::KeyboardHost;
pub use surface::{Align, Animation, RenderSurface, SurfaceError, SurfaceExt};
