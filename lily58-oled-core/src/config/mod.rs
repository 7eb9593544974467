//! Configuration types
//!
//! Everything here is fixed when the firmware is built. Layer names and the
//! WPM bands come from `status.toml` through the build script; the logo is
//! a bundled bitmap.

pub mod logo;
pub mod types;

/// Constants generated from `status.toml`
pub mod compiled {
    use embedded_graphics_core::pixelcolor::Rgb888;

    include!(concat!(env!("OUT_DIR"), "/status_config.rs"));
}

pub use logo::*;
pub use types::*;
