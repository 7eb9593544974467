//! Keyboard state queried from the host firmware

use crate::hid::ModFlags;
use crate::side::{resolve_side, Side};

/// Read access to host keyboard state
///
/// Notifications may arrive without a payload the widget can use directly;
/// in that case the widget reads the current value through this trait.
pub trait KeyboardHost {
    /// Split role of this half
    ///
    /// Defaults to the build-time role flag.
    fn role(&self) -> Side {
        resolve_side()
    }

    /// Currently held explicit modifiers
    fn explicit_modifiers(&self) -> ModFlags;

    /// Index of the highest active keymap layer
    fn highest_active_layer(&self) -> u8;
}
