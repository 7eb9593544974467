//! Notifications the host delivers to the status widget

use crate::hid::ModFlags;
use crate::side::Side;

/// A keyboard state change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StatusEvent {
    /// Highest active layer changed
    LayerChanged(u8),
    /// Explicit modifiers changed
    ModifiersChanged(ModFlags),
    /// Typing speed reading changed
    WpmChanged(u16),
}

impl StatusEvent {
    /// Side whose screen reacts to this event
    pub fn side(&self) -> Side {
        match self {
            StatusEvent::LayerChanged(_) | StatusEvent::ModifiersChanged(_) => Side::Left,
            StatusEvent::WpmChanged(_) => Side::Right,
        }
    }
}

/// What the host dispatcher should do with an event after a handler ran
///
/// The status widget never consumes an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Propagation {
    /// Continue delivering to other subscribers
    Bubble,
}
