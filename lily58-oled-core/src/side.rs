//! Which half of the split this firmware image drives

/// Physical half of the keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Side {
    /// Central half: layer name and modifiers
    Left,
    /// Peripheral half: typing speed
    Right,
}

impl Side {
    /// Check if this is the left (central) half
    pub const fn is_left(self) -> bool {
        matches!(self, Side::Left)
    }

    /// Check if this is the right (peripheral) half
    pub const fn is_right(self) -> bool {
        matches!(self, Side::Right)
    }
}

/// Resolve the side from the build-time split role
///
/// The default Lily58 split runs the central role on the left half, so a
/// build with the `split-peripheral` feature is the right half.
pub const fn resolve_side() -> Side {
    if cfg!(feature = "split-peripheral") {
        Side::Right
    } else {
        Side::Left
    }
}
