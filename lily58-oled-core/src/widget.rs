//! Status widget: the object the host registers for notifications

use crate::config::StatusConfig;
use crate::events::{Propagation, StatusEvent};
use crate::hid::ModFlags;
use crate::screen::{build_screen, StatusScreen};
use crate::side::{resolve_side, Side};
use crate::traits::{KeyboardHost, RenderSurface};

/// Notification handlers the host calls
///
/// Each handler returns [`Propagation::Bubble`] so other subscribers still
/// receive the event. Handlers for the other half's events do nothing.
pub trait StatusListener {
    /// Highest active layer changed
    fn on_layer_changed(&mut self, layer: u8) -> Propagation;

    /// Explicit modifiers changed
    fn on_modifiers_changed(&mut self, mods: ModFlags) -> Propagation;

    /// Typing speed changed
    fn on_wpm_changed(&mut self, wpm: u16) -> Propagation;

    /// Route an event to its handler
    fn handle(&mut self, event: StatusEvent) -> Propagation {
        match event {
            StatusEvent::LayerChanged(layer) => self.on_layer_changed(layer),
            StatusEvent::ModifiersChanged(mods) => self.on_modifiers_changed(mods),
            StatusEvent::WpmChanged(wpm) => self.on_wpm_changed(wpm),
        }
    }
}

/// Status screen bound to a host surface
///
/// Owns the screen state for one half. `S` is typically `&mut HostSurface`
/// so the host keeps ownership of its element tree.
pub struct StatusWidget<S: RenderSurface> {
    side: Side,
    config: StatusConfig,
    surface: S,
    screen: StatusScreen<S::Handle>,
}

impl<S: RenderSurface> StatusWidget<S> {
    /// Build the layout for `side` and bind to `surface`
    pub fn new(mut surface: S, side: Side, config: StatusConfig) -> Self {
        let screen = build_screen(&mut surface, side, &config);
        Self {
            side,
            config,
            surface,
            screen,
        }
    }

    /// Build for the role the host reports
    pub fn for_host<H: KeyboardHost + ?Sized>(host: &H, surface: S, config: StatusConfig) -> Self {
        Self::new(surface, host.role(), config)
    }

    /// Side this widget was built for
    pub fn side(&self) -> Side {
        self.side
    }

    /// Configuration in use
    pub fn config(&self) -> &StatusConfig {
        &self.config
    }

    /// Screen state
    pub fn screen(&self) -> &StatusScreen<S::Handle> {
        &self.screen
    }

    /// Bound surface
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Bound surface, mutably
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Release the surface
    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Re-read the active layer from the host and show it
    pub fn sync_layer<H: KeyboardHost + ?Sized>(&mut self, host: &H) -> Propagation {
        self.on_layer_changed(host.highest_active_layer())
    }

    /// Re-read the held modifiers from the host and show them
    pub fn sync_modifiers<H: KeyboardHost + ?Sized>(&mut self, host: &H) -> Propagation {
        self.on_modifiers_changed(host.explicit_modifiers())
    }
}

impl<S: RenderSurface> StatusListener for StatusWidget<S> {
    fn on_layer_changed(&mut self, layer: u8) -> Propagation {
        if !self.side.is_left() {
            return Propagation::Bubble;
        }
        trace!("layer changed: {}", layer);

        if let StatusScreen::Left(screen) = &mut self.screen {
            screen.apply_layer(&mut self.surface, &self.config.layers, layer);
        }
        Propagation::Bubble
    }

    fn on_modifiers_changed(&mut self, mods: ModFlags) -> Propagation {
        if !self.side.is_left() {
            return Propagation::Bubble;
        }
        trace!("modifiers changed: {:?}", mods);

        if let StatusScreen::Left(screen) = &mut self.screen {
            screen.apply_modifiers(&mut self.surface, mods);
        }
        Propagation::Bubble
    }

    fn on_wpm_changed(&mut self, wpm: u16) -> Propagation {
        if !self.side.is_right() {
            return Propagation::Bubble;
        }
        trace!("wpm changed: {}", wpm);

        if let StatusScreen::Right(screen) = &mut self.screen {
            screen.apply_wpm(&mut self.surface, &self.config.wpm, wpm);
        }
        Propagation::Bubble
    }
}

/// Display entry point: build this half's status screen
///
/// Resolves the side from the build-time split role. Building cannot fail;
/// elements the surface rejects are simply absent.
pub fn build_status_screen<S: RenderSurface>(surface: S, config: StatusConfig) -> StatusWidget<S> {
    StatusWidget::new(surface, resolve_side(), config)
}
