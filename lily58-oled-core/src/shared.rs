//! Widget shared between dispatcher contexts
//!
//! The handlers are not reentrant. Hosts that deliver notifications from
//! more than one context (threads, interrupts, executors) wrap the widget
//! here so every call is serialized by one blocking mutex.

use core::cell::RefCell;

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::blocking_mutex::Mutex;

use crate::events::{Propagation, StatusEvent};
use crate::traits::RenderSurface;
use crate::widget::{StatusListener, StatusWidget};

/// Status widget behind a blocking mutex
pub struct SharedStatus<M: RawMutex, S: RenderSurface> {
    inner: Mutex<M, RefCell<StatusWidget<S>>>,
}

impl<M: RawMutex, S: RenderSurface> SharedStatus<M, S> {
    /// Wrap a built widget
    pub fn new(widget: StatusWidget<S>) -> Self {
        Self {
            inner: Mutex::new(RefCell::new(widget)),
        }
    }

    /// Run `f` with exclusive access to the widget
    pub fn with<R>(&self, f: impl FnOnce(&mut StatusWidget<S>) -> R) -> R {
        self.inner.lock(|widget| f(&mut widget.borrow_mut()))
    }

    /// Deliver an event
    pub fn handle(&self, event: StatusEvent) -> Propagation {
        self.with(|widget| widget.handle(event))
    }
}
