//! Station-selected events between the map collaborator and the UI.
//!
//! Map popups live outside the component tree, so marker clicks need a
//! path back into application state. Instead of a callback parked on a
//! shared global, the map layer emits through an explicit channel and
//! the UI subscribes. Everything runs on the single UI thread, so the
//! channel is an `Rc<RefCell<..>>` subscriber list, not a sync primitive.

use std::cell::RefCell;
use std::rc::Rc;

/// Delay before the page scrolls to the data section after a marker
/// click, in milliseconds. The scroll itself belongs to the rendering
/// layer; the constant lives here so both sides agree on it.
pub const SCROLL_DELAY_MS: u64 = 400;

type Subscriber = Box<dyn FnMut(&str)>;

/// Single-threaded station-selected channel.
///
/// Cheaply cloneable; clones share the same subscriber list.
#[derive(Clone, Default)]
pub struct StationEvents {
    subscribers: Rc<RefCell<Vec<Subscriber>>>,
}

impl StationEvents {
    pub fn new() -> StationEvents {
        StationEvents {
            subscribers: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Register a handler for station picks.
    pub fn subscribe<F>(&self, handler: F)
    where
        F: FnMut(&str) + 'static,
    {
        self.subscribers.borrow_mut().push(Box::new(handler));
    }

    /// Deliver a station pick to every subscriber, in subscription order.
    pub fn emit(&self, station_display_name: &str) {
        log::info!(
            "[sEaDNA Debug] events: station selected {:?}",
            station_display_name
        );
        for handler in self.subscribers.borrow_mut().iter_mut() {
            handler(station_display_name);
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.borrow().len()
    }
}
