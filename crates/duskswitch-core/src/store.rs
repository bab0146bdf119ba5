//! Theme store
//!
//! Owns the current [`Theme`] and broadcasts every change to registered
//! observers. The store is single-threaded: observers are plain `FnMut`
//! closures and liveness flags are `Rc<Cell<bool>>`.

use crate::theme::Theme;
use std::cell::Cell;
use std::fmt;
use std::rc::Rc;
use tracing::{debug, info};

type Observer = Box<dyn FnMut(Theme)>;

struct Registration {
    id: u64,
    live: Rc<Cell<bool>>,
    observer: Observer,
}

/// Handle returned by [`ThemeStore::subscribe`].
///
/// The observer stays registered for as long as this handle is alive.
#[must_use = "dropping a Subscription deregisters its observer"]
#[derive(Debug)]
pub struct Subscription {
    id: u64,
    live: Rc<Cell<bool>>,
}

impl Subscription {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn is_active(&self) -> bool {
        self.live.get()
    }

    /// Deregister the observer. Same as dropping the handle.
    pub fn unsubscribe(self) {}
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if self.live.replace(false) {
            debug!(subscription = self.id, "observer deregistered");
        }
    }
}

/// Holds the theme and its observers
pub struct ThemeStore {
    theme: Theme,
    observers: Vec<Registration>,
    next_id: u64,
}

impl Default for ThemeStore {
    fn default() -> Self {
        Self::with_theme(Theme::default())
    }
}

impl fmt::Debug for ThemeStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeStore")
            .field("theme", &self.theme)
            .field("observers", &self.observer_count())
            .finish()
    }
}

impl ThemeStore {
    /// Create a store starting in light mode
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_theme(theme: Theme) -> Self {
        Self {
            theme,
            observers: Vec::new(),
            next_id: 0,
        }
    }

    /// Get the current theme
    pub fn current(&self) -> Theme {
        self.theme
    }

    /// Flip the theme, then call every live observer with the new value in
    /// registration order.
    pub fn toggle(&mut self) {
        self.theme.toggle();
        let theme = self.theme;
        info!(%theme, "theme toggled");

        self.observers.retain(|registration| registration.live.get());
        for registration in &mut self.observers {
            // An earlier observer in this pass may have dropped a handle.
            if registration.live.get() {
                debug!(subscription = registration.id, %theme, "notifying observer");
                (registration.observer)(theme);
            }
        }
    }

    /// Register `observer` to be called after each toggle
    pub fn subscribe<F>(&mut self, observer: F) -> Subscription
    where
        F: FnMut(Theme) + 'static,
    {
        let id = self.next_id;
        self.next_id += 1;

        let live = Rc::new(Cell::new(true));
        self.observers.push(Registration {
            id,
            live: Rc::clone(&live),
            observer: Box::new(observer),
        });
        debug!(subscription = id, "observer registered");

        Subscription { id, live }
    }

    /// Number of observers that would be called on the next toggle
    pub fn observer_count(&self) -> usize {
        self.observers
            .iter()
            .filter(|registration| registration.live.get())
            .count()
    }
}
