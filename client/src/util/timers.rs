//! Cancellable timer handles tied to a page's lifetime.
//!
//! SYSTEM CONTEXT
//! ==============
//! The flow page registers every browser timer it starts here and disposes
//! the registry from `on_cleanup`. After disposal all held handles are
//! cancelled, late registrations are cancelled on arrival, and callbacks can
//! check `is_disposed` before touching reactive state.

#[cfg(test)]
#[path = "timers_test.rs"]
mod timers_test;

use std::sync::{Arc, Mutex};

/// A timer that can be cancelled exactly once.
pub trait TimerHandle: Send + 'static {
    fn cancel(self);
}

struct Slots<H> {
    repeating: Option<H>,
    one_shot: Vec<H>,
    disposed: bool,
}

/// Shared holder of timer handles. Clones refer to the same registry.
pub struct TimerRegistry<H> {
    inner: Arc<Mutex<Slots<H>>>,
}

impl<H> Clone for TimerRegistry<H> {
    fn clone(&self) -> Self {
        Self { inner: Arc::clone(&self.inner) }
    }
}

impl<H: TimerHandle> Default for TimerRegistry<H> {
    fn default() -> Self {
        Self { inner: Arc::new(Mutex::new(Slots { repeating: None, one_shot: Vec::new(), disposed: false })) }
    }
}

impl<H: TimerHandle> TimerRegistry<H> {
    /// Hold the repeating timer, cancelling any previous one.
    pub fn hold_repeating(&self, handle: H) {
        let Ok(mut slots) = self.inner.lock() else {
            handle.cancel();
            return;
        };
        if slots.disposed {
            drop(slots);
            handle.cancel();
            return;
        }
        let previous = slots.repeating.replace(handle);
        drop(slots);
        if let Some(previous) = previous {
            previous.cancel();
        }
    }

    /// Cancel the repeating timer, if any.
    pub fn cancel_repeating(&self) {
        let previous = self.inner.lock().ok().and_then(|mut slots| slots.repeating.take());
        if let Some(previous) = previous {
            previous.cancel();
        }
    }

    /// Hold a one-shot timer until disposal.
    pub fn hold_one_shot(&self, handle: H) {
        let Ok(mut slots) = self.inner.lock() else {
            handle.cancel();
            return;
        };
        if slots.disposed {
            drop(slots);
            handle.cancel();
            return;
        }
        slots.one_shot.push(handle);
    }

    /// Cancel everything held and refuse later registrations.
    pub fn dispose(&self) {
        let (repeating, one_shot) = match self.inner.lock() {
            Ok(mut slots) => {
                slots.disposed = true;
                (slots.repeating.take(), std::mem::take(&mut slots.one_shot))
            }
            Err(_) => return,
        };
        if let Some(handle) = repeating {
            handle.cancel();
        }
        for handle in one_shot {
            handle.cancel();
        }
    }

    pub fn is_disposed(&self) -> bool {
        self.inner.lock().map_or(true, |slots| slots.disposed)
    }

    /// Number of handles currently held.
    #[cfg(test)]
    pub fn held(&self) -> usize {
        self.inner
            .lock()
            .map_or(0, |slots| usize::from(slots.repeating.is_some()) + slots.one_shot.len())
    }
}

/// Browser timer handle registered by the flow page.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug)]
pub enum BrowserTimer {
    Repeating(leptos::prelude::IntervalHandle),
    OneShot(leptos::prelude::TimeoutHandle),
}

/// Without a browser no timer is ever started.
#[cfg(not(feature = "hydrate"))]
#[derive(Clone, Copy, Debug)]
pub enum BrowserTimer {}

#[cfg(feature = "hydrate")]
impl TimerHandle for BrowserTimer {
    fn cancel(self) {
        match self {
            Self::Repeating(handle) => handle.clear(),
            Self::OneShot(handle) => handle.clear(),
        }
    }
}

#[cfg(not(feature = "hydrate"))]
impl TimerHandle for BrowserTimer {
    fn cancel(self) {
        match self {}
    }
}

pub type BrowserTimers = TimerRegistry<BrowserTimer>;
