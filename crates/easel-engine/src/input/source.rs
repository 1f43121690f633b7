use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

use super::types::PointerEvent;

type Handler = Box<dyn FnMut(&PointerEvent)>;

/// Listener registry.
///
/// `entries` is mutably borrowed for the whole of `emit`. Subscriptions made
/// or dropped by a handler during delivery land in `added` / `removed` and
/// are applied once delivery ends.
#[derive(Default)]
struct Listeners {
    next_id: Cell<u64>,
    live: Cell<usize>,
    entries: RefCell<Vec<(u64, Handler)>>,
    added: RefCell<Vec<(u64, Handler)>>,
    removed: RefCell<Vec<u64>>,
}

impl Listeners {
    fn apply_pending(&self) {
        let gone: Vec<(u64, Handler)> = {
            let mut entries = self.entries.borrow_mut();
            entries.append(&mut self.added.borrow_mut());

            let removed = std::mem::take(&mut *self.removed.borrow_mut());
            let (gone, kept) = std::mem::take(&mut *entries)
                .into_iter()
                .partition(|(id, _)| removed.contains(id));
            *entries = kept;
            gone
        };
        // Handlers may own subscriptions of their own; drop them unborrowed.
        drop(gone);
    }

    fn take(&self, id: u64) -> Option<Handler> {
        let mut entries = self.entries.try_borrow_mut().ok()?;
        if let Some(pos) = entries.iter().position(|(e, _)| *e == id) {
            return Some(entries.remove(pos).1);
        }
        drop(entries);

        let mut added = self.added.borrow_mut();
        let pos = added.iter().position(|(e, _)| *e == id)?;
        Some(added.remove(pos).1)
    }
}

/// Single-threaded broadcaster of raw pointer events.
///
/// The platform layer calls [`EventSource::emit`] as events arrive; trackers
/// subscribe once and hold the returned [`Subscription`] for as long as they
/// want events. Handlers may subscribe or drop subscriptions while an event is
/// being delivered; they must not call `emit` themselves.
#[derive(Clone, Default)]
pub struct EventSource {
    listeners: Rc<Listeners>,
}

impl EventSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `handler`; it stays active until the returned handle is dropped.
    ///
    /// A handler registered during `emit` first sees the next event.
    pub fn subscribe(&self, handler: impl FnMut(&PointerEvent) + 'static) -> Subscription {
        let listeners = &self.listeners;
        let id = listeners.next_id.get();
        listeners.next_id.set(id + 1);
        listeners.live.set(listeners.live.get() + 1);

        let entry: (u64, Handler) = (id, Box::new(handler));
        match listeners.entries.try_borrow_mut() {
            Ok(mut entries) => entries.push(entry),
            Err(_) => listeners.added.borrow_mut().push(entry),
        }

        log::debug!("pointer listener {id} subscribed");

        Subscription {
            id,
            listeners: Rc::downgrade(&self.listeners),
        }
    }

    /// Delivers `event` to every listener in subscription order.
    ///
    /// A listener unsubscribed earlier in the same delivery is skipped.
    pub fn emit(&self, event: &PointerEvent) {
        {
            let mut entries = self.listeners.entries.borrow_mut();
            for (id, handler) in entries.iter_mut() {
                if self.listeners.removed.borrow().contains(id) {
                    continue;
                }
                handler(event);
            }
        }

        self.listeners.apply_pending();
    }

    /// Number of live subscriptions, including ones queued during delivery.
    pub fn listener_count(&self) -> usize {
        self.listeners.live.get()
    }
}

impl fmt::Debug for EventSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventSource")
            .field("listeners", &self.listener_count())
            .finish()
    }
}

/// Scoped registration on an [`EventSource`]; unsubscribes on drop.
#[derive(Debug)]
#[must_use = "dropping a Subscription unsubscribes its handler immediately"]
pub struct Subscription {
    id: u64,
    listeners: Weak<Listeners>,
}

impl Subscription {
    /// Unsubscribes now. Equivalent to dropping the handle.
    pub fn cancel(self) {}
}

impl Drop for Subscription {
    fn drop(&mut self) {
        // Source already gone: nothing left to detach from.
        let Some(listeners) = self.listeners.upgrade() else {
            return;
        };

        listeners.live.set(listeners.live.get().saturating_sub(1));

        if listeners.entries.try_borrow_mut().is_err() {
            // Delivery in progress; removed once `emit` releases the list.
            listeners.removed.borrow_mut().push(self.id);
        } else {
            drop(listeners.take(self.id));
        }

        log::debug!("pointer listener {} unsubscribed", self.id);
    }
}
