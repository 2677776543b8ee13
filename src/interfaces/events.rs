use crate::domain::payload::RawPayload;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

/// Wire name of the notification carrying fresh order details.
pub const ORDER_DETAILS_UPDATED: &str = "orderDetailsUpdated";
/// Wire name of the notification that ends the current order session.
pub const CALL_ENDED: &str = "callEnded";

/// Typed form of the external notifications the order view reacts to.
#[derive(Debug, Clone, PartialEq)]
pub enum OrderEvent {
    /// New order details arrived. The detail payload is passed verbatim to
    /// the normalizer; it may be absent.
    DetailsUpdated(Option<RawPayload>),
    /// The call ended; the view resets to the canonical empty order.
    CallEnded,
}

impl OrderEvent {
    /// Maps a wire notification (name plus optional detail) to a typed
    /// event. Unknown names map to `None` and are ignored.
    pub fn from_notification(name: &str, detail: Option<RawPayload>) -> Option<Self> {
        match name {
            ORDER_DETAILS_UPDATED => Some(Self::DetailsUpdated(detail)),
            CALL_ENDED => Some(Self::CallEnded),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::DetailsUpdated(_) => ORDER_DETAILS_UPDATED,
            Self::CallEnded => CALL_ENDED,
        }
    }
}

/// Receives events published on an [`EventBus`].
pub trait OrderEventHandler {
    fn handle(&self, event: &OrderEvent);
}

type HandlerRef = Weak<dyn OrderEventHandler>;

/// Single-threaded, synchronous notification channel.
///
/// Handlers are held weakly; a dropped handler simply stops receiving.
/// Registration is scoped: dropping the [`Subscription`] returned by
/// [`EventBus::subscribe`] removes the handler on every exit path.
#[derive(Default)]
pub struct EventBus {
    next_id: Cell<u64>,
    subscribers: RefCell<Vec<(u64, HandlerRef)>>,
}

impl EventBus {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    /// Registers a handler and returns the handle that owns the
    /// registration.
    pub fn subscribe(self: &Rc<Self>, handler: Weak<dyn OrderEventHandler>) -> Subscription {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.subscribers.borrow_mut().push((id, handler));
        Subscription {
            bus: Rc::downgrade(self),
            id,
        }
    }

    /// Dispatches an event to every live subscriber, in registration order.
    pub fn publish(&self, event: &OrderEvent) {
        // Snapshot first so a handler may subscribe or unsubscribe while
        // dispatch is in progress.
        let handlers: Vec<HandlerRef> = self
            .subscribers
            .borrow()
            .iter()
            .map(|(_, handler)| handler.clone())
            .collect();
        for handler in handlers {
            if let Some(handler) = handler.upgrade() {
                handler.handle(event);
            }
        }
    }

    fn unsubscribe(&self, id: u64) {
        self.subscribers
            .borrow_mut()
            .retain(|(sub_id, _)| *sub_id != id);
    }

    /// Number of registrations currently held.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.borrow().len()
    }
}

/// Owns one registration on an [`EventBus`]; dropping it unsubscribes.
#[must_use = "dropping the subscription immediately unsubscribes the handler"]
pub struct Subscription {
    bus: Weak<EventBus>,
    id: u64,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(bus) = self.bus.upgrade() {
            bus.unsubscribe(self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Recorder {
        events: RefCell<Vec<OrderEvent>>,
    }

    impl Recorder {
        fn new() -> Rc<Self> {
            Rc::new(Self {
                events: RefCell::new(Vec::new()),
            })
        }
    }

    impl OrderEventHandler for Recorder {
        fn handle(&self, event: &OrderEvent) {
            self.events.borrow_mut().push(event.clone());
        }
    }

    #[test]
    fn test_notification_name_mapping() {
        let event = OrderEvent::from_notification(ORDER_DETAILS_UPDATED, Some("[]".into()));
        assert_eq!(
            event,
            Some(OrderEvent::DetailsUpdated(Some(RawPayload::from("[]"))))
        );

        let event = OrderEvent::from_notification(CALL_ENDED, None);
        assert_eq!(event, Some(OrderEvent::CallEnded));

        assert_eq!(OrderEvent::from_notification("somethingElse", None), None);
    }

    #[test]
    fn test_publish_reaches_subscriber() {
        let bus = EventBus::new();
        let recorder = Recorder::new();
        let handler: Weak<dyn OrderEventHandler> =
            Rc::downgrade(&(recorder.clone() as Rc<dyn OrderEventHandler>));
        let _subscription = bus.subscribe(handler);

        bus.publish(&OrderEvent::CallEnded);
        assert_eq!(recorder.events.borrow().len(), 1);
    }

    #[test]
    fn test_dropping_subscription_unsubscribes() {
        let bus = EventBus::new();
        let recorder = Recorder::new();
        let handler: Weak<dyn OrderEventHandler> =
            Rc::downgrade(&(recorder.clone() as Rc<dyn OrderEventHandler>));
        let subscription = bus.subscribe(handler);
        assert_eq!(bus.subscriber_count(), 1);

        drop(subscription);
        assert_eq!(bus.subscriber_count(), 0);

        bus.publish(&OrderEvent::CallEnded);
        assert!(recorder.events.borrow().is_empty());
    }

    #[test]
    fn test_dropped_handler_stops_receiving() {
        let bus = EventBus::new();
        let recorder = Recorder::new();
        let handler: Weak<dyn OrderEventHandler> =
            Rc::downgrade(&(recorder.clone() as Rc<dyn OrderEventHandler>));
        let _subscription = bus.subscribe(handler);

        drop(recorder);
        // Must not panic on the dead weak reference.
        bus.publish(&OrderEvent::CallEnded);
    }
}
