use super::events::{EventBus, OrderEvent, OrderEventHandler, Subscription};
use crate::application::normalizer::normalize;
use crate::domain::order::NormalizedOrder;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// Presentation state for the order summary.
///
/// Holds the most recent normalized order. Every event fully replaces the
/// held order, so the last applied event wins; nothing is merged.
#[derive(Default)]
pub struct OrderSummaryView {
    order: RefCell<NormalizedOrder>,
}

impl OrderSummaryView {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    /// Creates a view and subscribes it to the bus.
    ///
    /// The returned [`Subscription`] scopes the registration: dropping it
    /// detaches the view no matter how the enclosing scope exits.
    pub fn attach(bus: &Rc<EventBus>) -> (Rc<Self>, Subscription) {
        let view = Self::new();
        let handler: Weak<dyn OrderEventHandler> =
            Rc::downgrade(&(view.clone() as Rc<dyn OrderEventHandler>));
        let subscription = bus.subscribe(handler);
        (view, subscription)
    }

    /// The order currently on display.
    pub fn current_order(&self) -> NormalizedOrder {
        self.order.borrow().clone()
    }
}

impl OrderEventHandler for OrderSummaryView {
    fn handle(&self, event: &OrderEvent) {
        let next = match event {
            OrderEvent::DetailsUpdated(detail) => normalize(detail.as_ref()),
            OrderEvent::CallEnded => NormalizedOrder::empty(),
        };
        *self.order.borrow_mut() = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_starts_empty() {
        let view = OrderSummaryView::new();
        assert_eq!(view.current_order(), NormalizedOrder::empty());
    }

    #[test]
    fn test_details_update_replaces_order() {
        let view = OrderSummaryView::new();
        let payload = r#"[{"name":"Burger","quantity":2,"price":5.995}]"#;
        view.handle(&OrderEvent::DetailsUpdated(Some(payload.into())));

        let order = view.current_order();
        assert_eq!(order.items.len(), 1);
        assert_eq!(order.total_amount, dec!(11.99));
    }

    #[test]
    fn test_call_ended_resets_to_empty() {
        let view = OrderSummaryView::new();
        let payload = r#"[{"name":"Burger","quantity":2,"price":5.995}]"#;
        view.handle(&OrderEvent::DetailsUpdated(Some(payload.into())));
        assert!(!view.current_order().is_empty());

        view.handle(&OrderEvent::CallEnded);
        assert_eq!(view.current_order(), NormalizedOrder::empty());
    }
}
