//! Shared action queue for widgets that emit events.

use crate::core::event_bus::{BoxedEvent, Event, EventBus};

/// Widget render result - all actions travel as events.
#[derive(Default)]
pub struct ActionQueue {
    pub hovered: bool,
    pub events: Vec<BoxedEvent>,
}

impl ActionQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push event to be dispatched.
    pub fn send<E: Event>(&mut self, event: E) {
        self.events.push(Box::new(event));
    }

    /// Hand everything collected during this render to the bus. The app
    /// drains the bus once per frame after the panels have rendered.
    pub fn dispatch(self, bus: &EventBus) {
        for event in self.events {
            bus.emit_boxed(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::event_bus::downcast_event;

    #[derive(Clone, Debug)]
    struct RowPicked(u32);

    #[test]
    fn test_dispatch_forwards_queued_events_in_order() {
        let bus = EventBus::new();
        let mut actions = ActionQueue::new();
        actions.send(RowPicked(3));
        actions.send(RowPicked(7));
        actions.dispatch(&bus);

        let events = bus.poll();
        assert_eq!(events.len(), 2);
        assert_eq!(downcast_event::<RowPicked>(&events[0]).unwrap().0, 3);
        assert_eq!(downcast_event::<RowPicked>(&events[1]).unwrap().0, 7);
    }
}
