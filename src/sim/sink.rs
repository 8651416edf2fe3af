//! Event consumers
//!
//! The engine pushes every event of a tick through an [`EventSink`] in the
//! order it happened. Sinks never get mutable access to the engine.

use super::state::Event;

/// Receiver of engine events
pub trait EventSink {
    fn on_event(&mut self, event: &Event);
}

/// Collects events in order
impl EventSink for Vec<Event> {
    fn on_event(&mut self, event: &Event) {
        self.push(event.clone());
    }
}

impl<S: EventSink + ?Sized> EventSink for &mut S {
    fn on_event(&mut self, event: &Event) {
        (**self).on_event(event);
    }
}

/// Fan out to two sinks, first then second
impl<A: EventSink, B: EventSink> EventSink for (A, B) {
    fn on_event(&mut self, event: &Event) {
        self.0.on_event(event);
        self.1.on_event(event);
    }
}

/// Adapts a closure into a sink
pub struct FnSink<F>(pub F);

impl<F: FnMut(&Event)> EventSink for FnSink<F> {
    fn on_event(&mut self, event: &Event) {
        (self.0)(event);
    }
}
