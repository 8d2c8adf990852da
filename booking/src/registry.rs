use std::rc::Rc;

use common::subject_observer::{Observer, SharedObservers, Subject};
use log::debug;

use crate::{Quote, TransportOption};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookingEvent {
    Confirmed(String),
}

#[derive(Default)]
pub struct BookingRegistry {
    observers: SharedObservers<Self, BookingEvent>,
}

impl Subject<BookingEvent> for BookingRegistry {
    fn register_observer(&mut self, observer: Rc<dyn Observer<Self, BookingEvent>>) {
        self.observers.push(observer);
    }

    fn notify_observers(&self, event: BookingEvent) {
        for obs in &self.observers {
            obs.update(self, event.clone());
        }
    }
}

impl BookingRegistry {
    pub fn subscriber_count(&self) -> usize {
        self.observers.len()
    }

    /// Quotes the destination with the given option, notifies every current
    /// subscriber in registration order, then hands the quote back unmodified.
    pub fn book(&self, option: &dyn TransportOption, destination: &str) -> Quote {
        let quote = option.quote(destination);
        let message = format!("Booking Confirmed: {} to {}", quote.mode, destination);
        debug!("{message}");
        self.notify_observers(BookingEvent::Confirmed(message));
        quote
    }
}
