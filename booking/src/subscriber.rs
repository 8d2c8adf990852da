use std::{io, rc::Rc};

use common::{sink::NotificationSink, subject_observer::Observer};
use log::{info, warn};

use crate::registry::{BookingEvent, BookingRegistry};

/// Named subscriber. Receives the full confirmation message and prefixes its
/// own name when publishing to its sink. A sink failure is logged and
/// swallowed so the registry's fan-out continues with the next subscriber.
pub struct FamilyMember {
    name: String,
    sink: Rc<dyn NotificationSink>,
}

impl FamilyMember {
    pub fn new(name: impl Into<String>, sink: Rc<dyn NotificationSink>) -> Self {
        FamilyMember {
            name: name.into(),
            sink,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Observer<BookingRegistry, BookingEvent> for FamilyMember {
    fn update(&self, _source: &BookingRegistry, event: BookingEvent) {
        let BookingEvent::Confirmed(message) = event;
        let line = format!("{} received an update: {}", self.name, message);
        if let Err(err) = self.sink.publish(&line) {
            warn!("Dropping notification for {}: {err}", self.name);
        }
    }
}

/// Publishes notification lines through the logging facade.
pub struct LogSink;

impl NotificationSink for LogSink {
    fn publish(&self, line: &str) -> io::Result<()> {
        info!("{line}");
        Ok(())
    }
}
