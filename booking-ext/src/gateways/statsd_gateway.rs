use std::{fmt::Debug, io::Error, net::ToSocketAddrs};

use booking::registry::{BookingEvent, BookingRegistry};
use common::subject_observer::Observer;
use dipstick::{Input, Statsd};
use log::trace;

use super::{BOOKING_PROXY, CONFIRMATIONS};

pub struct StatsdGateway {}

impl StatsdGateway {
    pub fn new<A>(address: A) -> Result<Self, Error>
    where
        A: ToSocketAddrs + Debug + Clone,
    {
        let statsd_scope = Statsd::send_to(address)?.metrics();
        BOOKING_PROXY.target(statsd_scope);
        Ok(StatsdGateway {})
    }
}

impl Observer<BookingRegistry, BookingEvent> for StatsdGateway {
    fn update(&self, _source: &BookingRegistry, event: BookingEvent) {
        let BookingEvent::Confirmed(message) = event;
        trace!("Counting confirmation: {message}");
        CONFIRMATIONS.count(1);
    }
}

#[cfg(test)]
mod tests {
    use super::StatsdGateway;

    #[test]
    fn test_statsd_gateway_new() {
        // When
        let result = StatsdGateway::new("");
        // Then
        assert!(
            matches!(result, Err(_)),
            "Should fail when the address is not valid"
        );

        // When
        let result = StatsdGateway::new("127.0.0.1:8125");
        // Then
        assert!(
            matches!(result, Ok(_)),
            "Should succeed when the address is valid"
        );
    }
}
