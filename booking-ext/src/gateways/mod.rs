mod statsd_gateway;

pub use statsd_gateway::StatsdGateway;

use dipstick::*;

metrics! {
    BOOKING_PROXY: Proxy = "travel_booking" => {
        CONFIRMATIONS: Counter = "confirmations";
    }
}
