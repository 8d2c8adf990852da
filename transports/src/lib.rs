use booking::TransportOption;
use serde::Deserialize;
use strum::EnumIter;

pub mod public_transport;
pub mod taxi;

pub use public_transport::PublicTransport;
pub use taxi::Taxi;

/// The closed set of bookable options, selectable by the caller at the call
/// site. Iteration order is declaration order.
#[derive(Copy, Clone, Debug, Deserialize, EnumIter, PartialEq, Eq)]
pub enum TransportKind {
    Taxi,
    PublicTransport,
}

impl TransportKind {
    pub fn option(&self) -> &'static dyn TransportOption {
        match self {
            TransportKind::Taxi => &Taxi,
            TransportKind::PublicTransport => &PublicTransport,
        }
    }
}
