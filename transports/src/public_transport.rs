use booking::{QualityLevel, Quote, TransportOption};

pub struct PublicTransport;

impl TransportOption for PublicTransport {
    // Flat tariff, whatever the destination.
    fn quote(&self, _destination: &str) -> Quote {
        Quote {
            mode: "Public Transport".to_string(),
            duration: "45 minutes".to_string(),
            price: "$5".to_string(),
            quality: QualityLevel::Low,
        }
    }
}
