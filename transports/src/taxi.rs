use booking::{QualityLevel, Quote, TransportOption};

pub struct Taxi;

impl TransportOption for Taxi {
    // Flat tariff, whatever the destination.
    fn quote(&self, _destination: &str) -> Quote {
        Quote {
            mode: "Taxi".to_string(),
            duration: "30 minutes".to_string(),
            price: "$20".to_string(),
            quality: QualityLevel::High,
        }
    }
}

#[cfg(test)]
mod tests {
    use booking::{QualityLevel, TransportOption};

    use super::Taxi;

    #[test]
    fn test_quote_should_return_the_fixed_taxi_tariff() {
        // When
        let result = Taxi.quote("Paris");

        // Then
        assert_eq!("Taxi", result.mode);
        assert_eq!("30 minutes", result.duration);
        assert_eq!("$20", result.price);
        assert_eq!(QualityLevel::High, result.quality);
    }

    #[test]
    fn test_quote_should_not_depend_on_the_destination() {
        // Given
        let reference = Taxi.quote("Paris");

        // Then
        assert_eq!(
            reference,
            Taxi.quote(""),
            "Should quote the same tariff for an empty destination"
        );
        assert_eq!(
            reference,
            Taxi.quote("Rome"),
            "Should quote the same tariff for any destination"
        );
        assert_eq!(
            reference,
            Taxi.quote("Paris"),
            "Should quote the same tariff on repeated calls"
        );
    }
}
