/// Sentinel the pass API uses for "no magnitude available".
pub const NO_MAGNITUDE: f64 = 100_000.0;

/// Map a pass magnitude to a 0-4 star rating; brighter means more stars.
///
/// Returns `None` for the no-magnitude sentinel so callers can distinguish
/// "no data" from "0 stars for a poor pass". The thresholds overlap, so the
/// comparisons must cascade from brightest to dimmest.
pub fn number_of_stars(magnitude: f64) -> Option<u8> {
    if magnitude == NO_MAGNITUDE {
        None
    } else if magnitude <= -2.0 {
        Some(4)
    } else if magnitude <= -1.5 {
        Some(3)
    } else if magnitude <= -1.0 {
        Some(2)
    } else if magnitude <= -0.5 {
        Some(1)
    } else {
        Some(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds() {
        assert_eq!(number_of_stars(-2.0), Some(4));
        assert_eq!(number_of_stars(-1.5), Some(3));
        assert_eq!(number_of_stars(-1.0), Some(2));
        assert_eq!(number_of_stars(-0.5), Some(1));
        assert_eq!(number_of_stars(-0.4), Some(0));
        assert_eq!(number_of_stars(3.2), Some(0));
    }

    #[test]
    fn very_bright_passes_take_the_first_branch() {
        // -2.5 also satisfies every dimmer threshold; the cascade order is
        // what makes it 4 stars rather than 1.
        assert_eq!(number_of_stars(-2.5), Some(4));
        assert_eq!(number_of_stars(f64::MIN), Some(4));
    }

    #[test]
    fn sentinel_is_distinguished_from_a_poor_pass() {
        assert_eq!(number_of_stars(NO_MAGNITUDE), None);
        assert_eq!(number_of_stars(100.0), Some(0));
    }

    #[test]
    fn mapping_is_total_and_monotonic_non_increasing() {
        let mut previous = u8::MAX;
        let mut magnitude = -5.0;
        while magnitude < 5.0 {
            let stars = number_of_stars(magnitude).unwrap();
            assert!(stars <= previous, "stars increased at {}", magnitude);
            assert!(stars <= 4);
            previous = stars;
            magnitude += 0.01;
        }
    }
}
