use serde::Serialize;

use super::sample::PositionSample;

/// Orbit direction hint for drawing a ground track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Heading {
    North,
    South,
}

impl Heading {
    pub fn sign(&self) -> i8 {
        match self {
            Heading::North => 1,
            Heading::South => -1,
        }
    }
}

/// Accumulated track state for one satellite. Mutated only by the owning
/// worker on successful fetches; reset back to `default()` on demand.
#[derive(Debug, Clone)]
pub struct TrackState {
    last_sample: Option<PositionSample>,
    previous_latitude: f64,
    heading: Heading,
    samples: u64,
}

impl Default for TrackState {
    fn default() -> Self {
        Self {
            last_sample: None,
            previous_latitude: 0.0,
            heading: Heading::North,
            samples: 0,
        }
    }
}

impl TrackState {
    /// Fold one successful sample in. A previous latitude of exactly 0.0 is
    /// the "no prior sample" sentinel and defaults the heading to north; the
    /// new latitude is stored unconditionally for the next comparison.
    pub fn apply(&mut self, sample: PositionSample) {
        if self.previous_latitude == 0.0 {
            self.heading = Heading::North;
        } else if sample.latitude > self.previous_latitude {
            self.heading = Heading::North;
        } else if sample.latitude < self.previous_latitude {
            self.heading = Heading::South;
        }
        self.previous_latitude = sample.latitude;
        self.samples += 1;
        self.last_sample = Some(sample);
    }

    /// Undefined until two samples have been observed; the first only seeds
    /// the previous latitude.
    pub fn heading(&self) -> Option<Heading> {
        (self.samples >= 2).then_some(self.heading)
    }

    pub fn last_sample(&self) -> Option<&PositionSample> {
        self.last_sample.as_ref()
    }

    pub fn previous_latitude(&self) -> f64 {
        self.previous_latitude
    }

    pub fn samples(&self) -> u64 {
        self.samples
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn sample(latitude: f64) -> PositionSample {
        PositionSample {
            latitude,
            longitude: 0.0,
            altitude_km: 408.0,
            azimuth: 0.0,
            elevation: 0.0,
            eclipsed: false,
            timestamp: Utc.timestamp_opt(1_700_000_000, 0).unwrap(),
        }
    }

    #[test]
    fn heading_is_undefined_until_two_samples() {
        let mut state = TrackState::default();
        assert_eq!(state.heading(), None);
        state.apply(sample(51.6));
        assert_eq!(state.heading(), None);
        assert_eq!(state.previous_latitude(), 51.6);
        state.apply(sample(52.0));
        assert_eq!(state.heading(), Some(Heading::North));
    }

    #[test]
    fn first_sample_defaults_north_even_when_descending() {
        let mut state = TrackState::default();
        state.apply(sample(-10.0));
        state.apply(sample(-20.0));
        // The second sample is a real comparison; the first only seeded.
        assert_eq!(state.heading(), Some(Heading::South));
        let mut state = TrackState::default();
        state.apply(sample(-10.0));
        assert_eq!(state.samples(), 1);
    }

    #[test]
    fn heading_flips_exactly_on_delta_sign_change() {
        let mut state = TrackState::default();
        let latitudes = [10.0, 20.0, 15.0, 25.0, 5.0, 30.0];
        let mut expected = Vec::new();
        let mut previous = 0.0;
        for lat in latitudes {
            state.apply(sample(lat));
            if previous != 0.0 {
                expected.push(if lat > previous {
                    Heading::North
                } else {
                    Heading::South
                });
                assert_eq!(state.heading(), expected.last().copied());
            }
            previous = lat;
        }
        assert_eq!(
            expected,
            vec![
                Heading::North,
                Heading::South,
                Heading::North,
                Heading::South,
                Heading::North
            ]
        );
    }

    #[test]
    fn equal_latitudes_keep_the_previous_heading() {
        let mut state = TrackState::default();
        state.apply(sample(10.0));
        state.apply(sample(20.0));
        state.apply(sample(20.0));
        assert_eq!(state.heading(), Some(Heading::North));
    }

    #[test]
    fn zero_latitude_reseeds_the_sentinel() {
        let mut state = TrackState::default();
        state.apply(sample(10.0));
        state.apply(sample(0.0));
        state.apply(sample(-5.0));
        // 0.0 is indistinguishable from "no prior sample"; the next
        // comparison falls back to the north default.
        assert_eq!(state.heading(), Some(Heading::North));
    }

    #[test]
    fn sign_values() {
        assert_eq!(Heading::North.sign(), 1);
        assert_eq!(Heading::South.sign(), -1);
    }
}
