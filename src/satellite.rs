use serde::{Deserialize, Serialize};

/// The closed set of objects this daemon knows how to track.
///
/// `None` is the "no selection" sentinel carried by clients; every fetch
/// path rejects it instead of issuing a request for catalog id 0.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    clap::ValueEnum,
    strum_macros::Display,
    utoipa::ToSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Satellite {
    #[strum(to_string = "ISS")]
    Iss,
    #[strum(to_string = "Tiangong")]
    Tiangong,
    #[strum(to_string = "Hubble")]
    Hubble,
    #[strum(to_string = "")]
    None,
}

impl Satellite {
    /// NORAD catalog identifier used as the API's satellite selector.
    pub fn norad_id(&self) -> u32 {
        match self {
            Satellite::Iss => 25544,
            Satellite::Tiangong => 48274,
            Satellite::Hubble => 20580,
            Satellite::None => 0,
        }
    }

    /// The satellites worth spawning a tracker for.
    pub fn tracked() -> [Satellite; 3] {
        [Satellite::Iss, Satellite::Tiangong, Satellite::Hubble]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn norad_ids_are_fixed() {
        assert_eq!(Satellite::Iss.norad_id(), 25544);
        assert_eq!(Satellite::Tiangong.norad_id(), 48274);
        assert_eq!(Satellite::Hubble.norad_id(), 20580);
        assert_eq!(Satellite::None.norad_id(), 0);
    }

    #[test]
    fn display_names() {
        assert_eq!(Satellite::Iss.to_string(), "ISS");
        assert_eq!(Satellite::Tiangong.to_string(), "Tiangong");
        assert_eq!(Satellite::None.to_string(), "");
    }

    #[test]
    fn serde_round_trip_is_lowercase() {
        assert_eq!(serde_json::to_string(&Satellite::Iss).unwrap(), "\"iss\"");
        let sat: Satellite = serde_json::from_str("\"tiangong\"").unwrap();
        assert_eq!(sat, Satellite::Tiangong);
    }

    #[test]
    fn tracked_excludes_none() {
        assert!(!Satellite::tracked().contains(&Satellite::None));
    }
}
