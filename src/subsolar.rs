use chrono::{DateTime, Datelike, Timelike, Utc};
use serde::Serialize;

/// Geographic point where the sun is directly overhead at a given instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, utoipa::ToSchema)]
pub struct SubSolarPoint {
    pub latitude: f64,
    pub longitude: f64,
}

/// Compute the subsolar point for an instant using the low-precision
/// fractional-year series for solar declination and the equation of time.
/// Pure in its argument; callers pass wall-clock now on the same cadence as
/// satellite polling. Accuracy is well under a degree, enough for a globe.
pub fn subsolar_point(at: DateTime<Utc>) -> SubSolarPoint {
    let day_of_year = at.ordinal() as f64;
    let hour = at.hour() as f64
        + at.minute() as f64 / 60.0
        + at.second() as f64 / 3600.0;

    // Fractional year, radians.
    let gamma = 2.0 * std::f64::consts::PI / 365.0 * (day_of_year - 1.0 + (hour - 12.0) / 24.0);

    // Equation of time, minutes.
    let eqtime = 229.18
        * (0.000075 + 0.001868 * gamma.cos()
            - 0.032077 * gamma.sin()
            - 0.014615 * (2.0 * gamma).cos()
            - 0.040849 * (2.0 * gamma).sin());

    // Solar declination, radians.
    let declination = 0.006918 - 0.399912 * gamma.cos() + 0.070257 * gamma.sin()
        - 0.006758 * (2.0 * gamma).cos()
        + 0.000907 * (2.0 * gamma).sin()
        - 0.002697 * (3.0 * gamma).cos()
        + 0.00148 * (3.0 * gamma).sin();

    // True solar time at Greenwich; the subsolar meridian is wherever local
    // solar noon is happening.
    let true_solar_minutes = hour * 60.0 + eqtime;
    let longitude = normalize_longitude(-(true_solar_minutes / 4.0 - 180.0));

    SubSolarPoint {
        latitude: declination.to_degrees(),
        longitude,
    }
}

/// Wrap into (-180, 180].
fn normalize_longitude(longitude: f64) -> f64 {
    let wrapped = (longitude + 180.0).rem_euclid(360.0) - 180.0;
    if wrapped == -180.0 {
        180.0
    } else {
        wrapped
    }
}
