use std::f64::consts::PI;

use crate::error::GeometryError;

pub const JUPITER_RADIUS_M: f64 = 6.991e7;
pub const SOLAR_RADIUS_M: f64 = 6.96e8;
pub const ASTRONOMICAL_UNIT_M: f64 = 1.5e11;
pub const HOURS_PER_DAY: f64 = 24.0;

/// Fraction of the stellar disc covered by the planet, `(r_p / r_s)^2`.
pub fn cross_section_ratio(planet_radius: f64, star_radius: f64) -> f64 {
    (planet_radius / star_radius).powi(2)
}

/// Transit duration in the time unit of `period` (hours in practice).
///
/// The planet covers the chord of its orbit that subtends the stellar disc,
/// `2·a·asin(R_s / a)`, plus one planetary diameter for ingress and egress.
/// That path over the orbital circumference is the share of the period spent
/// in transit.
pub fn transit_duration(
    semi_major_axis: f64,
    star_radius: f64,
    planet_radius: f64,
    period: f64,
) -> Result<f64, GeometryError> {
    if semi_major_axis <= 0.0 {
        return Err(GeometryError::NonPositiveSemiMajorAxis(semi_major_axis));
    }
    if !(star_radius > 0.0) {
        return Err(GeometryError::NonPositiveStarRadius(star_radius));
    }
    if star_radius > semi_major_axis {
        return Err(GeometryError::StarLargerThanOrbit {
            star_radius,
            semi_major_axis,
        });
    }

    let arc_length = 2.0 * semi_major_axis * (star_radius / semi_major_axis).asin();
    let circumference = 2.0 * PI * semi_major_axis;
    let transit_fraction = (arc_length + 2.0 * planet_radius) / circumference;
    Ok(transit_fraction * period)
}
