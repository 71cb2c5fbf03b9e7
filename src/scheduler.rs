use crate::error::GeometryError;
use crate::geometry::{cross_section_ratio, transit_duration, HOURS_PER_DAY};
use crate::types::{JulianDate, ObservingWindow, PlanetRecord, PredictedTransit};

pub const DEFAULT_TRANSIT_HORIZON: usize = 49;

/// Solar days per sidereal step of the nightly observing window.
pub const SIDEREAL_DAY_LENGTH: f64 = 1.002_737_9;

/// Most recent transit at or before `now`.
pub fn last_transit(epoch: JulianDate, period: f64, now: JulianDate) -> JulianDate {
    let cycles = (now.days_since(epoch) / period).floor();
    epoch.add_days(cycles * period)
}

/// Midpoints of the next `horizon` transits after `now`.
pub fn project_transits(
    epoch: JulianDate,
    period: f64,
    now: JulianDate,
    horizon: usize,
) -> Vec<JulianDate> {
    let last = last_transit(epoch, period, now);
    (1..=horizon)
        .map(|cycle| last.add_days(cycle as f64 * period))
        .collect()
}

pub fn schedule_planet(
    planet: &PlanetRecord,
    now: JulianDate,
    horizon: usize,
) -> Result<Vec<PredictedTransit<'_>>, GeometryError> {
    if planet.orbital_period <= 0.0 {
        return Err(GeometryError::NonPositivePeriod(planet.orbital_period));
    }
    let duration_hours = transit_duration(
        planet.semi_major_axis,
        planet.star_radius,
        planet.planet_radius,
        planet.orbital_period * HOURS_PER_DAY,
    )?;
    let ratio = cross_section_ratio(planet.planet_radius, planet.star_radius);

    let transits = project_transits(
        planet.reference_transit_epoch,
        planet.orbital_period,
        now,
        horizon,
    )
    .into_iter()
    .map(|midpoint| PredictedTransit {
        planet,
        midpoint,
        cross_section_ratio: ratio,
        duration_hours,
    })
    .collect();
    Ok(transits)
}

/// One window per night, each shifted by a sidereal day from the previous one.
pub fn build_observing_windows(
    first_night_start: JulianDate,
    session_length: f64,
    sidereal_day_length: f64,
    night_count: usize,
) -> Vec<ObservingWindow> {
    (0..night_count)
        .map(|night| {
            let start = first_night_start.add_days(night as f64 * sidereal_day_length);
            ObservingWindow::new(start, session_length)
        })
        .collect()
}

/// Transits whose midpoint falls inside any window, in input order. A transit
/// covered by several overlapping windows is kept once.
pub fn match_transits_to_windows<'a>(
    transits: &[PredictedTransit<'a>],
    windows: &[ObservingWindow],
) -> Vec<PredictedTransit<'a>> {
    transits
        .iter()
        .filter(|transit| windows.iter().any(|w| w.contains(transit.midpoint)))
        .copied()
        .collect()
}
