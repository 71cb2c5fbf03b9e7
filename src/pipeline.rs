use log::{info, warn};

use crate::catalog::{apply_filters, Catalog, ColumnMap};
use crate::error::{CatalogError, GeometryError};
use crate::julian::{to_calendar_date_time, to_julian_date};
use crate::scheduler::{build_observing_windows, match_transits_to_windows, schedule_planet};
use crate::types::{
    CalendarDateTime, JulianDate, ObservingConfig, ObservingWindow, PlanetRecord, PlannerConfig,
    PredictedTransit,
};

/// One observable transit, flattened for reporting.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportedTransit {
    pub name: String,
    pub right_ascension: f64,
    pub declination: f64,
    pub midpoint: JulianDate,
    pub midpoint_utc: CalendarDateTime,
    pub cross_section_ratio: f64,
    pub duration_hours: f64,
}

impl From<&PredictedTransit<'_>> for ReportedTransit {
    fn from(transit: &PredictedTransit<'_>) -> Self {
        Self {
            name: transit.planet.name.clone(),
            right_ascension: transit.planet.right_ascension,
            declination: transit.planet.declination,
            midpoint: transit.midpoint,
            midpoint_utc: to_calendar_date_time(transit.midpoint),
            cross_section_ratio: transit.cross_section_ratio,
            duration_hours: transit.duration_hours,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlanetFailure {
    pub name: String,
    pub error: GeometryError,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PlanReport {
    pub transits: Vec<ReportedTransit>,
    pub failures: Vec<PlanetFailure>,
}

impl PlanReport {
    pub fn len(&self) -> usize {
        self.transits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transits.is_empty()
    }
}

pub fn observing_windows(config: &ObservingConfig) -> Vec<ObservingWindow> {
    build_observing_windows(
        to_julian_date(&config.first_night_start),
        config.session_length_days,
        config.sidereal_day_length,
        config.night_count,
    )
}

/// Filters the catalog, projects transits for every surviving planet and keeps
/// those inside the configured observing windows.
///
/// A planet with impossible geometry is recorded in [`PlanReport::failures`]
/// and the rest of the batch carries on.
pub fn run_pipeline(
    catalog: &Catalog,
    config: &PlannerConfig,
    now: JulianDate,
) -> Result<PlanReport, CatalogError> {
    let columns = ColumnMap::from_header(&catalog.header)?;
    let planets: Vec<PlanetRecord> = apply_filters(catalog, &columns, &config.filters)
        .into_iter()
        .filter_map(|row| PlanetRecord::from_row(row, &columns))
        .collect();
    info!("{} candidate planets after filtering", planets.len());

    let mut failures = Vec::new();
    let mut predicted = Vec::new();
    for planet in &planets {
        match schedule_planet(planet, now, config.transit_horizon) {
            Ok(transits) => predicted.extend(transits),
            Err(error) => {
                warn!("Skipping {}: {}", planet.name, error);
                failures.push(PlanetFailure {
                    name: planet.name.clone(),
                    error,
                });
            }
        }
    }

    let windows = observing_windows(&config.observing);
    let matched = match_transits_to_windows(&predicted, &windows);
    info!(
        "{} of {} predicted transits fall inside {} observing windows",
        matched.len(),
        predicted.len(),
        windows.len()
    );

    Ok(PlanReport {
        transits: matched.iter().map(ReportedTransit::from).collect(),
        failures,
    })
}
