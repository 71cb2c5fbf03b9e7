use std::fmt;

use serde::{Deserialize, Serialize};

/// Civil calendar date in UTC. The time of day lives in the fractional part of `day`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalendarDateTime {
    pub year: i32,
    pub month: i32,
    pub day: f64,
}

/// Continuous day count since noon, 1 January 4713 BCE (proleptic Julian calendar).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JulianDate(pub f64);

impl JulianDate {
    pub const J2000: JulianDate = JulianDate(2_451_545.0);

    pub fn new(value: f64) -> Self {
        Self(value)
    }

    pub fn value(self) -> f64 {
        self.0
    }

    pub fn add_days(self, days: f64) -> Self {
        Self(self.0 + days)
    }

    pub fn days_since(self, earlier: JulianDate) -> f64 {
        self.0 - earlier.0
    }
}

impl From<f64> for JulianDate {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl fmt::Display for JulianDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "JD {:.5}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObservingWindow {
    pub start: JulianDate,
    pub end: JulianDate,
}

impl ObservingWindow {
    /// A non-positive length gives an empty window that contains nothing.
    pub fn new(start: JulianDate, length_days: f64) -> Self {
        Self {
            start,
            end: start.add_days(length_days),
        }
    }

    /// Open interval: a midpoint sitting exactly on either edge is not observable.
    pub fn contains(&self, jd: JulianDate) -> bool {
        self.start < jd && jd < self.end
    }
}

/// A catalog candidate after unit conversion. Lengths are in meters, the period in days.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanetRecord {
    pub name: String,
    pub right_ascension: f64,
    pub declination: f64,
    pub reference_transit_epoch: JulianDate,
    pub orbital_period: f64,
    pub planet_radius: f64,
    pub star_radius: f64,
    pub semi_major_axis: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PredictedTransit<'a> {
    pub planet: &'a PlanetRecord,
    pub midpoint: JulianDate,
    pub cross_section_ratio: f64,
    pub duration_hours: f64,
}

/// Right-ascension band in degrees, both ends inclusive. When `start > end`
/// the band wraps through 0°.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RightAscensionWindow {
    pub start: f64,
    pub end: f64,
}

impl RightAscensionWindow {
    pub fn contains(&self, ra: f64) -> bool {
        if self.start <= self.end {
            self.start <= ra && ra <= self.end
        } else {
            ra >= self.start || ra <= self.end
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    pub detection_method: String,
    pub max_magnitude: f64,
    pub min_declination: f64,
    pub max_declination: f64,
    pub right_ascension: RightAscensionWindow,
    pub min_cross_section: f64,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            detection_method: "Primary Transit".to_string(),
            max_magnitude: 12.0,
            min_declination: -9.0,
            max_declination: 91.0,
            right_ascension: RightAscensionWindow {
                start: 295.0,
                end: 7.5,
            },
            min_cross_section: 0.008,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObservingConfig {
    pub first_night_start: CalendarDateTime,
    pub session_length_days: f64,
    pub sidereal_day_length: f64,
    pub night_count: usize,
}

impl Default for ObservingConfig {
    fn default() -> Self {
        Self {
            first_night_start: CalendarDateTime {
                year: 2021,
                month: 9,
                day: 2.067,
            },
            session_length_days: 0.16712,
            sidereal_day_length: crate::scheduler::SIDEREAL_DAY_LENGTH,
            night_count: 29,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    pub transit_horizon: usize,
    pub filters: FilterConfig,
    pub observing: ObservingConfig,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            transit_horizon: crate::scheduler::DEFAULT_TRANSIT_HORIZON,
            filters: FilterConfig::default(),
            observing: ObservingConfig::default(),
        }
    }
}
