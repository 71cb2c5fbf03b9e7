//! Error types for catalog loading, configuration and transit geometry.
//!
//! Missing or non-numeric catalog cells are not errors: the filter stages
//! drop those rows silently. Calendar input is never validated either.

use thiserror::Error;

/// Impossible orbital configuration reaching the transit-duration geometry.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    #[error("star radius {star_radius} m exceeds semi-major axis {semi_major_axis} m")]
    StarLargerThanOrbit {
        star_radius: f64,
        semi_major_axis: f64,
    },

    #[error("semi-major axis must be positive, got {0} m")]
    NonPositiveSemiMajorAxis(f64),

    #[error("orbital period must be positive, got {0} days")]
    NonPositivePeriod(f64),

    #[error("star radius must be positive, got {0} m")]
    NonPositiveStarRadius(f64),
}

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("catalog header has no `{0}` column")]
    MissingColumn(String),

    #[error("catalog is empty: no header row")]
    Empty,

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("`{key}` must be positive, got {value}")]
    NonPositive { key: &'static str, value: f64 },
}
