//! Exoplanet catalog loading and candidate filtering.
//!
//! Every filter stage borrows the rows it is given and returns a new, smaller
//! candidate list. Rows whose required cells are blank or fail the
//! [`is_numeric`] heuristic are dropped without an error.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::debug;

use crate::error::CatalogError;
use crate::geometry::{
    cross_section_ratio, ASTRONOMICAL_UNIT_M, JUPITER_RADIUS_M, SOLAR_RADIUS_M,
};
use crate::types::{FilterConfig, JulianDate, PlanetRecord, RightAscensionWindow};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogRow {
    fields: Vec<String>,
}

impl CatalogRow {
    pub fn new<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }

    pub fn name(&self) -> &str {
        self.get(0)
    }

    /// Cell text, or `""` past the end of a short row.
    pub fn get(&self, column: usize) -> &str {
        self.fields.get(column).map(String::as_str).unwrap_or("")
    }

    /// Cell value when it looks numeric and parses as `f64`.
    pub fn number(&self, column: usize) -> Option<f64> {
        let cell = self.get(column);
        if !is_numeric(cell) {
            return None;
        }
        cell.trim().parse().ok()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    pub header: Vec<String>,
    pub rows: Vec<CatalogRow>,
}

impl Catalog {
    pub fn new(header: Vec<String>, rows: Vec<CatalogRow>) -> Self {
        Self { header, rows }
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);

        let mut records = csv_reader.records();
        let header = match records.next() {
            Some(record) => record?.iter().map(|s| s.trim().to_string()).collect(),
            None => return Err(CatalogError::Empty),
        };
        let rows = records
            .map(|record| record.map(|r| CatalogRow::new(r.iter())))
            .collect::<Result<Vec<_>, _>>()?;

        debug!("Loaded catalog with {} rows", rows.len());
        Ok(Self { header, rows })
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        Self::from_reader(File::open(path)?)
    }

    pub fn candidates(&self) -> Vec<&CatalogRow> {
        self.rows.iter().collect()
    }
}

/// Positions of the columns the planner reads, resolved once from the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMap {
    pub detection_type: usize,
    pub mag_v: usize,
    pub dec: usize,
    pub ra: usize,
    pub radius: usize,
    pub star_radius: usize,
    pub tconj: usize,
    pub tzero_tr: usize,
    pub orbital_period: usize,
    pub semi_major_axis: usize,
}

fn column_index(header: &[String], name: &str) -> Result<usize, CatalogError> {
    header
        .iter()
        .position(|h| h == name)
        .ok_or_else(|| CatalogError::MissingColumn(name.to_string()))
}

impl ColumnMap {
    pub fn from_header(header: &[String]) -> Result<Self, CatalogError> {
        Ok(Self {
            detection_type: column_index(header, "detection_type")?,
            mag_v: column_index(header, "mag_v")?,
            dec: column_index(header, "dec")?,
            ra: column_index(header, "ra")?,
            radius: column_index(header, "radius")?,
            star_radius: column_index(header, "star_radius")?,
            tconj: column_index(header, "tconj")?,
            tzero_tr: column_index(header, "tzero_tr")?,
            orbital_period: column_index(header, "orbital_period")?,
            semi_major_axis: column_index(header, "semi_major_axis")?,
        })
    }
}

/// Loose numeric check used by the catalog: non-empty and ending in a decimal
/// digit. `"12.5"` and `"1e5"` pass, `""`, `"1e"` and `"5."` do not.
pub fn is_numeric(cell: &str) -> bool {
    cell.chars().last().is_some_and(|c| c.is_ascii_digit())
}

fn retain_numeric<'a, F>(
    candidates: &[&'a CatalogRow],
    column: usize,
    keep: F,
) -> Vec<&'a CatalogRow>
where
    F: Fn(f64) -> bool,
{
    candidates
        .iter()
        .copied()
        .filter(|row| row.number(column).is_some_and(&keep))
        .collect()
}

pub fn filter_by_detection_method<'a>(
    candidates: &[&'a CatalogRow],
    column: usize,
    method: &str,
) -> Vec<&'a CatalogRow> {
    candidates
        .iter()
        .copied()
        .filter(|row| row.get(column) == method)
        .collect()
}

pub fn filter_by_magnitude<'a>(
    candidates: &[&'a CatalogRow],
    column: usize,
    max_magnitude: f64,
) -> Vec<&'a CatalogRow> {
    retain_numeric(candidates, column, |mag| mag <= max_magnitude)
}

pub fn filter_by_declination<'a>(
    candidates: &[&'a CatalogRow],
    column: usize,
    min: f64,
    max: f64,
) -> Vec<&'a CatalogRow> {
    retain_numeric(candidates, column, |dec| min <= dec && dec <= max)
}

pub fn filter_by_right_ascension<'a>(
    candidates: &[&'a CatalogRow],
    column: usize,
    window: RightAscensionWindow,
) -> Vec<&'a CatalogRow> {
    retain_numeric(candidates, column, |ra| window.contains(ra))
}

/// Keeps planets blocking at least `min_ratio` of their star. Radii are read in
/// Jupiter and solar radii.
pub fn filter_by_cross_section<'a>(
    candidates: &[&'a CatalogRow],
    radius_column: usize,
    star_radius_column: usize,
    min_ratio: f64,
) -> Vec<&'a CatalogRow> {
    candidates
        .iter()
        .copied()
        .filter(|row| {
            match (row.number(radius_column), row.number(star_radius_column)) {
                (Some(radius), Some(star_radius)) => {
                    cross_section_ratio(radius * JUPITER_RADIUS_M, star_radius * SOLAR_RADIUS_M)
                        >= min_ratio
                }
                _ => false,
            }
        })
        .collect()
}

fn reference_epoch(row: &CatalogRow, columns: &ColumnMap) -> Option<f64> {
    row.number(columns.tconj)
        .or_else(|| row.number(columns.tzero_tr))
}

/// Keeps rows that carry enough orbital data to predict a transit.
pub fn filter_by_ephemeris<'a>(
    candidates: &[&'a CatalogRow],
    columns: &ColumnMap,
) -> Vec<&'a CatalogRow> {
    candidates
        .iter()
        .copied()
        .filter(|row| {
            reference_epoch(row, columns).is_some()
                && row.number(columns.orbital_period).is_some()
                && row.number(columns.semi_major_axis).is_some()
        })
        .collect()
}

pub fn apply_filters<'a>(
    catalog: &'a Catalog,
    columns: &ColumnMap,
    config: &FilterConfig,
) -> Vec<&'a CatalogRow> {
    let candidates = catalog.candidates();
    debug!("Number of planets: {}", candidates.len());

    let candidates =
        filter_by_detection_method(&candidates, columns.detection_type, &config.detection_method);
    debug!("After detection method filter: {}", candidates.len());

    let candidates = filter_by_magnitude(&candidates, columns.mag_v, config.max_magnitude);
    debug!("After magnitude filter: {}", candidates.len());

    let candidates = filter_by_declination(
        &candidates,
        columns.dec,
        config.min_declination,
        config.max_declination,
    );
    debug!("After declination filter: {}", candidates.len());

    let candidates = filter_by_right_ascension(&candidates, columns.ra, config.right_ascension);
    debug!("After right ascension filter: {}", candidates.len());

    let candidates = filter_by_cross_section(
        &candidates,
        columns.radius,
        columns.star_radius,
        config.min_cross_section,
    );
    debug!("After cross section filter: {}", candidates.len());

    let candidates = filter_by_ephemeris(&candidates, columns);
    debug!("After ephemeris filter: {}", candidates.len());

    candidates
}

impl PlanetRecord {
    /// Builds a record in SI units, or `None` if any required cell is missing.
    /// `tconj` is preferred over `tzero_tr` as the reference epoch.
    pub fn from_row(row: &CatalogRow, columns: &ColumnMap) -> Option<Self> {
        Some(Self {
            name: row.name().to_string(),
            right_ascension: row.number(columns.ra)?,
            declination: row.number(columns.dec)?,
            reference_transit_epoch: JulianDate(reference_epoch(row, columns)?),
            orbital_period: row.number(columns.orbital_period)?,
            planet_radius: row.number(columns.radius)? * JUPITER_RADIUS_M,
            star_radius: row.number(columns.star_radius)? * SOLAR_RADIUS_M,
            semi_major_axis: row.number(columns.semi_major_axis)? * ASTRONOMICAL_UNIT_M,
        })
    }
}
