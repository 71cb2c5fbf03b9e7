pub mod catalog;
pub mod config;
pub mod error;
pub mod geometry;
pub mod julian;
pub mod pipeline;
pub mod report;
pub mod scheduler;
pub mod types;

pub use catalog::{
    apply_filters, filter_by_cross_section, filter_by_declination, filter_by_detection_method,
    filter_by_ephemeris, filter_by_magnitude, filter_by_right_ascension, is_numeric, Catalog,
    CatalogRow, ColumnMap,
};

pub use error::{CatalogError, ConfigError, GeometryError};

pub use geometry::{
    cross_section_ratio, transit_duration, ASTRONOMICAL_UNIT_M, HOURS_PER_DAY, JUPITER_RADIUS_M,
    SOLAR_RADIUS_M,
};

pub use julian::{
    calendar_from_datetime, days_in_month, is_leap_year, julian_date_from_datetime,
    julian_date_now, to_calendar_date_time, to_julian_date,
};

pub use pipeline::{observing_windows, run_pipeline, PlanReport, PlanetFailure, ReportedTransit};

pub use report::{render_table, write_csv};

pub use scheduler::{
    build_observing_windows, last_transit, match_transits_to_windows, project_transits,
    schedule_planet, DEFAULT_TRANSIT_HORIZON, SIDEREAL_DAY_LENGTH,
};

pub use types::{
    CalendarDateTime, FilterConfig, JulianDate, ObservingConfig, ObservingWindow, PlanetRecord,
    PlannerConfig, PredictedTransit, RightAscensionWindow,
};
