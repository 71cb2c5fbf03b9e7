use transit_planner::catalog::*;
use transit_planner::error::CatalogError;
use transit_planner::geometry::{ASTRONOMICAL_UNIT_M, JUPITER_RADIUS_M, SOLAR_RADIUS_M};
use transit_planner::types::{FilterConfig, JulianDate, PlanetRecord, RightAscensionWindow};

macro_rules! assert_approx {
    ($left:expr, $right:expr, $tol:expr) => {
        let (l, r) = ($left as f64, $right as f64);
        assert!(
            (l - r).abs() <= $tol,
            "assert_approx failed: left={}, right={}, diff={}, tol={}",
            l, r, (l - r).abs(), $tol
        );
    };
}

const HEADER: &str = "# name,detection_type,mag_v,ra,dec,radius,star_radius,orbital_period,\
                      semi_major_axis,tconj,tzero_tr";

fn catalog(rows: &[&str]) -> Catalog {
    let text = std::iter::once(HEADER)
        .chain(rows.iter().copied())
        .collect::<Vec<_>>()
        .join("\n");
    Catalog::from_reader(text.as_bytes()).unwrap()
}

fn names(rows: &[&CatalogRow]) -> Vec<String> {
    rows.iter().map(|r| r.name().to_string()).collect()
}

// ── IsNumeric ──

#[test]
fn test_is_numeric_accepts() {
    for cell in ["12.5", "0", "-3", "1e5", "2459000.123"] {
        assert!(is_numeric(cell), "{:?}", cell);
    }
}

#[test]
fn test_is_numeric_rejects() {
    for cell in ["", "1e", "5.", "nan", "12 ", "abc"] {
        assert!(!is_numeric(cell), "{:?}", cell);
    }
}

#[test]
fn test_is_numeric_is_a_loose_heuristic() {
    assert!(is_numeric("abc1"));
    assert!(is_numeric("1.2.3"));
}

#[test]
fn test_number_drops_unparseable_cells() {
    let row = CatalogRow::new(["x", "1.2.3", "abc1", "4.5", ""]);
    assert_eq!(row.number(1), None);
    assert_eq!(row.number(2), None);
    assert_eq!(row.number(3), Some(4.5));
    assert_eq!(row.number(4), None);
    assert_eq!(row.number(17), None);
}

// ── Loading ──

#[test]
fn test_load_ragged_rows() {
    let cat = catalog(&["A b,Primary Transit,10.0", "B b,Primary Transit,9.0,1.0,2.0"]);
    assert_eq!(cat.rows.len(), 2);
    assert_eq!(cat.rows[0].name(), "A b");
    assert_eq!(cat.rows[0].get(3), "");
    assert_eq!(cat.rows[1].get(4), "2.0");
}

#[test]
fn test_load_empty_catalog() {
    assert!(matches!(
        Catalog::from_reader("".as_bytes()),
        Err(CatalogError::Empty)
    ));
}

#[test]
fn test_load_missing_file() {
    assert!(matches!(
        Catalog::from_path("/nonexistent/exoplanet_catalog.csv"),
        Err(CatalogError::Io(_))
    ));
}

// ── ColumnMap ──

#[test]
fn test_column_map_follows_header_order() {
    let cat = catalog(&[]);
    let columns = ColumnMap::from_header(&cat.header).unwrap();
    assert_eq!(columns.detection_type, 1);
    assert_eq!(columns.ra, 3);
    assert_eq!(columns.dec, 4);
    assert_eq!(columns.tzero_tr, 10);

    let mut reordered = cat.header.clone();
    reordered.swap(3, 4);
    let columns = ColumnMap::from_header(&reordered).unwrap();
    assert_eq!(columns.ra, 4);
    assert_eq!(columns.dec, 3);
}

#[test]
fn test_column_map_missing_column() {
    let header: Vec<String> = ["name", "ra", "dec"].iter().map(|s| s.to_string()).collect();
    match ColumnMap::from_header(&header) {
        Err(CatalogError::MissingColumn(name)) => assert_eq!(name, "detection_type"),
        other => panic!("unexpected {:?}", other),
    }
}

// ── Filters ──

#[test]
fn test_filter_by_detection_method() {
    let cat = catalog(&[
        "A b,Primary Transit",
        "B b,Radial Velocity",
        "C b,Primary Transit",
    ]);
    let kept = filter_by_detection_method(&cat.candidates(), 1, "Primary Transit");
    assert_eq!(names(&kept), ["A b", "C b"]);
}

#[test]
fn test_filter_by_magnitude() {
    let cat = catalog(&[
        "A b,Primary Transit,12.0",
        "B b,Primary Transit,12.01",
        "C b,Primary Transit,",
        "D b,Primary Transit,8.",
        "E b,Primary Transit,-1.5",
    ]);
    let kept = filter_by_magnitude(&cat.candidates(), 2, 12.0);
    assert_eq!(names(&kept), ["A b", "E b"]);
}

#[test]
fn test_filter_by_declination_inclusive() {
    let cat = catalog(&[
        "A b,,,,-9.0",
        "B b,,,,-9.5",
        "C b,,,,45",
        "D b,,,,91",
        "E b,,,,",
    ]);
    let kept = filter_by_declination(&cat.candidates(), 4, -9.0, 91.0);
    assert_eq!(names(&kept), ["A b", "C b", "D b"]);
}

#[test]
fn test_filter_by_right_ascension_wraps() {
    let cat = catalog(&[
        "A b,,,295.0",
        "B b,,,200.0",
        "C b,,,359.9",
        "D b,,,0",
        "E b,,,7.5",
        "F b,,,7.6",
    ]);
    let window = RightAscensionWindow {
        start: 295.0,
        end: 7.5,
    };
    let kept = filter_by_right_ascension(&cat.candidates(), 3, window);
    assert_eq!(names(&kept), ["A b", "C b", "D b", "E b"]);
}

#[test]
fn test_filter_by_right_ascension_alternative_bounds() {
    let window = RightAscensionWindow {
        start: 300.0,
        end: 10.0,
    };
    assert!(window.contains(305.0));
    assert!(window.contains(10.0));
    assert!(!window.contains(150.0));

    let plain = RightAscensionWindow {
        start: 270.0,
        end: 330.0,
    };
    assert!(plain.contains(300.0));
    assert!(!plain.contains(5.0));
}

#[test]
fn test_filter_by_cross_section() {
    let cat = catalog(&[
        "A b,,,,,1.0,1.0",
        "B b,,,,,0.3,1.0",
        "C b,,,,,1.0,",
        "D b,,,,,,1.0",
        "E b,,,,,0.5,0.5",
    ]);
    let kept = filter_by_cross_section(&cat.candidates(), 5, 6, 0.008);
    assert_eq!(names(&kept), ["A b", "E b"]);
}

#[test]
fn test_filter_by_ephemeris() {
    let cat = catalog(&[
        "A b,,,,,,,3.0,0.05,2459000.0,",
        "B b,,,,,,,3.0,0.05,,2459000.0",
        "C b,,,,,,,3.0,0.05,,",
        "D b,,,,,,,,0.05,2459000.0,",
        "E b,,,,,,,3.0,,2459000.0,",
    ]);
    let columns = ColumnMap::from_header(&cat.header).unwrap();
    let kept = filter_by_ephemeris(&cat.candidates(), &columns);
    assert_eq!(names(&kept), ["A b", "B b"]);
}

#[test]
fn test_filters_leave_source_untouched() {
    let cat = catalog(&["A b,Primary Transit,14.0", "B b,Primary Transit,9.0"]);
    let before = cat.clone();
    let all = cat.candidates();
    let kept = filter_by_magnitude(&all, 2, 12.0);
    assert_eq!(kept.len(), 1);
    assert_eq!(all.len(), 2);
    assert_eq!(cat, before);
}

#[test]
fn test_apply_filters_default_config() {
    let cat = catalog(&[
        "Keep b,Primary Transit,10.0,300.0,20.0,1.0,1.0,3.0,0.05,2459000.0,",
        "Method b,Astrometry,10.0,300.0,20.0,1.0,1.0,3.0,0.05,2459000.0,",
        "Dim b,Primary Transit,13.0,300.0,20.0,1.0,1.0,3.0,0.05,2459000.0,",
        "South b,Primary Transit,10.0,300.0,-40.0,1.0,1.0,3.0,0.05,2459000.0,",
        "Day b,Primary Transit,10.0,150.0,20.0,1.0,1.0,3.0,0.05,2459000.0,",
        "Small b,Primary Transit,10.0,300.0,20.0,0.2,1.0,3.0,0.05,2459000.0,",
        "NoEpoch b,Primary Transit,10.0,300.0,20.0,1.0,1.0,3.0,0.05,,",
    ]);
    let columns = ColumnMap::from_header(&cat.header).unwrap();
    let kept = apply_filters(&cat, &columns, &FilterConfig::default());
    assert_eq!(names(&kept), ["Keep b"]);
}

// ── PlanetRecord ──

#[test]
fn test_planet_record_units() {
    let cat = catalog(&["Keep b,Primary Transit,10.0,300.0,20.0,1.5,0.8,3.0,0.05,2459000.5,"]);
    let columns = ColumnMap::from_header(&cat.header).unwrap();
    let planet = PlanetRecord::from_row(&cat.rows[0], &columns).unwrap();
    assert_eq!(planet.name, "Keep b");
    assert_eq!(planet.right_ascension, 300.0);
    assert_eq!(planet.declination, 20.0);
    assert_eq!(planet.reference_transit_epoch, JulianDate(2_459_000.5));
    assert_eq!(planet.orbital_period, 3.0);
    assert_approx!(planet.planet_radius, 1.5 * JUPITER_RADIUS_M, 1e-3);
    assert_approx!(planet.star_radius, 0.8 * SOLAR_RADIUS_M, 1e-3);
    assert_approx!(planet.semi_major_axis, 0.05 * ASTRONOMICAL_UNIT_M, 1e-3);
}

#[test]
fn test_planet_record_prefers_tconj() {
    let cat = catalog(&[
        "Both b,,,300.0,20.0,1.0,1.0,3.0,0.05,2459001.0,2459000.0",
        "Zero b,,,300.0,20.0,1.0,1.0,3.0,0.05,,2459000.0",
    ]);
    let columns = ColumnMap::from_header(&cat.header).unwrap();
    let both = PlanetRecord::from_row(&cat.rows[0], &columns).unwrap();
    let zero = PlanetRecord::from_row(&cat.rows[1], &columns).unwrap();
    assert_eq!(both.reference_transit_epoch, JulianDate(2_459_001.0));
    assert_eq!(zero.reference_transit_epoch, JulianDate(2_459_000.0));
}

#[test]
fn test_planet_record_incomplete_row() {
    let cat = catalog(&["Bare b,Primary Transit,10.0,300.0"]);
    let columns = ColumnMap::from_header(&cat.header).unwrap();
    assert_eq!(PlanetRecord::from_row(&cat.rows[0], &columns), None);
}
