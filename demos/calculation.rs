use chrono::TimeZone;
use chrono_tz::America::New_York;

use transit_planner::{
    build_observing_windows, cross_section_ratio, julian_date_from_datetime,
    match_transits_to_windows, schedule_planet, to_calendar_date_time, JulianDate, PlanetRecord,
    ASTRONOMICAL_UNIT_M, JUPITER_RADIUS_M, SIDEREAL_DAY_LENGTH, SOLAR_RADIUS_M,
};

fn main() {
    let planet = PlanetRecord {
        name: "WASP-52 b".to_string(),
        right_ascension: 348.49,
        declination: 8.76,
        reference_transit_epoch: JulianDate(2_455_793.681_43),
        orbital_period: 1.749_781_2,
        planet_radius: 1.27 * JUPITER_RADIUS_M,
        star_radius: 0.79 * SOLAR_RADIUS_M,
        semi_major_axis: 0.0272 * ASTRONOMICAL_UNIT_M,
    };

    // 21:30 local time on the first night of the run
    let evening = New_York.with_ymd_and_hms(2021, 9, 1, 21, 30, 0).unwrap();
    let first_night = julian_date_from_datetime(&evening);
    let now = first_night.add_days(-1.0);

    let transits = match schedule_planet(&planet, now, 20) {
        Ok(transits) => transits,
        Err(err) => {
            eprintln!("{}: {}", planet.name, err);
            return;
        }
    };
    let windows = build_observing_windows(first_night, 0.16712, SIDEREAL_DAY_LENGTH, 29);
    let observable = match_transits_to_windows(&transits, &windows);

    println!("=== Transit Prediction Example ===");
    println!("Planet: {}", planet.name);
    println!("First session starts: {} ({})", first_night, to_calendar_date_time(first_night));
    println!(
        "Cross-section ratio: {:.5}",
        cross_section_ratio(planet.planet_radius, planet.star_radius)
    );
    println!();
    println!("--- Observable transits ---");
    for t in &observable {
        println!(
            "{} ({}), duration {:.2} h",
            t.midpoint,
            to_calendar_date_time(t.midpoint),
            t.duration_hours
        );
    }
    println!("{} of {} predicted transits observable", observable.len(), transits.len());
}
