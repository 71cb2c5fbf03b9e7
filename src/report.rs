use std::fmt::Write as _;
use std::io;

use crate::error::CatalogError;
use crate::pipeline::PlanReport;

pub fn render_table(report: &PlanReport) -> String {
    let mut out = String::new();
    for t in &report.transits {
        let _ = writeln!(
            out,
            "Name: {}, RA: {}, DEC: {}, Transit Time (JD): {:.5}, Transit Time (UTC): {}, \
             Transit Signature: {:.5}, Transit Duration (hr): {:.2}",
            t.name,
            t.right_ascension,
            t.declination,
            t.midpoint.value(),
            t.midpoint_utc,
            t.cross_section_ratio,
            t.duration_hours
        );
    }
    for failure in &report.failures {
        let _ = writeln!(out, "Skipped {}: {}", failure.name, failure.error);
    }
    let _ = writeln!(out, "{}", report.len());
    out
}

pub fn write_csv<W: io::Write>(report: &PlanReport, writer: W) -> Result<(), CatalogError> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record([
        "name",
        "ra",
        "dec",
        "transit_jd",
        "transit_utc",
        "cross_section_ratio",
        "duration_hours",
    ])?;
    for t in &report.transits {
        wtr.write_record([
            t.name.clone(),
            t.right_ascension.to_string(),
            t.declination.to_string(),
            format!("{:.6}", t.midpoint.value()),
            t.midpoint_utc.to_string(),
            format!("{:.6}", t.cross_section_ratio),
            format!("{:.4}", t.duration_hours),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}
