use chrono::{Datelike, Utc};

use crate::core::series::ChartSeries;

/// Planning periods between consecutive rows of a scenario series, in years.
pub const YEAR_STEP: i32 = 5;

/// Years the x axis spans beyond the reference year.
pub const AXIS_SPAN_YEARS: i32 = 101;

/// Calendar year charts anchor to when no reference year is pinned.
#[must_use]
pub fn current_year() -> i32 {
    Utc::now().year()
}

/// Rewrites the stamps of the lead series onto the five-year planning grid.
///
/// Row `i` gets the year `reference_year + 5 * i` spliced over its four-digit
/// year prefix; the remainder of the stamp is kept. The axis derives its tick
/// sequence from the lead series, so only the first series is rewritten.
/// Rows without a stamp are left alone.
pub fn relabel_lead_series(series: &mut [ChartSeries], reference_year: i32) {
    let Some(lead) = series.first_mut() else {
        return;
    };
    for (index, point) in lead.points.iter_mut().enumerate() {
        if let Some(stamp) = point.stamp.as_mut() {
            let year = reference_year + YEAR_STEP * index as i32;
            *stamp = format!("{year}{}", stamp.get(4..).unwrap_or(""));
        }
    }
}

/// Inclusive axis year range anchored at `reference_year`.
#[must_use]
pub fn axis_year_span(reference_year: i32) -> (i32, i32) {
    (reference_year, reference_year + AXIS_SPAN_YEARS)
}

/// Axis date bounds in stamp notation, morning of January 1st on both ends.
#[must_use]
pub fn axis_date_bounds(reference_year: i32) -> (String, String) {
    let (year_min, year_max) = axis_year_span(reference_year);
    (axis_edge_stamp(year_min), axis_edge_stamp(year_max))
}

/// Four-digit year prefix of a stamp, when present.
#[must_use]
pub fn stamp_year(stamp: &str) -> Option<i32> {
    stamp.get(..4)?.parse().ok()
}

fn axis_edge_stamp(year: i32) -> String {
    format!("Jan 01, {year} 8:00AM")
}
