use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::core::scenario::{PropertySummary, SeriesPoint};
use crate::core::series::ChartSeries;
use crate::error::{ChartError, ChartResult};

/// First stamp of the flat baseline series.
pub const BASELINE_START_STAMP: &str = "2001-12-31 11:59PM";

/// Last stamp of the flat baseline series.
pub const BASELINE_END_STAMP: &str = "2120-12-31 11:59PM";

/// Simulator variants with a published regional carbon average.
pub const KNOWN_VARIANTS: [&str; 6] = [
    "Pacific Northwest Coast",
    "South Central Oregon",
    "Eastside Cascades",
    "Inland California and Southern Cascades",
    "Westside Cascades",
    "Blue Mountains",
];

/// Regional average of above-ground live tree carbon for a simulator
/// variant, in metric tons of carbon per acre. Carbon, not CO2.
#[must_use]
pub fn regional_average_per_acre(variant: &str) -> Option<Decimal> {
    match variant {
        "Pacific Northwest Coast" => Some(Decimal::new(386, 1)),
        "South Central Oregon" => Some(Decimal::new(132, 1)),
        "Eastside Cascades" => Some(Decimal::new(132, 1)),
        "Inland California and Southern Cascades" => Some(Decimal::new(236, 1)),
        "Westside Cascades" => Some(Decimal::new(321, 1)),
        "Blue Mountains" => Some(Decimal::new(104, 1)),
        _ => None,
    }
}

/// Flat whole-property reference series derived from the regional average.
#[derive(Debug, Clone, PartialEq)]
pub struct BaselineOverlay {
    pub per_acre: Decimal,
    /// Regional average scaled to the property, in metric tons of carbon.
    pub total: f64,
    pub series: ChartSeries,
}

/// Baseline overlay for `property`, absent when its variant has no
/// published regional average.
pub fn baseline_overlay(property: &PropertySummary) -> ChartResult<Option<BaselineOverlay>> {
    let Some(per_acre) = regional_average_per_acre(&property.variant) else {
        return Ok(None);
    };

    let total = decimal_to_f64(per_acre, "regional average")? * property.acres;
    let label = format!("Regional Average ({per_acre} tC/ac)");
    let series = ChartSeries::new(
        &label,
        vec![
            SeriesPoint::new(BASELINE_START_STAMP, total),
            SeriesPoint::new(BASELINE_END_STAMP, total),
        ],
    );
    Ok(Some(BaselineOverlay {
        per_acre,
        total,
        series,
    }))
}

fn decimal_to_f64(value: Decimal, field_name: &str) -> ChartResult<f64> {
    value.to_f64().ok_or_else(|| {
        ChartError::InvalidData(format!("{field_name} cannot be represented as f64"))
    })
}
