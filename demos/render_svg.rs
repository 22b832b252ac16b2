use std::env;
use std::fs;

use scenario_chart::api::{ScenarioChartConfig, ScenarioChartEngine};
use scenario_chart::core::{
    ContainerMetrics, PropertySummary, ScenarioFeature, ScenarioSelection, SeriesPoint,
};
use scenario_chart::render::SvgRenderer;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config =
        ScenarioChartConfig::new(ContainerMetrics::new(1280, 900)).with_reference_year(2026);
    let mut engine = ScenarioChartEngine::new(SvgRenderer::new(), config)?;

    let scenarios = [
        ("Grow Only", 310.0),
        ("Light Thin", 220.0),
        ("Heavy Thin", 95.0),
    ];
    let mut selection =
        ScenarioSelection::new(PropertySummary::new(412.5, "Westside Cascades"))
            .with_metric_key("agl_carbon");
    for (name, growth) in scenarios {
        let points: Vec<SeriesPoint> = (0..21)
            .map(|period| {
                SeriesPoint::new(
                    &format!("{}-12-31 11:59PM", 2001 + 5 * period),
                    4_200.0 + growth * f64::from(period),
                )
            })
            .collect();
        selection = selection
            .with_feature(ScenarioFeature::new(name).with_property_series("agl_carbon", points));
    }

    let report = engine.refresh(&selection)?;
    println!("charted `{}`: {} series", report.metric_key, report.series_total);

    let renderer = engine.into_renderer();
    let svg = renderer.last_svg().ok_or("no document rendered")?;
    let stats = renderer.last_stats();
    println!(
        "svg stats: {} series, {} points, {} markers",
        stats.series_drawn, stats.points_drawn, stats.markers_drawn
    );

    let output = env::temp_dir().join("scenario_chart_carbon.svg");
    fs::write(&output, svg)?;
    println!("wrote {}", output.display());

    Ok(())
}
