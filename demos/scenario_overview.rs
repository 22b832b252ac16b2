use scenario_chart::api::{ScenarioChartConfig, ScenarioChartEngine};
use scenario_chart::core::{
    ContainerMetrics, PropertySummary, ScenarioFeature, ScenarioSelection, SeriesPoint,
};
use scenario_chart::render::NullRenderer;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config =
        ScenarioChartConfig::new(ContainerMetrics::new(1280, 900)).with_reference_year(2026);
    let mut engine = ScenarioChartEngine::new(NullRenderer::default(), config)?;

    let mut grow_only = Vec::new();
    let mut heavy_thin = Vec::new();
    for period in 0..21 {
        let stamp = format!("{}-12-31 11:59PM", 2001 + 5 * period);
        grow_only.push(SeriesPoint::new(&stamp, 4_200.0 + 310.0 * period as f64));
        heavy_thin.push(SeriesPoint::new(
            &stamp,
            4_200.0 + 120.0 * period as f64 - if period > 3 { 900.0 } else { 0.0 },
        ));
    }

    let selection = ScenarioSelection::new(PropertySummary::new(412.5, "Pacific Northwest Coast"))
        .with_metric_key("agl_carbon")
        .with_feature(ScenarioFeature::new("Grow Only").with_property_series("agl_carbon", grow_only))
        .with_feature(ScenarioFeature::new("Heavy Thin").with_property_series("agl_carbon", heavy_thin));

    let report = engine.refresh(&selection)?;
    println!("caption: {}", report.caption);
    println!(
        "series: {} scenario + {} baseline",
        report.scenario_series,
        report.series_total - report.scenario_series
    );
    if let Some(baseline) = &report.baseline {
        println!(
            "baseline: {} regional average {} tC/ac => {:.1} tC property-wide",
            baseline.variant, baseline.per_acre, baseline.total
        );
    }

    // Selecting a metric nobody knows falls back to the default with a warning.
    let stale = selection.clone().with_metric_key("co2_offsets");
    let fallback = engine.refresh(&stale)?;
    println!(
        "fallback refresh charted `{}` with {} warning(s)",
        fallback.metric_key,
        fallback.warnings.len()
    );

    let snapshot = engine.snapshot();
    println!(
        "live series: {:?} over years {:?}",
        snapshot.live_series_labels, snapshot.axis_year_range
    );

    let renderer = engine.into_renderer();
    println!(
        "renderer lifecycle: {} renders, {} destroys",
        renderer.render_count, renderer.destroy_count
    );

    Ok(())
}
