#![cfg(feature = "svg-backend")]

use scenario_chart::api::{ScenarioChartConfig, ScenarioChartEngine};
use scenario_chart::core::{
    ContainerMetrics, PropertySummary, ScenarioFeature, ScenarioSelection, SeriesPoint,
};
use scenario_chart::render::{Renderer, SvgRenderer};

fn coastal_selection() -> ScenarioSelection {
    ScenarioSelection::new(PropertySummary::new(100.0, "Pacific Northwest Coast"))
        .with_metric_key("agl_carbon")
        .with_feature(ScenarioFeature::new("Grow Only").with_property_series(
            "agl_carbon",
            vec![
                SeriesPoint::new("2001-12-31 11:59PM", 5200.0),
                SeriesPoint::new("2006-12-31 11:59PM", 5900.0),
                SeriesPoint::new("2011-12-31 11:59PM", 6400.0),
            ],
        ))
}

#[test]
fn refresh_produces_an_svg_document() {
    let config =
        ScenarioChartConfig::new(ContainerMetrics::new(1280, 900)).with_reference_year(2026);
    let mut engine =
        ScenarioChartEngine::new(SvgRenderer::new(), config).expect("engine init");

    engine.refresh(&coastal_selection()).expect("refresh");

    let renderer = engine.into_renderer();
    let svg = renderer.last_svg().expect("document rendered");
    assert!(svg.starts_with("<?xml") || svg.starts_with("<svg"));
    assert!(svg.contains("<svg"));
    assert!(svg.contains("above-ground live tree biomass"));
    assert!(svg.contains("Regional Average (38.6 tC/ac)"));

    let stats = renderer.last_stats();
    assert_eq!(stats.series_drawn, 2);
    assert_eq!(stats.points_drawn, 5);
    assert_eq!(stats.markers_drawn, 5);
}

#[test]
fn extreme_value_magnitudes_still_render() {
    let config =
        ScenarioChartConfig::new(ContainerMetrics::new(1280, 900)).with_reference_year(2026);
    let mut engine =
        ScenarioChartEngine::new(SvgRenderer::new(), config).expect("engine init");

    let selection = ScenarioSelection::new(PropertySummary::new(100.0, "Pacific Northwest Coast"))
        .with_metric_key("agl_carbon")
        .with_feature(ScenarioFeature::new("Grow Only").with_property_series(
            "agl_carbon",
            vec![
                SeriesPoint::new("2001-12-31 11:59PM", 1.0e24),
                SeriesPoint::new("2006-12-31 11:59PM", 2.0e24),
            ],
        ));

    let report = engine.refresh(&selection).expect("refresh");
    assert!(report.rendered);

    let renderer = engine.into_renderer();
    assert!(renderer.last_svg().is_some());
    assert_eq!(renderer.last_stats().series_drawn, 2);
}

#[test]
fn destroy_releases_the_document() {
    let config =
        ScenarioChartConfig::new(ContainerMetrics::new(1280, 900)).with_reference_year(2026);
    let mut engine =
        ScenarioChartEngine::new(SvgRenderer::new(), config).expect("engine init");

    engine.refresh(&coastal_selection()).expect("first refresh");
    engine.refresh(&coastal_selection()).expect("second refresh");

    let mut renderer = engine.into_renderer();
    assert!(renderer.last_svg().is_some(), "latest document is kept");

    renderer.destroy().expect("destroy");
    assert!(renderer.last_svg().is_none());
    assert_eq!(renderer.last_stats().points_drawn, 0);
}

#[test]
fn backend_validates_figures_before_drawing() {
    let mut renderer = SvgRenderer::new();
    assert_eq!(renderer.backend_name(), "plotters+svg");
    assert!(renderer.last_svg().is_none());

    renderer.destroy().expect("destroy on empty backend");
    assert!(renderer.last_svg().is_none());
    assert_eq!(renderer.last_stats().series_drawn, 0);
}
