use scenario_chart::core::{ScenarioFeature, SeriesPoint, scenario_series, value_extent};

fn processed(name: &str, variable_name: &str, values: &[(&str, f64)]) -> ScenarioFeature {
    ScenarioFeature::new(name).with_property_series(
        variable_name,
        values
            .iter()
            .map(|(stamp, value)| SeriesPoint::new(stamp, *value))
            .collect(),
    )
}

#[test]
fn one_series_per_scenario_in_selection_order() {
    let features = vec![
        processed("Grow Only", "standing_timber", &[("2026-12-31 11:59PM", 310.0)]),
        processed("Heavy Thin", "standing_timber", &[("2026-12-31 11:59PM", 120.0)]),
        processed("Clearcut", "standing_timber", &[("2026-12-31 11:59PM", 0.0)]),
    ];

    let series = scenario_series(&features, "standing_timber");
    let labels: Vec<&str> = series.iter().map(|entry| entry.label.as_str()).collect();
    assert_eq!(labels, vec!["Grow Only", "Heavy Thin", "Clearcut"]);
}

#[test]
fn unprocessed_scenario_keeps_its_slot_as_placeholder() {
    let features = vec![
        ScenarioFeature::new("Pending Run"),
        processed("Grow Only", "agl_carbon", &[("2026-12-31 11:59PM", 5200.0)]),
    ];

    let series = scenario_series(&features, "agl_carbon");
    assert_eq!(series.len(), 2);
    assert!(series[0].is_placeholder_only());
    assert_eq!(series[0].points.len(), 1);
    assert!(series[0].points[0].stamp.is_none());
    assert!(!series[1].is_placeholder_only());
}

#[test]
fn requesting_a_variable_nobody_produced_yields_all_placeholders() {
    let features = vec![
        processed("Grow Only", "agl_carbon", &[("2026-12-31 11:59PM", 5200.0)]),
        processed("Heavy Thin", "agl_carbon", &[("2026-12-31 11:59PM", 3100.0)]),
    ];

    let series = scenario_series(&features, "fire");
    assert!(series.iter().all(scenario_chart::core::ChartSeries::is_placeholder_only));
}

#[test]
fn empty_selection_produces_no_series() {
    assert!(scenario_series(&[], "agl_carbon").is_empty());
}

#[test]
fn value_extent_spans_all_series_and_skips_placeholders() {
    let features = vec![
        processed(
            "Grow Only",
            "agl_carbon",
            &[("2026-12-31 11:59PM", 5200.0), ("2031-12-31 11:59PM", 6150.5)],
        ),
        ScenarioFeature::new("Pending Run"),
        processed("Heavy Thin", "agl_carbon", &[("2026-12-31 11:59PM", 2950.0)]),
    ];

    let series = scenario_series(&features, "agl_carbon");
    assert_eq!(value_extent(&series), Some((2950.0, 6150.5)));
}

#[test]
fn value_extent_ignores_non_finite_values() {
    let features = vec![processed(
        "Hand Built",
        "agl_carbon",
        &[
            ("2026-12-31 11:59PM", f64::INFINITY),
            ("2031-12-31 11:59PM", 41.5),
            ("2036-12-31 11:59PM", f64::NEG_INFINITY),
        ],
    )];
    assert_eq!(
        value_extent(&scenario_series(&features, "agl_carbon")),
        Some((41.5, 41.5))
    );

    let all_non_finite = vec![processed(
        "Hand Built",
        "agl_carbon",
        &[("2026-12-31 11:59PM", f64::NAN)],
    )];
    assert_eq!(value_extent(&scenario_series(&all_non_finite, "agl_carbon")), None);
}

#[test]
fn value_extent_is_absent_without_present_values() {
    let series = scenario_series(&[ScenarioFeature::new("Pending Run")], "agl_carbon");
    assert_eq!(value_extent(&series), None);
}
