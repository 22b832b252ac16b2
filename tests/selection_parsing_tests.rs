use scenario_chart::ChartError;
use scenario_chart::core::{PropertySummary, ScenarioFeature, ScenarioSelection, SeriesPoint};

#[test]
fn series_rows_travel_as_stamp_value_arrays() {
    let point = SeriesPoint::new("2031-12-31 11:59PM", 1250.5);
    let json = serde_json::to_string(&point).expect("row should serialize");
    assert_eq!(json, r#"["2031-12-31 11:59PM",1250.5]"#);

    let decoded: SeriesPoint = serde_json::from_str(&json).expect("row should deserialize");
    assert_eq!(decoded, point);
}

#[test]
fn placeholder_row_travels_as_single_null_array() {
    let point = SeriesPoint::null_point();
    let json = serde_json::to_string(&point).expect("placeholder should serialize");
    assert_eq!(json, "[null]");

    let decoded: SeriesPoint = serde_json::from_str("[null]").expect("placeholder deserializes");
    assert!(decoded.is_placeholder());

    let two_nulls: SeriesPoint = serde_json::from_str("[null,null]").expect("null pair");
    assert!(two_nulls.is_placeholder());
}

#[test]
fn selection_parses_processed_scenario_payload() {
    let raw = r#"{
        "metric_key": "agl_carbon",
        "features": [
            {
                "name": "Grow Only",
                "output_property_metrics": {
                    "__all__": {
                        "agl_carbon": [
                            ["2026-12-31 11:59PM", 5200.0],
                            ["2031-12-31 11:59PM", 5900.25]
                        ]
                    }
                }
            },
            {
                "name": "Pending Run"
            }
        ],
        "property": {
            "acres": 410.3,
            "variant": "Westside Cascades"
        }
    }"#;

    let selection = ScenarioSelection::from_json_str(raw).expect("payload should parse");
    assert_eq!(selection.metric_key.as_deref(), Some("agl_carbon"));
    assert_eq!(selection.features.len(), 2);

    let rows = selection.features[0].property_series("agl_carbon");
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1].value, Some(5900.25));

    // A scenario that has not been processed yet carries no output table.
    assert!(selection.features[1].property_series("agl_carbon").is_empty());
    assert_eq!(selection.property.variant, "Westside Cascades");
}

#[test]
fn selection_json_round_trip_preserves_structure() {
    let selection = ScenarioSelection::new(PropertySummary::new(128.0, "Blue Mountains"))
        .with_metric_key("standing_timber")
        .with_feature(ScenarioFeature::new("Heavy Thin").with_property_series(
            "standing_timber",
            vec![
                SeriesPoint::new("2026-12-31 11:59PM", 310.0),
                SeriesPoint::new("2031-12-31 11:59PM", 284.5),
            ],
        ));

    let json = selection.to_json_pretty().expect("selection serializes");
    let restored = ScenarioSelection::from_json_str(&json).expect("selection deserializes");
    assert_eq!(restored, selection);
}

#[test]
fn missing_variable_and_scope_read_as_empty_series() {
    let feature = ScenarioFeature::new("Grow Only")
        .with_property_series("agl_carbon", vec![SeriesPoint::new("2026", 1.0)]);

    assert!(feature.property_series("standing_timber").is_empty());
    assert!(ScenarioFeature::new("Bare").property_series("agl_carbon").is_empty());
}

#[test]
fn validate_rejects_negative_and_non_finite_acres() {
    let negative = ScenarioSelection::new(PropertySummary::new(-1.0, "Westside Cascades"));
    assert!(matches!(
        negative.validate().expect_err("negative acres"),
        ChartError::InvalidData(_)
    ));

    let nan = ScenarioSelection::new(PropertySummary::new(f64::NAN, "Westside Cascades"));
    assert!(nan.validate().is_err());
}

#[test]
fn validate_names_the_scenario_carrying_bad_outputs() {
    let selection = ScenarioSelection::new(PropertySummary::new(50.0, "Eastside Cascades"))
        .with_feature(ScenarioFeature::new("Broken Run").with_property_series(
            "agl_carbon",
            vec![SeriesPoint::new("2026-12-31 11:59PM", f64::INFINITY)],
        ));

    let err = selection.validate().expect_err("non-finite output");
    assert!(matches!(err, ChartError::InvalidData(message) if message.contains("Broken Run")));
}
