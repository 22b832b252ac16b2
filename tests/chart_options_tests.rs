use scenario_chart::core::MetricCatalog;
use scenario_chart::render::{
    AxesOptions, ChartOptions, LegendLocation, LegendPlacement, MarkerStyle, SeriesToggle,
    TimeAxisOptions, ValueAxisOptions, format_axis_value,
};

#[test]
fn default_palette_holds_eleven_colors_and_cycles() {
    let options = ChartOptions::default();
    assert_eq!(options.series_colors.len(), 11);
    assert_eq!(options.series_color(0).to_hex(), "#4bb2c5");
    assert_eq!(options.series_color(1).to_hex(), "#c5b47f");
    assert_eq!(options.series_color(2).to_hex(), "#eaa228");
    assert_eq!(options.series_color(10).to_hex(), "#0085cc");

    // A twelfth series wraps back to the first palette slot.
    assert_eq!(options.series_color(11), options.series_color(0));
}

#[test]
fn presentation_defaults_match_the_planner_chart() {
    let options = ChartOptions::default();

    assert_eq!(options.grid.background.to_hex(), "#ffffff");
    assert_eq!(options.series_defaults.line_width, 2.0);
    assert_eq!(options.series_defaults.marker_style, MarkerStyle::Square);
    assert!(!options.series_defaults.smooth);

    assert!(options.highlighter.show);
    assert_eq!(options.highlighter.size_adjust, 7.5);

    assert!(options.legend.show);
    assert!(options.legend.show_labels);
    assert_eq!(options.legend.location, LegendLocation::North);
    assert_eq!(options.legend.placement, LegendPlacement::Inside);
    assert_eq!(options.legend.font_size_px, 11.0);
    assert_eq!(options.legend.font_family[0], "Lucida Grande");
    assert_eq!(options.legend.font_family.len(), 5);
    assert_eq!(options.legend.series_toggle, SeriesToggle::Normal);
    assert_eq!(options.legend.number_rows, 1);
}

#[test]
fn options_validate_catches_degenerate_settings() {
    assert!(ChartOptions::default().validate().is_ok());

    let empty_palette = ChartOptions::default().with_series_colors(Vec::new());
    assert!(empty_palette.validate().is_err());

    let mut bad_stroke = ChartOptions::default();
    bad_stroke.series_defaults.line_width = 0.0;
    assert!(bad_stroke.validate().is_err());

    let mut bad_legend = ChartOptions::default();
    bad_legend.legend.number_rows = 0;
    assert!(bad_legend.validate().is_err());
}

#[test]
fn options_json_round_trip_keeps_hex_palette() {
    let options = ChartOptions::default();
    let json = serde_json::to_string_pretty(&options).expect("options serialize");

    assert!(json.contains("\"#4bb2c5\""));
    assert!(json.contains("\"Square\""));
    assert!(json.contains("\"North\""));

    let restored: ChartOptions = serde_json::from_str(&json).expect("options deserialize");
    assert_eq!(restored, options);
}

#[test]
fn axes_for_refresh_cover_a_century_in_ten_year_ticks() {
    let catalog = MetricCatalog::builtin();
    let descriptor = catalog.descriptor("agl_carbon").expect("carbon descriptor");
    let axes = AxesOptions::for_refresh(2026, descriptor);

    assert_eq!(axes.time.label, "Year");
    assert_eq!((axes.time.year_min, axes.time.year_max), (2026, 2127));
    assert_eq!(axes.time.min_stamp, "Jan 01, 2026 8:00AM");
    assert_eq!(axes.time.max_stamp, "Jan 01, 2127 8:00AM");
    assert_eq!(axes.time.tick_interval_years, 10);
    assert_eq!(axes.time.tick_format, "%Y");
    assert_eq!(axes.time.pad, 0.0);

    assert_eq!(axes.value.label, "Carbon (metric tons C)");
    assert_eq!(axes.value.tick_interval, 10_000.0);
    assert_eq!(axes.value.tick_format, "%'d");

    axes.validate().expect("refresh axes are valid");
}

#[test]
fn axes_validate_rejects_inverted_year_ranges() {
    let catalog = MetricCatalog::builtin();
    let descriptor = catalog.descriptor("fire").expect("fire descriptor");
    let mut axes = AxesOptions {
        time: TimeAxisOptions::for_year_span(2026),
        value: ValueAxisOptions::for_metric(descriptor),
    };
    axes.time.year_max = axes.time.year_min;

    assert!(axes.validate().is_err());
}

#[test]
fn grouped_integer_format_inserts_thousands_separators() {
    assert_eq!(format_axis_value(0.0, "%'d"), "0");
    assert_eq!(format_axis_value(999.0, "%'d"), "999");
    assert_eq!(format_axis_value(1_000.0, "%'d"), "1,000");
    assert_eq!(format_axis_value(1_234_567.2, "%'d"), "1,234,567");
    assert_eq!(format_axis_value(-1_234_567.0, "%'d"), "-1,234,567");
}

#[test]
fn other_formats_fall_back_to_plain_renderings() {
    assert_eq!(format_axis_value(42.6, "%d"), "43");
    assert_eq!(format_axis_value(12.25, "%.2f"), "12.25");
    assert_eq!(format_axis_value(f64::NAN, "%'d"), "nan");
}
