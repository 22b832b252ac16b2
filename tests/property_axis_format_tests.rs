use proptest::prelude::*;
use scenario_chart::render::format_axis_value;

proptest! {
    #[test]
    fn grouped_ticks_read_back_to_the_rounded_value(value in -1.0e15f64..1.0e15) {
        let formatted = format_axis_value(value, "%'d");
        let parsed: i64 = formatted
            .replace(',', "")
            .parse()
            .expect("grouped tick is an integer");

        prop_assert_eq!(parsed, value.round() as i64);
    }

    #[test]
    fn grouping_splits_digits_into_threes(value in 0.0f64..1.0e15) {
        let formatted = format_axis_value(value, "%'d");
        let chunks: Vec<&str> = formatted.split(',').collect();

        prop_assert!(!chunks[0].is_empty() && chunks[0].len() <= 3);
        for chunk in &chunks[1..] {
            prop_assert_eq!(chunk.len(), 3);
            prop_assert!(chunk.chars().all(|ch| ch.is_ascii_digit()));
        }
    }

    #[test]
    fn plain_integer_format_matches_rounding(value in -1.0e9f64..1.0e9) {
        let formatted = format_axis_value(value, "%d");
        prop_assert_eq!(formatted, (value.round() as i64).to_string());
    }
}
