use apde_graphs::{
    BreakOptions, DEFAULT_BREAK_COUNT, format_breaks, linear_breaks, quantile_breaks,
};

fn n(count: usize) -> BreakOptions {
    BreakOptions { n: count }
}

// ------------------------ Linear breaks ------------------------

#[test]
fn linear_breaks_divide_an_exact_span_evenly() {
    let data = [10.0, 20.0, 30.0, 40.0, 50.0];
    let breaks = linear_breaks(&data, &BreakOptions::default()).unwrap();
    assert_eq!(breaks, vec![10, 20, 30, 40, 50]);
}

#[test]
fn linear_breaks_round_the_span_inward_to_whole_numbers() {
    // ceil(0.4) = 1 and floor(99.7) = 99 anchor the span.
    let breaks = linear_breaks(&[0.4, 99.7], &BreakOptions::default()).unwrap();
    assert_eq!(breaks, vec![1, 25, 50, 74, 99]);
}

#[test]
fn linear_breaks_default_to_five() {
    assert_eq!(DEFAULT_BREAK_COUNT, 5);
    let breaks = linear_breaks(&[0.0, 100.0], &BreakOptions::default()).unwrap();
    assert_eq!(breaks.len(), 5);
    assert_eq!(breaks, vec![0, 25, 50, 75, 100]);
}

#[test]
fn linear_breaks_honor_a_custom_count() {
    assert_eq!(
        linear_breaks(&[0.0, 100.0], &n(3)).unwrap(),
        vec![0, 50, 100]
    );
    assert_eq!(linear_breaks(&[0.0, 100.0], &n(2)).unwrap(), vec![0, 100]);
}

#[test]
fn linear_breaks_with_no_whole_number_in_range_are_rejected() {
    // Everything strictly between 1 and 2: no integer to anchor on.
    let err = linear_breaks(&[1.2, 1.9], &BreakOptions::default()).unwrap_err();
    assert!(err.to_string().contains("whole number"), "{err}");
    assert!(linear_breaks(&[5.5], &BreakOptions::default()).is_err());
}

#[test]
fn linear_breaks_collapse_on_a_single_whole_number() {
    // A one-point span is still a span; every break lands on it.
    let breaks = linear_breaks(&[7.0], &BreakOptions::default()).unwrap();
    assert_eq!(breaks, vec![7, 7, 7, 7, 7]);
}

// ------------------------ Quantile breaks ------------------------

#[test]
fn quantile_breaks_of_five_points_hit_the_order_statistics() {
    let data = [10.0, 20.0, 30.0, 40.0, 50.0];
    let breaks = quantile_breaks(&data, &BreakOptions::default()).unwrap();
    assert_eq!(breaks, vec![10, 20, 30, 40, 50]);
}

#[test]
fn quantile_breaks_follow_skewed_data() {
    let data = [1.0, 2.0, 3.0, 4.0, 5.0, 100.0];
    let breaks = quantile_breaks(&data, &BreakOptions::default()).unwrap();
    assert_eq!(breaks, vec![1, 2, 3, 4, 100]);
}

#[test]
fn quantile_breaks_ignore_input_order() {
    let sorted = [1.0, 2.0, 3.0, 4.0, 5.0, 100.0];
    let shuffled = [100.0, 3.0, 1.0, 5.0, 2.0, 4.0];
    assert_eq!(
        quantile_breaks(&sorted, &BreakOptions::default()).unwrap(),
        quantile_breaks(&shuffled, &BreakOptions::default()).unwrap()
    );
}

#[test]
fn quantile_breaks_endpoints_are_the_truncated_extrema() {
    let breaks = quantile_breaks(&[3.7, 9.9, 12.2], &n(2)).unwrap();
    assert_eq!(breaks, vec![3, 12]);
}

#[test]
fn quantile_breaks_truncate_toward_zero_for_negative_data() {
    // Truncation, not floor: -10.5 becomes -10.
    let breaks = quantile_breaks(&[-10.5, -5.5, -1.5], &n(3)).unwrap();
    assert_eq!(breaks, vec![-10, -5, -1]);
}

#[test]
fn breaks_are_never_decreasing() {
    let datasets: [&[f64]; 4] = [
        &[1.0, 2.0, 3.0, 4.0, 5.0, 100.0],
        &[0.4, 99.7, 12.0, 50.0],
        &[-20.0, -3.5, 14.25, 88.8],
        &[7.0, 7.0, 7.0],
    ];
    for data in datasets {
        for breaks in [
            linear_breaks(data, &BreakOptions::default()).unwrap(),
            quantile_breaks(data, &BreakOptions::default()).unwrap(),
        ] {
            assert!(
                breaks.windows(2).all(|w| w[0] <= w[1]),
                "not sorted: {breaks:?}"
            );
        }
    }
}

// ------------------------ Validation ------------------------

#[test]
fn empty_data_is_rejected() {
    assert!(linear_breaks(&[], &BreakOptions::default()).is_err());
    assert!(quantile_breaks(&[], &BreakOptions::default()).is_err());
}

#[test]
fn non_finite_data_is_rejected() {
    for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let data = [1.0, bad, 3.0];
        assert!(linear_breaks(&data, &BreakOptions::default()).is_err());
        assert!(quantile_breaks(&data, &BreakOptions::default()).is_err());
    }
}

#[test]
fn break_counts_below_two_are_rejected() {
    for bad in [0, 1] {
        let err = linear_breaks(&[0.0, 10.0], &n(bad)).unwrap_err();
        assert!(err.to_string().contains("at least 2"), "{err}");
        assert!(quantile_breaks(&[0.0, 10.0], &n(bad)).is_err());
    }
}

// ------------------------ Label formatting ------------------------

#[test]
fn format_breaks_groups_digits_per_locale() {
    let breaks = [0, 1500, 30000];
    assert_eq!(format_breaks(&breaks, "en"), vec!["0", "1,500", "30,000"]);
    assert_eq!(format_breaks(&breaks, "de"), vec!["0", "1.500", "30.000"]);
}

#[test]
fn format_breaks_locale_tags_are_case_insensitive_with_english_default() {
    assert_eq!(format_breaks(&[30000], "DE_de"), vec!["30.000"]);
    assert_eq!(format_breaks(&[30000], "no-such-tag"), vec!["30,000"]);
}

#[test]
fn format_breaks_keeps_the_sign_on_negatives() {
    assert_eq!(format_breaks(&[-30000], "en"), vec!["-30,000"]);
}
