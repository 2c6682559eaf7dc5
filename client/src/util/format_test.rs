use super::*;

// =============================================================
// format_number / format_measure
// =============================================================

#[test]
fn whole_numbers_have_no_fraction() {
    assert_eq!(format_number(25.0), "25");
    assert_eq!(format_number(60.0), "60");
}

#[test]
fn fractions_print_shortest_form() {
    assert_eq!(format_number(28.45), "28.45");
    assert_eq!(format_number(0.1), "0.1");
}

#[test]
fn negative_zero_prints_as_zero() {
    assert_eq!(format_number(-0.0), "0");
}

#[test]
fn non_finite_numbers_print_like_a_browser() {
    assert_eq!(format_number(f64::NAN), "NaN");
    assert_eq!(format_number(f64::INFINITY), "Infinity");
    assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
}

#[test]
fn measure_appends_unit() {
    assert_eq!(format_measure(25.0, "°C"), "25 °C");
    assert_eq!(format_measure(60.0, "%"), "60 %");
    assert_eq!(format_measure(0.0, "mm"), "0 mm");
}

// =============================================================
// format_greenness / format_confidence
// =============================================================

#[test]
fn greenness_uses_two_decimals() {
    assert_eq!(format_greenness(0.42), "0.42 / 1.00");
    assert_eq!(format_greenness(0.0), "0.00 / 1.00");
    assert_eq!(format_greenness(0.126), "0.13 / 1.00");
}

#[test]
fn greenness_rounds_exact_ties_up() {
    assert_eq!(format_greenness(0.125), "0.13 / 1.00");
    assert_eq!(format_greenness(0.625), "0.63 / 1.00");
    assert_eq!(format_greenness(0.375), "0.38 / 1.00");
}

#[test]
fn greenness_near_tie_follows_binary_value() {
    // 1.005 is stored just below the tie.
    assert_eq!(format_greenness(1.005), "1.00 / 1.00");
}

#[test]
fn greenness_negative_tie_rounds_away_from_zero() {
    assert_eq!(format_greenness(-0.125), "-0.13 / 1.00");
}

#[test]
fn greenness_negative_zero_has_no_sign() {
    assert_eq!(format_greenness(-0.0), "0.00 / 1.00");
}

#[test]
fn greenness_keeps_negative_scores() {
    assert_eq!(format_greenness(-0.05), "-0.05 / 1.00");
}

#[test]
fn confidence_is_whole_percent() {
    assert_eq!(format_confidence(0.87), "87%");
    assert_eq!(format_confidence(1.0), "100%");
}

#[test]
fn confidence_half_percent_rounds_up() {
    assert_eq!(format_confidence(0.125), "13%");
    assert_eq!(format_confidence(0.005), "1%");
}

#[test]
fn fixed_handles_non_finite_values() {
    assert_eq!(format_fixed(f64::NAN, 2), "NaN");
    assert_eq!(format_fixed(f64::INFINITY, 2), "Infinity");
}

// =============================================================
// format_rupees / format_amount
// =============================================================

#[test]
fn small_amounts_are_ungrouped() {
    assert_eq!(format_rupees(500.0), "₹500");
    assert_eq!(format_rupees(0.0), "₹0");
}

#[test]
fn thousands_group_by_three() {
    assert_eq!(format_rupees(2500.0), "₹2,500");
}

#[test]
fn lakhs_group_by_two_after_thousands() {
    assert_eq!(format_rupees(450_000.0), "₹4,50,000");
    assert_eq!(format_rupees(500_000.0), "₹5,00,000");
    assert_eq!(format_amount(12_345_678.0), "1,23,45,678");
}

#[test]
fn fractions_round_to_three_digits_and_trim_zeros() {
    assert_eq!(format_amount(1234.5), "1,234.5");
    assert_eq!(format_amount(0.123_456), "0.123");
    assert_eq!(format_amount(99.9999), "100");
}

#[test]
fn negative_amounts_keep_sign() {
    assert_eq!(format_amount(-2500.0), "-2,500");
    assert_eq!(format_amount(-0.0001), "0");
}

#[test]
fn non_finite_amounts() {
    assert_eq!(format_amount(f64::INFINITY), "∞");
    assert_eq!(format_amount(f64::NAN), "NaN");
}

#[test]
fn amount_third_decimal_tie_rounds_up() {
    assert_eq!(format_amount(1.0625), "1.063");
    assert_eq!(format_rupees(2500.0625), "₹2,500.063");
}

#[test]
fn amount_ties_on_sixteenths_round_up() {
    assert_eq!(format_amount(0.4375), "0.438");
    assert_eq!(format_amount(-1.0625), "-1.063");
}
