use system_intel::format::activity::{active_segment_class, INACTIVE_SEGMENT_CLASS};
use system_intel::format::{
    activation_count, active_variant, format_security, meter_offset, score_label, security_text,
    segment_classes, SecurityTier,
};

#[test]
fn test_security_tier_boundaries() {
    assert_eq!(format_security(1.0).tier, SecurityTier::High);
    assert_eq!(format_security(0.5).tier, SecurityTier::High, "0.5 is the lower bound of High Sec");
    assert_eq!(format_security(0.4999).tier, SecurityTier::Low);
    assert_eq!(format_security(0.0).tier, SecurityTier::Low, "0.0 is the lower bound of Low Sec");
    assert_eq!(format_security(-0.0001).tier, SecurityTier::Null);
    assert_eq!(format_security(-1.0).tier, SecurityTier::Null);
    assert_eq!(format_security(f64::NAN).tier, SecurityTier::Null);
}

#[test]
fn test_security_badge_values() {
    let high = format_security(0.9);
    assert_eq!(high.label, "High Sec");
    assert_eq!(high.badge_class, "bg-green-800 text-green-200");
    assert_eq!(high.meter_color, "#48bb78");

    let low = format_security(0.2);
    assert_eq!(low.label, "Low Sec");
    assert_eq!(low.badge_class, "bg-yellow-800 text-yellow-200");
    assert_eq!(low.meter_color, "#f6ad55");

    let null = format_security(-0.4);
    assert_eq!(null.label, "Null Sec");
    assert_eq!(null.badge_class, "bg-red-800 text-red-200");
    assert_eq!(null.meter_color, "#f56565");
}

#[test]
fn test_meter_offset() {
    assert_eq!(meter_offset(-1.0), 100.0);
    assert_eq!(meter_offset(0.0), 100.0);
    assert_eq!(meter_offset(0.75), 25.0);
    assert_eq!(meter_offset(1.0), 0.0);
    assert_eq!(meter_offset(2.0), 0.0);
    assert_eq!(meter_offset(f64::NAN), 100.0);
}

#[test]
fn test_security_text_one_decimal() {
    assert_eq!(security_text(0.456), "0.5");
    assert_eq!(security_text(-0.26), "-0.3");
    assert_eq!(security_text(1.0), "1.0");
}

#[test]
fn test_security_text_halves_round_away_from_zero() {
    assert_eq!(security_text(0.25), "0.3");
    assert_eq!(security_text(-0.25), "-0.3");
    assert_eq!(security_text(0.75), "0.8");
    assert_eq!(security_text(-0.75), "-0.8");
    assert_eq!(security_text(1.25), "1.3");
    assert_eq!(security_text(0.5), "0.5");
    assert_eq!(security_text(-0.0), "0.0", "negative zero has no sign");
}

#[test]
fn test_activation_count_clamps() {
    assert_eq!(activation_count(0.0, 5), 0);
    assert_eq!(activation_count(3.0, 5), 3);
    assert_eq!(activation_count(5.0, 5), 5);
    assert_eq!(activation_count(7.0, 5), 5, "scores past the segment count light every segment");
    assert_eq!(activation_count(-2.0, 5), 0, "negative scores light nothing");
    assert_eq!(activation_count(f64::NAN, 5), 0);
    assert_eq!(activation_count(2.5, 5), 3, "fractional scores round up");
}

#[test]
fn test_active_variant_by_score() {
    assert_eq!(active_variant(1.0, 0), 1);
    assert_eq!(active_variant(2.0, 0), 2);
    assert_eq!(active_variant(2.0, 1), 2);
    assert_eq!(active_variant(4.0, 0), 1);
    assert_eq!(active_variant(4.0, 3), 4);
}

#[test]
fn test_segment_classes_for_scores() {
    let none = segment_classes(0.0, 5);
    assert!(none.iter().all(|c| c == INACTIVE_SEGMENT_CLASS));

    let two = segment_classes(2.0, 5);
    assert_eq!(two[0], "activity-segment inactive-segment active-segment-2");
    assert_eq!(two[1], "activity-segment inactive-segment active-segment-2");
    assert_eq!(two[2], INACTIVE_SEGMENT_CLASS);

    let full = segment_classes(5.0, 5);
    for (index, class) in full.iter().enumerate() {
        assert_eq!(class, &active_segment_class(5.0, index));
        assert!(class.ends_with(&format!("active-segment-{}", index + 1)));
    }
}

#[test]
fn test_score_label() {
    assert_eq!(score_label(0.0), "0/5");
    assert_eq!(score_label(3.0), "3/5");
    assert_eq!(score_label(7.0), "7/5");
}
