//! Tests for duty-code classification

use crate::app::models::{Destination, DutyCategory, RestDayType};
use crate::app::services::roster_processor::classifier::{
    classify_duty, destination_for, is_rest_day_code,
};

#[test]
fn test_tallied_rest_days() {
    assert_eq!(
        classify_duty(Some("D")),
        DutyCategory::Rest {
            tallied: Some(RestDayType::D)
        }
    );
    assert_eq!(
        classify_duty(Some("I")),
        DutyCategory::Rest {
            tallied: Some(RestDayType::I)
        }
    );
    assert_eq!(
        classify_duty(Some("V")),
        DutyCategory::Rest {
            tallied: Some(RestDayType::V)
        }
    );
}

#[test]
fn test_untallied_rest_days() {
    for code in ["DT", "LD"] {
        assert_eq!(
            classify_duty(Some(code)),
            DutyCategory::Rest { tallied: None },
            "{} should be a rest day without a sub-type",
            code
        );
    }
}

#[test]
fn test_missing_duty_is_empty() {
    assert_eq!(classify_duty(None), DutyCategory::Empty);
}

#[test]
fn test_placeholder_duty_is_empty() {
    assert_eq!(classify_duty(Some("----")), DutyCategory::Empty);
}

#[test]
fn test_shift_destinations() {
    let cases = [
        ("BC101", Destination::Barcelona),
        ("VL202", Destination::Valencia),
        ("AG7", Destination::Malaga),
        ("SV15", Destination::Sevilla),
        ("AL300", Destination::Alicante),
        ("MA02", Destination::Madrid),
    ];

    for (code, expected) in cases {
        assert_eq!(
            classify_duty(Some(code)),
            DutyCategory::Shift {
                destination: Some(expected)
            }
        );
    }
}

#[test]
fn test_unrecognised_code_is_shift_without_destination() {
    let category = classify_duty(Some("XX900"));
    assert!(category.is_shift());
    assert_eq!(category.destination(), None);

    // Rest-day codes only match exactly
    let category = classify_duty(Some("DX1"));
    assert!(category.is_shift());
}

#[test]
fn test_prefix_must_start_the_code() {
    assert_eq!(destination_for("1BC"), None);
    assert_eq!(destination_for("bc101"), None);
    assert_eq!(destination_for("BC"), Some(Destination::Barcelona));
}

#[test]
fn test_is_rest_day_code() {
    assert!(is_rest_day_code("LD"));
    assert!(!is_rest_day_code("----"));
    assert!(!is_rest_day_code(""));
}
