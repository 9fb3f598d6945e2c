// Form validation tests (native). Only the pure message selection is covered
// here; writing into the error container is browser-only glue.

use dino_compare::creature::HumanInfo;
use dino_compare::page::form::{
    MSG_BAD_HEIGHT, MSG_BAD_WEIGHT, MSG_MISSING_NAME, validation_error,
};

fn info(name: &str, height: f64, weight: f64) -> HumanInfo {
    HumanInfo {
        name: name.to_string(),
        height,
        weight,
        diet: "omnivore".to_string(),
    }
}

#[test]
fn missing_name_is_reported_first() {
    assert_eq!(validation_error(&info("", 70.0, 150.0)), Some(MSG_MISSING_NAME));
    // Name wins even when other fields are also bad.
    assert_eq!(validation_error(&info("", 0.0, 0.0)), Some(MSG_MISSING_NAME));
}

#[test]
fn non_positive_height_is_rejected() {
    assert_eq!(validation_error(&info("Al", 0.0, 150.0)), Some(MSG_BAD_HEIGHT));
    assert_eq!(validation_error(&info("Al", -3.0, 150.0)), Some(MSG_BAD_HEIGHT));
}

#[test]
fn non_numeric_height_is_rejected() {
    assert_eq!(
        validation_error(&info("Al", f64::NAN, 150.0)),
        Some(MSG_BAD_HEIGHT)
    );
}

#[test]
fn non_positive_or_non_numeric_weight_is_rejected() {
    assert_eq!(validation_error(&info("Al", 70.0, 0.0)), Some(MSG_BAD_WEIGHT));
    assert_eq!(validation_error(&info("Al", 70.0, -1.0)), Some(MSG_BAD_WEIGHT));
    assert_eq!(
        validation_error(&info("Al", 70.0, f64::NAN)),
        Some(MSG_BAD_WEIGHT)
    );
}

#[test]
fn valid_input_passes() {
    assert_eq!(validation_error(&info("Al", 70.0, 150.0)), None);
}
