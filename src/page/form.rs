//! Form gateway: field extraction and validation.
//!
//! `retrieve_human_info` reads raw field values and combines the feet/inches
//! pair into total inches; non-numeric text becomes NaN and is rejected by
//! validation rather than by the extraction step. `validation_error` is pure
//! so the three failure messages are testable without a browser.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlInputElement, HtmlSelectElement};

use crate::creature::HumanInfo;

pub const NAME_INPUT: &str = "dc-name";
pub const FEET_INPUT: &str = "dc-feet";
pub const INCHES_INPUT: &str = "dc-inches";
pub const WEIGHT_INPUT: &str = "dc-weight";
pub const DIET_SELECT: &str = "dc-diet";
pub const ERROR_BOX: &str = "dc-error";

pub const MSG_MISSING_NAME: &str = "Please enter your name.";
pub const MSG_BAD_HEIGHT: &str = "Please enter a valid height.";
pub const MSG_BAD_WEIGHT: &str = "Please enter a valid weight.";

fn input_value(doc: &Document, id: &str) -> Result<String, JsValue> {
    let input: HtmlInputElement = doc
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("missing input #{id}")))?
        .dyn_into()?;
    Ok(input.value())
}

// Empty fields count as zero (so inches may be left blank); anything else
// that fails to parse becomes NaN and is caught by validation.
fn numeric(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

pub fn retrieve_human_info(doc: &Document) -> Result<HumanInfo, JsValue> {
    let name = input_value(doc, NAME_INPUT)?.trim().to_string();
    let feet = numeric(&input_value(doc, FEET_INPUT)?);
    let inches = numeric(&input_value(doc, INCHES_INPUT)?);
    let weight = numeric(&input_value(doc, WEIGHT_INPUT)?);
    let diet: HtmlSelectElement = doc
        .get_element_by_id(DIET_SELECT)
        .ok_or_else(|| JsValue::from_str("missing diet select"))?
        .dyn_into()?;
    Ok(HumanInfo {
        name,
        weight,
        height: feet * 12.0 + inches,
        diet: diet.value(),
    })
}

/// Exactly three failures, checked in order: missing name, invalid height,
/// invalid weight. NaN fails the finite check, zero and negatives fail the
/// positive check.
pub fn validation_error(info: &HumanInfo) -> Option<&'static str> {
    if info.name.is_empty() {
        return Some(MSG_MISSING_NAME);
    }
    if !info.height.is_finite() || info.height <= 0.0 {
        return Some(MSG_BAD_HEIGHT);
    }
    if !info.weight.is_finite() || info.weight <= 0.0 {
        return Some(MSG_BAD_WEIGHT);
    }
    None
}

/// Report the first validation failure in the error container, or clear any
/// prior message on success. Returns whether the input passed.
pub fn validate_form(doc: &Document, info: &HumanInfo) -> Result<bool, JsValue> {
    let error_box = doc
        .get_element_by_id(ERROR_BOX)
        .ok_or_else(|| JsValue::from_str("missing error container"))?;
    match validation_error(info) {
        Some(msg) => {
            error_box.set_text_content(Some(msg));
            Ok(false)
        }
        None => {
            error_box.set_text_content(None);
            Ok(true)
        }
    }
}
