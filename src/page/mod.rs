//! DOM glue: event wiring, tile rendering and the restart cycle.
//!
//! Nothing here holds Rust state between events; every click re-reads the
//! page. The compare handler runs the whole pipeline (extract, validate,
//! assemble, render) to completion, and restart puts the page back in its
//! initial shape.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, HtmlButtonElement, HtmlImageElement, HtmlInputElement, HtmlSelectElement,
    MouseEvent, window,
};

use crate::creature::{ClockPicker, Creature, FactPicker, HumanInfo};
use crate::roster;

pub mod form;

pub const COMPARE_FORM: &str = "dc-form";
pub const COMPARE_BTN: &str = "dc-compare";
pub const GRID_BOX: &str = "dc-grid";
pub const HEADER_BOX: &str = "dc-header";
pub const RESTART_BTN: &str = "dc-restart";

/// Per-species fact overrides, applied after random selection so the engine
/// stays species-agnostic. The Pigeon always tells the truth.
const FACT_OVERRIDES: &[(&str, &str)] = &[("Pigeon", "All birds are living dinosaurs.")];

pub fn fact_override(species: &str) -> Option<&'static str> {
    FACT_OVERRIDES
        .iter()
        .find(|(name, _)| *name == species)
        .map(|(_, fact)| *fact)
}

/// Wire the compare button. Called once from the `start_app()` export.
pub fn mount_page() -> Result<(), JsValue> {
    let win = window().ok_or_else(|| JsValue::from_str("no window"))?;
    let doc = win
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let doc_click = doc.clone();
    let closure = Closure::wrap(Box::new(move |evt: MouseEvent| {
        evt.prevent_default();
        if let Err(err) = run_comparison(&doc_click) {
            web_sys::console::error_1(&err);
        }
    }) as Box<dyn FnMut(_)>);
    doc.get_element_by_id(COMPARE_BTN)
        .ok_or_else(|| JsValue::from_str("missing compare button"))?
        .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// One comparison run: extract, validate, assemble, swap form for grid.
/// Validation failure leaves the page as-is apart from the error message.
fn run_comparison(doc: &Document) -> Result<(), JsValue> {
    let human = form::retrieve_human_info(doc)?;
    if !form::validate_form(doc, &human)? {
        return Ok(());
    }
    let roster = roster::assemble(crate::DINOSAURS, &human);
    hide_form(doc)?;
    render_grid(doc, &roster, &human)?;
    show_restart(doc)?;
    Ok(())
}

fn render_grid(doc: &Document, roster: &[Creature], human: &HumanInfo) -> Result<(), JsValue> {
    let grid = doc
        .get_element_by_id(GRID_BOX)
        .ok_or_else(|| JsValue::from_str("missing grid container"))?;
    grid.set_inner_html("");
    let mut picker = ClockPicker::new();
    for creature in roster {
        let tile = build_tile(doc, creature, human, &mut picker)?;
        grid.append_child(&tile)?;
    }
    Ok(())
}

/// One grid tile: heading (species, or the visitor's entered name), image
/// keyed by the lowercased species name, and a single fact line.
fn build_tile(
    doc: &Document,
    creature: &Creature,
    human: &HumanInfo,
    picker: &mut dyn FactPicker,
) -> Result<Element, JsValue> {
    let tile = doc.create_element("div")?;
    tile.set_class_name("grid-item");

    let title = if creature.is_human() {
        human.name.as_str()
    } else {
        creature.species.as_str()
    };
    let heading = doc.create_element("h3")?;
    heading.set_text_content(Some(title));
    tile.append_child(&heading)?;

    let key = if creature.is_human() {
        "human".to_string()
    } else {
        creature.species.to_lowercase()
    };
    let img: HtmlImageElement = doc.create_element("img")?.dyn_into()?;
    img.set_src(&format!("images/{key}.png"));
    img.set_alt(title);
    tile.append_child(&img)?;

    let fact = match fact_override(&creature.species) {
        Some(text) => text.to_string(),
        None => creature.random_fact(human, picker),
    };
    let line = doc.create_element("p")?;
    line.set_text_content(Some(&fact));
    tile.append_child(&line)?;

    Ok(tile)
}

fn hide_form(doc: &Document) -> Result<(), JsValue> {
    let form_el = doc
        .get_element_by_id(COMPARE_FORM)
        .ok_or_else(|| JsValue::from_str("missing form"))?;
    form_el.set_attribute("style", "display:none")?;
    Ok(())
}

/// Inject the restart button into the header (create-or-reuse by id, wired
/// once since restart removes it again).
fn show_restart(doc: &Document) -> Result<(), JsValue> {
    if doc.get_element_by_id(RESTART_BTN).is_some() {
        return Ok(());
    }
    let header = doc
        .get_element_by_id(HEADER_BOX)
        .ok_or_else(|| JsValue::from_str("missing header container"))?;
    let btn: HtmlButtonElement = doc.create_element("button")?.dyn_into()?;
    btn.set_id(RESTART_BTN);
    btn.set_text_content(Some("Restart"));

    let doc_reset = doc.clone();
    let closure = Closure::wrap(Box::new(move |_evt: MouseEvent| {
        if let Err(err) = reset_page(&doc_reset) {
            web_sys::console::error_1(&err);
        }
    }) as Box<dyn FnMut(_)>);
    btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    closure.forget();

    header.append_child(&btn)?;
    Ok(())
}

/// Back to the initial page: empty grid, cleared fields and error message,
/// restart button removed, form visible again.
fn reset_page(doc: &Document) -> Result<(), JsValue> {
    if let Some(grid) = doc.get_element_by_id(GRID_BOX) {
        grid.set_inner_html("");
    }
    reset_fields(doc)?;
    if let Some(error_box) = doc.get_element_by_id(form::ERROR_BOX) {
        error_box.set_text_content(None);
    }
    if let Some(btn) = doc.get_element_by_id(RESTART_BTN) {
        btn.remove();
    }
    if let Some(form_el) = doc.get_element_by_id(COMPARE_FORM) {
        form_el.remove_attribute("style")?;
    }
    Ok(())
}

fn reset_fields(doc: &Document) -> Result<(), JsValue> {
    for id in [
        form::NAME_INPUT,
        form::FEET_INPUT,
        form::INCHES_INPUT,
        form::WEIGHT_INPUT,
    ] {
        if let Some(el) = doc.get_element_by_id(id) {
            let input: HtmlInputElement = el.dyn_into()?;
            input.set_value("");
        }
    }
    if let Some(el) = doc.get_element_by_id(form::DIET_SELECT) {
        let select: HtmlSelectElement = el.dyn_into()?;
        select.set_selected_index(0);
    }
    Ok(())
}
