//! Dino Compare core crate.
//!
//! Browser infographic that compares the visitor's height, weight and diet
//! against a fixed set of dinosaur species and renders the result as a grid
//! of fact tiles. The comparison engine and roster assembly are pure Rust and
//! run under native `cargo test`; all DOM access lives in the `page` module
//! and is reached only through the `start_app()` export.

use wasm_bindgen::prelude::*;

pub mod creature;
pub mod page;
pub mod roster;

use creature::CreatureSpec;

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

// -----------------------------------------------------------------------------
// Static species dataset (weights in pounds, heights in inches). Read-only;
// the roster is rebuilt from it on every comparison run.
// -----------------------------------------------------------------------------

pub const DINOSAURS: &[CreatureSpec] = &[
    CreatureSpec {
        species: "Triceratops",
        weight: 13000.0,
        height: 114.0,
        diet: "herbivore",
        habitat: "North America",
        era: "Late Cretaceous",
        trivia: "Triceratops was first described in 1889 by Othniel Charles Marsh.",
    },
    CreatureSpec {
        species: "Tyrannosaurus Rex",
        weight: 11905.0,
        height: 144.0,
        diet: "carnivore",
        habitat: "North America",
        era: "Late Cretaceous",
        trivia: "The largest known Tyrannosaurus Rex skull measures in at 5 feet long.",
    },
    CreatureSpec {
        species: "Anklyosaurus",
        weight: 10500.0,
        height: 55.0,
        diet: "herbivore",
        habitat: "North America and Asia",
        era: "Late Cretaceous",
        trivia: "Anklyosaurus survived for approximately 135 million years.",
    },
    CreatureSpec {
        species: "Brachiosaurus",
        weight: 70000.0,
        height: 372.0,
        diet: "herbivore",
        habitat: "North America",
        era: "Late Jurassic",
        trivia: "An asteroid was named 9954 Brachiosaurus in 1991.",
    },
    CreatureSpec {
        species: "Stegosaurus",
        weight: 11600.0,
        height: 79.0,
        diet: "herbivore",
        habitat: "North America, Europe and Asia",
        era: "Late Jurassic to Early Cretaceous",
        trivia: "The Stegosaurus had between 17 and 22 separate plates and flat spines.",
    },
    CreatureSpec {
        species: "Elasmosaurus",
        weight: 16000.0,
        height: 59.0,
        diet: "carnivore",
        habitat: "Oceans",
        era: "Late Cretaceous",
        trivia: "Elasmosaurus was a marine reptile first discovered in Kansas.",
    },
    CreatureSpec {
        species: "Pteranodon",
        weight: 44.0,
        height: 20.0,
        diet: "carnivore",
        habitat: "North America",
        era: "Late Cretaceous",
        trivia: "Actually a flying reptile, the Pteranodon is not a dinosaur.",
    },
    CreatureSpec {
        species: "Pigeon",
        weight: 0.5,
        height: 9.0,
        diet: "herbivore",
        habitat: "every continent except Antarctica",
        era: "Holocene",
        trivia: "All birds are living dinosaurs.",
    },
];

// -----------------------------------------------------------------------------
// Unified entrypoint
// -----------------------------------------------------------------------------

#[wasm_bindgen]
pub fn start_app() -> Result<(), JsValue> {
    page::mount_page()
}
