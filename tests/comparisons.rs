// Comparison engine tests (native): sentence branches, thresholds, article
// selection and injected fact picking. No browser APIs involved.

use dino_compare::creature::{Creature, CreatureSpec, FactPicker, HUMAN_FACT, HumanInfo};

fn dino(species: &'static str, weight: f64, height: f64, diet: &'static str) -> Creature {
    Creature::from_spec(&CreatureSpec {
        species,
        weight,
        height,
        diet,
        habitat: "Forests",
        era: "Cretaceous",
        trivia: "Fact A",
    })
}

fn visitor() -> HumanInfo {
    HumanInfo {
        name: "Al".to_string(),
        weight: 180.0,
        height: 70.0,
        diet: "omnivore".to_string(),
    }
}

/// Picker that always returns the same index.
struct Fixed(usize);

impl FactPicker for Fixed {
    fn pick(&mut self, _len: usize) -> usize {
        self.0
    }
}

#[test]
fn zero_reference_weight_hits_the_guard() {
    let trex = dino("Trex", 15000.0, 144.0, "carnivore");
    assert_eq!(trex.weight_comparison(0.0), "Your weight cannot be zero!");
}

#[test]
fn zero_reference_height_hits_the_guard() {
    let trex = dino("Trex", 15000.0, 144.0, "carnivore");
    assert_eq!(trex.height_comparison(0.0), "Your height cannot be zero!");
}

#[test]
fn equal_weight_band_is_one_percent() {
    // 181.7 / 180 is inside the band, 182 / 180 is just outside.
    let inside = dino("Trex", 181.7, 144.0, "carnivore");
    assert_eq!(
        inside.weight_comparison(180.0),
        "You and Trex weigh about the same!"
    );
    let outside = dino("Trex", 182.0, 144.0, "carnivore");
    assert_eq!(
        outside.weight_comparison(180.0),
        "Trex weighed 1.0 times more than you!"
    );
}

#[test]
fn vastly_lighter_creature_reads_as_nearly_the_same() {
    // ratio 0.5/180 < 0.01 reaches the near-zero branch (the Pigeon case).
    let pigeon = dino("Pigeon", 0.5, 9.0, "herbivore");
    assert_eq!(
        pigeon.weight_comparison(180.0),
        "You and Pigeon weigh nearly the same!"
    );
}

#[test]
fn lighter_creature_inverts_the_ratio() {
    let small = dino("Trex", 90.0, 144.0, "carnivore");
    assert_eq!(
        small.weight_comparison(180.0),
        "You weigh 2.0 times more than Trex!"
    );
}

#[test]
fn taller_creature_rounds_to_one_decimal() {
    // 144 / 70 = 2.057... -> "2.1"
    let trex = dino("Trex", 15000.0, 144.0, "carnivore");
    assert_eq!(
        trex.height_comparison(70.0),
        "Trex was 2.1 times taller than you!"
    );
}

#[test]
fn shorter_creature_inverts_the_ratio() {
    let pigeon = dino("Pigeon", 0.5, 9.0, "herbivore");
    assert_eq!(
        pigeon.height_comparison(70.0),
        "You are 7.8 times taller than Pigeon!"
    );
}

#[test]
fn matching_diet_is_shared() {
    let trex = dino("Trex", 15000.0, 144.0, "carnivore");
    assert_eq!(
        trex.diet_comparison("carnivore"),
        "You are a carnivore and so was Trex!"
    );
}

#[test]
fn diet_equality_is_case_sensitive() {
    let steg = dino("Stegosaurus", 11600.0, 79.0, "herbivore");
    assert_eq!(
        steg.diet_comparison("Herbivore"),
        "You are a Herbivore, while Stegosaurus was a herbivore."
    );
}

#[test]
fn article_selection_is_case_insensitive_on_vowels() {
    let trex = dino("Trex", 15000.0, 144.0, "carnivore");
    assert_eq!(
        trex.diet_comparison("omnivore"),
        "You are an omnivore, while Trex was a carnivore."
    );
    assert_eq!(
        trex.diet_comparison("Elephant-like diet"),
        "You are an Elephant-like diet, while Trex was a carnivore."
    );
}

#[test]
fn human_record_always_gets_the_disclaimer() {
    let info = visitor();
    let me = Creature::human(&info);
    for idx in 0..6 {
        assert_eq!(me.random_fact(&info, &mut Fixed(idx)), HUMAN_FACT);
    }
}

#[test]
fn picker_index_selects_among_six_candidates() {
    let info = visitor();
    let trex = dino("Trex", 15000.0, 144.0, "carnivore");
    assert_eq!(
        trex.random_fact(&info, &mut Fixed(0)),
        "Trex lived in Forests."
    );
    assert_eq!(
        trex.random_fact(&info, &mut Fixed(1)),
        "Trex roamed the Earth during the Cretaceous."
    );
    assert_eq!(trex.random_fact(&info, &mut Fixed(2)), "Fact A");
    assert_eq!(
        trex.random_fact(&info, &mut Fixed(3)),
        trex.weight_comparison(180.0)
    );
    assert_eq!(
        trex.random_fact(&info, &mut Fixed(4)),
        trex.height_comparison(70.0)
    );
    assert_eq!(
        trex.random_fact(&info, &mut Fixed(5)),
        trex.diet_comparison("omnivore")
    );
}
