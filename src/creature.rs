//! Creature records and the comparison engine.
//!
//! Everything in this module is pure: comparison sentences are functions of a
//! record's fields and the supplied human reference values, and random fact
//! selection goes through the [`FactPicker`] trait so callers (and tests)
//! control the source of randomness.

/// Species name reserved for the visitor's own record.
pub const HUMAN_SPECIES: &str = "Human";

/// Fixed sentence shown instead of a fact when the record is the human.
pub const HUMAN_FACT: &str = "You're not a dinosaur, so you already know your own facts!";

// Comparison thresholds. Branch order in the comparison functions matters:
// the equal band is checked before the near-zero band, and the two overlap
// around ratio = 0 only for degenerate inputs.
const EQUAL_BAND: f64 = 0.01;
const NEAR_ZERO: f64 = 0.01;

/// Static source fields for one species, the shape of the built-in dataset.
#[derive(Clone, Copy, Debug)]
pub struct CreatureSpec {
    pub species: &'static str,
    pub weight: f64,  // pounds
    pub height: f64,  // inches
    pub diet: &'static str,
    pub habitat: &'static str,
    pub era: &'static str,
    pub trivia: &'static str,
}

/// Validated form output for one comparison run.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct HumanInfo {
    pub name: String,
    pub weight: f64,
    pub height: f64,
    pub diet: String,
}

/// One roster entry: a species, or the visitor as the synthetic `"Human"`
/// record. Built fresh on every run and never mutated afterwards.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct Creature {
    pub species: String,
    pub weight: f64,
    pub height: f64,
    pub diet: String,
    pub habitat: String,
    pub era: String,
    pub trivia: String,
}

impl Creature {
    pub fn from_spec(spec: &CreatureSpec) -> Self {
        Self {
            species: spec.species.to_string(),
            weight: spec.weight,
            height: spec.height,
            diet: spec.diet.to_string(),
            habitat: spec.habitat.to_string(),
            era: spec.era.to_string(),
            trivia: spec.trivia.to_string(),
        }
    }

    /// The visitor's record: reserved species name, empty text fields.
    pub fn human(info: &HumanInfo) -> Self {
        Self {
            species: HUMAN_SPECIES.to_string(),
            weight: info.weight,
            height: info.height,
            diet: info.diet.clone(),
            habitat: String::new(),
            era: String::new(),
            trivia: String::new(),
        }
    }

    pub fn is_human(&self) -> bool {
        self.species == HUMAN_SPECIES
    }

    /// Weight sentence relative to a reference weight. A zero reference gets
    /// an explanatory sentence rather than a division.
    pub fn weight_comparison(&self, human_weight: f64) -> String {
        if human_weight == 0.0 {
            return "Your weight cannot be zero!".to_string();
        }
        let ratio = self.weight / human_weight;
        if (ratio - 1.0).abs() < EQUAL_BAND {
            format!("You and {} weigh about the same!", self.species)
        } else if ratio < NEAR_ZERO {
            format!("You and {} weigh nearly the same!", self.species)
        } else if ratio > 1.0 {
            format!("{} weighed {:.1} times more than you!", self.species, ratio)
        } else {
            format!("You weigh {:.1} times more than {}!", 1.0 / ratio, self.species)
        }
    }

    /// Height sentence, same structure and thresholds as the weight one.
    pub fn height_comparison(&self, human_height: f64) -> String {
        if human_height == 0.0 {
            return "Your height cannot be zero!".to_string();
        }
        let ratio = self.height / human_height;
        if (ratio - 1.0).abs() < EQUAL_BAND {
            format!("You and {} are about the same height!", self.species)
        } else if ratio < NEAR_ZERO {
            format!("You and {} are nearly the same height!", self.species)
        } else if ratio > 1.0 {
            format!("{} was {:.1} times taller than you!", self.species, ratio)
        } else {
            format!("You are {:.1} times taller than {}!", 1.0 / ratio, self.species)
        }
    }

    /// Diet sentence. Equality with the creature's diet is a case-sensitive
    /// exact match; article selection is case-insensitive on the first letter.
    pub fn diet_comparison(&self, human_diet: &str) -> String {
        let article = indefinite_article(human_diet);
        if human_diet == self.diet {
            format!("You are {} {} and so was {}!", article, human_diet, self.species)
        } else {
            format!(
                "You are {} {}, while {} was {} {}.",
                article,
                human_diet,
                self.species,
                indefinite_article(&self.diet),
                self.diet
            )
        }
    }

    /// One of six candidate sentences, chosen by the picker: habitat, era,
    /// stored trivia, and the three comparisons against `human`. The human
    /// record always gets the fixed disclaimer. No caching between calls.
    pub fn random_fact(&self, human: &HumanInfo, picker: &mut dyn FactPicker) -> String {
        if self.is_human() {
            return HUMAN_FACT.to_string();
        }
        let facts = [
            format!("{} lived in {}.", self.species, self.habitat),
            format!("{} roamed the Earth during the {}.", self.species, self.era),
            self.trivia.clone(),
            self.weight_comparison(human.weight),
            self.height_comparison(human.height),
            self.diet_comparison(&human.diet),
        ];
        let idx = picker.pick(facts.len()) % facts.len();
        facts[idx].clone()
    }
}

fn indefinite_article(word: &str) -> &'static str {
    match word.chars().next().map(|c| c.to_ascii_lowercase()) {
        Some('a' | 'e' | 'i' | 'o' | 'u') => "an",
        _ => "a",
    }
}

/// Source of fact indices. `pick` returns a value in `0..len`.
pub trait FactPicker {
    fn pick(&mut self, len: usize) -> usize;
}

/// Wall-clock seeded linear congruential picker (not crypto secure). With the
/// `rng` feature the seed comes from browser entropy instead of the clock.
pub struct ClockPicker {
    state: u64,
}

impl ClockPicker {
    pub fn new() -> Self {
        Self { state: seed() }
    }
}

impl Default for ClockPicker {
    fn default() -> Self {
        Self::new()
    }
}

impl FactPicker for ClockPicker {
    fn pick(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        (self.state >> 16) as usize % len
    }
}

fn seed() -> u64 {
    #[cfg(feature = "rng")]
    {
        let mut buf = [0u8; 8];
        if getrandom::getrandom(&mut buf).is_ok() {
            return u64::from_le_bytes(buf);
        }
    }
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0) as u64
}
