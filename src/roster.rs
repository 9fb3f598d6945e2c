//! Roster assembly for one comparison run.

use crate::creature::{Creature, CreatureSpec, HumanInfo};

/// Grid slot the human tile occupies (zero-based). Display convention only;
/// kept as a literal so the human's tile position never drifts silently.
pub const HUMAN_SLOT: usize = 4;

/// Map the dataset in order and insert the human record at [`HUMAN_SLOT`].
/// A dataset shorter than the slot degenerates to an append. The result is
/// always `dataset.len() + 1` entries.
pub fn assemble(dataset: &[CreatureSpec], human: &HumanInfo) -> Vec<Creature> {
    let mut roster: Vec<Creature> = dataset.iter().map(Creature::from_spec).collect();
    let slot = HUMAN_SLOT.min(roster.len());
    roster.insert(slot, Creature::human(human));
    roster
}
