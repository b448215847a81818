//! Turn ordering and initiative rolls.

use std::cmp::Reverse;

use rand::rngs::StdRng;

use ceifa_core::Character;

use crate::combatant::Combatant;
use crate::dice::{Die, RollReport, roll_dice};
use crate::error::CombatResult;

/// Indices into `combatants` sorted by initiative descending.
///
/// The sort is stable, so ties keep roster insertion order. Callers
/// recompute this view before every index-based access instead of
/// materializing it into state.
pub fn initiative_order(combatants: &[Combatant]) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..combatants.len()).collect();
    indices.sort_by_key(|&i| Reverse(combatants[i].initiative));
    indices
}

/// Roll `2d6 + speed` for a character's initiative.
pub fn roll_initiative(character: &Character, rng: &mut StdRng) -> CombatResult<RollReport> {
    roll_dice(
        2,
        Die::D6,
        character.speed(),
        &format!("Iniciativa de {}", character.name),
        rng,
    )
}
