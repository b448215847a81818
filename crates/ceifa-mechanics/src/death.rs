//! The incapacitation/death protocol.
//!
//! Every transition here is a deterministic arithmetic outcome, never
//! an error: dropping to 0 HP or below starts a randomized death timer,
//! healing past half max HP clears it, and the timer running out or HP
//! falling through the floor is permanent death.

use std::fmt;

use rand::rngs::StdRng;

use ceifa_core::{Attribute, Character};

use crate::dice::{Die, RollReport, roll_dice};
use crate::error::CombatResult;

/// HP below this threshold is immediate, permanent death.
pub const DEATH_FLOOR: i32 = -20;

/// Vital status derived from HP and the death timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VitalState {
    /// Above 0 HP and fighting.
    Active,
    /// At 0 HP or below, counting down the death timer.
    Incapacitated,
    /// Terminal; only removal from the roster remains.
    Dead,
}

impl VitalState {
    /// Portuguese display name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Active => "Ativo",
            Self::Incapacitated => "Incapacitado",
            Self::Dead => "Morto",
        }
    }
}

impl fmt::Display for VitalState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Derive the vital state from HP and the death timer.
///
/// An armed timer keeps a combatant incapacitated even after a partial
/// heal lifts HP above zero; only a heal past the revival threshold
/// disarms it.
pub fn vital_state(hp: i32, death_timer: Option<i32>) -> VitalState {
    if death_timer.is_some_and(|t| t <= 0) || hp < DEATH_FLOOR {
        return VitalState::Dead;
    }
    if hp <= 0 || death_timer.is_some() {
        return VitalState::Incapacitated;
    }
    VitalState::Active
}

/// True when a heal that reached `healed_hp` revives a downed combatant
/// (at least half of max HP).
pub fn revives(healed_hp: i32, max_hp: i32) -> bool {
    healed_hp * 2 >= max_hp
}

/// Roll the death timer: `max(1, 1d4 + Constituição + resilience skill)`.
///
/// The resilience skill is a ruleset parameter rather than a fixed
/// catalog entry.
pub fn roll_death_timer(
    character: &Character,
    resilience_skill: &str,
    rng: &mut StdRng,
) -> CombatResult<(i32, RollReport)> {
    let modifier = character.attribute_total(Attribute::Constituicao)
        + character.skill_total(resilience_skill);
    let report = roll_dice(
        1,
        Die::D4,
        modifier,
        &format!("Teste de Morte para {}", character.name),
        rng,
    )?;
    Ok((report.total.max(1), report))
}
