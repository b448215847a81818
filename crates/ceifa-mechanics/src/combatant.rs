//! A combatant: one character's mutable state within an encounter.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use ceifa_core::{Character, CharacterId};

use crate::death::{self, VitalState};
use crate::effect::{ActiveEffect, CustomEffect, DotTick};

/// Unique identifier for a combatant within an encounter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CombatantId(pub Uuid);

impl CombatantId {
    /// Generate a new random combatant ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for CombatantId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CombatantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.0.to_string()[..8])
    }
}

/// An encounter participant bound to a character snapshot.
///
/// HP is deliberately unclamped below zero: negative HP is the
/// incapacitation/death signal. AL and ST stay in `[0, max]` and the
/// mental scales in `[0, 100]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Combatant {
    /// Unique id within the encounter.
    pub id: CombatantId,
    /// The character snapshot this combatant reads.
    pub character: CharacterId,
    /// Current initiative score.
    pub initiative: i32,
    /// Current hit points (may be negative).
    pub hp: i32,
    /// Current soul energy.
    pub al: i32,
    /// Current stamina.
    pub st: i32,
    /// Insanity scale (0-100).
    pub insanidade: i32,
    /// Courage scale (0-100).
    pub coragem: i32,
    /// Catalog status effects, in application order.
    pub effects: Vec<ActiveEffect>,
    /// Free-form buffs/debuffs, in application order.
    pub custom_effects: Vec<CustomEffect>,
    /// Turns until death while incapacitated.
    pub death_timer: Option<i32>,
}

impl Combatant {
    /// Summon a combatant, copying initial resources from the character.
    pub fn summon(character: &Character) -> Self {
        Self {
            id: CombatantId::new(),
            character: character.id,
            initiative: 0,
            hp: character.max_hp(),
            al: character.max_al(),
            st: character.max_st(),
            insanidade: character.insanidade,
            coragem: character.coragem,
            effects: Vec::new(),
            custom_effects: Vec::new(),
            death_timer: None,
        }
    }

    /// Current vital state.
    pub fn vital_state(&self) -> VitalState {
        death::vital_state(self.hp, self.death_timer)
    }

    /// Heal up to `max_hp`; disarms the death timer when the heal
    /// reaches the revival threshold.
    pub fn heal(&mut self, max_hp: i32, amount: i32) {
        let healed = self.hp + amount;
        self.hp = healed.min(max_hp);
        if self.death_timer.is_some() && death::revives(healed, max_hp) {
            self.death_timer = None;
        }
    }

    /// Change AL by a signed delta, clamped to `[0, max_al]`.
    pub fn adjust_al(&mut self, max_al: i32, delta: i32) {
        self.al = (self.al + delta).clamp(0, max_al);
    }

    /// Change ST by a signed delta, clamped to `[0, max_st]`.
    pub fn adjust_st(&mut self, max_st: i32, delta: i32) {
        self.st = (self.st + delta).clamp(0, max_st);
    }

    /// Change insanity by a signed delta, clamped to `[0, 100]`.
    pub fn adjust_insanidade(&mut self, delta: i32) {
        self.insanidade = (self.insanidade + delta).clamp(0, 100);
    }

    /// Change courage by a signed delta, clamped to `[0, 100]`.
    pub fn adjust_coragem(&mut self, delta: i32) {
        self.coragem = (self.coragem + delta).clamp(0, 100);
    }

    /// Apply a damage-over-time tick as raw damage: armor is bypassed,
    /// HP may go negative, AL stops at 0.
    pub fn apply_dot(&mut self, tick: &DotTick) {
        self.hp -= tick.hp;
        self.al = (self.al - tick.alma).max(0);
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use ceifa_core::Attributes;

    use super::*;

    fn character() -> Character {
        let mut c = Character::new("Cobaia");
        c.base_attributes = Attributes {
            constituicao: 2,
            porte: 1,
            forca: 1,
            ..Attributes::default()
        };
        c.insanidade = 30;
        c.coragem = 40;
        c
    }

    #[test]
    fn summon_copies_initial_resources() {
        let c = character();
        let combatant = Combatant::summon(&c);
        assert_eq!(combatant.character, c.id);
        assert_eq!(combatant.hp, c.max_hp());
        assert_eq!(combatant.al, c.max_al());
        assert_eq!(combatant.st, c.max_st());
        assert_eq!(combatant.insanidade, 30);
        assert_eq!(combatant.coragem, 40);
        assert_eq!(combatant.vital_state(), VitalState::Active);
        assert!(combatant.effects.is_empty());
        assert!(combatant.death_timer.is_none());
    }

    #[test]
    fn heal_caps_at_max() {
        let c = character();
        let mut combatant = Combatant::summon(&c);
        combatant.hp = c.max_hp() - 5;
        combatant.heal(c.max_hp(), 50);
        assert_eq!(combatant.hp, c.max_hp());
    }

    #[test]
    fn heal_below_threshold_keeps_timer() {
        let mut combatant = Combatant::summon(&character());
        combatant.hp = -10;
        combatant.death_timer = Some(3);
        combatant.heal(100, 30);
        assert_eq!(combatant.hp, 20);
        assert_eq!(combatant.death_timer, Some(3));
        assert_eq!(combatant.vital_state(), VitalState::Incapacitated);
    }

    #[test]
    fn heal_past_threshold_revives() {
        let mut combatant = Combatant::summon(&character());
        combatant.hp = -10;
        combatant.death_timer = Some(2);
        combatant.heal(100, 65);
        assert_eq!(combatant.hp, 55);
        assert_eq!(combatant.death_timer, None);
        assert_eq!(combatant.vital_state(), VitalState::Active);
    }

    #[test]
    fn al_and_st_clamp() {
        let mut combatant = Combatant::summon(&character());
        combatant.adjust_al(35, -1000);
        assert_eq!(combatant.al, 0);
        combatant.adjust_al(35, 1000);
        assert_eq!(combatant.al, 35);
        combatant.adjust_st(40, -1000);
        assert_eq!(combatant.st, 0);
    }

    #[test]
    fn mental_scales_clamp() {
        let mut combatant = Combatant::summon(&character());
        combatant.adjust_insanidade(200);
        assert_eq!(combatant.insanidade, 100);
        combatant.adjust_coragem(-200);
        assert_eq!(combatant.coragem, 0);
    }

    #[test]
    fn dot_bypasses_armor_and_floors_al() {
        let mut combatant = Combatant::summon(&character());
        combatant.hp = 3;
        combatant.al = 2;
        let tick = DotTick {
            hp: 8,
            alma: 9,
            rolls: Vec::new(),
        };
        combatant.apply_dot(&tick);
        assert_eq!(combatant.hp, -5);
        assert_eq!(combatant.al, 0);
    }

    proptest! {
        #[test]
        fn heal_never_exceeds_max(hp in -20..=100i32, amount in 0..500i32) {
            let mut combatant = Combatant::summon(&character());
            combatant.hp = hp;
            combatant.heal(100, amount);
            prop_assert!(combatant.hp <= 100);
            prop_assert!(combatant.hp >= hp);
        }

        #[test]
        fn al_stays_in_bounds(al in 0..=35i32, delta in -500..500i32) {
            let mut combatant = Combatant::summon(&character());
            combatant.al = al;
            combatant.adjust_al(35, delta);
            prop_assert!((0..=35).contains(&combatant.al));
        }
    }
}
