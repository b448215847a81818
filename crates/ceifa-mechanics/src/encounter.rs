//! The encounter: roster orchestration over a combat state.
//!
//! `Encounter` receives user-level intents (damage, initiative, effects,
//! turn advancement) and dispatches to the resource, effect, death, and
//! initiative modules, producing roll reports along the way. Operations
//! that target a missing combatant or character are silent no-ops, the
//! forgiving behavior a live session needs; malformed inputs are errors.

use serde::{Deserialize, Serialize};

use rand::rngs::StdRng;

use ceifa_core::{ArmorKind, Character, find_character};

use crate::combatant::{Combatant, CombatantId};
use crate::death::{DEATH_FLOOR, VitalState, roll_death_timer};
use crate::dice::RollReport;
use crate::effect::{
    AddOutcome, CustomEffect, CustomEffectId, EffectKind, Rank, add_status, decrement_customs,
    decrement_statuses, remove_status, roll_dot,
};
use crate::error::{CombatError, CombatResult};
use crate::initiative::{self, initiative_order};
use crate::resources::{DamageKind, Operation, mitigated};

/// Tunable ruleset parameters for an encounter.
#[derive(Debug, Clone)]
pub struct CombatRules {
    /// Skill whose total feeds the death-timer roll.
    pub resilience_skill: String,
}

impl Default for CombatRules {
    fn default() -> Self {
        Self {
            resilience_skill: "Resistência".to_string(),
        }
    }
}

/// The serializable encounter state.
///
/// `active_index` points into the initiative-sorted view of
/// `combatants`, which is recomputed from current scores on every
/// access rather than stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombatState {
    /// Roster, in insertion order.
    pub combatants: Vec<Combatant>,
    /// Current turn counter (1-based).
    pub turn: u32,
    /// Index into the initiative-sorted view for the turn holder.
    pub active_index: usize,
}

impl Default for CombatState {
    fn default() -> Self {
        Self {
            combatants: Vec::new(),
            turn: 1,
            active_index: 0,
        }
    }
}

impl CombatState {
    /// Create an empty state at turn 1.
    pub fn new() -> Self {
        Self::default()
    }
}

/// The roster manager: owns a [`CombatState`] and a log of roll reports.
#[derive(Debug, Clone, Default)]
pub struct Encounter {
    state: CombatState,
    rules: CombatRules,
    reports: Vec<RollReport>,
}

impl Encounter {
    /// Create an empty encounter with default rules.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty encounter with custom rules.
    pub fn with_rules(rules: CombatRules) -> Self {
        Self {
            rules,
            ..Self::default()
        }
    }

    /// The current state.
    pub fn state(&self) -> &CombatState {
        &self.state
    }

    /// Replace the whole state (archive restore). No merging happens.
    pub fn restore(&mut self, state: CombatState) {
        self.state = state;
    }

    /// The rules in force.
    pub fn rules(&self) -> &CombatRules {
        &self.rules
    }

    /// Roster in insertion order.
    pub fn combatants(&self) -> &[Combatant] {
        &self.state.combatants
    }

    /// Look up a combatant by id.
    pub fn combatant(&self, id: CombatantId) -> Option<&Combatant> {
        self.state.combatants.iter().find(|c| c.id == id)
    }

    /// Current turn counter.
    pub fn turn(&self) -> u32 {
        self.state.turn
    }

    /// Index of the turn holder in the initiative-sorted view.
    pub fn active_index(&self) -> usize {
        self.state.active_index
    }

    /// The combatant currently holding the turn.
    pub fn active_combatant(&self) -> CombatResult<&Combatant> {
        let order = initiative_order(&self.state.combatants);
        order
            .get(self.state.active_index)
            .map(|&i| &self.state.combatants[i])
            .ok_or(CombatError::NoActiveCombatant)
    }

    /// Number of combatants on the roster.
    pub fn len(&self) -> usize {
        self.state.combatants.len()
    }

    /// Whether the roster is empty.
    pub fn is_empty(&self) -> bool {
        self.state.combatants.is_empty()
    }

    /// Every roll report produced so far.
    pub fn reports(&self) -> &[RollReport] {
        &self.reports
    }

    /// Take the accumulated roll reports, leaving the log empty.
    pub fn drain_reports(&mut self) -> Vec<RollReport> {
        std::mem::take(&mut self.reports)
    }

    /// Summon a character onto the roster, copying initial resources.
    pub fn add_combatant(&mut self, character: &Character) -> CombatantId {
        let combatant = Combatant::summon(character);
        let id = combatant.id;
        self.state.combatants.push(combatant);
        id
    }

    /// Remove a combatant (the only operation allowed on the dead).
    pub fn remove_combatant(&mut self, id: CombatantId) -> bool {
        let before = self.state.combatants.len();
        self.state.combatants.retain(|c| c.id != id);
        let removed = self.state.combatants.len() != before;
        if removed && self.state.active_index >= self.state.combatants.len() {
            self.state.active_index = 0;
        }
        removed
    }

    /// Roll `2d6 + speed` initiative for one combatant and record it.
    pub fn roll_initiative(
        &mut self,
        id: CombatantId,
        characters: &[Character],
        rng: &mut StdRng,
    ) -> CombatResult<()> {
        let Some(index) = self.index_of(id) else {
            return Ok(());
        };
        let Some(character) = find_character(characters, self.state.combatants[index].character)
        else {
            return Ok(());
        };
        let report = initiative::roll_initiative(character, rng)?;
        self.state.combatants[index].initiative = report.total;
        self.reports.push(report);
        Ok(())
    }

    /// Override a combatant's initiative score directly.
    pub fn set_initiative(&mut self, id: CombatantId, value: i32) {
        if let Some(index) = self.index_of(id) {
            self.state.combatants[index].initiative = value;
        }
    }

    /// Apply a resource mutation.
    ///
    /// Physical and spiritual subtractions go through armor mitigation
    /// and may push HP negative; any mutation that drives HP from
    /// positive to 0 or below rolls the death timer in the same
    /// operation. Heal ignores the operation and may revive. Mutations
    /// on the dead are no-ops.
    pub fn apply_damage(
        &mut self,
        id: CombatantId,
        characters: &[Character],
        kind: DamageKind,
        amount: i32,
        operation: Operation,
        rng: &mut StdRng,
    ) -> CombatResult<()> {
        if amount < 0 {
            return Err(CombatError::InvalidAmount(amount));
        }
        if amount == 0 {
            return Ok(());
        }
        let Some(index) = self.index_of(id) else {
            return Ok(());
        };
        let Some(character) = find_character(characters, self.state.combatants[index].character)
        else {
            return Ok(());
        };
        if self.state.combatants[index].vital_state() == VitalState::Dead {
            return Ok(());
        }

        let was_active = self.state.combatants[index].hp > 0;
        {
            let combatant = &mut self.state.combatants[index];
            match kind {
                DamageKind::Physical | DamageKind::Spiritual => {
                    let armor_kind = match kind {
                        DamageKind::Physical => ArmorKind::Fisica,
                        _ => ArmorKind::Espiritual,
                    };
                    match operation {
                        Operation::Subtract => {
                            combatant.hp -= mitigated(amount, character.armor_total(armor_kind));
                        }
                        Operation::Add => {
                            combatant.hp = (combatant.hp + amount).min(character.max_hp());
                        }
                    }
                }
                DamageKind::Heal => combatant.heal(character.max_hp(), amount),
                DamageKind::Alma => combatant.adjust_al(character.max_al(), operation.signed(amount)),
                DamageKind::Stamina => {
                    combatant.adjust_st(character.max_st(), operation.signed(amount));
                }
            }
        }
        self.check_incapacitation(index, was_active, character, rng)
    }

    /// Change a combatant's insanity scale, clamped to `[0, 100]`.
    pub fn adjust_insanidade(
        &mut self,
        id: CombatantId,
        amount: i32,
        operation: Operation,
    ) -> CombatResult<()> {
        if amount < 0 {
            return Err(CombatError::InvalidAmount(amount));
        }
        if let Some(index) = self.index_of(id) {
            self.state.combatants[index].adjust_insanidade(operation.signed(amount));
        }
        Ok(())
    }

    /// Change a combatant's courage scale, clamped to `[0, 100]`.
    pub fn adjust_coragem(
        &mut self,
        id: CombatantId,
        amount: i32,
        operation: Operation,
    ) -> CombatResult<()> {
        if amount < 0 {
            return Err(CombatError::InvalidAmount(amount));
        }
        if let Some(index) = self.index_of(id) {
            self.state.combatants[index].adjust_coragem(operation.signed(amount));
        }
        Ok(())
    }

    /// Add a catalog status effect under its stacking rule.
    pub fn add_status(
        &mut self,
        id: CombatantId,
        kind: EffectKind,
        rank: Option<Rank>,
        duration: u32,
    ) -> CombatResult<AddOutcome> {
        let Some(index) = self.index_of(id) else {
            return Ok(AddOutcome::Ignored);
        };
        if self.state.combatants[index].vital_state() == VitalState::Dead {
            return Ok(AddOutcome::Ignored);
        }
        add_status(&mut self.state.combatants[index].effects, kind, rank, duration)
    }

    /// Remove one instance of a status effect.
    pub fn remove_status(&mut self, id: CombatantId, kind: EffectKind, rank: Option<Rank>) -> bool {
        match self.index_of(id) {
            Some(index) => remove_status(&mut self.state.combatants[index].effects, kind, rank),
            None => false,
        }
    }

    /// Attach a custom buff/debuff annotation.
    pub fn add_custom_effect(
        &mut self,
        id: CombatantId,
        effect: CustomEffect,
    ) -> CombatResult<()> {
        if effect.target.is_empty() {
            return Err(CombatError::InvalidEffect(
                "custom effect needs a target".to_string(),
            ));
        }
        if effect.value == 0 {
            return Err(CombatError::InvalidEffect(
                "custom effect needs a non-zero value".to_string(),
            ));
        }
        if effect.duration == 0 {
            return Err(CombatError::InvalidEffect(
                "custom effect needs a duration of at least 1 turn".to_string(),
            ));
        }
        if let Some(index) = self.index_of(id) {
            self.state.combatants[index].custom_effects.push(effect);
        }
        Ok(())
    }

    /// Remove a custom effect by instance id.
    pub fn remove_custom_effect(&mut self, id: CombatantId, effect_id: CustomEffectId) -> bool {
        let Some(index) = self.index_of(id) else {
            return false;
        };
        let effects = &mut self.state.combatants[index].custom_effects;
        let before = effects.len();
        effects.retain(|e| e.id != effect_id);
        effects.len() != before
    }

    /// Advance to the next combatant in initiative order.
    ///
    /// In order: the outgoing holder's effect durations tick down; the
    /// index advances (a wrap increments the turn counter and counts
    /// down death timers of the incapacitated); then the incoming
    /// holder's damage-over-time is rolled as one grouped report and
    /// applied raw. No-op on an empty roster.
    pub fn advance_turn(&mut self, characters: &[Character], rng: &mut StdRng) -> CombatResult<()> {
        let count = self.state.combatants.len();
        if count == 0 {
            return Ok(());
        }

        let order = initiative_order(&self.state.combatants);
        if let Some(&outgoing) = order.get(self.state.active_index) {
            let combatant = &mut self.state.combatants[outgoing];
            decrement_statuses(&mut combatant.effects);
            decrement_customs(&mut combatant.custom_effects);
        }

        let next_index = (self.state.active_index + 1) % count;
        if next_index == 0 {
            self.state.turn += 1;
            for combatant in &mut self.state.combatants {
                if combatant.hp <= 0
                    && let Some(timer) = &mut combatant.death_timer
                    && *timer > 0
                {
                    *timer -= 1;
                }
            }
        }

        // recomputed rather than reused: initiative edits made this turn
        // must be visible to every index-based access
        let order = initiative_order(&self.state.combatants);
        let incoming = order[next_index];
        self.state.active_index = next_index;

        if self.state.combatants[incoming].vital_state() == VitalState::Dead {
            return Ok(());
        }
        let tick = roll_dot(&self.state.combatants[incoming].effects, rng);
        if tick.is_empty() {
            return Ok(());
        }
        let Some(character) = find_character(characters, self.state.combatants[incoming].character)
        else {
            return Ok(());
        };
        let was_active = self.state.combatants[incoming].hp > 0;
        self.reports.push(RollReport::new(
            format!("Danos de Efeito em {}", character.name),
            tick.rolls.clone(),
            0,
        ));
        self.state.combatants[incoming].apply_dot(&tick);
        self.check_incapacitation(incoming, was_active, character, rng)
    }

    /// Restart the sequence: turn 1, first combatant. Resources and
    /// effects are deliberately left as they are.
    pub fn reset(&mut self) {
        self.state.turn = 1;
        self.state.active_index = 0;
    }

    fn index_of(&self, id: CombatantId) -> Option<usize> {
        self.state.combatants.iter().position(|c| c.id == id)
    }

    fn check_incapacitation(
        &mut self,
        index: usize,
        was_active: bool,
        character: &Character,
        rng: &mut StdRng,
    ) -> CombatResult<()> {
        let combatant = &self.state.combatants[index];
        if was_active && combatant.hp <= 0 && combatant.hp >= DEATH_FLOOR {
            let (timer, report) = roll_death_timer(character, &self.rules.resilience_skill, rng)?;
            self.state.combatants[index].death_timer = Some(timer);
            self.reports.push(report);
        }
        Ok(())
    }
}

/// List the active effects of a combatant as display strings, e.g.
/// `"Sangramento (C)"` or `"Medo (2 turnos)"`.
pub fn effect_labels(combatant: &Combatant) -> Vec<String> {
    fn turns(duration: u32) -> String {
        if duration == 1 {
            "1 turno".to_string()
        } else {
            format!("{duration} turnos")
        }
    }
    let mut labels: Vec<String> = combatant
        .effects
        .iter()
        .map(|effect| match (effect.rank, effect.duration) {
            (Some(rank), Some(duration)) => {
                format!("{} ({rank}, {})", effect.kind, turns(duration))
            }
            (Some(rank), None) => format!("{} ({rank})", effect.kind),
            (None, Some(duration)) => format!("{} ({})", effect.kind, turns(duration)),
            (None, None) => effect.kind.to_string(),
        })
        .collect();
    labels.extend(combatant.custom_effects.iter().map(|e| {
        format!(
            "{} {} {:+} ({})",
            e.kind,
            e.target,
            e.value,
            turns(e.duration)
        )
    }));
    labels
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;

    use ceifa_core::{ArmorPiece, Attributes};

    use super::*;

    fn character(name: &str, constituicao: i32) -> Character {
        let mut c = Character::new(name);
        c.base_attributes = Attributes {
            constituicao,
            ..Attributes::default()
        };
        c
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    /// One character, one combatant, ready to be hit.
    fn solo() -> (Encounter, Vec<Character>, CombatantId) {
        let characters = vec![character("Alvo", 2)];
        let mut encounter = Encounter::new();
        let id = encounter.add_combatant(&characters[0]);
        (encounter, characters, id)
    }

    #[test]
    fn physical_damage_is_mitigated_by_armor() {
        let mut characters = vec![character("Alvo", 2)];
        characters[0].armor.superior = ArmorPiece {
            equipped: true,
            name: "Couraça".to_string(),
            fisica: 4,
            espiritual: 1,
        };
        let mut encounter = Encounter::new();
        let id = encounter.add_combatant(&characters[0]);
        let full = encounter.combatant(id).unwrap().hp;

        encounter
            .apply_damage(id, &characters, DamageKind::Physical, 10, Operation::Subtract, &mut rng())
            .unwrap();
        assert_eq!(encounter.combatant(id).unwrap().hp, full - 6);

        // damage below armor is fully absorbed
        encounter
            .apply_damage(id, &characters, DamageKind::Physical, 3, Operation::Subtract, &mut rng())
            .unwrap();
        assert_eq!(encounter.combatant(id).unwrap().hp, full - 6);
    }

    #[test]
    fn spiritual_damage_uses_spiritual_armor() {
        let mut characters = vec![character("Alvo", 2)];
        characters[0].base_armor_espiritual = 2;
        let mut encounter = Encounter::new();
        let id = encounter.add_combatant(&characters[0]);
        let full = encounter.combatant(id).unwrap().hp;

        encounter
            .apply_damage(id, &characters, DamageKind::Spiritual, 5, Operation::Subtract, &mut rng())
            .unwrap();
        assert_eq!(encounter.combatant(id).unwrap().hp, full - 3);
    }

    #[test]
    fn incapacitation_rolls_death_timer_in_same_operation() {
        let (mut encounter, characters, id) = solo();
        let full = encounter.combatant(id).unwrap().hp;

        encounter
            .apply_damage(
                id,
                &characters,
                DamageKind::Physical,
                full + 5,
                Operation::Subtract,
                &mut rng(),
            )
            .unwrap();
        let combatant = encounter.combatant(id).unwrap();
        assert_eq!(combatant.hp, -5);
        assert_eq!(combatant.vital_state(), VitalState::Incapacitated);
        assert!(combatant.death_timer.unwrap() >= 1);
        assert!(
            encounter
                .reports()
                .iter()
                .any(|r| r.description.starts_with("Teste de Morte"))
        );
    }

    #[test]
    fn damage_below_floor_is_death_regardless_of_timer() {
        let (mut encounter, characters, id) = solo();
        let full = encounter.combatant(id).unwrap().hp;

        encounter
            .apply_damage(
                id,
                &characters,
                DamageKind::Physical,
                full + 5,
                Operation::Subtract,
                &mut rng(),
            )
            .unwrap();
        assert_eq!(
            encounter.combatant(id).unwrap().vital_state(),
            VitalState::Incapacitated
        );

        encounter
            .apply_damage(id, &characters, DamageKind::Physical, 20, Operation::Subtract, &mut rng())
            .unwrap();
        let combatant = encounter.combatant(id).unwrap();
        assert_eq!(combatant.hp, -25);
        assert_eq!(combatant.vital_state(), VitalState::Dead);
    }

    #[test]
    fn revival_law() {
        let mut characters = vec![character("Alvo", 10)];
        characters[0].vantages.insert("corpo_ferro".to_string(), 5);
        assert_eq!(characters[0].max_hp(), 100);
        let mut encounter = Encounter::new();
        let id = encounter.add_combatant(&characters[0]);
        {
            let index = encounter.index_of(id).unwrap();
            encounter.state.combatants[index].hp = -10;
            encounter.state.combatants[index].death_timer = Some(3);
        }

        // a heal short of half max leaves the timer armed
        encounter
            .apply_damage(id, &characters, DamageKind::Heal, 30, Operation::Add, &mut rng())
            .unwrap();
        {
            let combatant = encounter.combatant(id).unwrap();
            assert_eq!(combatant.hp, 20);
            assert_eq!(combatant.death_timer, Some(3));
            assert_eq!(combatant.vital_state(), VitalState::Incapacitated);
        }

        // back down, then a heal past half max revives
        {
            let index = encounter.index_of(id).unwrap();
            encounter.state.combatants[index].hp = -10;
        }
        encounter
            .apply_damage(id, &characters, DamageKind::Heal, 65, Operation::Add, &mut rng())
            .unwrap();
        let combatant = encounter.combatant(id).unwrap();
        assert_eq!(combatant.hp, 55);
        assert_eq!(combatant.death_timer, None);
        assert_eq!(combatant.vital_state(), VitalState::Active);
    }

    #[test]
    fn dead_combatants_ignore_mutations() {
        let (mut encounter, characters, id) = solo();
        {
            let index = encounter.index_of(id).unwrap();
            encounter.state.combatants[index].hp = -25;
        }
        assert_eq!(encounter.combatant(id).unwrap().vital_state(), VitalState::Dead);

        encounter
            .apply_damage(id, &characters, DamageKind::Heal, 100, Operation::Add, &mut rng())
            .unwrap();
        assert_eq!(encounter.combatant(id).unwrap().hp, -25);

        let outcome = encounter
            .add_status(id, EffectKind::Poison, Some(Rank::C), 0)
            .unwrap();
        assert_eq!(outcome, AddOutcome::Ignored);

        assert!(encounter.remove_combatant(id));
        assert!(encounter.is_empty());
    }

    #[test]
    fn missing_ids_are_no_ops() {
        let (mut encounter, characters, _) = solo();
        let ghost = CombatantId::new();

        encounter
            .apply_damage(ghost, &characters, DamageKind::Physical, 10, Operation::Subtract, &mut rng())
            .unwrap();
        encounter.roll_initiative(ghost, &characters, &mut rng()).unwrap();
        assert_eq!(
            encounter.add_status(ghost, EffectKind::Trapped, None, 0).unwrap(),
            AddOutcome::Ignored
        );
        assert!(!encounter.remove_combatant(ghost));
        assert!(encounter.reports().is_empty());
    }

    #[test]
    fn missing_character_is_a_no_op() {
        let characters = vec![character("Alvo", 2)];
        let mut encounter = Encounter::new();
        let id = encounter.add_combatant(&characters[0]);
        let hp = encounter.combatant(id).unwrap().hp;

        // operation arrives with an empty character book
        encounter
            .apply_damage(id, &[], DamageKind::Physical, 10, Operation::Subtract, &mut rng())
            .unwrap();
        assert_eq!(encounter.combatant(id).unwrap().hp, hp);
    }

    #[test]
    fn negative_amount_is_rejected() {
        let (mut encounter, characters, id) = solo();
        assert!(
            encounter
                .apply_damage(id, &characters, DamageKind::Physical, -3, Operation::Subtract, &mut rng())
                .is_err()
        );
    }

    #[test]
    fn mental_scales_respond_to_intents() {
        let (mut encounter, _, id) = solo();
        encounter.adjust_insanidade(id, 30, Operation::Add).unwrap();
        encounter.adjust_insanidade(id, 150, Operation::Add).unwrap();
        assert_eq!(encounter.combatant(id).unwrap().insanidade, 100);

        encounter.adjust_coragem(id, 20, Operation::Add).unwrap();
        encounter.adjust_coragem(id, 5, Operation::Subtract).unwrap();
        assert_eq!(encounter.combatant(id).unwrap().coragem, 15);

        assert!(encounter.adjust_coragem(id, -1, Operation::Add).is_err());
    }

    #[test]
    fn resilience_skill_is_configurable() {
        let mut characters = vec![character("Alvo", 0)];
        characters[0].skills.insert("Tenacidade".to_string(), 5);
        let mut encounter = Encounter::with_rules(CombatRules {
            resilience_skill: "Tenacidade".to_string(),
        });
        assert_eq!(encounter.rules().resilience_skill, "Tenacidade");
        let id = encounter.add_combatant(&characters[0]);
        let full = encounter.combatant(id).unwrap().hp;

        encounter
            .apply_damage(
                id,
                &characters,
                DamageKind::Physical,
                full + 1,
                Operation::Subtract,
                &mut rng(),
            )
            .unwrap();
        // 1d4 + Constituição 0 + Tenacidade 5
        assert!(encounter.combatant(id).unwrap().death_timer.unwrap() >= 6);
    }

    #[test]
    fn turn_wrap_increments_counter_once() {
        let characters = vec![
            character("A", 1),
            character("B", 1),
            character("C", 1),
        ];
        let mut encounter = Encounter::new();
        let ids: Vec<_> = characters
            .iter()
            .map(|c| encounter.add_combatant(c))
            .collect();
        encounter.set_initiative(ids[0], 15);
        encounter.set_initiative(ids[1], 10);
        encounter.set_initiative(ids[2], 5);

        assert_eq!(encounter.turn(), 1);
        let start = encounter.active_index();
        for _ in 0..3 {
            encounter.advance_turn(&characters, &mut rng()).unwrap();
        }
        assert_eq!(encounter.turn(), 2);
        assert_eq!(encounter.active_index(), start);
    }

    #[test]
    fn advance_turn_on_empty_roster_is_a_no_op() {
        let mut encounter = Encounter::new();
        encounter.advance_turn(&[], &mut rng()).unwrap();
        assert_eq!(encounter.turn(), 1);
        assert!(encounter.active_combatant().is_err());
    }

    #[test]
    fn death_timer_counts_down_on_wrap_only() {
        let characters = vec![character("A", 1), character("B", 1)];
        let mut encounter = Encounter::new();
        let a = encounter.add_combatant(&characters[0]);
        let b = encounter.add_combatant(&characters[1]);
        encounter.set_initiative(a, 10);
        encounter.set_initiative(b, 5);
        {
            let index = encounter.index_of(b).unwrap();
            encounter.state.combatants[index].hp = -5;
            encounter.state.combatants[index].death_timer = Some(2);
        }

        // A -> B: no wrap yet
        encounter.advance_turn(&characters, &mut rng()).unwrap();
        assert_eq!(encounter.combatant(b).unwrap().death_timer, Some(2));

        // B -> A: wrap, timer ticks
        encounter.advance_turn(&characters, &mut rng()).unwrap();
        assert_eq!(encounter.combatant(b).unwrap().death_timer, Some(1));

        // a second wrap kills
        encounter.advance_turn(&characters, &mut rng()).unwrap();
        encounter.advance_turn(&characters, &mut rng()).unwrap();
        let combatant = encounter.combatant(b).unwrap();
        assert_eq!(combatant.death_timer, Some(0));
        assert_eq!(combatant.vital_state(), VitalState::Dead);
    }

    #[test]
    fn revived_combatant_timer_does_not_tick() {
        let characters = vec![character("A", 1), character("B", 1)];
        let mut encounter = Encounter::new();
        let a = encounter.add_combatant(&characters[0]);
        let b = encounter.add_combatant(&characters[1]);
        encounter.set_initiative(a, 10);
        encounter.set_initiative(b, 5);
        {
            // back above zero with a stale timer would be a bug elsewhere;
            // the wrap must still only tick timers of the downed
            let index = encounter.index_of(b).unwrap();
            encounter.state.combatants[index].hp = 4;
            encounter.state.combatants[index].death_timer = Some(2);
        }
        encounter.advance_turn(&characters, &mut rng()).unwrap();
        encounter.advance_turn(&characters, &mut rng()).unwrap();
        assert_eq!(encounter.combatant(b).unwrap().death_timer, Some(2));
    }

    #[test]
    fn dot_tick_fires_on_turn_start_and_reports_grouped() {
        let characters = vec![character("A", 1), character("B", 1)];
        let mut encounter = Encounter::new();
        let a = encounter.add_combatant(&characters[0]);
        let b = encounter.add_combatant(&characters[1]);
        encounter.set_initiative(a, 10);
        encounter.set_initiative(b, 5);
        encounter.add_status(b, EffectKind::Poison, Some(Rank::C), 0).unwrap();
        encounter
            .add_status(b, EffectKind::SoulPoison, Some(Rank::D), 0)
            .unwrap();
        let hp = encounter.combatant(b).unwrap().hp;
        let al = encounter.combatant(b).unwrap().al;

        // A -> B: B's poison ticks as one combined report
        encounter.advance_turn(&characters, &mut rng()).unwrap();
        let report = encounter
            .reports()
            .iter()
            .find(|r| r.description == "Danos de Efeito em B")
            .unwrap();
        assert!(report.is_grouped());
        assert_eq!(report.rolls.len(), 4); // 3d4 poison + 1d4 soul poison
        let combatant = encounter.combatant(b).unwrap();
        assert!(combatant.hp < hp);
        assert!(combatant.al < al);
        assert_eq!((hp - combatant.hp) + (al - combatant.al), report.total);
    }

    #[test]
    fn dot_that_downs_a_combatant_rolls_death_timer() {
        let characters = vec![character("A", 1), character("B", 1)];
        let mut encounter = Encounter::new();
        let a = encounter.add_combatant(&characters[0]);
        let b = encounter.add_combatant(&characters[1]);
        encounter.set_initiative(a, 10);
        encounter.set_initiative(b, 5);
        encounter
            .add_status(b, EffectKind::Bleeding, Some(Rank::D), 0)
            .unwrap();
        {
            // 2d4 always lands between 2 and 8: guaranteed down, above the floor
            let index = encounter.index_of(b).unwrap();
            encounter.state.combatants[index].hp = 2;
        }

        encounter.advance_turn(&characters, &mut rng()).unwrap();
        let combatant = encounter.combatant(b).unwrap();
        assert!(combatant.hp <= 0);
        assert_eq!(combatant.vital_state(), VitalState::Incapacitated);
        assert!(combatant.death_timer.unwrap() >= 1);
    }

    #[test]
    fn durations_decrement_at_own_turn_end_not_start() {
        let characters = vec![character("A", 1), character("B", 1)];
        let mut encounter = Encounter::new();
        let a = encounter.add_combatant(&characters[0]);
        let b = encounter.add_combatant(&characters[1]);
        encounter.set_initiative(a, 10);
        encounter.set_initiative(b, 5);
        encounter.add_status(b, EffectKind::Fear, None, 2).unwrap();

        // A's turn ends: B untouched
        encounter.advance_turn(&characters, &mut rng()).unwrap();
        assert_eq!(encounter.combatant(b).unwrap().effects[0].duration, Some(2));

        // B's turn ends: now it ticks down
        encounter.advance_turn(&characters, &mut rng()).unwrap();
        assert_eq!(encounter.combatant(b).unwrap().effects[0].duration, Some(1));

        encounter.advance_turn(&characters, &mut rng()).unwrap();
        encounter.advance_turn(&characters, &mut rng()).unwrap();
        assert!(encounter.combatant(b).unwrap().effects.is_empty());
    }

    #[test]
    fn custom_effects_are_advisory_and_expire() {
        let (mut encounter, characters, id) = solo();
        let hp = encounter.combatant(id).unwrap().hp;
        encounter
            .add_custom_effect(id, CustomEffect::new(crate::effect::CustomEffectKind::Debuff, "forca", -2, 1))
            .unwrap();
        // never folded into anything
        assert_eq!(encounter.combatant(id).unwrap().hp, hp);

        encounter.advance_turn(&characters, &mut rng()).unwrap();
        assert!(encounter.combatant(id).unwrap().custom_effects.is_empty());
    }

    #[test]
    fn custom_effect_validation() {
        let (mut encounter, _, id) = solo();
        let effect = CustomEffect::new(crate::effect::CustomEffectKind::Buff, "", 2, 3);
        assert!(encounter.add_custom_effect(id, effect).is_err());
        let effect = CustomEffect::new(crate::effect::CustomEffectKind::Buff, "forca", 0, 3);
        assert!(encounter.add_custom_effect(id, effect).is_err());
        let effect = CustomEffect::new(crate::effect::CustomEffectKind::Buff, "forca", 1, 0);
        assert!(encounter.add_custom_effect(id, effect).is_err());
    }

    #[test]
    fn remove_custom_effect_by_id() {
        let (mut encounter, _, id) = solo();
        let effect = CustomEffect::new(crate::effect::CustomEffectKind::Buff, "forca", 2, 3);
        let effect_id = effect.id;
        encounter.add_custom_effect(id, effect).unwrap();
        assert!(encounter.remove_custom_effect(id, effect_id));
        assert!(!encounter.remove_custom_effect(id, effect_id));
    }

    #[test]
    fn reset_keeps_resources_and_effects() {
        let characters = vec![character("A", 1), character("B", 1)];
        let mut encounter = Encounter::new();
        let a = encounter.add_combatant(&characters[0]);
        let b = encounter.add_combatant(&characters[1]);
        encounter.set_initiative(a, 10);
        encounter.set_initiative(b, 5);
        encounter.add_status(a, EffectKind::Trapped, None, 0).unwrap();
        encounter
            .apply_damage(a, &characters, DamageKind::Physical, 7, Operation::Subtract, &mut rng())
            .unwrap();
        let hp = encounter.combatant(a).unwrap().hp;
        encounter.advance_turn(&characters, &mut rng()).unwrap();
        encounter.advance_turn(&characters, &mut rng()).unwrap();
        assert_eq!(encounter.turn(), 2);

        encounter.reset();
        assert_eq!(encounter.turn(), 1);
        assert_eq!(encounter.active_index(), 0);
        assert_eq!(encounter.combatant(a).unwrap().hp, hp);
        assert_eq!(encounter.combatant(a).unwrap().effects.len(), 1);
    }

    #[test]
    fn active_combatant_follows_initiative() {
        let characters = vec![character("Lento", 1), character("Rápido", 1)];
        let mut encounter = Encounter::new();
        let slow = encounter.add_combatant(&characters[0]);
        let fast = encounter.add_combatant(&characters[1]);
        encounter.set_initiative(slow, 3);
        encounter.set_initiative(fast, 17);

        assert_eq!(encounter.active_combatant().unwrap().id, fast);
        encounter.advance_turn(&characters, &mut rng()).unwrap();
        assert_eq!(encounter.active_combatant().unwrap().id, slow);
    }

    #[test]
    fn restore_replaces_state_wholesale() {
        let (mut encounter, characters, id) = solo();
        encounter
            .apply_damage(id, &characters, DamageKind::Physical, 5, Operation::Subtract, &mut rng())
            .unwrap();
        let snapshot = encounter.state().clone();

        encounter
            .apply_damage(id, &characters, DamageKind::Physical, 10, Operation::Subtract, &mut rng())
            .unwrap();
        assert_ne!(encounter.state(), &snapshot);

        encounter.restore(snapshot.clone());
        assert_eq!(encounter.state(), &snapshot);
    }

    #[test]
    fn effect_labels_render() {
        let (mut encounter, _, id) = solo();
        encounter.add_status(id, EffectKind::Bleeding, Some(Rank::C), 0).unwrap();
        encounter.add_status(id, EffectKind::Fear, None, 2).unwrap();
        let labels = effect_labels(encounter.combatant(id).unwrap());
        assert_eq!(labels[0], "Sangramento (C)");
        assert_eq!(labels[1], "Medo (2 turnos)");
    }
}
