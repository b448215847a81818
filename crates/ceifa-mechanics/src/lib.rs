//! Combat resolution engine for the Ceifa campaign companion.
//!
//! Tracks a roster of combatants through an encounter: vital resources
//! with armor-mitigated damage, stacking status effects with
//! damage-over-time ticks, initiative ordering, and the randomized
//! incapacitation/death protocol. Every dice draw is reported as a
//! [`RollReport`] whose `Display` output matches the session log format
//! downstream consumers expect.

pub mod archive;
pub mod combatant;
pub mod death;
pub mod dice;
pub mod effect;
pub mod encounter;
pub mod error;
pub mod initiative;
pub mod resources;

pub use archive::{BattleArchive, SavedBattle};
pub use combatant::{Combatant, CombatantId};
pub use death::{DEATH_FLOOR, VitalState};
pub use dice::{DiceExpr, Die, Roll, RollReport, roll_dice};
pub use effect::{
    ActiveEffect, AddOutcome, CustomEffect, CustomEffectId, CustomEffectKind, DotPool, DotTick,
    EffectKind, Rank, StackRule,
};
pub use encounter::{CombatRules, CombatState, Encounter, effect_labels};
pub use error::{CombatError, CombatResult};
pub use initiative::initiative_order;
pub use resources::{DamageKind, Operation};
