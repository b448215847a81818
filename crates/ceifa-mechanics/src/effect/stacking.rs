//! Applying, removing, and expiring status effects.

use crate::error::{CombatError, CombatResult};

use super::{ActiveEffect, CustomEffect, EffectKind, Rank, StackRule};

/// Outcome of attempting to add a status effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// A new instance joined the list.
    Added,
    /// An existing instance was superseded by a higher rank.
    Replaced,
    /// The stacking rule rejected the add.
    Ignored,
}

/// Add a status effect to the list under its kind's stacking rule.
///
/// A ranked kind without a rank, or a timed kind with a zero duration,
/// is a caller contract violation.
pub fn add_status(
    effects: &mut Vec<ActiveEffect>,
    kind: EffectKind,
    rank: Option<Rank>,
    duration: u32,
) -> CombatResult<AddOutcome> {
    if kind.has_rank() && rank.is_none() {
        return Err(CombatError::InvalidEffect(format!("{kind} requires a rank")));
    }
    if kind.has_duration() && duration == 0 {
        return Err(CombatError::InvalidEffect(format!(
            "{kind} requires a duration of at least 1 turn"
        )));
    }
    let fresh = ActiveEffect {
        kind,
        rank: if kind.has_rank() { rank } else { None },
        duration: kind.has_duration().then_some(duration),
    };
    match kind.stacking() {
        StackRule::ReplaceIfHigher => {
            if let Some(existing) = effects.iter_mut().find(|e| e.kind == kind) {
                if fresh.rank > existing.rank {
                    *existing = fresh;
                    Ok(AddOutcome::Replaced)
                } else {
                    Ok(AddOutcome::Ignored)
                }
            } else {
                effects.push(fresh);
                Ok(AddOutcome::Added)
            }
        }
        StackRule::StackByRank => {
            if effects.iter().any(|e| e.kind == kind && e.rank == fresh.rank) {
                Ok(AddOutcome::Ignored)
            } else {
                effects.push(fresh);
                Ok(AddOutcome::Added)
            }
        }
        StackRule::Single => {
            if effects.iter().any(|e| e.kind == kind) {
                Ok(AddOutcome::Ignored)
            } else {
                effects.push(fresh);
                Ok(AddOutcome::Added)
            }
        }
    }
}

/// Remove one instance of a status effect.
///
/// Kinds that stack by rank need the rank to pick the instance; for the
/// rest the first match by kind is removed.
pub fn remove_status(effects: &mut Vec<ActiveEffect>, kind: EffectKind, rank: Option<Rank>) -> bool {
    let position = effects.iter().position(|e| {
        e.kind == kind && (kind.stacking() != StackRule::StackByRank || e.rank == rank)
    });
    match position {
        Some(index) => {
            effects.remove(index);
            true
        }
        None => false,
    }
}

/// End-of-turn expiry: timed effects lose one turn and drop at zero.
/// Untimed effects persist.
pub fn decrement_statuses(effects: &mut Vec<ActiveEffect>) {
    for effect in effects.iter_mut() {
        if let Some(duration) = &mut effect.duration {
            *duration = duration.saturating_sub(1);
        }
    }
    effects.retain(|e| e.duration != Some(0));
}

/// End-of-turn expiry for custom effects.
pub fn decrement_customs(effects: &mut Vec<CustomEffect>) {
    for effect in effects.iter_mut() {
        effect.duration = effect.duration.saturating_sub(1);
    }
    effects.retain(|e| e.duration > 0);
}
