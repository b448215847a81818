//! Damage-over-time resolution at the start of a combatant's turn.

use rand::rngs::StdRng;

use crate::dice::{Roll, roller};

use super::{ActiveEffect, DotPool};

/// Per-pool damage totals and the individual rolls behind them.
#[derive(Debug, Clone, Default)]
pub struct DotTick {
    /// Raw damage to HP (armor bypassed).
    pub hp: i32,
    /// Raw damage to AL (soul energy).
    pub alma: i32,
    /// Every die rolled, tagged with its damage source.
    pub rolls: Vec<Roll>,
}

impl DotTick {
    /// True when no ranked effect produced damage.
    pub fn is_empty(&self) -> bool {
        self.rolls.is_empty()
    }

    /// Combined damage across both pools.
    pub fn total(&self) -> i32 {
        self.hp + self.alma
    }
}

/// Roll the damage dice of every ranked effect in the list.
///
/// Conditions without tick damage (and unranked instances) contribute
/// nothing. Rolls are tagged `"Dano de <source> (<rank>)"` so the
/// combined report groups per effect.
pub fn roll_dot(effects: &[ActiveEffect], rng: &mut StdRng) -> DotTick {
    let mut tick = DotTick::default();
    for effect in effects {
        let Some(rank) = effect.rank else { continue };
        let Some((expr, pool)) = effect.kind.dot(rank) else {
            continue;
        };
        let source = format!("Dano de {} ({rank})", effect.kind.dot_label());
        let mut subtotal = 0;
        for _ in 0..expr.count {
            let value = roller::roll_value(expr.die, rng);
            subtotal += value as i32;
            tick.rolls.push(Roll {
                die: expr.die,
                value,
                source: Some(source.clone()),
            });
        }
        match pool {
            DotPool::Hp => tick.hp += subtotal,
            DotPool::Alma => tick.alma += subtotal,
        }
    }
    tick
}
