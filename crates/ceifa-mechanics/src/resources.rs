//! Damage kinds, mutation direction, and armor mitigation.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The kinds of resource mutation an encounter accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DamageKind {
    /// Physical damage to HP, mitigated by physical armor.
    Physical,
    /// Spiritual damage to HP, mitigated by spiritual armor.
    Spiritual,
    /// Raw change to AL (soul energy).
    Alma,
    /// Raw change to ST (stamina).
    Stamina,
    /// Healing to HP, capped at max and able to revive.
    Heal,
}

impl DamageKind {
    /// Portuguese display name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Physical => "Dano Físico",
            Self::Spiritual => "Dano Espiritual",
            Self::Alma => "Dano na Alma",
            Self::Stamina => "Dano na Stamina",
            Self::Heal => "Cura",
        }
    }
}

impl fmt::Display for DamageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Direction of a resource mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    /// Increase the resource.
    Add,
    /// Decrease the resource.
    Subtract,
}

impl Operation {
    /// Apply the operation's sign to an amount.
    pub fn signed(self, amount: i32) -> i32 {
        match self {
            Self::Add => amount,
            Self::Subtract => -amount,
        }
    }
}

/// Flat armor mitigation: the damage that gets through `armor`.
pub fn mitigated(amount: i32, armor: i32) -> i32 {
    (amount - armor).max(0)
}
