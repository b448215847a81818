//! Armor kinds and equipment slots.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The two mitigation pools armor protects against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArmorKind {
    /// Física: mitigates physical damage.
    Fisica,
    /// Espiritual: mitigates spiritual damage.
    Espiritual,
}

impl ArmorKind {
    /// Portuguese display name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Fisica => "Física",
            Self::Espiritual => "Espiritual",
        }
    }
}

impl fmt::Display for ArmorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A single armor piece occupying one equipment slot.
///
/// An unequipped piece contributes nothing, whatever its values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArmorPiece {
    /// Whether the piece is currently worn.
    pub equipped: bool,
    /// Display name.
    pub name: String,
    /// Physical mitigation value.
    pub fisica: i32,
    /// Spiritual mitigation value.
    pub espiritual: i32,
}

impl ArmorPiece {
    /// Mitigation contributed for one kind (0 while unequipped).
    pub fn value(&self, kind: ArmorKind) -> i32 {
        if !self.equipped {
            return 0;
        }
        match kind {
            ArmorKind::Fisica => self.fisica,
            ArmorKind::Espiritual => self.espiritual,
        }
    }
}

/// The three equipment slots: cabeça, superior, inferior.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArmorSlots {
    /// Head slot.
    pub cabeca: ArmorPiece,
    /// Upper-body slot.
    pub superior: ArmorPiece,
    /// Lower-body slot.
    pub inferior: ArmorPiece,
}

impl ArmorSlots {
    /// Total mitigation from equipped pieces for one kind.
    pub fn value(&self, kind: ArmorKind) -> i32 {
        self.cabeca.value(kind) + self.superior.value(kind) + self.inferior.value(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn piece(equipped: bool, fisica: i32, espiritual: i32) -> ArmorPiece {
        ArmorPiece {
            equipped,
            name: "Peça".to_string(),
            fisica,
            espiritual,
        }
    }

    #[test]
    fn unequipped_contributes_zero() {
        let p = piece(false, 5, 3);
        assert_eq!(p.value(ArmorKind::Fisica), 0);
        assert_eq!(p.value(ArmorKind::Espiritual), 0);
    }

    #[test]
    fn equipped_contributes_per_kind() {
        let p = piece(true, 5, 3);
        assert_eq!(p.value(ArmorKind::Fisica), 5);
        assert_eq!(p.value(ArmorKind::Espiritual), 3);
    }

    #[test]
    fn slots_sum_equipped_only() {
        let slots = ArmorSlots {
            cabeca: piece(true, 1, 0),
            superior: piece(true, 4, 2),
            inferior: piece(false, 9, 9),
        };
        assert_eq!(slots.value(ArmorKind::Fisica), 5);
        assert_eq!(slots.value(ArmorKind::Espiritual), 2);
    }
}
