//! Dice types, expressions, rolling, and reporting.
//!
//! Supports standard polyhedral dice (d4 through d100) and custom dice.
//! Every roll is packaged as a [`RollReport`] whose `Display` output is
//! the literal session-log format.

pub mod roll;
pub mod roller;

pub use roll::{Roll, RollReport};
pub use roller::{roll_dice, roll_value};

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CombatError, CombatResult};

/// A polyhedral die type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Die {
    /// Four-sided die.
    D4,
    /// Six-sided die.
    D6,
    /// Eight-sided die.
    D8,
    /// Ten-sided die.
    D10,
    /// Twelve-sided die.
    D12,
    /// Twenty-sided die.
    D20,
    /// Percentile die (1-100).
    D100,
    /// A die with a custom number of sides.
    Custom(u32),
}

impl Die {
    /// Returns the number of sides on this die.
    pub fn sides(self) -> u32 {
        match self {
            Self::D4 => 4,
            Self::D6 => 6,
            Self::D8 => 8,
            Self::D10 => 10,
            Self::D12 => 12,
            Self::D20 => 20,
            Self::D100 => 100,
            Self::Custom(n) => n,
        }
    }

    /// Die with the given number of sides (at least 2).
    pub fn from_sides(sides: u32) -> CombatResult<Self> {
        match sides {
            4 => Ok(Self::D4),
            6 => Ok(Self::D6),
            8 => Ok(Self::D8),
            10 => Ok(Self::D10),
            12 => Ok(Self::D12),
            20 => Ok(Self::D20),
            100 => Ok(Self::D100),
            n if n >= 2 => Ok(Self::Custom(n)),
            n => Err(CombatError::InvalidDice(format!(
                "a die needs at least 2 sides, got {n}"
            ))),
        }
    }
}

impl FromStr for Die {
    type Err = CombatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        let digits = lower.strip_prefix('d').ok_or_else(|| {
            CombatError::InvalidDice(format!("expected a die like \"d6\", got \"{s}\""))
        })?;
        let sides: u32 = digits
            .parse()
            .map_err(|_| CombatError::InvalidDice(format!("bad side count in \"{s}\"")))?;
        Self::from_sides(sides)
    }
}

impl fmt::Display for Die {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "d{}", self.sides())
    }
}

/// A dice expression: `count` dice of one type, e.g. `2d4`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceExpr {
    /// How many dice to roll.
    pub count: u32,
    /// Which die to roll.
    pub die: Die,
}

impl DiceExpr {
    /// Create a dice expression.
    pub fn new(count: u32, die: Die) -> Self {
        Self { count, die }
    }
}

impl FromStr for DiceExpr {
    type Err = CombatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        let (count_str, sides_str) = lower.split_once('d').ok_or_else(|| {
            CombatError::InvalidDice(format!("expected an expression like \"2d6\", got \"{s}\""))
        })?;
        let count = if count_str.is_empty() {
            1
        } else {
            count_str
                .parse()
                .map_err(|_| CombatError::InvalidDice(format!("bad die count in \"{s}\"")))?
        };
        let sides: u32 = sides_str
            .parse()
            .map_err(|_| CombatError::InvalidDice(format!("bad side count in \"{s}\"")))?;
        Ok(Self::new(count, Die::from_sides(sides)?))
    }
}

impl fmt::Display for DiceExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.count, self.die)
    }
}
