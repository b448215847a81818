//! Status effects: the closed catalog, ranks, stacking, and ticks.
//!
//! The catalog is a closed enum so the stacking and tick rules for each
//! kind are checked exhaustively at compile time instead of being looked
//! up by string key at every operation.

pub mod stacking;
pub mod tick;

pub use stacking::{AddOutcome, add_status, decrement_customs, decrement_statuses, remove_status};
pub use tick::{DotTick, roll_dot};

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::dice::{DiceExpr, Die};
use crate::error::CombatError;

/// Severity tier of a ranked effect, weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    /// Rank D.
    D,
    /// Rank C.
    C,
    /// Rank B.
    B,
    /// Rank A.
    A,
    /// Rank S.
    S,
}

impl Rank {
    /// All ranks, weakest first.
    pub const ALL: [Rank; 5] = [Rank::D, Rank::C, Rank::B, Rank::A, Rank::S];

    /// Position in the ladder (D = 0 .. S = 4).
    pub fn index(self) -> u32 {
        match self {
            Self::D => 0,
            Self::C => 1,
            Self::B => 2,
            Self::A => 3,
            Self::S => 4,
        }
    }
}

impl FromStr for Rank {
    type Err = CombatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "D" => Ok(Self::D),
            "C" => Ok(Self::C),
            "B" => Ok(Self::B),
            "A" => Ok(Self::A),
            "S" => Ok(Self::S),
            other => Err(CombatError::InvalidRank(other.to_string())),
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            Self::D => "D",
            Self::C => "C",
            Self::B => "B",
            Self::A => "A",
            Self::S => "S",
        };
        write!(f, "{letter}")
    }
}

/// Which resource pool a damage-over-time effect drains.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DotPool {
    /// Hit points.
    Hp,
    /// Soul energy (AL).
    Alma,
}

/// How repeated applications of one effect kind combine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackRule {
    /// At most one instance; a new add replaces it only at a strictly
    /// higher rank.
    ReplaceIfHigher,
    /// Instances of distinct ranks coexist; a duplicate rank is a no-op.
    StackByRank,
    /// Single instance; a duplicate add is a no-op.
    Single,
}

/// The closed status-effect catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EffectKind {
    /// Veneno: ranked HP damage over time.
    Poison,
    /// Veneno de Alma: ranked AL damage over time.
    SoulPoison,
    /// Sangramento: ranked HP damage over time that stacks by rank.
    Bleeding,
    /// Queimado: ranked HP damage over time with a duration.
    Burned,
    /// Aprisionado: boolean condition.
    Trapped,
    /// Medo: timed condition.
    Fear,
    /// Lentidão: timed condition.
    Slow,
}

impl EffectKind {
    /// All catalog entries, in sheet order.
    pub const ALL: [EffectKind; 7] = [
        EffectKind::Poison,
        EffectKind::SoulPoison,
        EffectKind::Bleeding,
        EffectKind::Burned,
        EffectKind::Trapped,
        EffectKind::Fear,
        EffectKind::Slow,
    ];

    /// Portuguese catalog name.
    pub fn label(self) -> &'static str {
        match self {
            Self::Poison => "Veneno",
            Self::SoulPoison => "Veneno de Alma",
            Self::Bleeding => "Sangramento",
            Self::Burned => "Queimado",
            Self::Trapped => "Aprisionado",
            Self::Fear => "Medo",
            Self::Slow => "Lentidão",
        }
    }

    /// Damage-source name used in tick reports.
    pub fn dot_label(self) -> &'static str {
        match self {
            Self::Burned => "Queimadura",
            other => other.label(),
        }
    }

    /// Whether instances of this kind carry a rank.
    pub fn has_rank(self) -> bool {
        matches!(
            self,
            Self::Poison | Self::SoulPoison | Self::Bleeding | Self::Burned
        )
    }

    /// Whether instances of this kind expire after a number of turns.
    pub fn has_duration(self) -> bool {
        matches!(self, Self::Burned | Self::Fear | Self::Slow)
    }

    /// How repeated applications combine.
    pub fn stacking(self) -> StackRule {
        match self {
            Self::Poison | Self::SoulPoison => StackRule::ReplaceIfHigher,
            Self::Bleeding => StackRule::StackByRank,
            Self::Burned | Self::Trapped | Self::Fear | Self::Slow => StackRule::Single,
        }
    }

    /// Damage dice rolled at tick time for this kind at a rank, and the
    /// pool they drain. Conditions without tick damage return `None`.
    pub fn dot(self, rank: Rank) -> Option<(DiceExpr, DotPool)> {
        match self {
            Self::Poison | Self::Bleeding => {
                Some((DiceExpr::new(rank.index() + 2, Die::D4), DotPool::Hp))
            }
            Self::SoulPoison => Some((DiceExpr::new(rank.index() + 1, Die::D4), DotPool::Alma)),
            Self::Burned => {
                let die = match rank {
                    Rank::D => Die::D4,
                    Rank::C => Die::D6,
                    Rank::B => Die::D8,
                    Rank::A => Die::D10,
                    Rank::S => Die::D12,
                };
                Some((DiceExpr::new(1, die), DotPool::Hp))
            }
            Self::Trapped | Self::Fear | Self::Slow => None,
        }
    }
}

impl FromStr for EffectKind {
    type Err = CombatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "poison" | "veneno" => Ok(Self::Poison),
            "soul_poison" | "veneno de alma" => Ok(Self::SoulPoison),
            "bleeding" | "sangramento" => Ok(Self::Bleeding),
            "burned" | "queimado" => Ok(Self::Burned),
            "trapped" | "aprisionado" => Ok(Self::Trapped),
            "fear" | "medo" => Ok(Self::Fear),
            "slow" | "lentidão" | "lentidao" => Ok(Self::Slow),
            other => Err(CombatError::UnknownEffect(other.to_string())),
        }
    }
}

impl fmt::Display for EffectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One applied instance of a catalog effect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveEffect {
    /// Which catalog entry this is.
    pub kind: EffectKind,
    /// Severity, for kinds that carry one.
    pub rank: Option<Rank>,
    /// Turns remaining, for kinds that expire. `None` persists until
    /// removed or superseded.
    pub duration: Option<u32>,
}

/// Identifier for a custom effect instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CustomEffectId(pub Uuid);

impl CustomEffectId {
    /// Generate a new random id.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for CustomEffectId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CustomEffectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.0.to_string()[..8])
    }
}

/// Whether a custom effect helps or hinders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CustomEffectKind {
    /// A beneficial effect.
    Buff,
    /// A detrimental effect.
    Debuff,
}

impl fmt::Display for CustomEffectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Buff => write!(f, "Buff"),
            Self::Debuff => write!(f, "Debuff"),
        }
    }
}

/// A free-form buff/debuff annotation.
///
/// `target` and `value` are advisory display data for the table; the
/// engine never folds them into any roll or derived stat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomEffect {
    /// Unique instance id.
    pub id: CustomEffectId,
    /// Buff or debuff.
    pub kind: CustomEffectKind,
    /// Attribute or skill key the table applies this to.
    pub target: String,
    /// Magnitude shown next to the target.
    pub value: i32,
    /// Turns remaining; expires at zero.
    pub duration: u32,
}

impl CustomEffect {
    /// Create a custom effect with a fresh id.
    pub fn new(kind: CustomEffectKind, target: impl Into<String>, value: i32, duration: u32) -> Self {
        Self {
            id: CustomEffectId::new(),
            kind,
            target: target.into(),
            value,
            duration,
        }
    }
}
