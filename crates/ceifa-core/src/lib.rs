//! Core character model for the Ceifa campaign companion.
//!
//! Defines the character sheet snapshot that the combat engine reads:
//! attributes, skills, races, vantages, armor, leveling, soul alignment,
//! and the derived stats computed from them (max resources, speed, total
//! armor per kind). The combat engine never mutates a [`Character`];
//! it only copies initial resources out of one and reads derived stats
//! at operation time.

pub mod armor;
pub mod attribute;
pub mod character;
pub mod error;
pub mod leveling;
pub mod race;
pub mod skill;
pub mod vantage;

pub use armor::{ArmorKind, ArmorPiece, ArmorSlots};
pub use attribute::{Attribute, Attributes};
pub use character::{Character, CharacterId, SoulAlignment, find_character};
pub use error::{CoreError, CoreResult};
pub use leveling::{LevelData, cumulative_resource_bonuses, level_data};
pub use race::{Race, RaceTraits, SkillChoices};
pub use vantage::{BLINDADO_ARMOR, Cost, VantageBonuses, VantageDef, vantage};
