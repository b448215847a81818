//! The character snapshot and its derived stats.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::armor::{ArmorKind, ArmorSlots};
use crate::attribute::{Attribute, Attributes};
use crate::leveling::cumulative_resource_bonuses;
use crate::race::{RACE_CHOICE_BONUS, Race};
use crate::vantage::{BLINDADO_ARMOR, VantageBonuses, vantage};

/// Unique identifier for a character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CharacterId(pub Uuid);

impl CharacterId {
    /// Generate a new random character ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for CharacterId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CharacterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.0.to_string()[..8])
    }
}

/// The soul alignment ladder, from pristine to unhinged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SoulAlignment {
    /// Imaculado.
    Imaculado,
    /// Corajoso.
    Corajoso,
    /// Neutro.
    #[default]
    Neutro,
    /// Louco.
    Louco,
    /// Insano.
    Insano,
}

impl SoulAlignment {
    /// Portuguese display name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Imaculado => "Imaculado",
            Self::Corajoso => "Corajoso",
            Self::Neutro => "Neutro",
            Self::Louco => "Louco",
            Self::Insano => "Insano",
        }
    }

    /// Modifier to resistance tests granted by the alignment.
    pub fn resist_modifier(self) -> i32 {
        match self {
            Self::Imaculado => 2,
            Self::Corajoso => 1,
            Self::Neutro => 0,
            Self::Louco => -1,
            Self::Insano => -2,
        }
    }

    /// Modifier to courage tests granted by the alignment.
    pub fn courage_modifier(self) -> i32 {
        self.resist_modifier()
    }
}

impl fmt::Display for SoulAlignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A character sheet snapshot.
///
/// Holds the bought values (attributes, skills, vantages, armor) and
/// derives everything the combat engine reads: max resources, speed,
/// and total armor per kind. The combat engine treats this as read-only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Character {
    /// Unique identifier combatants reference.
    pub id: CharacterId,
    /// Display name.
    pub name: String,
    /// Whether this sheet belongs to an NPC.
    pub npc: bool,
    /// Race.
    pub race: Race,
    /// Race attribute pick (+2), if the race offers one.
    pub race_attribute_choice: Option<Attribute>,
    /// Race skill picks, in pick order (bonus values come from the race).
    pub race_skill_choices: Vec<String>,
    /// Character level (1-10).
    pub level: u8,
    /// Soul alignment.
    pub alignment: SoulAlignment,
    /// Bought attribute scores, before race bonuses.
    pub base_attributes: Attributes,
    /// Bought skill points by skill name.
    pub skills: HashMap<String, i32>,
    /// Selected vantages: catalog id to level taken.
    pub vantages: HashMap<String, u32>,
    /// Armor kind chosen for the `blindado` vantage, if taken.
    pub blindado_choice: Option<ArmorKind>,
    /// Innate physical armor before equipment.
    pub base_armor_fisica: i32,
    /// Innate spiritual armor before equipment.
    pub base_armor_espiritual: i32,
    /// Equipment slots.
    pub armor: ArmorSlots,
    /// Insanity scale (0-100), copied onto a combatant when summoned.
    pub insanidade: i32,
    /// Courage scale (0-100), copied onto a combatant when summoned.
    pub coragem: i32,
}

impl Character {
    /// Create a fresh level-1 human character with empty buys.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: CharacterId::new(),
            name: name.into(),
            npc: false,
            race: Race::Humano,
            race_attribute_choice: None,
            race_skill_choices: Vec::new(),
            level: 1,
            alignment: SoulAlignment::Neutro,
            base_attributes: Attributes::default(),
            skills: HashMap::new(),
            vantages: HashMap::new(),
            blindado_choice: None,
            base_armor_fisica: 0,
            base_armor_espiritual: 0,
            armor: ArmorSlots::default(),
            insanidade: 0,
            coragem: 0,
        }
    }

    /// Total score of one attribute: bought + race bonus + race pick.
    pub fn attribute_total(&self, attr: Attribute) -> i32 {
        let mut total = self.base_attributes.get(attr);
        for (bonus_attr, bonus) in self.race.traits().attributes {
            if *bonus_attr == attr {
                total += bonus;
            }
        }
        if self.race_attribute_choice == Some(attr) {
            total += RACE_CHOICE_BONUS;
        }
        total
    }

    /// Skill bonus granted by the race (fixed plus picks).
    pub fn race_skill_bonus(&self, skill: &str) -> i32 {
        let traits = self.race.traits();
        let mut bonus = traits
            .skills
            .iter()
            .find(|(name, _)| *name == skill)
            .map_or(0, |(_, value)| *value);
        if let Some(choices) = &traits.skill_choices {
            for (index, chosen) in self.race_skill_choices.iter().enumerate() {
                if chosen == skill {
                    bonus += choices.values.get(index).copied().unwrap_or(0);
                }
            }
        }
        bonus
    }

    /// Total score of one skill: bought + race + vantage riders.
    pub fn skill_total(&self, skill: &str) -> i32 {
        let mut total = self.skills.get(skill).copied().unwrap_or(0) + self.race_skill_bonus(skill);
        if skill == "Sabedoria" && self.vantages.contains_key("estudioso") {
            total += 1;
        }
        total
    }

    /// Sum of the flat bonuses of every selected vantage, scaled by level.
    ///
    /// Ids missing from the catalog are skipped rather than erroring,
    /// so a sheet saved against an older catalog still computes.
    pub fn vantage_bonuses(&self) -> VantageBonuses {
        let mut total = VantageBonuses::default();
        for (id, level) in &self.vantages {
            let Some(def) = vantage(id) else { continue };
            let level = *level as i32;
            total.hp += def.bonuses.hp * level;
            total.al += def.bonuses.al * level;
            total.st += def.bonuses.st * level;
            total.speed += def.bonuses.speed * level;
        }
        total
    }

    /// Derived maximum HP.
    pub fn max_hp(&self) -> i32 {
        let (hp_bonus, _, _) = cumulative_resource_bonuses(self.level);
        30 + self.attribute_total(Attribute::Constituicao) * 5 + hp_bonus + self.vantage_bonuses().hp
    }

    /// Derived maximum AL (soul energy).
    pub fn max_al(&self) -> i32 {
        let (_, al_bonus, _) = cumulative_resource_bonuses(self.level);
        10 + self.attribute_total(Attribute::Porte) * 5 + al_bonus + self.vantage_bonuses().al
    }

    /// Derived maximum ST (stamina).
    pub fn max_st(&self) -> i32 {
        let (_, _, st_bonus) = cumulative_resource_bonuses(self.level);
        20 + self.attribute_total(Attribute::Forca) * 5 + st_bonus + self.vantage_bonuses().st
    }

    /// Derived speed: 1 + Destreza + Atletismo + vantage speed.
    pub fn speed(&self) -> i32 {
        1 + self.attribute_total(Attribute::Destreza)
            + self.skill_total("Atletismo")
            + self.vantage_bonuses().speed
    }

    /// Total armor for one kind: innate + blindado + equipped pieces.
    pub fn armor_total(&self, kind: ArmorKind) -> i32 {
        let base = match kind {
            ArmorKind::Fisica => self.base_armor_fisica,
            ArmorKind::Espiritual => self.base_armor_espiritual,
        };
        let blindado = if self.vantages.contains_key("blindado") && self.blindado_choice == Some(kind)
        {
            BLINDADO_ARMOR
        } else {
            0
        };
        base + blindado + self.armor.value(kind)
    }
}

/// Find a character by ID in a slice.
pub fn find_character(characters: &[Character], id: CharacterId) -> Option<&Character> {
    characters.iter().find(|c| c.id == id)
}
