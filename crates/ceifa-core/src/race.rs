//! Playable races and their fixed creation bonuses.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::attribute::Attribute;

/// Bonus granted by a race's free attribute pick.
pub const RACE_CHOICE_BONUS: i32 = 2;

/// A playable race.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Race {
    /// Humano.
    Humano,
    /// Zumbi.
    Zumbi,
    /// Ovos de Kishin.
    OvosKishin,
    /// Fantasma.
    Fantasma,
    /// Bruxa.
    Bruxa,
    /// Feiticeiro.
    Feiticeiro,
    /// Lobisomem.
    Lobisomem,
    /// Vampiro.
    Vampiro,
    /// Oni.
    Oni,
    /// Yōkai.
    Yokai,
    /// Majin.
    Majin,
}

/// Optional skill picks granted by a race at creation.
#[derive(Debug, Clone, Copy)]
pub struct SkillChoices {
    /// Bonus granted per pick, in pick order.
    pub values: &'static [i32],
    /// Restricted pick list, or `None` for any skill.
    pub options: Option<&'static [&'static str]>,
}

impl SkillChoices {
    /// How many skills may be picked.
    pub fn count(&self) -> usize {
        self.values.len()
    }
}

/// Static creation data for one race.
#[derive(Debug, Clone, Copy)]
pub struct RaceTraits {
    /// Fixed attribute bonuses.
    pub attributes: &'static [(Attribute, i32)],
    /// Attributes eligible for the free +2 pick (empty if none).
    pub attribute_choices: &'static [Attribute],
    /// Fixed skill bonuses.
    pub skills: &'static [(&'static str, i32)],
    /// Optional skill picks.
    pub skill_choices: Option<SkillChoices>,
    /// Masteries unlocked by default.
    pub mastery_defaults: &'static [&'static str],
    /// Racial advantage, as printed on the sheet.
    pub advantage: &'static str,
}

static HUMANO: RaceTraits = RaceTraits {
    attributes: &[],
    attribute_choices: &[Attribute::Porte, Attribute::Destreza],
    skills: &[],
    skill_choices: Some(SkillChoices {
        values: &[2, 1],
        options: None,
    }),
    mastery_defaults: &["Ressonância", "Combate"],
    advantage: "+2 em testes de Coragem",
};

static ZUMBI: RaceTraits = RaceTraits {
    attributes: &[(Attribute::Forca, 2)],
    attribute_choices: &[],
    skills: &[],
    skill_choices: Some(SkillChoices {
        values: &[2],
        options: Some(&["Atletismo", "Tenacidade"]),
    }),
    mastery_defaults: &["Combate", "Ressonância"],
    advantage: "Morto-Vivo — Só morre quando HP e AL chegam a 0.",
};

static OVOS_KISHIN: RaceTraits = RaceTraits {
    attributes: &[(Attribute::Forca, 2)],
    attribute_choices: &[Attribute::Porte, Attribute::Destreza],
    skills: &[],
    skill_choices: Some(SkillChoices {
        values: &[2, 1],
        options: None,
    }),
    mastery_defaults: &["Combate", "Ressonância", "Magia"],
    advantage: "Agente do Caos — +2 em rolagens envolvendo Insanidade.",
};

static FANTASMA: RaceTraits = RaceTraits {
    attributes: &[(Attribute::Porte, 2)],
    attribute_choices: &[],
    skills: &[("Furtividade", 3)],
    skill_choices: None,
    mastery_defaults: &["Ressonância"],
    advantage: "Intangível — Imune a golpes físicos; só causa/recebe dano espiritual. Ganha [Sensorial].",
};

static BRUXA: RaceTraits = RaceTraits {
    attributes: &[(Attribute::Porte, 2), (Attribute::Inteligencia, 2)],
    attribute_choices: &[],
    skills: &[("Sabedoria", 1), ("Enganação", 1)],
    skill_choices: None,
    mastery_defaults: &["Magia"],
    advantage: "Agente do Caos — +2 para rolagens de Insanidade (exceto resistir). Restrição: Não pode ter alinhamento Imaculado ou Corajoso.",
};

static FEITICEIRO: RaceTraits = RaceTraits {
    attributes: &[(Attribute::Porte, 1), (Attribute::Inteligencia, 2)],
    attribute_choices: &[],
    skills: &[("Sabedoria", 2), ("Enganação", 1)],
    skill_choices: None,
    mastery_defaults: &["Magia", "Ressonância"],
    advantage: "Agente do Caos — +2 para rolagens envolvendo Insanidade. Restrição: Não pode ter alinhamento Imaculado.",
};

static LOBISOMEM: RaceTraits = RaceTraits {
    attributes: &[(Attribute::Percepcao, 2), (Attribute::Forca, 3)],
    attribute_choices: &[],
    skills: &[("Atletismo", 2), ("Acrobacia", 2)],
    skill_choices: None,
    mastery_defaults: &["Combate"],
    advantage: "Herança Amaldiçoada — Metade do dano físico; -3 para resistir à Insanidade. Restrição: Não pode ter Bruxa ou Feiticeiro como Companion.",
};

static VAMPIRO: RaceTraits = RaceTraits {
    attributes: &[(Attribute::Destreza, 2), (Attribute::Inteligencia, 3)],
    attribute_choices: &[],
    skills: &[("Vitalidade", 2), ("Diplomacia", 2)],
    skill_choices: None,
    mastery_defaults: &["Magia", "Combate"],
    advantage: "Sede Implacável — Drena (2d6+Medicina) de HP ao causar dano mágico em Ordem. Restrição: Não pode ter alinhamento Imaculado.",
};

static ONI: RaceTraits = RaceTraits {
    attributes: &[(Attribute::Forca, 3), (Attribute::Porte, 1)],
    attribute_choices: &[],
    skills: &[("Intimidação", 2), ("Resistência", 2)],
    skill_choices: None,
    mastery_defaults: &["Combate"],
    advantage: "Fúria Encarnada — Modo berserker 1x/dia (+1 dano cumulativo até +4). Ganha [Sensorial].",
};

static YOKAI: RaceTraits = RaceTraits {
    attributes: &[(Attribute::Inteligencia, 2), (Attribute::Destreza, 2)],
    attribute_choices: &[],
    skills: &[("Furtividade", 2), ("Observação", 1)],
    skill_choices: None,
    mastery_defaults: &["Magia", "Ressonância"],
    advantage: "Forma Etérea — 1x/dia, +1 em rolagens (+2 contra exorcismo). Ganha [Sensorial].",
};

static MAJIN: RaceTraits = RaceTraits {
    attributes: &[
        (Attribute::Constituicao, 2),
        (Attribute::Inteligencia, 1),
        (Attribute::Porte, 1),
    ],
    attribute_choices: &[],
    skills: &[("Tenacidade", 2), ("Sabedoria", 1)],
    skill_choices: None,
    mastery_defaults: &["Magia", "Ressonância"],
    advantage: "Corpo Arcano — Ativa +5 armadura espiritual ao perder 25% HP. Ganha [Sensorial].",
};

impl Race {
    /// All races in catalog order.
    pub const ALL: [Race; 11] = [
        Race::Humano,
        Race::Zumbi,
        Race::OvosKishin,
        Race::Fantasma,
        Race::Bruxa,
        Race::Feiticeiro,
        Race::Lobisomem,
        Race::Vampiro,
        Race::Oni,
        Race::Yokai,
        Race::Majin,
    ];

    /// Portuguese display name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Humano => "Humano",
            Self::Zumbi => "Zumbi",
            Self::OvosKishin => "Ovos de Kishin",
            Self::Fantasma => "Fantasmas",
            Self::Bruxa => "Bruxa",
            Self::Feiticeiro => "Feiticeiro",
            Self::Lobisomem => "Lobisomem",
            Self::Vampiro => "Vampiro",
            Self::Oni => "Oni",
            Self::Yokai => "Yōkai",
            Self::Majin => "Majin",
        }
    }

    /// Static creation data for this race.
    pub fn traits(self) -> &'static RaceTraits {
        match self {
            Self::Humano => &HUMANO,
            Self::Zumbi => &ZUMBI,
            Self::OvosKishin => &OVOS_KISHIN,
            Self::Fantasma => &FANTASMA,
            Self::Bruxa => &BRUXA,
            Self::Feiticeiro => &FEITICEIRO,
            Self::Lobisomem => &LOBISOMEM,
            Self::Vampiro => &VAMPIRO,
            Self::Oni => &ONI,
            Self::Yokai => &YOKAI,
            Self::Majin => &MAJIN,
        }
    }
}

impl fmt::Display for Race {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
