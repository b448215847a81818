//! The six base attributes.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the six base attributes of the system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Attribute {
    /// Força: raw physical power.
    Forca,
    /// Destreza: agility and reflexes.
    Destreza,
    /// Inteligência: reasoning and learning.
    Inteligencia,
    /// Constituição: physical resilience.
    Constituicao,
    /// Percepção: awareness of the surroundings.
    Percepcao,
    /// Porte: soul presence and bearing.
    Porte,
}

impl Attribute {
    /// All attributes in display order.
    pub const ALL: [Attribute; 6] = [
        Attribute::Forca,
        Attribute::Destreza,
        Attribute::Inteligencia,
        Attribute::Constituicao,
        Attribute::Percepcao,
        Attribute::Porte,
    ];

    /// Portuguese display name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Forca => "Força",
            Self::Destreza => "Destreza",
            Self::Inteligencia => "Inteligência",
            Self::Constituicao => "Constituição",
            Self::Percepcao => "Percepção",
            Self::Porte => "Porte",
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A full set of attribute scores.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attributes {
    /// Força score.
    pub forca: i32,
    /// Destreza score.
    pub destreza: i32,
    /// Inteligência score.
    pub inteligencia: i32,
    /// Constituição score.
    pub constituicao: i32,
    /// Percepção score.
    pub percepcao: i32,
    /// Porte score.
    pub porte: i32,
}

impl Attributes {
    /// Read one attribute score.
    pub fn get(&self, attr: Attribute) -> i32 {
        match attr {
            Attribute::Forca => self.forca,
            Attribute::Destreza => self.destreza,
            Attribute::Inteligencia => self.inteligencia,
            Attribute::Constituicao => self.constituicao,
            Attribute::Percepcao => self.percepcao,
            Attribute::Porte => self.porte,
        }
    }

    /// Write one attribute score.
    pub fn set(&mut self, attr: Attribute, value: i32) {
        *self.slot(attr) = value;
    }

    /// Add a delta to one attribute score.
    pub fn add(&mut self, attr: Attribute, delta: i32) {
        *self.slot(attr) += delta;
    }

    /// Sum of all six scores (point-buy spend).
    pub fn total(&self) -> i32 {
        Attribute::ALL.iter().map(|a| self.get(*a)).sum()
    }

    fn slot(&mut self, attr: Attribute) -> &mut i32 {
        match attr {
            Attribute::Forca => &mut self.forca,
            Attribute::Destreza => &mut self.destreza,
            Attribute::Inteligencia => &mut self.inteligencia,
            Attribute::Constituicao => &mut self.constituicao,
            Attribute::Percepcao => &mut self.percepcao,
            Attribute::Porte => &mut self.porte,
        }
    }
}
