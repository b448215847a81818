//! Roll results and session-log rendering.
//!
//! `Display` for [`RollReport`] produces one of two literal formats the
//! session log consumes: a flat summary for plain rolls, or a grouped
//! breakdown when any die carries a damage source.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Die;

/// The outcome of a single die.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roll {
    /// The die that was rolled.
    pub die: Die,
    /// The value rolled (1 to `die.sides()`).
    pub value: u32,
    /// Damage source this die belongs to, for grouped reporting.
    pub source: Option<String>,
}

/// A reported roll: description, individual dice, modifier, grand total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollReport {
    /// What was rolled for.
    pub description: String,
    /// Individual die outcomes.
    pub rolls: Vec<Roll>,
    /// Flat modifier added to the dice sum.
    pub modifier: i32,
    /// Dice sum plus modifier.
    pub total: i32,
}

impl RollReport {
    /// Build a report, computing the total from the rolls and modifier.
    pub fn new(description: impl Into<String>, rolls: Vec<Roll>, modifier: i32) -> Self {
        let total = rolls.iter().map(|r| r.value as i32).sum::<i32>() + modifier;
        Self {
            description: description.into(),
            rolls,
            modifier,
            total,
        }
    }

    /// Sum of the die values alone.
    pub fn dice_total(&self) -> i32 {
        self.total - self.modifier
    }

    /// True when any die carries a source (grouped rendering).
    pub fn is_grouped(&self) -> bool {
        self.rolls.iter().any(|r| r.source.is_some())
    }

    fn fmt_ungrouped(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // dice summary by type, in first-appearance order: "2d6 + 1d4"
        let mut summary: Vec<(Die, u32)> = Vec::new();
        for roll in &self.rolls {
            match summary.iter_mut().find(|(die, _)| *die == roll.die) {
                Some((_, count)) => *count += 1,
                None => summary.push((roll.die, 1)),
            }
        }
        let summary = summary
            .iter()
            .map(|(die, count)| format!("{count}{die}"))
            .collect::<Vec<_>>()
            .join(" + ");
        let modifier = match self.modifier {
            0 => String::new(),
            m if m > 0 => format!(" + {m}"),
            m => format!(" - {}", -m),
        };
        let values = self
            .rolls
            .iter()
            .map(|r| r.value.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        write!(
            f,
            "{}: {summary}{modifier}\nRolagens: [{values}]\nTotal: {}",
            self.description, self.total
        )
    }

    fn fmt_grouped(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}:", self.description)?;
        let mut groups: Vec<(&str, Vec<u32>)> = Vec::new();
        for roll in &self.rolls {
            let key = roll.source.as_deref().unwrap_or("Outros");
            match groups.iter_mut().find(|(source, _)| *source == key) {
                Some((_, values)) => values.push(roll.value),
                None => groups.push((key, vec![roll.value])),
            }
        }
        for (source, values) in &groups {
            let subtotal: u32 = values.iter().sum();
            let values = values
                .iter()
                .map(|v| v.to_string())
                .collect::<Vec<_>>()
                .join(", ");
            writeln!(f, "- {source}: [{values}] = {subtotal}")?;
        }
        if self.modifier != 0 {
            let sign = if self.modifier > 0 { "+" } else { "" };
            writeln!(f, "Modificador: {sign}{}", self.modifier)?;
        }
        write!(f, "Total Final: {}", self.total)
    }
}

impl fmt::Display for RollReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_grouped() {
            self.fmt_grouped(f)
        } else {
            self.fmt_ungrouped(f)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(die: Die, value: u32) -> Roll {
        Roll {
            die,
            value,
            source: None,
        }
    }

    fn sourced(die: Die, value: u32, source: &str) -> Roll {
        Roll {
            die,
            value,
            source: Some(source.to_string()),
        }
    }

    #[test]
    fn total_is_dice_plus_modifier() {
        let report = RollReport::new("Teste", vec![plain(Die::D6, 3), plain(Die::D6, 5)], 7);
        assert_eq!(report.total, 15);
        assert_eq!(report.dice_total(), 8);
        assert!(!report.is_grouped());
    }

    #[test]
    fn ungrouped_format() {
        let report = RollReport::new(
            "Iniciativa de Maka",
            vec![plain(Die::D6, 3), plain(Die::D6, 5)],
            7,
        );
        assert_eq!(
            report.to_string(),
            "Iniciativa de Maka: 2d6 + 7\nRolagens: [3, 5]\nTotal: 15"
        );
    }

    #[test]
    fn ungrouped_format_negative_modifier() {
        let report = RollReport::new("Teste", vec![plain(Die::D8, 4)], -2);
        assert_eq!(report.to_string(), "Teste: 1d8 - 2\nRolagens: [4]\nTotal: 2");
    }

    #[test]
    fn ungrouped_format_mixed_dice() {
        let report = RollReport::new(
            "Rolagem Manual",
            vec![plain(Die::D6, 3), plain(Die::D6, 5), plain(Die::D4, 2)],
            0,
        );
        assert_eq!(
            report.to_string(),
            "Rolagem Manual: 2d6 + 1d4\nRolagens: [3, 5, 2]\nTotal: 10"
        );
    }

    #[test]
    fn ungrouped_format_no_dice() {
        let report = RollReport::new("test", Vec::new(), 5);
        assert_eq!(report.to_string(), "test:  + 5\nRolagens: []\nTotal: 5");
    }

    #[test]
    fn grouped_format() {
        let report = RollReport::new(
            "Danos de Efeito em Maka",
            vec![
                sourced(Die::D4, 2, "Dano de Veneno (C)"),
                sourced(Die::D4, 3, "Dano de Veneno (C)"),
                sourced(Die::D4, 1, "Dano de Queimadura (B)"),
            ],
            0,
        );
        assert!(report.is_grouped());
        assert_eq!(
            report.to_string(),
            "Danos de Efeito em Maka:\n- Dano de Veneno (C): [2, 3] = 5\n- Dano de Queimadura (B): [1] = 1\nTotal Final: 6"
        );
    }

    #[test]
    fn grouped_format_with_modifier() {
        let report = RollReport::new("Dano", vec![sourced(Die::D4, 4, "Lâmina")], 3);
        assert_eq!(
            report.to_string(),
            "Dano:\n- Lâmina: [4] = 4\nModificador: +3\nTotal Final: 7"
        );
    }

    #[test]
    fn grouped_sources_keep_first_appearance_order() {
        let report = RollReport::new(
            "Dano",
            vec![
                sourced(Die::D4, 1, "B"),
                sourced(Die::D4, 2, "A"),
                sourced(Die::D4, 3, "B"),
            ],
            0,
        );
        let text = report.to_string();
        let b = text.find("- B:").unwrap();
        let a = text.find("- A:").unwrap();
        assert!(b < a);
    }

    #[test]
    fn serde_round_trip() {
        let report = RollReport::new("Teste", vec![plain(Die::D6, 4)], 1);
        let json = serde_json::to_string(&report).unwrap();
        let back: RollReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back, report);
    }
}
