//! Rolling dice into reports.

use rand::Rng;
use rand::rngs::StdRng;

use super::roll::{Roll, RollReport};
use super::Die;
use crate::error::{CombatError, CombatResult};

/// Roll a single die.
pub fn roll_value(die: Die, rng: &mut StdRng) -> u32 {
    rng.random_range(1..=die.sides())
}

/// Roll `count` dice of one type and package the result as a report.
///
/// A count of zero is a valid request: the report carries no rolls and
/// its total is just the modifier. A negative count or a die with fewer
/// than two sides is a caller contract violation and is rejected.
pub fn roll_dice(
    count: i32,
    die: Die,
    modifier: i32,
    description: &str,
    rng: &mut StdRng,
) -> CombatResult<RollReport> {
    if count < 0 {
        return Err(CombatError::InvalidDice(format!(
            "negative die count: {count}"
        )));
    }
    if die.sides() < 2 {
        return Err(CombatError::InvalidDice(format!(
            "a die needs at least 2 sides, got {}",
            die.sides()
        )));
    }
    let rolls = (0..count)
        .map(|_| Roll {
            die,
            value: roll_value(die, rng),
            source: None,
        })
        .collect();
    Ok(RollReport::new(description, rolls, modifier))
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn roll_produces_valid_values() {
        let mut rng = StdRng::seed_from_u64(42);
        let report = roll_dice(10, Die::D6, 0, "Teste", &mut rng).unwrap();
        assert_eq!(report.rolls.len(), 10);
        for roll in &report.rolls {
            assert!((1..=6).contains(&roll.value));
        }
        assert_eq!(report.total, report.dice_total());
    }

    #[test]
    fn roll_deterministic_with_seed() {
        let mut rng1 = StdRng::seed_from_u64(99);
        let mut rng2 = StdRng::seed_from_u64(99);
        let r1 = roll_dice(3, Die::D20, 2, "Teste", &mut rng1).unwrap();
        let r2 = roll_dice(3, Die::D20, 2, "Teste", &mut rng2).unwrap();
        assert_eq!(r1, r2);
    }

    #[test]
    fn zero_count_reports_modifier_only() {
        let mut rng = StdRng::seed_from_u64(1);
        let report = roll_dice(0, Die::D6, 5, "test", &mut rng).unwrap();
        assert!(report.rolls.is_empty());
        assert_eq!(report.total, 5);
    }

    #[test]
    fn negative_count_rejected() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(roll_dice(-1, Die::D6, 0, "Teste", &mut rng).is_err());
    }

    #[test]
    fn degenerate_die_rejected() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(roll_dice(1, Die::Custom(1), 0, "Teste", &mut rng).is_err());
        assert!(roll_dice(1, Die::Custom(0), 0, "Teste", &mut rng).is_err());
    }
}
