use rand::SeedableRng;
use rand::rngs::StdRng;

use ceifa_mechanics::dice::{Roll, RollReport, roll_value};
use ceifa_mechanics::DiceExpr;

pub fn run(dice: &[String], modifier: i32, desc: &str, seed: Option<u64>) -> Result<(), String> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let mut rolls = Vec::new();
    for raw in dice {
        let expr = raw.parse::<DiceExpr>().map_err(|e| e.to_string())?;
        for _ in 0..expr.count {
            rolls.push(Roll {
                die: expr.die,
                value: roll_value(expr.die, &mut rng),
                source: None,
            });
        }
    }

    let report = RollReport::new(desc, rolls, modifier);
    println!("{report}");
    Ok(())
}
