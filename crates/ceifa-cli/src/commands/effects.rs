use comfy_table::{ContentArrangement, Table};

use ceifa_mechanics::{DotPool, EffectKind, Rank, StackRule};

pub fn run() -> Result<(), String> {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Efeito", "Rank", "Duração", "Acúmulo", "Dano por turno"]);

    for kind in EffectKind::ALL {
        let rank = if kind.has_rank() { "D-S" } else { "—" };
        let duration = if kind.has_duration() {
            "em turnos"
        } else {
            "até remover"
        };
        let stacking = match kind.stacking() {
            StackRule::ReplaceIfHigher => "substitui por rank maior",
            StackRule::StackByRank => "acumula por rank",
            StackRule::Single => "instância única",
        };
        let dot = match (kind.dot(Rank::D), kind.dot(Rank::S)) {
            (Some((weakest, pool)), Some((strongest, _))) => {
                let pool = match pool {
                    DotPool::Hp => "HP",
                    DotPool::Alma => "AL",
                };
                format!("{weakest} a {strongest} ({pool})")
            }
            _ => "—".to_string(),
        };
        table.add_row(vec![
            kind.label().to_string(),
            rank.to_string(),
            duration.to_string(),
            stacking.to_string(),
            dot,
        ]);
    }

    println!("{table}");
    Ok(())
}
