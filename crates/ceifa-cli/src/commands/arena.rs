use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use rand::SeedableRng;
use rand::rngs::StdRng;

use ceifa_core::{ArmorPiece, Attribute, Attributes, Character, Race, find_character};
use ceifa_mechanics::{
    DamageKind, Die, EffectKind, Encounter, Operation, Rank, VitalState, effect_labels, roll_dice,
};

/// A sample meister for the demo skirmish.
fn meister() -> Character {
    let mut c = Character::new("Kaori");
    c.race = Race::Humano;
    c.race_attribute_choice = Some(Attribute::Destreza);
    c.race_skill_choices = vec!["Atletismo".to_string(), "Observação".to_string()];
    c.level = 3;
    c.base_attributes = Attributes {
        forca: 2,
        destreza: 3,
        inteligencia: 1,
        constituicao: 2,
        percepcao: 1,
        porte: 2,
    };
    c.skills.insert("Atletismo".to_string(), 2);
    c.skills.insert("Resistência".to_string(), 1);
    c.vantages.insert("corpo_ferro".to_string(), 2);
    c.armor.superior = ArmorPiece {
        equipped: true,
        name: "Casaco da Academia".to_string(),
        fisica: 2,
        espiritual: 1,
    };
    c.coragem = 60;
    c
}

/// The opposition.
fn oni_errante() -> Character {
    let mut c = Character::new("Oni Errante");
    c.npc = true;
    c.race = Race::Oni;
    c.level = 2;
    c.base_attributes = Attributes {
        forca: 2,
        destreza: 1,
        inteligencia: 0,
        constituicao: 3,
        percepcao: 1,
        porte: 1,
    };
    c.skills.insert("Resistência".to_string(), 1);
    c.base_armor_fisica = 1;
    c.insanidade = 45;
    c
}

pub fn run(seed: u64, turns: u32) -> Result<(), String> {
    let mut rng = StdRng::seed_from_u64(seed);
    let characters = vec![meister(), oni_errante()];
    let mut encounter = Encounter::new();
    let kaori = encounter.add_combatant(&characters[0]);
    let oni = encounter.add_combatant(&characters[1]);

    println!("{}", "=== Arena de demonstração ===".bold());
    println!();

    encounter
        .roll_initiative(kaori, &characters, &mut rng)
        .map_err(|e| e.to_string())?;
    encounter
        .roll_initiative(oni, &characters, &mut rng)
        .map_err(|e| e.to_string())?;
    encounter
        .add_status(oni, EffectKind::Bleeding, Some(Rank::C), 0)
        .map_err(|e| e.to_string())?;
    encounter
        .add_status(kaori, EffectKind::Burned, Some(Rank::B), 3)
        .map_err(|e| e.to_string())?;
    print_reports(&mut encounter);

    for _ in 0..turns {
        let (holder_id, attacker_name) = {
            let holder = encounter.active_combatant().map_err(|e| e.to_string())?;
            let name = find_character(&characters, holder.character)
                .map(|c| c.name.clone())
                .unwrap_or_else(|| holder.id.to_string());
            (holder.id, name)
        };
        let target = if holder_id == kaori { oni } else { kaori };

        let attack = roll_dice(2, Die::D6, 2, &format!("Ataque de {attacker_name}"), &mut rng)
            .map_err(|e| e.to_string())?;
        println!("{attack}");
        println!();
        encounter
            .apply_damage(
                target,
                &characters,
                DamageKind::Physical,
                attack.total,
                Operation::Subtract,
                &mut rng,
            )
            .map_err(|e| e.to_string())?;
        encounter
            .advance_turn(&characters, &mut rng)
            .map_err(|e| e.to_string())?;
        print_reports(&mut encounter);

        if let Some(fallen) = encounter
            .combatants()
            .iter()
            .find(|c| c.vital_state() == VitalState::Dead)
        {
            let name = find_character(&characters, fallen.character)
                .map(|c| c.name.clone())
                .unwrap_or_else(|| fallen.id.to_string());
            println!("{}", format!("{name} caiu em combate.").red().bold());
            println!();
            break;
        }
    }

    print_roster(&encounter, &characters);
    Ok(())
}

fn print_reports(encounter: &mut Encounter) {
    for report in encounter.drain_reports() {
        println!("{report}");
        println!();
    }
}

fn print_roster(encounter: &Encounter, characters: &[Character]) {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        "Combatente",
        "Iniciativa",
        "HP",
        "AL",
        "ST",
        "Estado",
        "Efeitos",
    ]);
    for combatant in encounter.combatants() {
        let name = find_character(characters, combatant.character)
            .map(|c| c.name.clone())
            .unwrap_or_else(|| combatant.id.to_string());
        table.add_row(vec![
            name,
            combatant.initiative.to_string(),
            combatant.hp.to_string(),
            combatant.al.to_string(),
            combatant.st.to_string(),
            combatant.vital_state().to_string(),
            effect_labels(combatant).join(", "),
        ]);
    }
    println!("{table}");
    println!();
    println!("  Turno {}", encounter.turn());
}
