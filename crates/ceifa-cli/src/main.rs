//! CLI frontend for the Ceifa campaign companion.

mod commands;

use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "ceifa",
    about = "Ceifa — companion de mesa para campanhas de caçadores de almas",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Roll dice expressions and print the session-log report
    Roll {
        /// Dice expressions, e.g. "2d6" "d20"
        #[arg(required = true)]
        dice: Vec<String>,

        /// Flat modifier added to the total
        #[arg(short, long, default_value = "0", allow_hyphen_values = true)]
        modifier: i32,

        /// Description line for the report
        #[arg(short, long, default_value = "Rolagem Manual")]
        desc: String,

        /// RNG seed for a reproducible roll
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Show the status-effect catalog
    Effects,

    /// Run a seeded demo skirmish that drives the whole engine
    Arena {
        /// RNG seed for a deterministic skirmish
        #[arg(short, long, default_value = "42")]
        seed: u64,

        /// How many turn advances to play
        #[arg(short, long, default_value = "6")]
        turns: u32,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Roll {
            dice,
            modifier,
            desc,
            seed,
        } => commands::roll::run(&dice, modifier, &desc, seed),
        Commands::Effects => commands::effects::run(),
        Commands::Arena { seed, turns } => commands::arena::run(seed, turns),
    };

    if let Err(message) = result {
        eprintln!("error: {message}");
        process::exit(1);
    }
}
