//! Word Family - CLI
//!
//! Vocabulary game with TUI and line modes: complete the noun, verb, adjective
//! and adverb forms of a root word.

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use std::io;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;
use word_family::{
    catalog::{Catalog, loader::load_from_file},
    commands::{check_answers, run_simple, tier_summaries},
    core::{SlotMap, Tier},
    game::{Game, RandomSource, RngSource},
    output::{write_check_result, write_tiers},
};

#[derive(Parser)]
#[command(
    name = "word_family",
    about = "Word family game: complete the noun, verb, adjective and adverb of a root word",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Load word families from a file instead of the built-in set
    #[arg(short, long, global = true)]
    catalog: Option<PathBuf>,

    /// Seed for the random source (repeatable family picks and hints)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// More log output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play {
        /// Start on this level instead of the level menu (level1..level3 or 1..3)
        #[arg(short, long)]
        tier: Option<Tier>,
    },

    /// Simple line mode (no TUI)
    Simple {
        /// Start on this level instead of the level menu (level1..level3 or 1..3)
        #[arg(short, long)]
        tier: Option<Tier>,
    },

    /// Check one set of answers against a word family
    Check {
        /// Level the family belongs to
        #[arg(short, long)]
        tier: Tier,

        /// Root word of the family
        #[arg(short, long)]
        root: String,

        noun: String,
        verb: String,
        adjective: String,
        adverb: String,

        /// Print the verdicts as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the levels and how many families each has
    Tiers,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("word_family={level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn load_catalog(path: Option<&Path>) -> Result<Catalog> {
    match path {
        Some(path) => load_from_file(path),
        None => Ok(Catalog::embedded()),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let catalog = load_catalog(cli.catalog.as_deref())?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play { tier: None });

    match cli.seed {
        Some(seed) => run_command(command, Game::new(&catalog, RngSource::seeded(seed))),
        None => run_command(command, Game::with_thread_rng(&catalog)),
    }
}

fn run_command<S: RandomSource>(command: Commands, mut game: Game<'_, S>) -> Result<()> {
    match command {
        Commands::Play { tier } => run_play_command(game, tier),
        Commands::Simple { tier } => run_simple(&mut game, tier, io::stdin().lock(), io::stdout()),
        Commands::Check {
            tier,
            root,
            noun,
            verb,
            adjective,
            adverb,
            json,
        } => {
            let answers = SlotMap::from_answers(noun, verb, adjective, adverb);
            run_check_command(game.catalog(), tier, &root, answers, json)
        }
        Commands::Tiers => {
            write_tiers(&mut io::stdout().lock(), &tier_summaries(game.catalog()))?;
            Ok(())
        }
    }
}

fn run_check_command(
    catalog: &Catalog,
    tier: Tier,
    root: &str,
    answers: SlotMap<String>,
    json: bool,
) -> Result<()> {
    let result = check_answers(catalog, tier, root, answers)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        write_check_result(&mut io::stdout().lock(), &result)?;
    }
    Ok(())
}

fn run_play_command<S: RandomSource>(game: Game<'_, S>, tier: Option<Tier>) -> Result<()> {
    use word_family::interactive::{App, run_tui};

    run_tui(App::new(game, tier))
}
