use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use four_in_a_row::ai::AgentKind;
use four_in_a_row::arena::Arena;
use four_in_a_row::config::AppConfig;
use four_in_a_row::game::Player;

/// Play Connect Four matches between engine agents.
#[derive(Parser)]
#[command(name = "four-in-a-row", about = "Run headless Connect Four matches")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "engine.toml")]
    config: PathBuf,

    /// Override the minimax search depth
    #[arg(long)]
    depth: Option<usize>,

    /// Override the number of games
    #[arg(long)]
    games: Option<usize>,

    /// Agent playing red
    #[arg(long, value_enum)]
    red: Option<AgentKind>,

    /// Agent playing yellow
    #[arg(long, value_enum)]
    yellow: Option<AgentKind>,

    /// Seed for random agents
    #[arg(long)]
    seed: Option<u64>,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_default_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_default_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let mut app_config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(depth) = cli.depth {
        app_config.search.depth = depth;
    }
    if let Some(games) = cli.games {
        app_config.arena.games = games;
    }
    if let Some(red) = cli.red {
        app_config.arena.red = red;
    }
    if let Some(yellow) = cli.yellow {
        app_config.arena.yellow = yellow;
    }
    if cli.seed.is_some() {
        app_config.arena.seed = cli.seed;
    }
    app_config
        .validate()
        .context("invalid configuration after command-line overrides")?;

    let arena = Arena::new(app_config.arena, app_config.board, app_config.search);
    let metrics = arena.run().context("match aborted")?;

    println!(
        "Games: {} | Red wins: {} | Yellow wins: {} | Draws: {} | Avg length: {:.1}",
        metrics.total_games(),
        metrics.wins(Player::Red),
        metrics.wins(Player::Yellow),
        metrics.draws(),
        metrics.overall_average_length(),
    );

    Ok(())
}
