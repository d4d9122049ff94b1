//! Replays a recorded percept script through the warrior's decision engine.
//!
//! ```bash
//! cargo run -p warrior-replay -- crates/warrior/replay/scripts/corridor.ron
//! RUST_LOG=warrior_core=debug cargo run -p warrior-replay -- --format json script.ron
//! ```

use std::num::NonZeroUsize;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use warrior_replay::{Format, ReplayConfig, Script, logging, report, run};

/// Replay recorded percepts through the warrior's decision engine
#[derive(Parser)]
#[command(name = "warrior-replay")]
#[command(about = "Replay recorded percepts through the warrior's decision engine", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to the RON script
    script: PathBuf,

    /// Stop after this many turns, at least 1 (overrides WARRIOR_MAX_TURNS)
    #[arg(long)]
    max_turns: Option<NonZeroUsize>,

    /// Transcript format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Also write logs to this directory (overrides WARRIOR_LOG_DIR)
    #[arg(long)]
    log_dir: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let config = ReplayConfig::from_env();

    let log_dir = cli.log_dir.or(config.log_dir);
    let _guard = logging::setup_logging(log_dir.as_deref())?;

    let script = Script::load(&cli.script)
        .with_context(|| format!("failed to load {}", cli.script.display()))?;
    let name = script.name.clone();

    let max_turns = cli.max_turns.map(NonZeroUsize::get).or(config.max_turns);
    let transcript = run(script, max_turns).context("replay failed")?;

    let output = report::render(&name, &transcript, cli.format)?;
    print!("{output}");

    tracing::info!(script = %name, turns = transcript.len(), "replay complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn zero_turn_cap_is_rejected() {
        let parsed = Cli::try_parse_from(["warrior-replay", "--max-turns", "0", "level.ron"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn turn_cap_and_format_are_parsed() {
        let cli = Cli::try_parse_from([
            "warrior-replay",
            "--max-turns",
            "3",
            "--format",
            "json",
            "level.ron",
        ])
        .unwrap();
        assert_eq!(cli.max_turns.map(NonZeroUsize::get), Some(3));
        assert_eq!(cli.format, Format::Json);
        assert_eq!(cli.script, PathBuf::from("level.ron"));
    }
}
