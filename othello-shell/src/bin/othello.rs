use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use othello_shell::play::{play_interactive, run_script};
use othello_shell::{Session, ShellConfig};

/// Play Othello in the terminal, or replay a scripted demo game.
#[derive(Parser)]
#[command(name = "othello", about = "Play or replay an Othello game")]
struct Cli {
    /// Path to TOML configuration file (players and scripted moves)
    #[arg(long, default_value = "demo.toml")]
    config: PathBuf,

    /// Read moves from stdin instead of replaying the script
    #[arg(long)]
    interactive: bool,

    /// Print the board to stderr after every accepted scripted move
    #[arg(long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = ShellConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    let roster = config.roster().context("building player roster")?;
    let mut session = Session::new(roster);

    let stdout = io::stdout();
    if cli.interactive {
        play_interactive(&mut session, io::stdin().lock(), stdout.lock())?;
    } else {
        let script = config.script_moves().context("parsing scripted moves")?;
        run_script(
            &mut session,
            &script,
            cli.verbose || config.verbose,
            stdout.lock(),
            io::stderr().lock(),
        )?;
    }

    Ok(())
}
