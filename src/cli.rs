use std::io::{self, stdout};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use crossterm::tty::IsTty;
use rand::{rngs::StdRng, SeedableRng};
use tracing::info;

use crate::core::engine::Engine;
use crate::core::terminal::TerminalContext;
use crate::games::snowman::{SnowmanGame, SnowmanRenderer, WordBank};
use crate::logging;

#[derive(Parser, Debug)]
#[command(name = "snowman-meltdown")]
#[command(about = "⛄ Guess the word before the snowman melts")]
#[command(version)]
pub struct Cli {
    /// Seed for the word choice, for reproducible games
    #[arg(long)]
    pub seed: Option<u64>,

    /// When to colour the output
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,

    /// Log to stderr; repeat for more detail
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    fn enabled(self, is_tty: bool) -> bool {
        match self {
            ColorChoice::Auto => is_tty,
            ColorChoice::Always => true,
            ColorChoice::Never => false,
        }
    }
}

pub fn run_cli() -> Result<()> {
    let cli = Cli::parse();
    logging::init_tracing(cli.verbose);

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    };

    let game = SnowmanGame::start(&WordBank::default(), &mut rng);

    let out = stdout();
    let color = cli.color.enabled(out.is_tty());
    let terminal = TerminalContext::new(out.lock(), color);

    let mut engine = Engine::new(game, SnowmanRenderer, terminal);
    engine.run(io::stdin().lock())?;

    let summary = serde_json::to_string(&engine.game().summary())
        .context("failed to serialize session summary")?;
    info!(%summary, "session over");

    Ok(())
}
