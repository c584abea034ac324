use crate::core::game::{Game, Status};
use crate::core::renderer::GameRenderer;
use crate::core::terminal::TerminalContext;
use anyhow::{bail, Context, Result};
use std::io::{BufRead, Write};
use tracing::{debug, info};

pub struct Engine<G: Game, R: GameRenderer<G>, W: Write> {
    game: G,
    renderer: R,
    terminal: TerminalContext<W>,
}

impl<G: Game, R: GameRenderer<G>, W: Write> Engine<G, R, W> {
    pub fn new(game: G, renderer: R, terminal: TerminalContext<W>) -> Self {
        Self { game, renderer, terminal }
    }

    /// Drive the game until it finishes, reading one line per turn.
    pub fn run<I: BufRead>(&mut self, mut input: I) -> Result<G::Outcome> {
        let mut buf = Vec::new();
        let mut turn = 0u64;

        self.renderer.render_welcome(&mut self.terminal)?;

        loop {
            turn = turn.saturating_add(1);
            self.renderer.render(&self.game, &mut self.terminal)?;

            if let Status::Finished(outcome) = self.game.status() {
                self.renderer.render_outcome(&self.game, &outcome, &mut self.terminal)?;
                self.terminal.flush()?;
                info!(game = G::NAME, ?outcome, turns = turn, "game finished");
                return Ok(outcome);
            }

            // INPUT (blocking, one line)
            self.terminal.print(self.renderer.prompt())?;
            self.terminal.flush()?;

            buf.clear();
            let read = input
                .read_until(b'\n', &mut buf)
                .context("failed to read guess from input")?;
            if read == 0 {
                bail!("input closed before the game finished");
            }

            // Invalid UTF-8 becomes U+FFFD and is rejected by the game like any other bad guess
            let line = String::from_utf8_lossy(&buf);
            match G::parse_line(strip_line_ending(&line)) {
                Ok(parsed) => {
                    debug!(turn, input = ?parsed, "applying input");
                    self.game.handle_input(&parsed);
                    self.renderer.render_accepted(&parsed, &mut self.terminal)?;
                }
                Err(error) => {
                    // The turn restarts with the state untouched
                    debug!(turn, %error, "rejected input");
                    self.renderer.render_rejected(&error, &mut self.terminal)?;
                }
            }
        }
    }

    pub fn game(&self) -> &G {
        &self.game
    }

    pub fn into_output(self) -> W {
        self.terminal.into_inner()
    }
}

fn strip_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}
