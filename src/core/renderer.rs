/// Generic game renderer trait for dependency injection
use std::io::{self, Write};

use crate::core::game::Game;
use crate::core::terminal::TerminalContext;

/// Everything the engine prints goes through a renderer, so the loop
/// itself never hard-codes game text.
pub trait GameRenderer<G: Game> {
    /// Printed once before the first turn
    fn render_welcome<W: Write>(&self, ctx: &mut TerminalContext<W>) -> io::Result<()>;

    /// Render the current state at the start of every turn
    fn render<W: Write>(&self, state: &G, ctx: &mut TerminalContext<W>) -> io::Result<()>;

    /// Text shown before reading a line, without newline
    fn prompt(&self) -> &str;

    fn render_accepted<W: Write>(&self, input: &G::Input, ctx: &mut TerminalContext<W>) -> io::Result<()>;

    fn render_rejected<W: Write>(&self, error: &G::Error, ctx: &mut TerminalContext<W>) -> io::Result<()>;

    fn render_outcome<W: Write>(
        &self,
        state: &G,
        outcome: &G::Outcome,
        ctx: &mut TerminalContext<W>,
    ) -> io::Result<()>;
}
