/// Snowman-specific renderer - injected dependency
use std::io::{self, Write};

use crate::core::renderer::GameRenderer;
use crate::core::terminal::{TerminalColor, TerminalContext};
use crate::games::snowman::game::{GuessError, Letter, Outcome, SnowmanGame};
use crate::games::snowman::stages::stage;

#[derive(Debug, Default, Clone, Copy)]
pub struct SnowmanRenderer;

impl GameRenderer<SnowmanGame> for SnowmanRenderer {
    fn render_welcome<W: Write>(&self, ctx: &mut TerminalContext<W>) -> io::Result<()> {
        ctx.print_line("Welcome to Snowman Meltdown!")
    }

    /// Pure rendering function - no game logic
    fn render<W: Write>(&self, state: &SnowmanGame, ctx: &mut TerminalContext<W>) -> io::Result<()> {
        ctx.print_colored_line(stage(state.mistakes()), TerminalColor::Cyan)?;
        ctx.print_line(&format!("Word: {}", state.masked_word()))?;
        ctx.empty_line()
    }

    fn prompt(&self) -> &str {
        "Guess a letter: "
    }

    fn render_accepted<W: Write>(&self, input: &Letter, ctx: &mut TerminalContext<W>) -> io::Result<()> {
        ctx.print_line(&format!("You guessed: {}", input))
    }

    fn render_rejected<W: Write>(&self, error: &GuessError, ctx: &mut TerminalContext<W>) -> io::Result<()> {
        ctx.print_colored_line(&error.to_string(), TerminalColor::Yellow)
    }

    fn render_outcome<W: Write>(
        &self,
        state: &SnowmanGame,
        outcome: &Outcome,
        ctx: &mut TerminalContext<W>,
    ) -> io::Result<()> {
        match outcome {
            Outcome::Won => ctx.print_colored_line(
                "Congratulations, you saved the snowman!",
                TerminalColor::Green,
            ),
            Outcome::Lost => ctx.print_colored_line(
                &format!("Game Over! The word was {}", state.secret()),
                TerminalColor::Red,
            ),
        }
    }
}
