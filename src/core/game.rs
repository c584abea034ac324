//! Core game interface for line-driven terminal games

/// Where a session stands after the last applied input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status<O> {
    Playing,
    Finished(O),
}

/// Main game trait that all games must implement.
/// The engine owns the loop; the game owns its state and rules.
pub trait Game {
    /// Validated input produced from one line
    type Input: std::fmt::Debug;

    /// Recoverable validation error, reported to the player
    type Error: std::error::Error;

    /// Terminal result of a session
    type Outcome: std::fmt::Debug + Copy;

    const NAME: &'static str;

    /// Game developer controls input parsing - no framework interference
    fn parse_line(line: &str) -> Result<Self::Input, Self::Error>;

    /// Apply a validated input to the state
    fn handle_input(&mut self, input: &Self::Input);

    fn status(&self) -> Status<Self::Outcome>;
}
