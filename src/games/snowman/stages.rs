/// Snowman artwork, one block per mistake count. The last stage is a puddle.
pub const STAGES: [&str; 4] = [
    // 0 mistakes
    r"
      ___
     /___\
     (o o)
     ( : )
     ( : )
    ",
    // 1 mistake
    r"
      ___
     /___\
     (o o)
     ( : )
    ",
    // 2 mistakes
    r"
      ___
     /___\
     (o o)
    ",
    // 3 mistakes
    r"
     ~~~~~
    ",
];

/// Number of wrong guesses that ends the game
pub const MAX_MISTAKES: usize = STAGES.len() - 1;

/// Artwork for the given mistake count, clamped to the final stage
pub fn stage(mistakes: usize) -> &'static str {
    STAGES[mistakes.min(MAX_MISTAKES)]
}
