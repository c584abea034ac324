/// Terminal output context that handles colour and line printing
use crossterm::{QueueableCommand, style::{SetForegroundColor, ResetColor, Color}};
use std::io::{self, Write};

pub struct TerminalContext<W: Write> {
    out: W,
    color: bool,
}

impl<W: Write> TerminalContext<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self { out, color }
    }

    /// Print a line of plain text
    pub fn print_line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{}", text)
    }

    /// Print text without newline
    pub fn print(&mut self, text: &str) -> io::Result<()> {
        write!(self.out, "{}", text)
    }

    /// Print a coloured line. Colour codes are only emitted when enabled,
    /// the text itself is the same either way.
    pub fn print_colored_line(&mut self, text: &str, color: TerminalColor) -> io::Result<()> {
        if !self.color {
            return self.print_line(text);
        }

        self.out.queue(SetForegroundColor(color.into()))?;
        write!(self.out, "{}", text)?;
        self.out.queue(ResetColor)?;
        writeln!(self.out)
    }

    /// Print empty line
    pub fn empty_line(&mut self) -> io::Result<()> {
        writeln!(self.out)
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

#[derive(Clone, Copy, Debug)]
pub enum TerminalColor {
    Red,
    Green,
    Yellow,
    Cyan,
}

impl From<TerminalColor> for Color {
    fn from(color: TerminalColor) -> Self {
        match color {
            TerminalColor::Red => Color::Red,
            TerminalColor::Green => Color::Green,
            TerminalColor::Yellow => Color::Yellow,
            TerminalColor::Cyan => Color::Cyan,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_output_has_no_escape_codes() {
        let mut ctx = TerminalContext::new(Vec::new(), false);
        ctx.print_colored_line("hello", TerminalColor::Red).unwrap();
        ctx.print("a").unwrap();
        ctx.empty_line().unwrap();

        assert_eq!(String::from_utf8(ctx.into_inner()).unwrap(), "hello\na\n");
    }

    #[test]
    fn colored_output_wraps_text() {
        let mut ctx = TerminalContext::new(Vec::new(), true);
        ctx.print_colored_line("hello", TerminalColor::Green).unwrap();

        let out = String::from_utf8(ctx.into_inner()).unwrap();
        assert!(out.starts_with("\u{1b}["));
        assert!(out.contains("hello"));
        assert!(out.ends_with("\n"));
    }
}
