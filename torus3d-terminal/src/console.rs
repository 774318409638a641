/// Console access behind a small trait so the animation loop can be driven
/// without a real terminal
use crossterm::{
    cursor, queue,
    style::Print,
    terminal::{self, Clear, ClearType},
};
use std::io::{self, stdout, Stdout, Write};

/// The three services the animation needs from a terminal
pub trait Console {
    /// Viewport size in character cells, `(width, height)`
    fn size(&self) -> io::Result<(u16, u16)>;

    /// Blank the visible screen and move the cursor to the origin
    fn clear(&mut self) -> io::Result<()>;

    /// Write a whole frame starting at the origin
    fn write_frame(&mut self, frame: &str) -> io::Result<()>;
}

/// [`Console`] backed by crossterm
pub struct CrosstermConsole<W: Write = Stdout> {
    out: W,
}

impl CrosstermConsole<Stdout> {
    pub fn stdout() -> Self {
        Self { out: stdout() }
    }
}

impl<W: Write> CrosstermConsole<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Console for CrosstermConsole<W> {
    fn size(&self) -> io::Result<(u16, u16)> {
        terminal::size()
    }

    fn clear(&mut self) -> io::Result<()> {
        queue!(self.out, Clear(ClearType::All), cursor::MoveTo(0, 0))?;
        self.out.flush()
    }

    fn write_frame(&mut self, frame: &str) -> io::Result<()> {
        queue!(self.out, cursor::MoveTo(0, 0), Print(frame))?;
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_frame_emits_text_after_cursor_home() {
        let mut console = CrosstermConsole::new(Vec::new());
        console.write_frame("ab\ncd").unwrap();
        let bytes = console.into_inner();
        let text = String::from_utf8(bytes).unwrap();
        assert!(text.ends_with("ab\ncd"));
        assert!(text.starts_with("\x1b[1;1H"));
    }

    #[test]
    fn test_clear_emits_escape_sequences() {
        let mut console = CrosstermConsole::new(Vec::new());
        console.clear().unwrap();
        let text = String::from_utf8(console.into_inner()).unwrap();
        assert!(text.contains("\x1b[2J"));
    }
}
