//! Input/output abstractions
//!
//! The game draws through the [`Screen`] trait and consumes [`InputEvent`]s,
//! so the simulation and presenters can be tested with mock implementations.
//! The crossterm-backed implementations live in [`terminal`].

pub mod terminal;

use std::io;

/// A key press, reduced to what the game reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Enter,
    Backspace,
    Esc,
    Other,
}

/// Event delivered by the input poller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Key(Key),
    Resize { width: u16, height: u16 },
}

/// How a run of text is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextStyle {
    #[default]
    Plain,
    Bold,
    /// Blinking, where the terminal supports it.
    Blink,
}

/// Character-cell render surface.
///
/// Coordinates are columns and rows from the top-left corner. Drawing is
/// buffered until [`Screen::show`].
pub trait Screen {
    fn clear(&mut self) -> io::Result<()>;

    fn emit_str(&mut self, x: u16, y: u16, text: &str, style: TextStyle) -> io::Result<()>;

    /// Width and height in cells.
    fn size(&self) -> (u16, u16);

    fn show(&mut self) -> io::Result<()>;

    /// Called when the console reports a new size.
    fn resized(&mut self, _width: u16, _height: u16) {}

    /// Single-line box whose outer corners are (x, y) and (x + w, y + h).
    fn draw_box(&mut self, x: u16, y: u16, w: u16, h: u16) -> io::Result<()> {
        if w < 1 || h < 1 {
            return Ok(());
        }
        let horizontal = "─".repeat(w as usize - 1);
        self.emit_str(x, y, &format!("┌{}┐", horizontal), TextStyle::Plain)?;
        for row in y + 1..y + h {
            self.emit_str(x, row, "│", TextStyle::Plain)?;
            self.emit_str(x + w, row, "│", TextStyle::Plain)?;
        }
        self.emit_str(x, y + h, &format!("└{}┘", horizontal), TextStyle::Plain)
    }
}
