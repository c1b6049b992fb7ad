//! crossterm terminal backend
//!
//! [`Terminal`] owns raw mode and the alternate screen for as long as it is
//! alive and restores the terminal when dropped, including on error paths.
//! [`spawn_input_poller`] reads key events on a separate thread and hands
//! them to the game loop over a bounded channel.

use std::io::{self, Stdout, Write};
use std::sync::mpsc::{self, Receiver, SyncSender, TrySendError};
use std::thread;
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEventKind},
    execute, queue,
    style::{Attribute, Print, SetAttribute},
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};

use super::{InputEvent, Key, Screen, TextStyle};
use crate::models::errors::{GameError, GameResult};

/// Smallest console the game lays itself out in.
pub const MIN_WIDTH: u16 = 80;
pub const MIN_HEIGHT: u16 = 25;

const INPUT_QUEUE_DEPTH: usize = 64;
const POLL_INTERVAL: Duration = Duration::from_millis(50);

pub struct Terminal<W: Write = Stdout> {
    out: W,
    size: (u16, u16),
    raw: bool,
}

impl Terminal {
    /// Switch the console to raw mode on the alternate screen.
    ///
    /// Fails with [`GameError::TerminalTooSmall`] below 80x25; the console
    /// is left untouched in that case.
    pub fn begin() -> GameResult<Self> {
        let (width, height) = terminal::size()?;
        if width < MIN_WIDTH || height < MIN_HEIGHT {
            return Err(GameError::TerminalTooSmall {
                width,
                height,
                min_width: MIN_WIDTH,
                min_height: MIN_HEIGHT,
            });
        }

        let terminal = Terminal::open(io::stdout(), (width, height), terminal::enable_raw_mode)?;
        log::debug!("terminal opened at {}x{}", width, height);
        Ok(terminal)
    }
}

impl<W: Write> Terminal<W> {
    /// The value exists before any setup step runs, so a failure part way
    /// through still restores the console on drop.
    fn open(
        out: W,
        size: (u16, u16),
        enable_raw: impl FnOnce() -> io::Result<()>,
    ) -> io::Result<Self> {
        let mut terminal = Terminal {
            out,
            size,
            raw: false,
        };
        execute!(
            terminal.out,
            EnterAlternateScreen,
            cursor::Hide,
            Clear(ClearType::All)
        )?;
        enable_raw()?;
        terminal.raw = true;
        Ok(terminal)
    }

    fn end(&mut self) -> io::Result<()> {
        queue!(
            self.out,
            SetAttribute(Attribute::Reset),
            Clear(ClearType::All),
            cursor::Show,
            LeaveAlternateScreen
        )?;
        self.out.flush()?;
        if self.raw {
            terminal::disable_raw_mode()?;
        }
        Ok(())
    }
}

impl<W: Write> Drop for Terminal<W> {
    fn drop(&mut self) {
        if let Err(e) = self.end() {
            log::error!("failed to restore terminal: {}", e);
        }
    }
}

impl<W: Write> Screen for Terminal<W> {
    fn clear(&mut self) -> io::Result<()> {
        queue!(self.out, Clear(ClearType::All))
    }

    fn emit_str(&mut self, x: u16, y: u16, text: &str, style: TextStyle) -> io::Result<()> {
        queue!(self.out, cursor::MoveTo(x, y))?;
        match style {
            TextStyle::Plain => queue!(self.out, Print(text)),
            TextStyle::Bold => queue!(
                self.out,
                SetAttribute(Attribute::Bold),
                Print(text),
                SetAttribute(Attribute::Reset)
            ),
            TextStyle::Blink => queue!(
                self.out,
                SetAttribute(Attribute::SlowBlink),
                Print(text),
                SetAttribute(Attribute::Reset)
            ),
        }
    }

    fn size(&self) -> (u16, u16) {
        self.size
    }

    fn show(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    fn resized(&mut self, width: u16, height: u16) {
        self.size = (width, height);
    }
}

fn map_key(code: KeyCode) -> Key {
    match code {
        KeyCode::Char(c) => Key::Char(c),
        KeyCode::Enter => Key::Enter,
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Esc => Key::Esc,
        _ => Key::Other,
    }
}

fn map_event(event: Event) -> Option<InputEvent> {
    match event {
        Event::Key(k) if k.kind == KeyEventKind::Press => Some(InputEvent::Key(map_key(k.code))),
        Event::Resize(width, height) => Some(InputEvent::Resize { width, height }),
        _ => None,
    }
}

/// Start the input thread.
///
/// The thread polls the console and forwards key presses and resizes. It
/// exits when the receiver is dropped or the console read fails; the game
/// loop then sees the channel disconnect.
pub fn spawn_input_poller() -> io::Result<Receiver<InputEvent>> {
    let (tx, rx) = mpsc::sync_channel(INPUT_QUEUE_DEPTH);
    thread::Builder::new()
        .name("input".to_string())
        .spawn(move || poll_input(tx))?;
    Ok(rx)
}

fn poll_input(tx: SyncSender<InputEvent>) {
    loop {
        let ready = match event::poll(POLL_INTERVAL) {
            Ok(ready) => ready,
            Err(e) => {
                log::error!("input poll failed: {}", e);
                return;
            }
        };
        if !ready {
            continue;
        }
        let event = match event::read() {
            Ok(event) => event,
            Err(e) => {
                log::error!("input read failed: {}", e);
                return;
            }
        };
        let Some(event) = map_event(event) else {
            continue;
        };
        match tx.try_send(event) {
            Ok(()) => {}
            Err(TrySendError::Full(dropped)) => log::warn!("input queue full, dropped {:?}", dropped),
            Err(TrySendError::Disconnected(_)) => {
                log::debug!("input receiver closed");
                return;
            }
        }
    }
}
