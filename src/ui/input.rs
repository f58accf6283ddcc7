/// Command reading for a turn-based loop.
///
/// One keypress per turn: raw mode is enabled for the read and dropped
/// again on every exit path, so prompts and line input behave normally
/// in between. Only Press events count; Repeat and Release are ignored.

use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal;

use crate::domain::direction::Direction;

/// What a keypress means to the session loop.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Command {
    Move(Direction),
    /// `q`: persist the profile and leave.
    SaveAndQuit,
    /// Ctrl-C: leave immediately without saving.
    Abort,
}

/// Block until a key that means something arrives. Unrecognized
/// characters are ignored by design.
pub fn read_command() -> io::Result<Command> {
    loop {
        let key = read_key()?;
        if is_ctrl_c(&key) {
            return Ok(Command::Abort);
        }
        if let KeyCode::Char(c) = key.code {
            if let Some(dir) = Direction::from_key(c) {
                return Ok(Command::Move(dir));
            }
            if c.eq_ignore_ascii_case(&'q') {
                return Ok(Command::SaveAndQuit);
            }
        }
    }
}

/// Single printable key for menu selections, lowercased. Ctrl-C reads
/// as None so menus can treat it as quit.
pub fn read_choice() -> io::Result<Option<char>> {
    loop {
        let key = read_key()?;
        if is_ctrl_c(&key) {
            return Ok(None);
        }
        if let KeyCode::Char(c) = key.code {
            return Ok(Some(c.to_ascii_lowercase()));
        }
    }
}

/// Swallow one keypress ("press any key" screens).
pub fn wait_any_key() -> io::Result<()> {
    read_key().map(|_| ())
}

/// Read a full input line with raw mode off (username, level number).
pub fn read_line() -> io::Result<String> {
    let mut buf = String::new();
    io::stdin().read_line(&mut buf)?;
    Ok(buf.trim().to_string())
}

fn is_ctrl_c(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
}

/// Block for a single key press, raw mode scoped to the wait.
fn read_key() -> io::Result<KeyEvent> {
    let _raw = RawGuard::enable()?;
    loop {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                return Ok(key);
            }
        }
    }
}

/// Raw mode as a scope: enabled on construction, always released on
/// drop, early returns and errors included.
struct RawGuard;

impl RawGuard {
    fn enable() -> io::Result<RawGuard> {
        terminal::enable_raw_mode()?;
        Ok(RawGuard)
    }
}

impl Drop for RawGuard {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}
