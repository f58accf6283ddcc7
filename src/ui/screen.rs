/// Full-frame drawing: menu, play field, HUD and messages.
///
/// The game only changes on input, so every turn simply clears the
/// terminal and reprints. Drawing happens with raw mode off, which
/// keeps plain newlines usable.

use std::io::{self, Write};

use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{Clear, ClearType},
};

use crate::domain::profile::PlayerProfile;
use crate::domain::tile::Tile;
use crate::sim::maze::MazeState;

pub struct Screen {
    out: io::Stdout,
}

impl Screen {
    pub fn new() -> Self {
        Screen { out: io::stdout() }
    }

    /// The display half of the platform seam. Everything that wipes
    /// the terminal goes through here.
    pub fn clear_display(&mut self) -> io::Result<()> {
        queue!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
        self.out.flush()
    }

    pub fn show_menu(&mut self) -> io::Result<()> {
        self.clear_display()?;
        queue!(
            self.out,
            SetForegroundColor(Color::Yellow),
            Print("=== M A Z E   E S C A P E ===\n\n"),
            ResetColor,
            Print("  1) New Game\n"),
            Print("  2) Continue\n"),
            Print("  3) Quit\n\n"),
            Print("Pick an option: "),
        )?;
        self.out.flush()
    }

    /// One frame: HUD line, the maze, then the latest outcome message.
    pub fn draw_playfield(
        &mut self,
        maze: &MazeState,
        profile: &PlayerProfile,
        message: &str,
    ) -> io::Result<()> {
        self.clear_display()?;
        queue!(
            self.out,
            SetForegroundColor(Color::White),
            Print(format!(
                "Level: {} | Lives: {} | Coins: {} | Key: {}\n\n",
                profile.level,
                profile.lives,
                profile.coins,
                if profile.has_key { "yes" } else { "no" },
            )),
        )?;

        for row in maze.rows() {
            for &tile in row {
                queue!(
                    self.out,
                    SetForegroundColor(tile_color(tile)),
                    Print(tile.symbol()),
                )?;
            }
            queue!(self.out, Print('\n'))?;
        }

        queue!(self.out, ResetColor)?;
        if !message.is_empty() {
            queue!(self.out, Print(format!("\n{}\n", message)))?;
        }
        queue!(self.out, Print("\nMove with w/a/s/d, q saves and quits.\n"))?;
        self.out.flush()
    }

    pub fn show_victory(&mut self, profile: &PlayerProfile) -> io::Result<()> {
        self.clear_display()?;
        queue!(
            self.out,
            SetForegroundColor(Color::Green),
            Print("You opened the final chest!\n\n"),
            ResetColor,
            Print(format!(
                "{} escaped every maze with {} coins and {} lives to spare.\n\n",
                profile.username, profile.coins, profile.lives,
            )),
        )?;
        self.out.flush()
    }

    /// A line of text with a trailing newline.
    pub fn show_message(&mut self, text: &str) -> io::Result<()> {
        queue!(self.out, Print(format!("{}\n", text)))?;
        self.out.flush()
    }

    /// Prompt text with the cursor left on the same line.
    pub fn prompt(&mut self, text: &str) -> io::Result<()> {
        queue!(self.out, Print(text))?;
        self.out.flush()
    }
}

fn tile_color(tile: Tile) -> Color {
    match tile {
        Tile::Wall   => Color::DarkGrey,
        Tile::Coin   => Color::Yellow,
        Tile::Key    => Color::Cyan,
        Tile::Chest  => Color::Green,
        Tile::Portal => Color::Magenta,
        Tile::Player => Color::White,
        Tile::Empty  => Color::White,
    }
}
