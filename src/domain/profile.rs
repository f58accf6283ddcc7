/// The one persistent player record.
///
/// Everything the save file stores lives here, plus the per-level coin
/// counter used to roll totals back on a death-reset. That counter is
/// ephemeral: it never reaches the save file and restarts at zero
/// whenever a level is entered.

/// Nominal lives when nothing else is configured.
pub const DEFAULT_LIVES: u32 = 3;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayerProfile {
    pub username: String,
    /// Current level, 1-based. Doubles as the progress marker.
    pub level: u32,
    pub lives: u32,
    pub coins: u32,
    /// Player position as (x, y): column, row.
    pub position: (usize, usize),
    pub has_key: bool,
    /// Coins collected in the current level attempt. Not persisted.
    pub coins_this_level: u32,
}

impl PlayerProfile {
    /// Fresh record for a new game.
    pub fn new(username: &str, starting_lives: u32) -> Self {
        PlayerProfile {
            username: username.to_string(),
            level: 1,
            lives: starting_lives,
            coins: 0,
            position: (0, 0),
            has_key: false,
            coins_this_level: 0,
        }
    }
}

impl Default for PlayerProfile {
    fn default() -> Self {
        PlayerProfile::new("", DEFAULT_LIVES)
    }
}
