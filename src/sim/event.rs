/// Outcomes emitted by the movement engine, one per command.
/// The session shell consumes these for messages; the engine never prints.

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MoveOutcome {
    /// Candidate cell was outside the grid; nothing changed.
    OutOfBounds,
    /// Walked into a wall and lost a life; position unchanged.
    Blocked { lives_left: u32 },
    /// Walked into a wall with the last life; the level restarted.
    Restarted,
    /// Plain step, including the far end of a portal jump.
    Moved,
    CoinCollected { total: u32 },
    KeyAcquired,
    /// Chest opened; the player is now on the given level.
    LevelCompleted { level: u32 },
    /// Chest opened with no further level authored.
    GameComplete,
}
