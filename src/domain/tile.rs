/// Tile types and the level symbol table.
/// Semantics are queried via methods, not stored as flags,
/// so tile behavior is centralized here.

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Tile {
    Empty,
    Wall,   // Blocks movement, costs a life on contact
    Coin,   // Pickup, counted per level and in total
    Key,    // Unlocks the chest
    Chest,  // Level exit, consumes the key
    Portal, // Teleport, paired cyclically in scan order
    Player, // Marker for the currently occupied cell
}

impl Tile {
    /// Map a level-file character to its tile.
    /// Unknown characters load as Empty.
    pub fn from_symbol(c: char) -> Tile {
        match c {
            '#' => Tile::Wall,
            'C' => Tile::Coin,
            '@' => Tile::Player,
            '%' => Tile::Portal,
            '&' => Tile::Key,
            'X' => Tile::Chest,
            _   => Tile::Empty,
        }
    }

    /// The character a tile renders as.
    pub fn symbol(self) -> char {
        match self {
            Tile::Empty  => ' ',
            Tile::Wall   => '#',
            Tile::Coin   => 'C',
            Tile::Key    => '&',
            Tile::Chest  => 'X',
            Tile::Portal => '%',
            Tile::Player => '@',
        }
    }

    /// Does the tile stay on the grid when the player steps off it?
    /// Standing on a chest or portal doesn't consume it; every other
    /// vacated cell becomes Empty.
    pub fn survives_vacate(self) -> bool {
        matches!(self, Tile::Chest | Tile::Portal)
    }
}

impl Default for Tile {
    fn default() -> Self {
        Tile::Empty
    }
}
