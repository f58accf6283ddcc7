/// MazeState: the live grid for the current level.
///
/// Two grid layers, composed at load time:
///   - `base`: the level as authored. Never mutated after load.
///   - `grid`: the effective cells (base + runtime changes).
///
/// All mutation goes through `set_tile()`; `restart()` resets
/// `grid = base.clone()`, which revives every consumed coin and puts
/// the marker back at the authored start.
///
/// The portal registry and the vacated-tile memory live here, so
/// replacing the MazeState on a level change discards both wholesale.

use crate::domain::tile::Tile;
use crate::sim::level::LevelData;

pub struct MazeState {
    base: Vec<Vec<Tile>>,
    grid: Vec<Vec<Tile>>,
    portals: Vec<(usize, usize)>,
    start: (usize, usize),
    /// What the currently occupied cell held before the player arrived.
    pub last_vacated: Tile,
}

impl MazeState {
    pub fn from_level(data: LevelData) -> Self {
        MazeState {
            base: data.grid.clone(),
            grid: data.grid,
            portals: data.portals,
            start: data.start,
            last_vacated: Tile::Empty,
        }
    }

    /// The authored start position.
    pub fn start(&self) -> (usize, usize) {
        self.start
    }

    /// Bounds-checked read; None outside the grid (rows may be jagged).
    pub fn tile_at(&self, x: i32, y: i32) -> Option<Tile> {
        if x < 0 || y < 0 {
            return None;
        }
        self.grid
            .get(y as usize)
            .and_then(|row| row.get(x as usize))
            .copied()
    }

    pub fn set_tile(&mut self, x: usize, y: usize, t: Tile) {
        if let Some(cell) = self.grid.get_mut(y).and_then(|row| row.get_mut(x)) {
            *cell = t;
        }
    }

    /// Registry index of the portal at (x, y), if any.
    pub fn portal_index(&self, x: usize, y: usize) -> Option<usize> {
        self.portals.iter().position(|&p| p == (x, y))
    }

    /// Where a portal leads: the next one in scan order, cyclic.
    pub fn portal_exit(&self, idx: usize) -> (usize, usize) {
        self.portals[(idx + 1) % self.portals.len()]
    }

    /// Grid rows for drawing.
    pub fn rows(&self) -> &[Vec<Tile>] {
        &self.grid
    }

    /// Hard restart: authored grid back, vacated-tile memory cleared.
    pub fn restart(&mut self) {
        self.grid = self.base.clone();
        self.last_vacated = Tile::Empty;
    }

    /// Put the player marker at `pos` (used when resuming a save),
    /// remembering what the cell held so a chest or portal underfoot
    /// is redrawn on vacate. Out-of-bounds positions fall back to the
    /// authored start. Returns the effective position.
    pub fn place_player(&mut self, pos: (usize, usize)) -> (usize, usize) {
        let pos = match self.tile_at(pos.0 as i32, pos.1 as i32) {
            Some(_) => pos,
            None => self.start,
        };
        self.set_tile(self.start.0, self.start.1, Tile::Empty);
        let was = self.tile_at(pos.0 as i32, pos.1 as i32).unwrap_or_default();
        self.last_vacated = if was == Tile::Player { Tile::Empty } else { was };
        self.set_tile(pos.0, pos.1, Tile::Player);
        pos
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::level::parse_level;

    fn maze_from(rows: &[&str]) -> MazeState {
        MazeState::from_level(parse_level(rows.iter().copied()))
    }

    #[test]
    fn restart_restores_the_authored_grid() {
        let mut m = maze_from(&["@C#"]);
        m.set_tile(1, 0, Tile::Empty);
        m.last_vacated = Tile::Coin;
        m.restart();
        assert_eq!(m.tile_at(1, 0), Some(Tile::Coin));
        assert_eq!(m.tile_at(0, 0), Some(Tile::Player));
        assert_eq!(m.last_vacated, Tile::Empty);
    }

    #[test]
    fn tile_at_handles_jagged_rows() {
        let m = maze_from(&["###", "#"]);
        assert_eq!(m.tile_at(2, 0), Some(Tile::Wall));
        assert_eq!(m.tile_at(1, 1), None);
        assert_eq!(m.tile_at(-1, 0), None);
        assert_eq!(m.tile_at(0, 2), None);
    }

    #[test]
    fn place_player_remembers_the_covered_tile() {
        let mut m = maze_from(&["@ %"]);
        let pos = m.place_player((2, 0));
        assert_eq!(pos, (2, 0));
        assert_eq!(m.tile_at(2, 0), Some(Tile::Player));
        assert_eq!(m.last_vacated, Tile::Portal);
        // the authored marker is lifted
        assert_eq!(m.tile_at(0, 0), Some(Tile::Empty));
    }

    #[test]
    fn place_player_out_of_bounds_falls_back_to_start() {
        let mut m = maze_from(&["@  "]);
        let pos = m.place_player((9, 9));
        assert_eq!(pos, (0, 0));
        assert_eq!(m.tile_at(0, 0), Some(Tile::Player));
        assert_eq!(m.last_vacated, Tile::Empty);
    }

    #[test]
    fn portal_pairing_is_cyclic() {
        let m = maze_from(&["% %", " % "]);
        assert_eq!(m.portal_index(0, 0), Some(0));
        assert_eq!(m.portal_index(2, 0), Some(1));
        assert_eq!(m.portal_index(1, 1), Some(2));
        assert_eq!(m.portal_exit(0), (2, 0));
        assert_eq!(m.portal_exit(2), (0, 0));
    }
}
