/// Level loader.
///
/// ## Sources (priority order):
///   1. `<levels_dir>/levelN.txt` (individual files)
///   2. Built-in embedded levels
///
/// A file that exists but cannot be read is an error, never a silent
/// fallback; the embedded pack only answers for a level whose file is
/// absent.
///
/// ## Tile legend:
///   '#' = Wall     'C' = Coin    '@' = Player start
///   '%' = Portal   '&' = Key     'X' = Chest
///   anything else = Empty
///
/// Rows may be jagged; movement bounds-checks per row. The first '@'
/// (rows top-to-bottom, columns left-to-right) fixes the start; any
/// later '@' loads as Empty so exactly one marker exists.

use std::io;
use std::path::{Path, PathBuf};

use log::info;

use crate::domain::tile::Tile;
use crate::error::GameError;

/// One parsed level: the authored grid plus everything scanned from it.
#[derive(Clone, Debug)]
pub struct LevelData {
    pub grid: Vec<Vec<Tile>>,
    /// Portal coordinates as (x, y), in scan order.
    pub portals: Vec<(usize, usize)>,
    /// Authored start, (0, 0) when the grid has no '@'.
    pub start: (usize, usize),
}

/// Resolves level numbers to parsed levels.
pub struct LevelSource {
    dir: PathBuf,
}

impl LevelSource {
    pub fn new(dir: &Path) -> Self {
        LevelSource { dir: dir.to_path_buf() }
    }

    fn level_path(&self, id: u32) -> PathBuf {
        self.dir.join(format!("level{}.txt", id))
    }

    /// Can either source serve this level? The chest branch uses this
    /// to tell "game complete" from a genuinely missing resource.
    pub fn has_level(&self, id: u32) -> bool {
        self.level_path(id).is_file()
            || (id >= 1 && (id as usize) <= EMBEDDED_LEVELS.len())
    }

    /// Load and parse level `id`.
    pub fn load(&self, id: u32) -> Result<LevelData, GameError> {
        let path = self.level_path(id);
        match std::fs::read_to_string(&path) {
            Ok(content) => {
                info!("level {} loaded from {}", id, path.display());
                Ok(parse_level(content.lines()))
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                match embedded_level(id) {
                    Some(rows) => {
                        info!("level {} loaded from the embedded pack", id);
                        Ok(parse_level(rows.iter().copied()))
                    }
                    None => Err(GameError::ResourceUnavailable { path, source: e }),
                }
            }
            Err(e) => Err(GameError::ResourceUnavailable { path, source: e }),
        }
    }
}

// ══════════════════════════════════════════════════════════════
// Parsing
// ══════════════════════════════════════════════════════════════

/// Parse level text into a grid, collecting portals and the start.
/// Trailing fully-blank lines are dropped; interior short rows stay
/// jagged.
pub(crate) fn parse_level<'a, I>(lines: I) -> LevelData
where
    I: IntoIterator<Item = &'a str>,
{
    let mut rows: Vec<&str> = lines.into_iter().collect();
    while rows.last().map_or(false, |r| r.trim().is_empty()) {
        rows.pop();
    }

    let mut grid = Vec::with_capacity(rows.len());
    let mut portals = vec![];
    let mut start = None;

    for (y, line) in rows.iter().enumerate() {
        let mut row = Vec::with_capacity(line.len());
        for (x, ch) in line.chars().enumerate() {
            let mut tile = Tile::from_symbol(ch);
            match tile {
                Tile::Player => {
                    if start.is_none() {
                        start = Some((x, y));
                    } else {
                        tile = Tile::Empty; // keep a single marker
                    }
                }
                Tile::Portal => portals.push((x, y)),
                _ => {}
            }
            row.push(tile);
        }
        grid.push(row);
    }

    LevelData {
        grid,
        portals,
        start: start.unwrap_or((0, 0)),
    }
}

// ══════════════════════════════════════════════════════════════
// Embedded fallback levels
// ══════════════════════════════════════════════════════════════

fn embedded_level(id: u32) -> Option<&'static [&'static str]> {
    if id == 0 {
        return None;
    }
    EMBEDDED_LEVELS.get(id as usize - 1).copied()
}

const EMBEDDED_LEVELS: &[&[&str]] = &[
    // Level 1 - open yard, key in the center pocket
    &[
        "###########",
        "#@  C   C #",
        "#   ###   #",
        "# C #&# C #",
        "#   # #   #",
        "#    C    #",
        "#  C   X  #",
        "###########",
    ],
    // Level 2 - two chambers joined only by the portal pair
    &[
        "#############",
        "#@  C #  C  #",
        "# ##  #  ## #",
        "# #%  #  %# #",
        "# ##  #  ## #",
        "#  C  #  &  #",
        "#     # X   #",
        "#############",
    ],
    // Level 3 - three chambers chained by cyclic portals
    &[
        "###############",
        "#@  C #  & # C#",
        "#     #    #  #",
        "# %   # %  # %#",
        "#     #    #  #",
        "# C   #  C # X#",
        "###############",
    ],
];
