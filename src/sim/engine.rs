/// The movement engine: one command in, one outcome out.
///
/// Resolution order per move, fixed:
///   bounds check → wall (life loss, death-reset) → chest-with-key
///   (loads the next level before committing, then returns early) →
///   vacate the old cell → coin → key → portal jump → final
///   bookkeeping at the landing cell.
///
/// The engine owns every mutation of MazeState and of the profile's
/// play fields. It never prints; the shell renders the outcome. Its
/// only I/O is the level source, consulted during a chest advance.

use log::{debug, info};

use crate::domain::direction::Direction;
use crate::domain::profile::PlayerProfile;
use crate::domain::tile::Tile;
use crate::error::GameError;
use crate::sim::event::MoveOutcome;
use crate::sim::level::LevelSource;
use crate::sim::maze::MazeState;

pub fn apply_move(
    maze: &mut MazeState,
    profile: &mut PlayerProfile,
    dir: Direction,
    levels: &LevelSource,
    starting_lives: u32,
) -> Result<MoveOutcome, GameError> {
    let (dx, dy) = dir.offset();
    let (px, py) = profile.position;
    let cx = px as i32 + dx;
    let cy = py as i32 + dy;

    // Outside the grid, jagged rows included: silently ignored.
    let dest = match maze.tile_at(cx, cy) {
        Some(t) => t,
        None => return Ok(MoveOutcome::OutOfBounds),
    };
    let (nx, ny) = (cx as usize, cy as usize);

    if dest == Tile::Wall {
        profile.lives = profile.lives.saturating_sub(1);
        if profile.lives == 0 {
            restart_level(maze, profile, starting_lives);
            return Ok(MoveOutcome::Restarted);
        }
        return Ok(MoveOutcome::Blocked { lives_left: profile.lives });
    }

    // Chest with key: resolve the next level before touching any state,
    // so a failed load leaves play exactly where it was. No further
    // tile effects apply to this command.
    if dest == Tile::Chest && profile.has_key {
        let next = profile.level + 1;
        if !levels.has_level(next) {
            return Ok(MoveOutcome::GameComplete);
        }
        let data = levels.load(next)?;
        *maze = MazeState::from_level(data);
        profile.level = next;
        profile.coins_this_level = 0;
        profile.has_key = false;
        profile.position = maze.start();
        info!("level {} entered at {:?}", next, profile.position);
        return Ok(MoveOutcome::LevelCompleted { level: next });
    }

    // Step off the current cell: chests and portals stay, the rest
    // clears to Empty.
    let behind = if maze.last_vacated.survives_vacate() {
        maze.last_vacated
    } else {
        Tile::Empty
    };
    maze.set_tile(px, py, behind);

    let mut outcome = MoveOutcome::Moved;
    match dest {
        Tile::Coin => {
            profile.coins += 1;
            profile.coins_this_level += 1;
            maze.set_tile(nx, ny, Tile::Empty);
            outcome = MoveOutcome::CoinCollected { total: profile.coins };
        }
        Tile::Key => {
            // idempotent: the flag only ever flips to true here
            profile.has_key = true;
            outcome = MoveOutcome::KeyAcquired;
        }
        _ => {}
    }

    // Portal jump: land on the next portal in scan order (cyclic; a
    // lone portal round-trips onto itself).
    let (mut fx, mut fy) = (nx, ny);
    if dest == Tile::Portal {
        if let Some(idx) = maze.portal_index(nx, ny) {
            let (ex, ey) = maze.portal_exit(idx);
            debug!("portal {} jumps to ({}, {})", idx, ex, ey);
            fx = ex;
            fy = ey;
        }
    }

    // Remember what the landing cell held, then occupy it.
    maze.last_vacated = maze.tile_at(fx as i32, fy as i32).unwrap_or_default();
    maze.set_tile(fx, fy, Tile::Player);
    profile.position = (fx, fy);

    Ok(outcome)
}

/// Death-reset: the current level restarts from its authored state and
/// the coins from this attempt roll back out of the total.
fn restart_level(maze: &mut MazeState, profile: &mut PlayerProfile, starting_lives: u32) {
    profile.lives = starting_lives;
    profile.has_key = false;
    profile.coins = profile.coins.saturating_sub(profile.coins_this_level);
    profile.coins_this_level = 0;
    maze.restart();
    profile.position = maze.start();
    info!("out of lives, level {} restarted", profile.level);
}
