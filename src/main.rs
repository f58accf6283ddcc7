/// Entry point and session loop.

mod config;
mod domain;
mod error;
mod sim;
mod ui;

use log::{info, warn};

use config::GameConfig;
use domain::profile::PlayerProfile;
use sim::engine;
use sim::event::MoveOutcome;
use sim::level::LevelSource;
use sim::maze::MazeState;
use sim::save::ProfileStore;
use ui::input::{self, Command};
use ui::screen::Screen;

const USERNAME_MAX: usize = 50;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    let config = GameConfig::load();
    let levels = LevelSource::new(&config.levels_dir);
    let store = ProfileStore::new(&config.saves_dir);
    let mut screen = Screen::new();

    loop {
        screen.show_menu()?;
        let choice = match input::read_choice()? {
            Some(c) => c,
            None => break, // Ctrl-C at the menu
        };
        match choice {
            '1' => {
                if let Some(profile) = new_game(&config, &store, &mut screen)? {
                    play(profile, false, &config, &levels, &store, &mut screen)?;
                    break;
                }
            }
            '2' => {
                if let Some((profile, resume)) = continue_game(&store, &mut screen)? {
                    play(profile, resume, &config, &levels, &store, &mut screen)?;
                    break;
                }
            }
            '3' => break,
            _ => {} // anything else shows the menu again
        }
    }

    screen.show_message("\nThanks for playing Maze Escape!")?;
    Ok(())
}

fn init_logging() {
    // Off unless RUST_LOG asks for it; stray log lines would land in
    // the middle of the play field otherwise.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("off"))
        .format_timestamp(None)
        .init();
}

// ── Menu flows ──

/// Username prompt, overwrite confirmation, fresh profile persisted.
/// None sends the caller back to the menu.
fn new_game(
    config: &GameConfig,
    store: &ProfileStore,
    screen: &mut Screen,
) -> Result<Option<PlayerProfile>, Box<dyn std::error::Error>> {
    screen.show_message("")?;
    let username = prompt_username(screen)?;

    if store.exists(&username) {
        screen.prompt(&format!("A save for '{}' already exists. Overwrite it? (y/n) ", username))?;
        let answer = input::read_choice()?;
        screen.show_message("")?;
        if answer != Some('y') {
            return Ok(None);
        }
    }

    let profile = PlayerProfile::new(&username, config.starting_lives);
    if let Err(e) = store.save(&profile) {
        // A profile that cannot be written is still playable for the
        // session; the player just loses persistence.
        warn!("initial save failed: {}", e);
        screen.show_message(&format!("Warning: {}", e))?;
        screen.prompt("Press any key to continue anyway.")?;
        input::wait_any_key()?;
    }
    Ok(Some(profile))
}

/// Load an existing profile and offer a jump to an earlier level.
/// The bool reports whether the persisted position still applies.
fn continue_game(
    store: &ProfileStore,
    screen: &mut Screen,
) -> Result<Option<(PlayerProfile, bool)>, Box<dyn std::error::Error>> {
    screen.show_message("")?;
    let username = prompt_username(screen)?;

    let mut profile = match store.load(&username) {
        Ok(p) => p,
        Err(e) => {
            screen.show_message(&format!("{}", e))?;
            screen.prompt("Press any key to return to the menu.")?;
            input::wait_any_key()?;
            return Ok(None);
        }
    };

    screen.show_message(&format!(
        "Welcome back, {}! Your furthest level is {}.",
        profile.username, profile.level
    ))?;

    let mut resume = true;
    if profile.level > 1 {
        screen.prompt(&format!(
            "Play level (1-{}, Enter keeps {}): ",
            profile.level, profile.level
        ))?;
        let line = input::read_line()?;
        if !line.is_empty() {
            // Anything unparseable keeps the persisted level.
            let requested = line.parse::<u32>().unwrap_or(profile.level);
            let target = requested.clamp(1, profile.level);
            resume = target == profile.level;
            profile.level = target;
        }
    }

    Ok(Some((profile, resume)))
}

/// Non-empty username, capped at 50 characters.
fn prompt_username(screen: &mut Screen) -> Result<String, Box<dyn std::error::Error>> {
    loop {
        screen.prompt("Username: ")?;
        let name = input::read_line()?;
        if name.is_empty() {
            screen.show_message("A name is needed to keep your progress.")?;
            continue;
        }
        if name.chars().count() > USERNAME_MAX {
            return Ok(name.chars().take(USERNAME_MAX).collect());
        }
        return Ok(name);
    }
}

// ── Play loop ──

fn play(
    mut profile: PlayerProfile,
    resume_position: bool,
    config: &GameConfig,
    levels: &LevelSource,
    store: &ProfileStore,
    screen: &mut Screen,
) -> Result<(), Box<dyn std::error::Error>> {
    // Failure to enter the first level is fatal; there is nothing to
    // fall back to yet.
    let mut maze = MazeState::from_level(levels.load(profile.level)?);
    profile.position = if resume_position {
        maze.place_player(profile.position)
    } else {
        maze.start()
    };
    info!("session started for {} at level {}", profile.username, profile.level);

    let mut message = format!(
        "Level {}. Grab the key (&), then open the chest (X).",
        profile.level
    );

    loop {
        screen.draw_playfield(&maze, &profile, &message)?;
        match input::read_command()? {
            Command::Abort => return Ok(()),
            Command::SaveAndQuit => {
                match store.save(&profile) {
                    Ok(()) => screen.show_message("Game saved. See you next time!")?,
                    Err(e) => screen.show_message(&format!("Save failed: {}", e))?,
                }
                return Ok(());
            }
            Command::Move(dir) => {
                match engine::apply_move(&mut maze, &mut profile, dir, levels, config.starting_lives) {
                    Ok(MoveOutcome::GameComplete) => {
                        screen.show_victory(&profile)?;
                        match store.save(&profile) {
                            Ok(()) => screen.show_message("Progress saved.")?,
                            Err(e) => screen.show_message(&format!("Save failed: {}", e))?,
                        }
                        screen.prompt("Press any key to leave.")?;
                        input::wait_any_key()?;
                        return Ok(());
                    }
                    Ok(outcome) => message = describe(outcome),
                    Err(e) => {
                        // A chest transition that failed to load left
                        // the level exactly as it was.
                        warn!("level transition failed: {}", e);
                        message = e.to_string();
                    }
                }
            }
        }
    }
}

fn describe(outcome: MoveOutcome) -> String {
    match outcome {
        MoveOutcome::Blocked { lives_left } => {
            format!("Ouch, a wall! Lives left: {}", lives_left)
        }
        MoveOutcome::Restarted => "Out of lives! The level starts over.".to_string(),
        MoveOutcome::CoinCollected { total } => format!("Coin collected! Total: {}", total),
        MoveOutcome::KeyAcquired => "Key acquired! The chest will open now.".to_string(),
        MoveOutcome::LevelCompleted { level } => {
            format!("Chest unlocked! Welcome to level {}.", level)
        }
        // plain steps and ignored out-of-bounds moves stay quiet
        MoveOutcome::OutOfBounds | MoveOutcome::Moved | MoveOutcome::GameComplete => String::new(),
    }
}
