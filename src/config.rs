/// External configuration loader.
///
/// Reads `config.toml` from the executable's directory (or CWD).
/// Falls back to sensible defaults if the file is missing or incomplete.

use std::path::PathBuf;

use log::warn;
use serde::Deserialize;

// ── Public Config Struct ──

#[derive(Clone, Debug)]
pub struct GameConfig {
    pub levels_dir: PathBuf,
    pub saves_dir: PathBuf,
    pub starting_lives: u32,
}

// ── TOML Schema (with serde defaults) ──

#[derive(Deserialize, Debug, Default)]
struct TomlConfig {
    #[serde(default)]
    general: TomlGeneral,
    #[serde(default)]
    rules: TomlRules,
}

#[derive(Deserialize, Debug)]
struct TomlGeneral {
    #[serde(default = "default_levels_dir")]
    levels_dir: String,
    #[serde(default = "default_saves_dir")]
    saves_dir: String,
}

#[derive(Deserialize, Debug)]
struct TomlRules {
    #[serde(default = "default_starting_lives")]
    starting_lives: u32,
}

// ── Defaults ──

fn default_levels_dir() -> String { "levels".into() }
fn default_saves_dir() -> String { "saves".into() }
fn default_starting_lives() -> u32 { 3 }

impl Default for TomlGeneral {
    fn default() -> Self {
        TomlGeneral {
            levels_dir: default_levels_dir(),
            saves_dir: default_saves_dir(),
        }
    }
}

impl Default for TomlRules {
    fn default() -> Self {
        TomlRules {
            starting_lives: default_starting_lives(),
        }
    }
}

// ── Loading ──

impl GameConfig {
    /// Load config from `config.toml`.
    /// Search order: (1) exe directory, (2) current working directory,
    /// (3) XDG data home, (4) system data directory.
    /// Missing file or missing keys gracefully fall back to defaults.
    pub fn load() -> Self {
        let search_dirs = candidate_dirs();
        let toml_cfg = load_toml(&search_dirs);

        GameConfig {
            levels_dir: resolve_dir(&toml_cfg.general.levels_dir, &search_dirs),
            saves_dir: resolve_dir(&toml_cfg.general.saves_dir, &search_dirs),
            // zero starting lives would make the first wall restart forever
            starting_lives: toml_cfg.rules.starting_lives.max(1),
        }
    }
}

/// Absolute paths pass through; relative names are searched among the
/// candidate dirs, falling back to CWD-relative (the saves dir usually
/// doesn't exist until the first save creates it).
fn resolve_dir(name: &str, search_dirs: &[PathBuf]) -> PathBuf {
    let path = PathBuf::from(name);
    if path.is_absolute() {
        return path;
    }
    search_dirs
        .iter()
        .map(|d| d.join(name))
        .find(|p| p.is_dir())
        .unwrap_or(path)
}

/// Candidate directories to search: exe dir + CWD + system paths (deduplicated).
fn candidate_dirs() -> Vec<PathBuf> {
    let mut dirs = vec![];

    // 1. Directory of the running executable
    if let Ok(exe) = std::env::current_exe() {
        // Resolve symlinks so /usr/bin/mazescape → /usr/games/mazescape
        // still finds data relative to the real binary.
        let resolved = exe.canonicalize().unwrap_or(exe);
        if let Some(parent) = resolved.parent() {
            dirs.push(parent.to_path_buf());
        }
    }

    // 2. Current working directory
    if let Ok(cwd) = std::env::current_dir() {
        if !dirs.iter().any(|d| d == &cwd) {
            dirs.push(cwd);
        }
    }

    // 3. XDG data home (~/.local/share/mazescape)
    if let Ok(home) = std::env::var("HOME") {
        let xdg = PathBuf::from(&home).join(".local/share/mazescape");
        if xdg.is_dir() && !dirs.iter().any(|d| d == &xdg) {
            dirs.push(xdg);
        }
    }

    // 4. System data directory (/usr/share/mazescape)
    let sys = PathBuf::from("/usr/share/mazescape");
    if sys.is_dir() && !dirs.iter().any(|d| d == &sys) {
        dirs.push(sys);
    }

    // 5. Fallback
    if dirs.is_empty() {
        dirs.push(PathBuf::from("."));
    }

    dirs
}

/// Search for config.toml in candidate directories.
fn load_toml(search_dirs: &[PathBuf]) -> TomlConfig {
    for dir in search_dirs {
        let path = dir.join("config.toml");
        if path.exists() {
            match std::fs::read_to_string(&path) {
                Ok(text) => match toml::from_str::<TomlConfig>(&text) {
                    Ok(cfg) => return cfg,
                    Err(e) => {
                        warn!("config.toml parse error, using defaults: {e}");
                        return TomlConfig::default();
                    }
                },
                Err(e) => {
                    warn!("could not read {}: {e}", path.display());
                }
            }
        }
    }
    TomlConfig::default()
}
