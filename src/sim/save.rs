/// Profile store: one save file per player.
///
/// ## File format:
///   Key-value lines, written in a fixed order:
///     username=, level=, lives=, coins=, positionX=, positionY=, key=
///   `key` is 0/1. Read order doesn't matter; unknown lines are
///   ignored; a missing key leaves its field at the default; a numeric
///   field that fails to parse fails the whole load.
///
/// Profiles are addressed as `<saves_dir>/<id>.sav`, where `id` is the
/// username with anything outside [A-Za-z0-9_-] replaced by '_' and
/// capped at 50 characters.

use std::io;
use std::path::{Path, PathBuf};

use log::{info, warn};

use crate::domain::profile::{PlayerProfile, DEFAULT_LIVES};
use crate::error::GameError;

pub struct ProfileStore {
    dir: PathBuf,
}

impl ProfileStore {
    pub fn new(dir: &Path) -> Self {
        ProfileStore { dir: dir.to_path_buf() }
    }

    fn profile_path(&self, username: &str) -> PathBuf {
        self.dir.join(format!("{}.sav", storage_id(username)))
    }

    /// Is there a saved record for this username?
    pub fn exists(&self, username: &str) -> bool {
        !username.is_empty() && self.profile_path(username).is_file()
    }

    /// Load a profile. Any open failure reads as a miss so the caller
    /// can fall back to the new-profile flow.
    pub fn load(&self, username: &str) -> Result<PlayerProfile, GameError> {
        let path = self.profile_path(username);
        let content = std::fs::read_to_string(&path).map_err(|e| {
            if e.kind() != io::ErrorKind::NotFound {
                warn!("profile read failed at {}: {}", path.display(), e);
            }
            GameError::ProfileNotFound(username.to_string())
        })?;
        let profile = parse_profile(username, &content)?;
        info!("profile loaded from {}", path.display());
        Ok(profile)
    }

    /// Persist a profile, overwriting any existing record (no merge).
    pub fn save(&self, profile: &PlayerProfile) -> Result<(), GameError> {
        if profile.username.is_empty() {
            return Err(GameError::InvalidProfile);
        }
        self.ensure_save_dir()?;
        let path = self.profile_path(&profile.username);
        std::fs::write(&path, serialize(profile)).map_err(GameError::WriteFailure)?;
        info!("profile saved to {}", path.display());
        Ok(())
    }

    /// The storage half of the platform seam: create the saves
    /// directory on demand, nowhere else.
    fn ensure_save_dir(&self) -> Result<(), GameError> {
        std::fs::create_dir_all(&self.dir).map_err(GameError::WriteFailure)
    }
}

/// Username → storage identifier: [A-Za-z0-9_-] kept, anything else
/// becomes '_', capped at 50 characters.
fn storage_id(username: &str) -> String {
    username
        .chars()
        .take(50)
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

// ══════════════════════════════════════════════════════════════
// Serialization
// ══════════════════════════════════════════════════════════════

fn serialize(p: &PlayerProfile) -> String {
    let mut out = String::with_capacity(128);
    out.push_str(&format!("username={}\n", p.username));
    out.push_str(&format!("level={}\n", p.level));
    out.push_str(&format!("lives={}\n", p.lives));
    out.push_str(&format!("coins={}\n", p.coins));
    out.push_str(&format!("positionX={}\n", p.position.0));
    out.push_str(&format!("positionY={}\n", p.position.1));
    out.push_str(&format!("key={}\n", if p.has_key { 1 } else { 0 }));
    out
}

// ══════════════════════════════════════════════════════════════
// Parsing
// ══════════════════════════════════════════════════════════════

/// The requested username doubles as the default for a record that
/// lacks a `username=` line.
fn parse_profile(username: &str, content: &str) -> Result<PlayerProfile, GameError> {
    let mut profile = PlayerProfile::new(username, DEFAULT_LIVES);

    for line in content.lines() {
        let line = line.trim_end();
        if let Some(val) = line.strip_prefix("username=") {
            profile.username = val.to_string();
        } else if let Some(val) = line.strip_prefix("level=") {
            profile.level = parse_field::<u32>("level", val)?.max(1);
        } else if let Some(val) = line.strip_prefix("lives=") {
            profile.lives = parse_field("lives", val)?;
        } else if let Some(val) = line.strip_prefix("coins=") {
            profile.coins = parse_field("coins", val)?;
        } else if let Some(val) = line.strip_prefix("positionX=") {
            profile.position.0 = parse_field("positionX", val)?;
        } else if let Some(val) = line.strip_prefix("positionY=") {
            profile.position.1 = parse_field("positionY", val)?;
        } else if let Some(val) = line.strip_prefix("key=") {
            profile.has_key = val.trim() == "1";
        }
        // anything else: ignored by design
    }

    Ok(profile)
}

fn parse_field<T: std::str::FromStr>(key: &'static str, val: &str) -> Result<T, GameError> {
    val.trim().parse().map_err(|_| GameError::MalformedRecord {
        key,
        value: val.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> (tempfile::TempDir, ProfileStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = ProfileStore::new(&dir.path().join("saves"));
        (dir, store)
    }

    fn sample() -> PlayerProfile {
        PlayerProfile {
            username: "ada".to_string(),
            level: 2,
            lives: 1,
            coins: 17,
            position: (4, 6),
            has_key: true,
            coins_this_level: 9,
        }
    }

    #[test]
    fn round_trip_preserves_every_persisted_field() {
        let (_dir, store) = store();
        store.save(&sample()).unwrap();
        assert!(store.exists("ada"));

        let loaded = store.load("ada").unwrap();
        assert_eq!(loaded.username, "ada");
        assert_eq!(loaded.level, 2);
        assert_eq!(loaded.lives, 1);
        assert_eq!(loaded.coins, 17);
        assert_eq!(loaded.position, (4, 6));
        assert!(loaded.has_key);
        // the per-level counter is ephemeral and never persisted
        assert_eq!(loaded.coins_this_level, 0);
    }

    #[test]
    fn fields_are_written_in_canonical_order() {
        assert_eq!(
            serialize(&sample()),
            "username=ada\nlevel=2\nlives=1\ncoins=17\npositionX=4\npositionY=6\nkey=1\n"
        );
    }

    #[test]
    fn empty_username_is_rejected_and_nothing_is_written() {
        let (_dir, store) = store();
        let mut p = sample();
        p.username.clear();
        assert!(matches!(store.save(&p), Err(GameError::InvalidProfile)));
        // not even the saves directory appears
        assert!(!store.dir.exists());
    }

    #[test]
    fn load_miss_is_profile_not_found() {
        let (_dir, store) = store();
        assert!(matches!(
            store.load("nobody"),
            Err(GameError::ProfileNotFound(u)) if u == "nobody"
        ));
    }

    #[test]
    fn unknown_lines_are_ignored_and_missing_keys_default() {
        let (_dir, store) = store();
        store.ensure_save_dir().unwrap();
        std::fs::write(
            store.profile_path("bob"),
            "level=3\nfavorite_color=blue\nnot a record\n",
        )
        .unwrap();

        let p = store.load("bob").unwrap();
        assert_eq!(p.level, 3);
        assert_eq!(p.username, "bob");
        assert_eq!(p.lives, DEFAULT_LIVES);
        assert_eq!(p.coins, 0);
        assert_eq!(p.position, (0, 0));
        assert!(!p.has_key);
    }

    #[test]
    fn malformed_numeric_field_fails_the_whole_load() {
        let (_dir, store) = store();
        store.ensure_save_dir().unwrap();
        std::fs::write(store.profile_path("eve"), "coins=lots\n").unwrap();
        assert!(matches!(
            store.load("eve"),
            Err(GameError::MalformedRecord { key: "coins", .. })
        ));
    }

    #[test]
    fn level_zero_normalizes_to_one() {
        let (_dir, store) = store();
        store.ensure_save_dir().unwrap();
        std::fs::write(store.profile_path("zed"), "level=0\n").unwrap();
        assert_eq!(store.load("zed").unwrap().level, 1);
    }

    #[test]
    fn save_overwrites_unconditionally() {
        let (_dir, store) = store();
        store.save(&sample()).unwrap();
        let mut p = sample();
        p.coins = 99;
        store.save(&p).unwrap();
        assert_eq!(store.load("ada").unwrap().coins, 99);
    }

    #[test]
    fn usernames_are_sanitized_for_storage() {
        assert_eq!(storage_id("ada"), "ada");
        assert_eq!(storage_id("../../etc/passwd"), "______etc_passwd");
        assert_eq!(storage_id("tab\tand space"), "tab_and_space");

        let long = "x".repeat(80);
        assert_eq!(storage_id(&long).len(), 50);
    }
}
