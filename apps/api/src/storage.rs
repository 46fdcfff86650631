//! Device-local persistence: serialized text files under one directory,
//! keyed by fixed names.

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use tempfile::NamedTempFile;
use tracing::{info, warn};

use crate::models::profile::UserProfile;

pub const PROFILE_KEY: &str = "userProfile";
pub const THEME_KEY: &str = "theme";

#[derive(Debug, Clone)]
pub struct LocalStore {
    dir: PathBuf,
}

impl LocalStore {
    /// Opens (creating if needed) the storage directory.
    pub fn open(dir: impl Into<PathBuf>) -> io::Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        info!("Local storage at {}", dir.display());
        Ok(Self { dir })
    }

    /// Returns the stored profile. Missing, unreadable, or malformed data
    /// yields `None`; malformed data is logged and otherwise ignored.
    pub fn load_profile(&self) -> Option<UserProfile> {
        let raw = self.read(PROFILE_KEY)?;
        match serde_json::from_str::<UserProfile>(&raw) {
            Ok(profile) => Some(profile),
            Err(e) => {
                warn!("Discarding malformed stored profile: {e}");
                None
            }
        }
    }

    pub fn save_profile(&self, profile: &UserProfile) -> io::Result<()> {
        let bytes = serde_json::to_vec(profile)?;
        self.write(PROFILE_KEY, &bytes)
    }

    pub fn load_theme(&self) -> Option<String> {
        self.read(THEME_KEY)
    }

    /// Stored verbatim.
    pub fn save_theme(&self, theme: &str) -> io::Result<()> {
        self.write(THEME_KEY, theme.as_bytes())
    }

    fn read(&self, key: &str) -> Option<String> {
        match fs::read_to_string(self.dir.join(key)) {
            Ok(raw) => Some(raw),
            Err(e) if e.kind() == io::ErrorKind::NotFound => None,
            Err(e) => {
                warn!("Could not read stored '{key}': {e}");
                None
            }
        }
    }

    /// Writes through a temp file in the same directory, then renames over the key.
    fn write(&self, key: &str, bytes: &[u8]) -> io::Result<()> {
        let mut tmp = NamedTempFile::new_in(&self.dir)?;
        tmp.write_all(bytes)?;
        tmp.persist(self.dir.join(key)).map_err(|e| e.error)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> UserProfile {
        UserProfile {
            full_name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            skills: vec!["Python".to_string(), "SQL".to_string()],
            years_of_experience: 7,
            preferred_location: "Remote".to_string(),
        }
    }

    #[test]
    fn test_empty_store_loads_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalStore::open(dir.path()).unwrap();
        assert!(store.load_profile().is_none());
        assert!(store.load_theme().is_none());
    }

    #[test]
    fn test_profile_persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        LocalStore::open(dir.path()).unwrap().save_profile(&profile()).unwrap();

        let reopened = LocalStore::open(dir.path()).unwrap();
        assert_eq!(reopened.load_profile(), Some(profile()));
    }

    #[test]
    fn test_save_overwrites_wholesale() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalStore::open(dir.path()).unwrap();
        store.save_profile(&profile()).unwrap();

        let replacement = UserProfile {
            skills: vec!["Rust".to_string()],
            ..profile()
        };
        store.save_profile(&replacement).unwrap();
        assert_eq!(store.load_profile().unwrap().skills, vec!["Rust"]);
    }

    #[test]
    fn test_malformed_profile_is_discarded() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(PROFILE_KEY), "{not json").unwrap();

        let store = LocalStore::open(dir.path()).unwrap();
        assert!(store.load_profile().is_none());
    }

    #[test]
    fn test_theme_is_stored_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalStore::open(dir.path()).unwrap();
        store.save_theme("dark").unwrap();
        assert_eq!(store.load_theme().as_deref(), Some("dark"));
    }

    #[test]
    fn test_open_creates_nested_dir() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        LocalStore::open(&nested).unwrap();
        assert!(nested.is_dir());
    }
}
