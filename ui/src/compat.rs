//! Platform-specific persistence of [`UserPrefs`].
//!
//! Browsers keep the prefs in `localStorage`; native builds write a JSON file
//! under the user's config directory.

use api::prefs::user_prefs::UserPrefs;
use dioxus_logger::tracing;

// Re-export the public API from the appropriate module
#[cfg(target_arch = "wasm32")]
pub use wasm32::*;

#[cfg(not(target_arch = "wasm32"))]
pub use non_wasm32::*;

#[derive(Debug, thiserror::Error)]
pub enum PrefsError {
    #[error("preference storage is unavailable")]
    Unavailable,
    #[error("could not access preference storage: {0}")]
    Io(#[from] std::io::Error),
    #[error("stored preferences are malformed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Persisted prefs, or the defaults when none are stored or they can't be read.
pub fn load_initial_prefs() -> UserPrefs {
    match load_user_prefs() {
        Ok(Some(prefs)) => prefs,
        Ok(None) => UserPrefs::default(),
        Err(e) => {
            tracing::warn!("ignoring stored preferences: {}", e);
            UserPrefs::default()
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub mod wasm32 {
    use api::prefs::user_prefs::UserPrefs;

    use super::PrefsError;

    const STORAGE_KEY: &str = "user_prefs";

    fn local_storage() -> Result<web_sys::Storage, PrefsError> {
        web_sys::window()
            .and_then(|window| window.local_storage().ok().flatten())
            .ok_or(PrefsError::Unavailable)
    }

    pub fn load_user_prefs() -> Result<Option<UserPrefs>, PrefsError> {
        let stored = local_storage()?
            .get_item(STORAGE_KEY)
            .map_err(|_| PrefsError::Unavailable)?;

        match stored {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }

    pub fn save_user_prefs(prefs: &UserPrefs) -> Result<(), PrefsError> {
        let json = serde_json::to_string(prefs)?;
        local_storage()?
            .set_item(STORAGE_KEY, &json)
            .map_err(|_| PrefsError::Unavailable)
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub mod non_wasm32 {
    use std::env;
    use std::fs;
    use std::io::ErrorKind;
    use std::path::Path;
    use std::path::PathBuf;

    use api::prefs::user_prefs::UserPrefs;

    use super::PrefsError;

    const APP_DIR: &str = "user-directory";
    const FILE_NAME: &str = "user_prefs.json";

    /// A JSON prefs file on disk.
    #[derive(Debug, Clone)]
    pub struct PrefsFile {
        path: PathBuf,
    }

    impl PrefsFile {
        pub fn new(path: impl Into<PathBuf>) -> Self {
            Self { path: path.into() }
        }

        /// `USER_PREFS_FILE` if set, else `<config dir>/user-directory/user_prefs.json`.
        pub fn from_env() -> Option<Self> {
            match env::var_os("USER_PREFS_FILE") {
                Some(path) if !path.is_empty() => Some(Self::new(path)),
                _ => dirs::config_dir().map(|dir| Self::new(dir.join(APP_DIR).join(FILE_NAME))),
            }
        }

        pub fn path(&self) -> &Path {
            &self.path
        }

        pub fn load(&self) -> Result<Option<UserPrefs>, PrefsError> {
            match fs::read_to_string(&self.path) {
                Ok(json) => Ok(Some(serde_json::from_str(&json)?)),
                Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
                Err(e) => Err(e.into()),
            }
        }

        pub fn save(&self, prefs: &UserPrefs) -> Result<(), PrefsError> {
            if let Some(parent) = self.path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&self.path, serde_json::to_string_pretty(prefs)?)?;
            Ok(())
        }
    }

    pub fn load_user_prefs() -> Result<Option<UserPrefs>, PrefsError> {
        PrefsFile::from_env()
            .ok_or(PrefsError::Unavailable)?
            .load()
    }

    pub fn save_user_prefs(prefs: &UserPrefs) -> Result<(), PrefsError> {
        PrefsFile::from_env()
            .ok_or(PrefsError::Unavailable)?
            .save(prefs)
    }

}
