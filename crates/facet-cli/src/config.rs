// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Where `facet` keeps its preferences.
//!
//! The binary stores one JSON document per key (today only
//! [`crate::prefs::PREFS_KEY`]). [`ConfigStore`] moves bytes,
//! [`ConfigService`] owns the JSON encoding, and [`FsConfigStore`] maps each
//! key to `<dir>/<key>.json`.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;
use tracing::debug;

/// Byte-level backing for saved preferences.
pub trait ConfigStore {
    /// Bytes saved under `key`; [`ConfigError::NotFound`] if nothing was saved.
    fn load_raw(&self, key: &str) -> Result<Vec<u8>, ConfigError>;
    /// Replaces whatever is saved under `key`.
    fn save_raw(&self, key: &str, data: &[u8]) -> Result<(), ConfigError>;
}

/// Why preferences could not be read or written.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Nothing saved under the key yet.
    #[error("no saved preferences")]
    NotFound,
    /// The preferences file could not be read or written.
    #[error("preferences file: {0}")]
    Io(#[from] io::Error),
    /// The saved document is not valid JSON for the expected type.
    #[error("preferences are not valid JSON: {0}")]
    Serde(#[from] serde_json::Error),
    /// The platform has no per-user config directory.
    #[error("no per-user config directory on this platform")]
    NoConfigDir,
}

/// JSON view over a [`ConfigStore`].
pub struct ConfigService<S> {
    store: S,
}

impl<S: ConfigStore> ConfigService<S> {
    /// Wraps `store`.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Decodes the document under `key`. A missing or zero-length document
    /// is `Ok(None)` so a fresh install and a truncated file behave alike.
    pub fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, ConfigError> {
        let bytes = match self.store.load_raw(key) {
            Ok(bytes) => bytes,
            Err(ConfigError::NotFound) => return Ok(None),
            Err(err) => return Err(err),
        };
        if bytes.is_empty() {
            return Ok(None);
        }
        Ok(Some(serde_json::from_slice(&bytes)?))
    }

    /// Writes `value` under `key` as indented JSON so it stays hand-editable.
    pub fn save<T: Serialize>(&self, key: &str, value: &T) -> Result<(), ConfigError> {
        self.store.save_raw(key, &serde_json::to_vec_pretty(value)?)
    }

    /// Returns the saved value, or saves and returns `T::default()` on first run.
    pub fn load_or_init<T>(&self, key: &str) -> Result<T, ConfigError>
    where
        T: DeserializeOwned + Serialize + Default,
    {
        if let Some(value) = self.load(key)? {
            return Ok(value);
        }
        let value = T::default();
        self.save(key, &value)?;
        debug!(key, "wrote default config");
        Ok(value)
    }
}

/// One `<key>.json` file per key, all in a single directory.
pub struct FsConfigStore {
    base: PathBuf,
}

impl FsConfigStore {
    /// Uses the per-user config directory (`~/.config/facet` on Linux).
    pub fn new() -> Result<Self, ConfigError> {
        let proj =
            ProjectDirs::from("dev", "flyingrobots", "facet").ok_or(ConfigError::NoConfigDir)?;
        Self::at(proj.config_dir())
    }

    /// Uses `dir`, creating it if needed (`--config-dir` / `FACET_CONFIG_DIR`).
    pub fn at(dir: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let base = dir.as_ref().to_path_buf();
        fs::create_dir_all(&base)?;
        Ok(Self { base })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.base.join(format!("{key}.json"))
    }
}

impl ConfigStore for FsConfigStore {
    fn load_raw(&self, key: &str) -> Result<Vec<u8>, ConfigError> {
        match fs::read(self.path_for(key)) {
            Ok(bytes) => Ok(bytes),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Err(ConfigError::NotFound),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn save_raw(&self, key: &str, data: &[u8]) -> Result<(), ConfigError> {
        fs::write(self.path_for(key), data)?;
        Ok(())
    }
}
