//! User settings with pluggable persistence and change notification.
//!
//! The theme preference used to be process-wide state applied straight to
//! the display layer. Here it is an explicit store: consumers subscribe for
//! changes, persistence goes through a storage trait, and nothing touches
//! globals.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Mutex;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Recognized display themes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(SettingsError::UnknownTheme(other.to_string())),
        }
    }
}

/// Persisted user settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub theme: Theme,
}

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Unknown theme: {0}")]
    UnknownTheme(String),

    #[error("Failed to persist settings: {0}")]
    Persist(#[source] anyhow::Error),
}

/// Where settings live between sessions.
pub trait SettingsStorage: Send + Sync {
    /// `Ok(None)` when nothing has been saved yet.
    fn load(&self) -> anyhow::Result<Option<Settings>>;
    fn save(&self, settings: &Settings) -> anyhow::Result<()>;
}

/// JSON file persistence.
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SettingsStorage for FileStorage {
    fn load(&self) -> anyhow::Result<Option<Settings>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let contents = std::fs::read_to_string(&self.path)?;
        Ok(Some(serde_json::from_str(&contents)?))
    }

    fn save(&self, settings: &Settings) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, serde_json::to_string_pretty(settings)?)?;
        Ok(())
    }
}

/// In-memory persistence for tests and ephemeral sessions.
#[derive(Default)]
pub struct MemoryStorage {
    saved: Mutex<Option<Settings>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SettingsStorage for MemoryStorage {
    fn load(&self) -> anyhow::Result<Option<Settings>> {
        Ok(*self.saved.lock().unwrap())
    }

    fn save(&self, settings: &Settings) -> anyhow::Result<()> {
        *self.saved.lock().unwrap() = Some(*settings);
        Ok(())
    }
}

type Subscriber = Box<dyn Fn(&Settings) + Send + Sync>;

/// Settings held behind a lock, persisted through [`SettingsStorage`],
/// with subscribers notified after every committed change.
pub struct SettingsStore {
    current: Mutex<Settings>,
    storage: Box<dyn SettingsStorage>,
    subscribers: Mutex<Vec<Subscriber>>,
}

impl SettingsStore {
    /// Load persisted settings, falling back to defaults when nothing was
    /// saved yet or the saved data cannot be read.
    pub fn load(storage: Box<dyn SettingsStorage>) -> Self {
        let settings = match storage.load() {
            Ok(Some(settings)) => settings,
            Ok(None) => Settings::default(),
            Err(err) => {
                tracing::warn!(error = %err, "could not load saved settings, using defaults");
                Settings::default()
            }
        };
        Self {
            current: Mutex::new(settings),
            storage,
            subscribers: Mutex::new(Vec::new()),
        }
    }

    pub fn settings(&self) -> Settings {
        *self.current.lock().unwrap()
    }

    pub fn theme(&self) -> Theme {
        self.settings().theme
    }

    /// Register a callback invoked with the new settings after each change.
    pub fn subscribe(&self, subscriber: impl Fn(&Settings) + Send + Sync + 'static) {
        self.subscribers.lock().unwrap().push(Box::new(subscriber));
    }

    /// Persist the new theme, then notify subscribers. On a persistence
    /// failure the in-memory value is left unchanged and nobody is notified.
    pub fn set_theme(&self, theme: Theme) -> Result<(), SettingsError> {
        let updated = {
            let current = self.current.lock().unwrap();
            Settings { theme, ..*current }
        };

        self.storage
            .save(&updated)
            .map_err(SettingsError::Persist)?;

        *self.current.lock().unwrap() = updated;
        tracing::debug!(theme = %theme, "theme changed");

        for subscriber in self.subscribers.lock().unwrap().iter() {
            subscriber(&updated);
        }
        Ok(())
    }
}
