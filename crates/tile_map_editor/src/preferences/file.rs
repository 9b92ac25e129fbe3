//! Reading and writing the preferences file

use super::EditorPreferences;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

const QUALIFIER: &str = "com";
const ORGANIZATION: &str = "tile_map_editor";
const APPLICATION: &str = "tile_map_editor";
const PREFERENCES_FILE: &str = "preferences.json";

#[derive(Debug)]
pub enum PreferencesError {
    /// The file or its directory could not be read or written
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The file is not valid preferences JSON
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    Serialize(serde_json::Error),
    /// The platform has no per-user config directory
    NoConfigDir,
}

impl std::fmt::Display for PreferencesError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PreferencesError::Io { path, source } => {
                write!(f, "cannot access {}: {}", path.display(), source)
            }
            PreferencesError::Parse { path, source } => {
                write!(f, "invalid preferences in {}: {}", path.display(), source)
            }
            PreferencesError::Serialize(e) => write!(f, "cannot encode preferences: {}", e),
            PreferencesError::NoConfigDir => write!(f, "no config directory for this platform"),
        }
    }
}

impl std::error::Error for PreferencesError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PreferencesError::Io { source, .. } => Some(source),
            PreferencesError::Parse { source, .. } | PreferencesError::Serialize(source) => {
                Some(source)
            }
            PreferencesError::NoConfigDir => None,
        }
    }
}

impl EditorPreferences {
    /// Location of the preferences file in the per-user config directory
    pub fn default_path() -> Result<PathBuf, PreferencesError> {
        let dirs = ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
            .ok_or(PreferencesError::NoConfigDir)?;
        Ok(dirs.config_dir().join(PREFERENCES_FILE))
    }

    /// Load saved preferences, falling back to defaults when they can't be read
    pub fn load() -> Self {
        Self::default_path()
            .and_then(|path| Self::load_from(&path))
            .unwrap_or_else(|e| {
                bevy::log::warn!("Using default preferences: {}", e);
                Self::default()
            })
    }

    /// Load preferences from `path`; a missing file yields defaults
    pub fn load_from(path: &Path) -> Result<Self, PreferencesError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(PreferencesError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        serde_json::from_str(&content).map_err(|source| PreferencesError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Save preferences to the per-user config directory
    pub fn save(&self) -> Result<(), PreferencesError> {
        self.save_to(&Self::default_path()?)
    }

    /// Save preferences to `path`, creating its directory if needed
    pub fn save_to(&self, path: &Path) -> Result<(), PreferencesError> {
        let io_error = |source| PreferencesError::Io {
            path: path.to_path_buf(),
            source,
        };

        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir).map_err(io_error)?;
        }
        let content = serde_json::to_string_pretty(self).map_err(PreferencesError::Serialize)?;
        std::fs::write(path, content).map_err(io_error)?;

        bevy::log::info!("Saved preferences to {}", path.display());
        Ok(())
    }
}
