//! User preferences: window geometry and where the address book lives

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::{ModelError, Result};

/// Default location of the address book data file
pub const DEFAULT_ADDRESS_BOOK_FILE: &str = "data/artbuddy.json";

/// Main window size and, once the user has moved it, position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GuiSettings {
    pub window_width: u32,
    pub window_height: u32,
    pub window_x: Option<i32>,
    pub window_y: Option<i32>,
}

impl GuiSettings {
    pub const DEFAULT_WIDTH: u32 = 740;
    pub const DEFAULT_HEIGHT: u32 = 600;

    pub fn new(window_width: u32, window_height: u32, x: i32, y: i32) -> Self {
        Self {
            window_width,
            window_height,
            window_x: Some(x),
            window_y: Some(y),
        }
    }

    /// Saved window position, if both coordinates are known
    pub fn window_position(&self) -> Option<(i32, i32)> {
        self.window_x.zip(self.window_y)
    }
}

impl Default for GuiSettings {
    fn default() -> Self {
        Self {
            window_width: Self::DEFAULT_WIDTH,
            window_height: Self::DEFAULT_HEIGHT,
            window_x: None,
            window_y: None,
        }
    }
}

/// Persisted user preferences
///
/// Missing keys in a preferences file fall back to their defaults, so an
/// older file still loads.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UserPrefs {
    gui_settings: GuiSettings,
    address_book_file_path: PathBuf,
}

impl Default for UserPrefs {
    fn default() -> Self {
        Self {
            gui_settings: GuiSettings::default(),
            address_book_file_path: PathBuf::from(DEFAULT_ADDRESS_BOOK_FILE),
        }
    }
}

impl UserPrefs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn gui_settings(&self) -> &GuiSettings {
        &self.gui_settings
    }

    pub fn set_gui_settings(&mut self, gui_settings: GuiSettings) {
        self.gui_settings = gui_settings;
    }

    pub fn address_book_file_path(&self) -> &Path {
        &self.address_book_file_path
    }

    pub fn set_address_book_file_path(&mut self, path: impl Into<PathBuf>) {
        self.address_book_file_path = path.into();
    }

    /// Overwrite every preference with those of `other`
    pub fn reset_data(&mut self, other: &UserPrefs) {
        self.clone_from(other);
    }

    /// Read preferences from the JSON file at `path`
    ///
    /// A missing file yields the defaults.
    ///
    /// # Errors
    /// * `Io` - if the file exists but cannot be read
    /// * `Serialization` - if the file is not valid preferences JSON
    pub fn load(path: &Path) -> Result<Self> {
        let data = match fs::read_to_string(path) {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::info!(path = %path.display(), "Preferences file not found, using defaults");
                return Ok(Self::default());
            }
            Err(e) => return Err(io_error(path, &e)),
        };
        Ok(serde_json::from_str(&data)?)
    }

    /// Write preferences as pretty JSON to `path`
    ///
    /// Parent directories are created as needed. The file is replaced
    /// atomically through a temporary file in the same directory.
    ///
    /// # Errors
    /// * `Io` - if the directory or file cannot be written
    /// * `Serialization` - if encoding fails
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;

        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir).map_err(|e| io_error(dir, &e))?;

        let mut temp = tempfile::NamedTempFile::new_in(dir).map_err(|e| io_error(path, &e))?;
        temp.write_all(json.as_bytes())
            .map_err(|e| io_error(path, &e))?;
        temp.flush().map_err(|e| io_error(path, &e))?;
        temp.persist(path).map_err(|e| io_error(path, &e.error))?;
        Ok(())
    }
}

fn io_error(path: &Path, err: &std::io::Error) -> ModelError {
    ModelError::Io {
        path: path.display().to_string(),
        message: err.to_string(),
    }
}
