use std::fs::{ self, File };
use std::io::{ BufReader, BufWriter, ErrorKind, Write };
use std::path::{ Path, PathBuf };

use serde::{ Deserialize, Serialize };

use crate::errors::SettingsError;
use crate::password::Toggles;

/// Toggle defaults read from `settings.json`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub initial: Toggles,
    pub reset: Toggles,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            initial: Toggles::default(),
            reset: Toggles::reset_default(),
        }
    }
}

impl Settings {
    const APP_DIR: &str = "pwform";
    const FILE_NAME: &str = "settings.json";

    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(Self::APP_DIR).join(Self::FILE_NAME))
    }

    /// Loads settings, falling back to defaults when the file does not exist.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no settings file, using defaults");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(SettingsError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        let settings: Settings = serde_json::from_reader(BufReader::new(file)).map_err(|source| {
            SettingsError::Parse {
                path: path.to_path_buf(),
                source,
            }
        })?;
        tracing::debug!(path = %path.display(), ?settings, "loaded settings");

        Ok(settings)
    }

    pub fn save(&self, path: &Path) -> Result<(), SettingsError> {
        let io_err = |source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }

        let mut writer = BufWriter::new(File::create(path).map_err(io_err)?);
        serde_json::to_writer_pretty(&mut writer, self).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        writer.write_all(b"\n").map_err(io_err)?;
        writer.flush().map_err(io_err)?;

        Ok(())
    }
}
