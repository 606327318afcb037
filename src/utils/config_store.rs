//! ConfigStore - Local Settings Storage

use std::fs;
use std::path::PathBuf;

use directories::ProjectDirs;
use serde::{de::DeserializeOwned, Serialize};

use crate::error::{Error, Result};

/// Get the application data directory
pub fn app_data_dir() -> Result<PathBuf> {
    let dirs = ProjectDirs::from("", "", "supplement-explorer").ok_or_else(|| Error::Invalid {
        message: "Could not find local data directory".to_string(),
    })?;
    let dir = dirs.data_local_dir().to_path_buf();

    if !dir.exists() {
        fs::create_dir_all(&dir)?;
    }

    Ok(dir)
}

/// Load a JSON settings file, falling back to defaults if it doesn't exist
pub fn load_settings<T: DeserializeOwned + Default>(filename: &str) -> Result<T> {
    let path = app_data_dir()?.join(filename);

    if !path.exists() {
        return Ok(T::default());
    }

    let content = fs::read_to_string(&path)?;
    let settings: T = serde_json::from_str(&content)?;
    Ok(settings)
}

/// Save a JSON settings file
pub fn save_settings<T: Serialize>(filename: &str, settings: &T) -> Result<()> {
    let path = app_data_dir()?.join(filename);
    let content = serde_json::to_string_pretty(settings)?;
    fs::write(&path, content)?;
    Ok(())
}
