use std::{
    fs,
    path::{
        Path,
        PathBuf,
    },
};

use serde::Deserialize;

use crate::core::WizardError;

const APP_NAME: &str = "word-wizard";

/// Platform data directory for the app. Nothing is created here; the app only
/// reads from it.
pub fn get_app_data_dir() -> PathBuf {
    match dirs::data_local_dir() {
        Some(data_dir) => data_dir.join(APP_NAME),
        None => PathBuf::from("."),
    }
}

pub fn get_data_file_path(filename: &str) -> PathBuf {
    get_app_data_dir().join(filename)
}

/// Reads `path` as JSON, or returns `T::default()` when the file does not exist.
pub fn load_json_from<T: for<'de> Deserialize<'de> + Default>(
    path: &Path,
) -> Result<T, WizardError> {
    if !path.exists() {
        return Ok(T::default());
    }

    let json = fs::read_to_string(path)?;
    let data: T = serde_json::from_str(&json)?;
    log::info!("Data loaded from: {}", path.display());
    Ok(data)
}

pub fn load_json<T: for<'de> Deserialize<'de> + Default>(filename: &str) -> Result<T, WizardError> {
    load_json_from(&get_data_file_path(filename))
}

pub fn load_json_or_default<T: for<'de> Deserialize<'de> + Default>(filename: &str) -> T {
    match load_json::<T>(filename) {
        Ok(data) => data,
        Err(e) => {
            log::warn!("Failed to load {}: {}. Using defaults.", filename, e);
            T::default()
        }
    }
}
