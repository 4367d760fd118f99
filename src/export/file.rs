//! Filename helpers for saved sketches.

use chrono::{DateTime, TimeZone};
use std::fmt::Display;
use std::path::PathBuf;

use super::types::SaveConfig;

/// Timestamp layout for default filenames: `YYYY-M-DD HH-MM-SS`.
///
/// The month is not padded; day, hour, minute and second are.
pub const TIMESTAMP_FORMAT: &str = "%Y-%-m-%d %H-%M-%S";

/// Directory name created under the pictures (or home) directory.
const STORAGE_DIR_NAME: &str = "Sketchbar";

/// Directory saved sketches are reported under when none is given.
///
/// Uses the pictures directory, then the home directory, then the working
/// directory.
pub fn default_storage_root() -> PathBuf {
    storage_root_from(dirs::picture_dir(), dirs::home_dir())
}

fn storage_root_from(pictures: Option<PathBuf>, home: Option<PathBuf>) -> PathBuf {
    pictures
        .or(home)
        .unwrap_or_else(|| PathBuf::from("."))
        .join(STORAGE_DIR_NAME)
}

/// Generate the default filename for a save at `now`.
pub fn timestamp_filename<Tz>(now: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    now.format(TIMESTAMP_FORMAT).to_string()
}

/// Relative path (folder, filename and extension) a save config points at.
pub fn relative_path(config: &SaveConfig) -> PathBuf {
    let filename = format!("{}.{}", config.filename, config.image_format.extension());
    if config.folder.is_empty() {
        PathBuf::from(filename)
    } else {
        PathBuf::from(&config.folder).join(filename)
    }
}
