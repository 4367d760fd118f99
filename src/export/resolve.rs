use chrono::{DateTime, Local};

use super::file::timestamp_filename;
use super::types::{ImageFormat, SaveConfig, SavePreference};

/// Resolves the save configuration for a save request happening now.
///
/// With a resolver, it is invoked exactly once and its preference is
/// completed with defaults. Without one, the built-in defaults apply.
pub fn resolve_save_config<F>(resolver: Option<F>) -> SaveConfig
where
    F: FnOnce() -> SavePreference,
{
    resolve_save_config_at(resolver.map(|resolve| resolve()), &Local::now())
}

/// Completes `preference` (or the defaults) using `now` for the filename.
///
/// Defaults:
/// - `image_format`: PNG
/// - `transparent_background`: false
/// - `folder`: ""
/// - `filename`: `YYYY-M-DD HH-MM-SS` from `now`
/// - `include_image`, `include_text`: true unless explicitly false
/// - `crop_to_image_size`: false unless explicitly true
pub fn resolve_save_config_at(
    preference: Option<SavePreference>,
    now: &DateTime<Local>,
) -> SaveConfig {
    let preference = preference.unwrap_or_default();

    SaveConfig {
        image_format: preference.image_type.unwrap_or(ImageFormat::Png),
        transparent_background: preference.transparent.unwrap_or(false),
        folder: preference.folder.unwrap_or_default(),
        filename: preference
            .filename
            .unwrap_or_else(|| timestamp_filename(now)),
        include_image: preference.include_image != Some(false),
        include_text: preference.include_text != Some(false),
        crop_to_image_size: preference.crop_to_image_size == Some(true),
    }
}
