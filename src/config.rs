//! Album tree configuration.
//!
//! Handles loading, validating, and merging `config.toml`. Stock defaults are
//! serialized to a TOML table and the user's file is merged on top of it, so
//! a config file only needs the keys it wants to change.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! albums_output_folder = "."    # Folder album pages are written to
//! index = "index.html"          # Output path of the root album
//! titleize_album_names = false  # "summerTrip_photos" -> "Summer Trip Photos"
//!
//! [sort]
//! media_by = "date"             # filename | date
//! media_direction = "asc"       # asc | desc
//! albums_by = "start-date"      # title | start-date | end-date
//! albums_direction = "asc"      # asc | desc
//! albums_numbers_first = false  # Albums titled like "2023" go first
//!
//! [previews]
//! count = 10                    # Preview thumbnails per album
//! ```
//!
//! Unknown keys are rejected to catch typos early. Unknown sort *values* are
//! accepted and leave the order untouched.

use crate::sort::{AlbumSortBy, MediaSortBy, SortDirection};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Options that drive album tree finalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Folder (relative to the output root) album pages are written to.
    pub albums_output_folder: String,
    /// Output path and URL of the root album.
    pub index: String,
    /// Rewrite album titles for display (camelCase and `_` split, words capitalized).
    pub titleize_album_names: bool,
    /// Media and album ordering.
    pub sort: SortConfig,
    /// Preview strip settings.
    pub previews: PreviewsConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            albums_output_folder: ".".to_string(),
            index: "index.html".to_string(),
            titleize_album_names: false,
            sort: SortConfig::default(),
            previews: PreviewsConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.index.trim().is_empty() {
            return Err(ConfigError::Validation("index must not be empty".into()));
        }
        if self.previews.count == 0 {
            return Err(ConfigError::Validation(
                "previews.count must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

/// Ordering of media inside albums and of albums inside their parent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SortConfig {
    pub media_by: MediaSortBy,
    pub media_direction: SortDirection,
    pub albums_by: AlbumSortBy,
    pub albums_direction: SortDirection,
    /// Move albums with numeric titles (`2023`, `2023-07`) ahead of the rest.
    pub albums_numbers_first: bool,
}

/// Preview strip settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PreviewsConfig {
    /// Number of preview slots per album; missing slots show a placeholder.
    pub count: usize,
}

impl Default for PreviewsConfig {
    fn default() -> Self {
        Self { count: 10 }
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Built-in gallery settings as a TOML table, the bottom layer that a
/// gallery's `config.toml` is laid over.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(SiteConfig::default()).expect("default config must serialize")
}

/// Lay `overlay` over `base`. Sections such as `[sort]` combine key by key,
/// so a gallery can change `sort.albums_by` without restating the rest of
/// `[sort]`; any other overlay value wins outright.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut merged), toml::Value::Table(overlay)) => {
            for (key, value) in overlay {
                let value = match merged.remove(&key) {
                    Some(existing) => merge_toml(existing, value),
                    None => value,
                };
                merged.insert(key, value);
            }
            toml::Value::Table(merged)
        }
        (_, overlay) => overlay,
    }
}

/// Read the gallery's `config.toml` from `dir` without interpreting it.
///
/// A gallery without one simply uses the built-in settings, so a missing
/// file is `Ok(None)` rather than an error.
pub fn load_raw_config(dir: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let path = dir.join("config.toml");
    if !path.exists() {
        return Ok(None);
    }
    let text = fs::read_to_string(&path)?;
    Ok(Some(toml::from_str(&text)?))
}

/// Turn the layered TOML into finalizer settings: merge, deserialize (typos
/// in keys or directions fail here), check ranges, and warn about sort keys
/// that will leave albums or media in scanner order.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<SiteConfig, ConfigError> {
    let config: SiteConfig = overlay.into_iter().fold(base, merge_toml).try_into()?;
    config.validate()?;
    warn_unsorted(&config.sort);
    Ok(config)
}

fn warn_unsorted(sort: &SortConfig) {
    if let MediaSortBy::Unsorted(key) = &sort.media_by {
        log::warn!("unknown sort.media_by \"{key}\", media keep their original order");
    }
    if let AlbumSortBy::Unsorted(key) = &sort.albums_by {
        log::warn!("unknown sort.albums_by \"{key}\", albums keep their original order");
    }
}

/// Finalizer settings for the gallery whose `config.toml` lives in `dir`.
pub fn load_config(dir: &Path) -> Result<SiteConfig, ConfigError> {
    let base = stock_defaults_value();
    let overlay = load_raw_config(dir)?;
    resolve_config(base, overlay)
}

/// Annotated `config.toml` listing every finalizer option at its default,
/// printed by `album-tree gen-config`.
pub fn stock_config_toml() -> &'static str {
    r##"# Album Tree Configuration
# ========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Unknown keys will cause an error.

# Folder album pages are written to, relative to the output root.
# Nested albums are flattened into this folder: "Travel/Japan" becomes
# "Japan.html" and "Travel/Japan/Tokyo" becomes "Japan-Tokyo.html".
albums_output_folder = "."

# Output path (and URL) of the top-level album.
index = "index.html"

# Rewrite album titles for display: "summerTrip_photos" -> "Summer Trip Photos".
# Output filenames are not affected.
titleize_album_names = false

# ---------------------------------------------------------------------------
# Sorting
# ---------------------------------------------------------------------------
[sort]
# Order of photos and videos inside an album: "filename" or "date".
media_by = "date"
media_direction = "asc"

# Order of child albums: "title", "start-date" or "end-date".
# Dates are the earliest/latest media date anywhere inside the album.
albums_by = "start-date"
albums_direction = "asc"

# Move albums whose title is only digits and dashes ("2023", "2023-07")
# in front of the others. Each group keeps its sorted order.
albums_numbers_first = false

# ---------------------------------------------------------------------------
# Previews
# ---------------------------------------------------------------------------
[previews]
# Thumbnails shown for each album. Albums borrow from their sub-albums when
# they don't have enough media; remaining slots show a placeholder.
count = 10
"##
}
