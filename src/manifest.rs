//! JSON manifests around the finalizer.
//!
//! The external file scanner describes the raw album tree as JSON; the
//! finalizer turns it into an output manifest the renderer consumes:
//!
//! ```text
//! tree.json  →  Album tree  →  finalize  →  albums.json
//! ```
//!
//! ## Input
//!
//! ```json
//! {
//!   "title": "Home",
//!   "files": [],
//!   "albums": [
//!     {
//!       "title": "Japan",
//!       "files": [
//!         { "type": "image", "filename": "tokyo.jpg",
//!           "meta": { "date": "2023-04-02T09:30:00Z" },
//!           "urls": { "thumbnail": "media/thumbs/tokyo.jpg" } }
//!       ]
//!     }
//!   ]
//! }
//! ```
//!
//! `id` is optional on every node; missing ids are assigned by the
//! [`AlbumFactory`]. `files` and `albums` default to empty.
//!
//! ## Output
//!
//! The resolved config plus the finalized tree. Previews serialize as the
//! media record they point at, or as `{"missing": true, ...}` placeholders.

use crate::album::{Album, AlbumFactory, AlbumInit, FinalizedAlbum};
use crate::config::{self, SiteConfig};
use crate::types::MediaFile;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
}

/// One node of the raw album tree, as written by the file scanner.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TreeManifest {
    #[serde(default)]
    pub id: Option<u64>,
    pub title: String,
    #[serde(default)]
    pub files: Vec<MediaFile>,
    #[serde(default)]
    pub albums: Vec<TreeManifest>,
}

/// Output manifest handed to the renderer.
#[derive(Debug, Serialize)]
pub struct OutputManifest<'a> {
    pub config: &'a SiteConfig,
    pub album: &'a FinalizedAlbum,
}

/// Build an album tree from a manifest node.
///
/// Children are built before their parent, so automatic ids number the tree
/// bottom-up.
pub fn build_tree(node: TreeManifest, factory: &mut AlbumFactory) -> Album {
    let albums: Vec<Album> = node
        .albums
        .into_iter()
        .map(|child| build_tree(child, factory))
        .collect();
    let mut init = AlbumInit::new(node.title)
        .with_files(node.files)
        .with_albums(albums);
    init.id = node.id;
    factory.album(init)
}

/// Read a JSON tree manifest and build the album tree from it.
pub fn load_tree(path: &Path, factory: &mut AlbumFactory) -> Result<Album, ManifestError> {
    let content = fs::read_to_string(path)?;
    let node: TreeManifest = serde_json::from_str(&content)?;
    Ok(build_tree(node, factory))
}

/// Load config and tree, finalize, and return both.
///
/// `config_dir` is the directory holding `config.toml`; stock defaults are
/// used when it is `None` or has no config file.
pub fn finalize_manifest(
    tree_path: &Path,
    config_dir: Option<&Path>,
) -> Result<(SiteConfig, FinalizedAlbum), ManifestError> {
    let config = match config_dir {
        Some(dir) => config::load_config(dir)?,
        None => config::resolve_config(config::stock_defaults_value(), None)?,
    };
    let mut factory = AlbumFactory::new();
    let tree = load_tree(tree_path, &mut factory)?;
    let album = tree.finalize(&config);
    log::info!(
        "finalized {} ({}) from {}",
        album.title,
        album.summary,
        tree_path.display()
    );
    Ok((config, album))
}

/// Write the output manifest as pretty-printed JSON.
pub fn write_output(
    path: &Path,
    config: &SiteConfig,
    album: &FinalizedAlbum,
) -> Result<(), ManifestError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(&OutputManifest { config, album })?;
    fs::write(path, json)?;
    Ok(())
}
