//! Albums and tree finalization.
//!
//! An [`Album`] is a virtual group of photos and videos with child albums of
//! its own. The tree builder creates albums through an [`AlbumFactory`] (which
//! hands out ids), then calls [`Album::finalize`] once on the root. That
//! produces a separate [`FinalizedAlbum`] tree holding everything the
//! renderer needs. The input tree is only borrowed, so finalizing it again
//! gives the same result.
//!
//! ## Finalization Order
//!
//! Each node is finalized in two halves around the recursion:
//!
//! ```text
//! pre-order   titleize → basename/path/url/depth   (needs the parent)
//! recurse     finalize every child, in input order
//! post-order  home → stats → summary → sort → previews   (needs the children)
//! ```
//!
//! ## Output Paths
//!
//! The root album is always written to `index` (default `index.html`).
//! Every other album is flattened into `albums_output_folder`; albums nested
//! below the first level get their parent's basename as a prefix so names
//! stay unique:
//!
//! ```text
//! root          → index.html
//! ├── Travel    → Travel.html
//! │   └── Japan → Travel-Japan.html
//! └── 2024      → 2024.html
//! ```
//!
//! ## Previews
//!
//! Every album gets exactly `previews.count` previews: its own files first,
//! then the previews of its children in order. Placeholders coming from
//! children are skipped, so a placeholder only ever fills this album's own
//! shortfall.

use crate::config::SiteConfig;
use crate::naming::{sanitise, titleize};
use crate::sort::{sort_albums, sort_media};
use crate::stats::{AlbumStats, calculate_stats, summary};
use crate::types::{MediaFile, Preview};
use serde::Serialize;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

/// An album as produced by the tree builder, before finalization.
#[derive(Debug, Clone, PartialEq)]
pub struct Album {
    pub id: u64,
    pub title: String,
    /// URL-safe slug of the title, fixed at construction.
    pub basename: String,
    pub files: Vec<Arc<MediaFile>>,
    pub albums: Vec<Album>,
}

/// Arguments for constructing an album.
///
/// A bare title converts into an `AlbumInit` with no files or children.
#[derive(Debug, Clone, Default)]
pub struct AlbumInit {
    /// Explicit id; the factory assigns one when `None`.
    pub id: Option<u64>,
    pub title: String,
    pub files: Vec<Arc<MediaFile>>,
    pub albums: Vec<Album>,
}

impl AlbumInit {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn with_id(mut self, id: u64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_files(mut self, files: impl IntoIterator<Item = MediaFile>) -> Self {
        self.files.extend(files.into_iter().map(Arc::new));
        self
    }

    pub fn with_albums(mut self, albums: impl IntoIterator<Item = Album>) -> Self {
        self.albums.extend(albums);
        self
    }
}

impl From<&str> for AlbumInit {
    fn from(title: &str) -> Self {
        AlbumInit::new(title)
    }
}

impl From<String> for AlbumInit {
    fn from(title: String) -> Self {
        AlbumInit::new(title)
    }
}

/// Creates albums and hands out their ids.
///
/// Ids start at 1 and increase by one per album. An explicit id moves the
/// counter past it, so automatic ids never collide with ids chosen by the
/// caller.
#[derive(Debug)]
pub struct AlbumFactory {
    next_id: u64,
}

impl Default for AlbumFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl AlbumFactory {
    pub fn new() -> Self {
        Self { next_id: 1 }
    }

    /// Build an album, assigning an id if the caller didn't supply one.
    pub fn album(&mut self, init: impl Into<AlbumInit>) -> Album {
        let init = init.into();
        let id = match init.id {
            Some(id) => {
                self.next_id = self.next_id.max(id.saturating_add(1));
                id
            }
            None => {
                let id = self.next_id;
                self.next_id += 1;
                id
            }
        };
        Album {
            id,
            basename: sanitise(&init.title),
            title: init.title,
            files: init.files,
            albums: init.albums,
        }
    }

    /// Restart ids from 1. Test harnesses only: production trees are built
    /// from one factory and never reset.
    #[doc(hidden)]
    pub fn reset(&mut self) {
        self.next_id = 1;
    }
}

/// A fully finalized album, ready for rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FinalizedAlbum {
    pub id: u64,
    pub title: String,
    pub basename: String,
    /// Output file path, relative to the output root.
    pub path: String,
    pub url: String,
    /// 0 for the root album.
    pub depth: usize,
    /// True only for the root album.
    pub home: bool,
    pub stats: AlbumStats,
    pub summary: String,
    pub files: Vec<Arc<MediaFile>>,
    pub albums: Vec<FinalizedAlbum>,
    pub previews: Vec<Preview>,
}

/// What a child needs to know about its parent while being finalized.
struct ParentInfo<'a> {
    basename: &'a str,
    depth: usize,
}

impl Album {
    /// Finalize this album as the root of a tree.
    pub fn finalize(&self, config: &SiteConfig) -> FinalizedAlbum {
        self.finalize_node(config, None)
    }

    fn finalize_node(
        &self,
        config: &SiteConfig,
        parent: Option<&ParentInfo<'_>>,
    ) -> FinalizedAlbum {
        let title = if config.titleize_album_names {
            titleize(&self.title)
        } else {
            self.title.clone()
        };

        let (basename, path, url, depth) = match parent {
            None => (
                self.basename.clone(),
                config.index.clone(),
                config.index.clone(),
                0,
            ),
            Some(parent) => {
                let basename = if parent.depth > 0 {
                    format!("{}-{}", parent.basename, self.basename)
                } else {
                    self.basename.clone()
                };
                let page = format!("{basename}.html");
                let path = join_output_path(&config.albums_output_folder, &page);
                let url = resolve_url(&config.albums_output_folder, &page);
                (basename, path, url, parent.depth + 1)
            }
        };

        let this = ParentInfo {
            basename: &basename,
            depth,
        };
        let mut albums: Vec<FinalizedAlbum> = self
            .albums
            .iter()
            .map(|child| child.finalize_node(config, Some(&this)))
            .collect();

        let home = depth == 0;
        let child_stats: Vec<&AlbumStats> = albums.iter().map(|a| &a.stats).collect();
        let stats = calculate_stats(&self.files, &child_stats);
        let summary = summary(&stats);

        let mut files = self.files.clone();
        sort_media(&mut files, &config.sort.media_by, config.sort.media_direction);
        sort_albums(
            &mut albums,
            &config.sort.albums_by,
            config.sort.albums_direction,
            config.sort.albums_numbers_first,
        );

        let previews = pick_previews(&files, &albums, config.previews.count);

        log::debug!(
            "finalized album #{} \"{}\" -> {} ({})",
            self.id,
            title,
            url,
            summary
        );

        FinalizedAlbum {
            id: self.id,
            title,
            basename,
            path,
            url,
            depth,
            home,
            stats,
            summary,
            files,
            albums,
            previews,
        }
    }
}

/// Pick exactly `count` previews: own files first, then the children's real
/// previews in child order, then placeholders.
pub fn pick_previews(
    files: &[Arc<MediaFile>],
    albums: &[FinalizedAlbum],
    count: usize,
) -> Vec<Preview> {
    let own = files.iter().cloned().map(Preview::Media);
    let nested = albums
        .iter()
        .flat_map(|album| album.previews.iter())
        .filter(|preview| !preview.is_missing())
        .cloned();
    let mut previews: Vec<Preview> = own.chain(nested).take(count).collect();
    previews.resize(count, Preview::Missing);
    previews
}

/// Join an output folder and a page filename into a normalized relative path.
///
/// `.` components are dropped and `..` cancels the previous named component,
/// so `("./albums", "a.html")` gives `albums/a.html` and `("../..", "a.html")`
/// gives `../../a.html`. A rooted path never climbs above its root.
fn join_output_path(folder: &str, page: &str) -> String {
    let mut path = PathBuf::new();
    for component in Path::new(folder).join(page).components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match path.components().next_back() {
                Some(Component::Normal(_)) => {
                    path.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => path.push(".."),
            },
            other => path.push(other.as_os_str()),
        }
    }
    path.to_string_lossy().into_owned()
}

/// Split `scheme://authority` off the front of a URL, if it has one.
fn split_origin(url: &str) -> (&str, &str) {
    let Some(idx) = url.find("://") else {
        return ("", url);
    };
    let scheme = &url[..idx];
    let valid_scheme = scheme.chars().next().is_some_and(|c| c.is_ascii_alphabetic())
        && scheme
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
    if !valid_scheme {
        return ("", url);
    }
    let after = idx + 3;
    let end = url[after..].find('/').map_or(url.len(), |i| after + i);
    url.split_at(end)
}

/// Resolve a page filename against `folder + "/"` as a base URL.
///
/// An empty folder gives the base `/`. A `scheme://authority` prefix is kept
/// as is; in the path after it `.` and empty segments disappear and `..`
/// climbs one level (never above the root of an absolute URL).
fn resolve_url(folder: &str, page: &str) -> String {
    let base = format!("{folder}/");
    let (origin, base_path) = split_origin(&base);
    let absolute = !origin.is_empty() || base_path.starts_with('/');
    let mut segments: Vec<&str> = Vec::new();
    for segment in base_path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                if segments.last().is_some_and(|s| *s != "..") {
                    segments.pop();
                } else if !absolute {
                    segments.push("..");
                }
            }
            other => segments.push(other),
        }
    }
    segments.push(page);
    let joined = segments.join("/");
    if absolute {
        format!("{origin}/{joined}")
    } else {
        joined
    }
}
