//! Shared test utilities for the album-tree test suite.
//!
//! Provides media builders with predictable dates, lookup helpers that walk a
//! finalized tree, and bulk extractors for concise assertions.
//!
//! # Usage
//!
//! ```text
//! use crate::test_helpers::*;
//!
//! let leaf = finalized_leaf("Japan", &[photo("tokyo.jpg", 3)]);
//! assert_eq!(preview_names(&leaf), vec!["tokyo.jpg"]);
//! ```

use chrono::{DateTime, Duration, TimeZone, Utc};

use crate::album::{AlbumFactory, AlbumInit, FinalizedAlbum};
use crate::config::SiteConfig;
use crate::types::MediaFile;

// =========================================================================
// Media builders
// =========================================================================

/// Midnight UTC, `day` days after 2023-01-01. Larger `day` means later.
pub fn date(day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap() + Duration::days(i64::from(day))
}

/// An image dated `date(day)`.
pub fn photo(filename: &str, day: u32) -> MediaFile {
    MediaFile::image(filename).with_date(date(day))
}

/// A video dated `date(day)`.
pub fn video(filename: &str, day: u32) -> MediaFile {
    MediaFile::video(filename).with_date(date(day))
}

/// A childless album finalized with default config.
pub fn finalized_leaf(title: &str, files: &[MediaFile]) -> FinalizedAlbum {
    AlbumFactory::new()
        .album(AlbumInit::new(title).with_files(files.iter().cloned()))
        .finalize(&SiteConfig::default())
}

// =========================================================================
// Tree lookups — panics with a clear message on miss
// =========================================================================

/// Find an album anywhere below (or at) `root` by title. Panics if not found.
pub fn find_album<'a>(root: &'a FinalizedAlbum, title: &str) -> &'a FinalizedAlbum {
    fn walk<'a>(album: &'a FinalizedAlbum, title: &str) -> Option<&'a FinalizedAlbum> {
        if album.title == title {
            return Some(album);
        }
        album.albums.iter().find_map(|child| walk(child, title))
    }
    walk(root, title).unwrap_or_else(|| {
        let mut all = Vec::new();
        collect_titles(root, &mut all);
        panic!("album '{title}' not found. Available: {all:?}")
    })
}

fn collect_titles<'a>(album: &'a FinalizedAlbum, out: &mut Vec<&'a str>) {
    out.push(album.title.as_str());
    for child in &album.albums {
        collect_titles(child, out);
    }
}

// =========================================================================
// Bulk extractors
// =========================================================================

/// Titles of a list of albums, in order.
pub fn titles(albums: &[FinalizedAlbum]) -> Vec<&str> {
    albums.iter().map(|a| a.title.as_str()).collect()
}

/// Filenames of the real (non-placeholder) previews, in order.
pub fn preview_names(album: &FinalizedAlbum) -> Vec<&str> {
    album
        .previews
        .iter()
        .filter_map(|p| p.media())
        .map(|f| f.filename.as_str())
        .collect()
}

/// Every finalized album in the tree, pre-order.
pub fn all_albums(root: &FinalizedAlbum) -> Vec<&FinalizedAlbum> {
    let mut out = vec![root];
    for child in &root.albums {
        out.extend(all_albums(child));
    }
    out
}
