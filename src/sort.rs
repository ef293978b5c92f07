//! Sort policies for album media and child albums.
//!
//! Sort keys come from user config as strings. They are parsed into closed
//! enums; any string that is not a known key becomes `Unsorted`, which keeps
//! the current order instead of failing the build.
//!
//! All sorts are stable. Descending order reverses the comparator, not the
//! sorted result, so items with equal keys keep their input order in both
//! directions. Items without a key (an undated file, an album with no dated
//! media) go last when ascending and first when descending.

use crate::album::FinalizedAlbum;
use crate::naming::is_numeric_title;
use crate::types::MediaFile;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

/// Sort direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

/// How to order the media files inside an album.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MediaSortBy {
    Filename,
    #[default]
    Date,
    /// Unrecognized key: keep the order given by the tree builder.
    Unsorted(String),
}

/// How to order the child albums of an album.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AlbumSortBy {
    Title,
    #[default]
    StartDate,
    EndDate,
    /// Unrecognized key: keep the order given by the tree builder.
    Unsorted(String),
}

impl From<String> for MediaSortBy {
    fn from(key: String) -> Self {
        match key.as_str() {
            "filename" => MediaSortBy::Filename,
            "date" => MediaSortBy::Date,
            _ => MediaSortBy::Unsorted(key),
        }
    }
}

impl From<MediaSortBy> for String {
    fn from(key: MediaSortBy) -> Self {
        key.to_string()
    }
}

impl fmt::Display for MediaSortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaSortBy::Filename => f.write_str("filename"),
            MediaSortBy::Date => f.write_str("date"),
            MediaSortBy::Unsorted(key) => f.write_str(key),
        }
    }
}

impl From<String> for AlbumSortBy {
    fn from(key: String) -> Self {
        match key.as_str() {
            "title" => AlbumSortBy::Title,
            "start-date" => AlbumSortBy::StartDate,
            "end-date" => AlbumSortBy::EndDate,
            _ => AlbumSortBy::Unsorted(key),
        }
    }
}

impl From<AlbumSortBy> for String {
    fn from(key: AlbumSortBy) -> Self {
        key.to_string()
    }
}

impl fmt::Display for AlbumSortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlbumSortBy::Title => f.write_str("title"),
            AlbumSortBy::StartDate => f.write_str("start-date"),
            AlbumSortBy::EndDate => f.write_str("end-date"),
            AlbumSortBy::Unsorted(key) => f.write_str(key),
        }
    }
}

/// Compare optional keys so that `None` sorts after every present key.
fn cmp_present_first<T: Ord>(a: &Option<T>, b: &Option<T>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn directed(ordering: Ordering, direction: SortDirection) -> Ordering {
    match direction {
        SortDirection::Asc => ordering,
        SortDirection::Desc => ordering.reverse(),
    }
}

/// Sort media files in place.
pub fn sort_media(files: &mut [Arc<MediaFile>], by: &MediaSortBy, direction: SortDirection) {
    match by {
        MediaSortBy::Filename => {
            files.sort_by(|a, b| directed(a.filename.cmp(&b.filename), direction));
        }
        MediaSortBy::Date => {
            files.sort_by(|a, b| directed(cmp_present_first(&a.date(), &b.date()), direction));
        }
        MediaSortBy::Unsorted(_) => {}
    }
}

/// Sort finalized child albums in place, then optionally move albums with
/// numeric titles to the front.
///
/// The numbers-first step is a stable partition, not a numeric sort: both
/// groups keep the order the first step gave them.
pub fn sort_albums(
    albums: &mut Vec<FinalizedAlbum>,
    by: &AlbumSortBy,
    direction: SortDirection,
    numbers_first: bool,
) {
    match by {
        AlbumSortBy::Title => {
            albums.sort_by(|a, b| directed(a.title.cmp(&b.title), direction));
        }
        AlbumSortBy::StartDate => {
            albums.sort_by(|a, b| {
                directed(
                    cmp_present_first(&a.stats.from_date, &b.stats.from_date),
                    direction,
                )
            });
        }
        AlbumSortBy::EndDate => {
            albums.sort_by(|a, b| {
                directed(
                    cmp_present_first(&a.stats.to_date, &b.stats.to_date),
                    direction,
                )
            });
        }
        AlbumSortBy::Unsorted(_) => {}
    }

    if numbers_first {
        let (mut numeric, rest): (Vec<_>, Vec<_>) = std::mem::take(albums)
            .into_iter()
            .partition(|album| is_numeric_title(&album.title));
        numeric.extend(rest);
        *albums = numeric;
    }
}
