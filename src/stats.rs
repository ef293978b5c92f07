//! Album statistics and the one-line summary shown under album titles.
//!
//! Stats are aggregated bottom-up: an album's counts are its own files plus
//! the stats its children already computed. They are never derived by walking
//! the subtree again from the top.

use crate::types::{MediaFile, MediaKind};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;

/// Aggregated counts and date range for an album and everything below it.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AlbumStats {
    /// Number of direct child albums (not recursive).
    pub albums: usize,
    pub photos: usize,
    pub videos: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_date: Option<DateTime<Utc>>,
    /// `photos + videos`.
    pub total: usize,
}

/// Combine an album's own files with its children's stats.
pub fn calculate_stats(files: &[Arc<MediaFile>], children: &[&AlbumStats]) -> AlbumStats {
    let own_photos = files.iter().filter(|f| f.kind == MediaKind::Image).count();
    let own_videos = files.iter().filter(|f| f.kind == MediaKind::Video).count();
    let photos = own_photos + children.iter().map(|s| s.photos).sum::<usize>();
    let videos = own_videos + children.iter().map(|s| s.videos).sum::<usize>();

    // A file has a single date, so it is a candidate for both ends of the range.
    let own_dates = files.iter().filter_map(|f| f.date());
    let from_date = own_dates
        .clone()
        .chain(children.iter().filter_map(|s| s.from_date))
        .min();
    let to_date = own_dates
        .chain(children.iter().filter_map(|s| s.to_date))
        .max();

    AlbumStats {
        albums: children.len(),
        photos,
        videos,
        from_date,
        to_date,
        total: photos + videos,
    }
}

fn plural(count: usize, noun: &str) -> Option<String> {
    match count {
        0 => None,
        1 => Some(format!("1 {noun}")),
        n => Some(format!("{n} {noun}s")),
    }
}

/// Human readable summary such as `"2 albums, 3 photos, 1 video"`.
///
/// Zero counts are left out entirely; an empty album gets an empty string.
pub fn summary(stats: &AlbumStats) -> String {
    [
        plural(stats.albums, "album"),
        plural(stats.photos, "photo"),
        plural(stats.videos, "video"),
    ]
    .into_iter()
    .flatten()
    .collect::<Vec<_>>()
    .join(", ")
}
