//! CLI output formatting for finalized album trees.
//!
//! Output is **information-centric**: each album leads with its positional
//! index among its siblings and its title, followed by the summary and the
//! URL it will be rendered to. Children are indented four spaces per level.
//!
//! ```text
//! Home (2 albums, 5 photos, 1 video) → index.html
//!     001 Japan (1 album, 3 photos) → Japan.html
//!         001 Osaka (2 photos) → Japan-Osaka.html
//!     002 Drafts (empty) → Drafts.html
//!
//! Finalized 4 albums, 5 photos, 1 video
//! ```
//!
//! Each `format_*` function returns `Vec<String>` for testability; the
//! `print_*` wrappers write to stdout.

use crate::album::FinalizedAlbum;

/// Position of an album among its siblings, counted from 1: `001`, `002`, ...
fn format_index(position: usize) -> String {
    format!("{position:03}")
}

/// Leading whitespace for an album line; one level per depth below the root.
fn indent(depth: usize) -> String {
    " ".repeat(4 * depth)
}

/// Summary in parentheses, or `(empty)` for albums with nothing in them.
fn summary_label(album: &FinalizedAlbum) -> String {
    if album.summary.is_empty() {
        "(empty)".to_string()
    } else {
        format!("({})", album.summary)
    }
}

/// Format one album header line.
///
/// ```text
/// Home (2 albums) → index.html          // root, no index
/// 001 Japan (3 photos) → Japan.html     // nested
/// ```
fn album_line(index: Option<usize>, album: &FinalizedAlbum) -> String {
    let label = match index {
        Some(i) => format!("{} {}", format_index(i), album.title),
        None => album.title.clone(),
    };
    format!(
        "{}{} {} \u{2192} {}",
        indent(album.depth),
        label,
        summary_label(album),
        album.url
    )
}

fn walk(album: &FinalizedAlbum, index: Option<usize>, lines: &mut Vec<String>) -> usize {
    lines.push(album_line(index, album));
    let mut count = 1;
    for (i, child) in album.albums.iter().enumerate() {
        count += walk(child, Some(i + 1), lines);
    }
    count
}

/// Format the whole finalized tree, followed by a totals line.
pub fn format_tree_output(root: &FinalizedAlbum) -> Vec<String> {
    let mut lines = Vec::new();
    let album_count = walk(root, None, &mut lines);
    lines.push(String::new());
    lines.push(format!(
        "Finalized {} {}, {} {}, {} {}",
        album_count,
        pluralize(album_count, "album"),
        root.stats.photos,
        pluralize(root.stats.photos, "photo"),
        root.stats.videos,
        pluralize(root.stats.videos, "video"),
    ));
    lines
}

fn pluralize(count: usize, noun: &str) -> String {
    if count == 1 {
        noun.to_string()
    } else {
        format!("{noun}s")
    }
}

/// Print the finalized tree to stdout.
pub fn print_tree_output(root: &FinalizedAlbum) {
    for line in format_tree_output(root) {
        println!("{}", line);
    }
}

// ============================================================================
// Tests
// ============================================================================
