//! # Album Tree
//!
//! Finalizes the album tree of a static photo gallery. Albums are virtual
//! groups of photos and videos, independent of how files sit on disk; a file
//! scanner builds the raw tree and a renderer turns the finalized tree into
//! HTML. This crate is the step in between.
//!
//! ```text
//! scanner  →  tree.json  →  Album tree  →  finalize  →  FinalizedAlbum tree  →  renderer
//! ```
//!
//! Finalizing a tree:
//!
//! - assigns every album its output path, URL, depth and basename,
//! - aggregates photo/video counts and date ranges bottom-up,
//! - writes a short summary (`"2 albums, 3 photos, 1 video"`),
//! - sorts media and child albums by the configured policies,
//! - picks a fixed-size strip of previews, borrowing from sub-albums and
//!   padding with a placeholder.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`album`] | `Album`, `AlbumFactory`, and the recursive `finalize` producing `FinalizedAlbum` |
//! | [`stats`] | Bottom-up stats aggregation and summary text |
//! | [`sort`] | Media and album sort policies |
//! | [`naming`] | Basename sanitising, title formatting, numeric title detection |
//! | [`types`] | Media records and preview slots |
//! | [`config`] | `config.toml` loading, merging, and validation |
//! | [`manifest`] | JSON input tree and output manifest |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Two Trees Instead of Mutation
//!
//! Finalization borrows the input [`album::Album`] tree and builds a new
//! [`album::FinalizedAlbum`] tree. Fields that only exist after finalization
//! (stats, previews, paths) are not optional on the output type, and a
//! half-finalized album can never be observed. Finalizing the same input
//! twice gives the same output.
//!
//! ## Closed Sort Keys
//!
//! Sort keys are enums. Unknown keys in config parse to an explicit
//! `Unsorted` variant that keeps the existing order, and a warning is logged.
//!
//! ## Placeholder by Variant
//!
//! Missing previews are [`types::Preview::Missing`], recognized by variant.
//! Real previews are shared references to the files they show.

pub mod album;
pub mod config;
pub mod manifest;
pub mod naming;
pub mod output;
pub mod sort;
pub mod stats;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
