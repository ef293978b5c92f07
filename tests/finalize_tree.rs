//! End-to-end finalization through the public API: build a tree with the
//! factory, finalize it, and check what the renderer would see.

use album_tree::album::{AlbumFactory, AlbumInit, FinalizedAlbum};
use album_tree::config::SiteConfig;
use album_tree::manifest::{TreeManifest, build_tree};
use album_tree::sort::{AlbumSortBy, MediaSortBy, SortDirection};
use album_tree::types::{MISSING_THUMBNAIL, MediaFile};
use chrono::{TimeZone, Utc};

fn at(month: u32, day: u32) -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2023, month, day, 12, 0, 0).unwrap()
}

fn titles(albums: &[FinalizedAlbum]) -> Vec<&str> {
    albums.iter().map(|a| a.title.as_str()).collect()
}

fn gallery(factory: &mut AlbumFactory) -> album_tree::album::Album {
    let tokyo = factory.album(AlbumInit::new("Tokyo Nights").with_files([
        MediaFile::image("neon.jpg").with_date(at(4, 3)),
        MediaFile::video("crossing.mp4").with_date(at(4, 2)),
    ]));
    let japan = factory.album(
        AlbumInit::new("Japan")
            .with_files([MediaFile::image("fuji.jpg").with_date(at(4, 1))])
            .with_albums([tokyo]),
    );
    let year = factory.album(
        AlbumInit::new("2022").with_files([MediaFile::image("old.jpg").with_date(at(1, 1))]),
    );
    let beach = factory.album(
        AlbumInit::new("beach_weekend")
            .with_files([MediaFile::image("sand.jpg").with_date(at(7, 9))]),
    );
    factory.album(AlbumInit::new("Gallery").with_albums([japan, year, beach]))
}

#[test]
fn finalized_gallery_is_ready_for_rendering() {
    let mut factory = AlbumFactory::new();
    let root = gallery(&mut factory).finalize(&SiteConfig::default());

    assert!(root.home);
    assert_eq!(root.path, "index.html");
    assert_eq!(titles(&root.albums), vec!["2022", "Japan", "beach_weekend"]);
    assert_eq!(root.summary, "3 albums, 4 photos, 1 video");

    let japan = &root.albums[1];
    assert_eq!(japan.url, "Japan.html");
    let tokyo = &japan.albums[0];
    assert_eq!(tokyo.basename, "Japan-TokyoNights");
    assert_eq!(tokyo.path, "Japan-TokyoNights.html");
    assert_eq!(tokyo.depth, 2);

    let tokyo_files: Vec<&str> = tokyo.files.iter().map(|f| f.filename.as_str()).collect();
    assert_eq!(tokyo_files, vec!["crossing.mp4", "neon.jpg"]);

    let japan_previews: Vec<&str> = japan.previews.iter().map(|p| p.thumbnail()).collect();
    assert_eq!(
        japan_previews[..3],
        [
            "media/thumbs/fuji.jpg",
            "media/thumbs/crossing.mp4",
            "media/thumbs/neon.jpg"
        ]
    );
    assert!(japan_previews[3..].iter().all(|t| *t == MISSING_THUMBNAIL));
}

#[test]
fn configured_options_flow_through_the_tree() {
    let mut config = SiteConfig {
        albums_output_folder: "albums".into(),
        index: "home.html".into(),
        titleize_album_names: true,
        ..SiteConfig::default()
    };
    config.sort.albums_by = AlbumSortBy::Title;
    config.sort.albums_direction = SortDirection::Desc;
    config.sort.albums_numbers_first = true;
    config.sort.media_by = MediaSortBy::Filename;
    config.previews.count = 2;

    let root = gallery(&mut AlbumFactory::new()).finalize(&config);

    assert_eq!(root.url, "home.html");
    assert_eq!(titles(&root.albums), vec!["2022", "Japan", "Beach Weekend"]);
    let beach = &root.albums[2];
    assert_eq!(beach.basename, "beach_weekend");
    assert_eq!(beach.url, "albums/beach_weekend.html");
    for album in &root.albums {
        assert_eq!(album.previews.len(), 2);
    }
    let tokyo_files: Vec<&str> = root.albums[1].albums[0]
        .files
        .iter()
        .map(|f| f.filename.as_str())
        .collect();
    assert_eq!(tokyo_files, vec!["crossing.mp4", "neon.jpg"]);
}

#[test]
fn unknown_sort_keys_keep_input_order() {
    let mut config = SiteConfig::default();
    config.sort.albums_by = AlbumSortBy::from("popularity".to_string());
    config.sort.media_by = MediaSortBy::from("size".to_string());

    let root = gallery(&mut AlbumFactory::new()).finalize(&config);
    assert_eq!(titles(&root.albums), vec!["Japan", "2022", "beach_weekend"]);
    let tokyo_files: Vec<&str> = root.albums[0].albums[0]
        .files
        .iter()
        .map(|f| f.filename.as_str())
        .collect();
    assert_eq!(tokyo_files, vec!["neon.jpg", "crossing.mp4"]);
}

#[test]
fn manifest_tree_finalizes_like_a_built_tree() {
    let node: TreeManifest = serde_json::from_str(
        r#"{
            "title": "Gallery",
            "albums": [
                { "title": "Zebra" },
                { "title": "2023" },
                { "title": "Apple" }
            ]
        }"#,
    )
    .unwrap();
    let mut config = SiteConfig::default();
    config.sort.albums_by = AlbumSortBy::Title;
    config.sort.albums_numbers_first = true;

    let root = build_tree(node, &mut AlbumFactory::new()).finalize(&config);
    assert_eq!(titles(&root.albums), vec!["2023", "Apple", "Zebra"]);
    assert_eq!(root.summary, "3 albums");
    assert!(root.previews.iter().all(|p| p.is_missing()));
}

#[test]
fn factory_reset_gives_deterministic_ids() {
    let mut factory = AlbumFactory::new();
    let first = gallery(&mut factory);
    factory.reset();
    let second = gallery(&mut factory);
    assert_eq!(first, second);
    assert_eq!(first.id, 5);
}
