mod common;

use baconpath::BaconPathApp;
use common::TEST_LISTING;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

fn create_test_listing_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_load_app_from_listing() {
    let file = create_test_listing_file(TEST_LISTING);

    let app = BaconPathApp::load(file.path()).unwrap();

    assert_eq!(app.index.len(), 6);
    assert_eq!(app.resolve_actor("kevin bacon"), Ok("Kevin Bacon".to_string()));
}

#[test]
fn test_load_app_missing_listing() {
    let error = BaconPathApp::load(Path::new("/no/such/top250.txt"))
        .err()
        .unwrap();

    assert!(error.to_string().contains("Movie listing not found"));
}

#[test]
fn test_load_app_without_costars() {
    let file = create_test_listing_file("Movie: Monologue\nActor: Solo Performer\n");

    let error = BaconPathApp::load(file.path()).err().unwrap();

    assert!(error.to_string().contains("No co-starring actors found"));
}

#[test]
fn test_load_app_malformed_listing() {
    let file = create_test_listing_file("Actor: Kevin Bacon\n");

    let error = BaconPathApp::load(file.path()).err().unwrap();

    assert_eq!(error.to_string(), "line 1: actor listed before any movie");
}
