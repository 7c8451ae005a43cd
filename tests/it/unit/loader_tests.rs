//! Loader tests: on-disk coordinate and image loading through the session
//! boundary, using temp files.

use crate::helpers::{GRAY, solid_image};
use placeboard::Session;
use std::io::Write as _;

#[test]
fn loads_coordinates_from_disk() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("coordinates.txt");
    let mut file = std::fs::File::create(&path).expect("create");
    writeln!(file, "x1:10 y1:10 x2:50 y2:50 door").expect("write");
    writeln!(file, "x1:garbage").expect("write");
    writeln!(file, "x1:60 y1:60 x2:100 y2:100").expect("write");

    let mut session = Session::new();
    session.load_regions_from_path(&path);
    assert_eq!(session.regions().len(), 2);
}

#[test]
fn missing_coordinate_file_yields_empty_list_and_status() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut session = Session::new();
    session.load_regions("x1:10 y1:10 x2:50 y2:50 door");

    session.load_regions_from_path(&dir.path().join("nope.txt"));
    assert!(session.regions().is_empty());
    assert!(session.status().starts_with("Error loading coordinates file"));
}

#[test]
fn loads_background_from_disk() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("background.png");
    solid_image(64, 48, GRAY).save(&path).expect("save png");

    let mut session = Session::new();
    session.load_background_from_path(&path);
    assert!(session.has_background());
}

#[test]
fn undecodable_background_keeps_previous_state_and_reports() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("background.png");
    std::fs::write(&path, b"not an image").expect("write");

    let mut session = Session::new();
    session.load_background_from_path(&path);
    assert!(!session.has_background());
    assert!(session.status().starts_with("Error loading background image"));
}
