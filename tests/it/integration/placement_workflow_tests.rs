//! End-to-end placement workflows: coordinate text through parsing, hit
//! testing, commits, and rendering.

use crate::helpers::{GRAY, RED, SessionBuilder, png_bytes, solid_image, solid_overlay};
use placeboard::{Compositor, Session};

const SCENARIO_TEXT: &str = "x1:10 y1:10 x2:50 y2:50 door\nx1:garbage\nx1:60 y1:60 x2:100 y2:100";

#[test]
fn scenario_text_parses_to_exactly_two_regions() {
    let mut session = Session::new();
    session.load_regions(SCENARIO_TEXT);

    let regions = session.regions();
    assert_eq!(regions.len(), 2);
    assert_eq!(
        (regions[0].x1, regions[0].y1, regions[0].x2, regions[0].y2),
        (10, 10, 50, 50)
    );
    assert_eq!(regions[0].category, "door");
    assert_eq!(
        (regions[1].x1, regions[1].y1, regions[1].x2, regions[1].y2),
        (60, 60, 100, 100)
    );
    assert_eq!(regions[1].category, "unknown");
}

#[test]
fn press_inside_door_region_commits_there_only() {
    let mut session = Session::new();
    session.load_regions(SCENARIO_TEXT);
    session.select_image(solid_overlay(8, 8, RED));

    session.pointer_down(30.0, 30.0);
    session.pointer_up();

    assert_eq!(session.placements().len(), 1);
    let door_id = session.regions()[0].id;
    let other_id = session.regions()[1].id;
    assert!(session.placements().get(door_id).is_some());
    assert!(session.placements().get(other_id).is_none());
    assert_eq!(session.status(), "Image placed in door region");
}

#[test]
fn press_outside_all_regions_places_nothing() {
    let mut session = Session::new();
    session.load_regions(SCENARIO_TEXT);
    session.select_image(solid_overlay(8, 8, RED));

    session.pointer_down(5.0, 5.0);

    assert!(session.placements().is_empty());
    assert!(session.state().is_image_selected());
}

#[test]
fn placing_b_after_a_leaves_only_b() {
    let mut session = SessionBuilder::new()
        .with_region(10, 10, 50, 50, Some("door"))
        .build();

    session.select_image(solid_overlay(4, 4, RED));
    session.pointer_down(30.0, 30.0);
    session.pointer_up();

    session.select_image(solid_overlay(16, 16, [0, 0, 255, 255]));
    session.pointer_down(30.0, 30.0);
    session.pointer_up();

    assert_eq!(session.placements().len(), 1);
    let kept = session.placements().all().next().expect("placement");
    assert_eq!(kept.image.dimensions(), (16, 16));
}

#[test]
fn overlapping_regions_commit_to_first_declared() {
    let mut session = SessionBuilder::new()
        .with_region(0, 0, 100, 100, Some("door"))
        .with_region(50, 50, 150, 150, Some("window"))
        .build();
    session.select_image(solid_overlay(8, 8, RED));

    session.pointer_down(75.0, 75.0);

    let first_id = session.regions()[0].id;
    assert!(session.placements().get(first_id).is_some());
    assert_eq!(session.placements().len(), 1);
    assert_eq!(session.status(), "Image placed in door region");
}

#[test]
fn file_round_trip_produces_a_composited_png() {
    let dir = tempfile::tempdir().expect("tempdir");
    let background_path = dir.path().join("background.png");
    let coords_path = dir.path().join("coordinates.txt");
    let output_path = dir.path().join("composited.png");

    solid_image(120, 120, GRAY).save(&background_path).expect("save");
    std::fs::write(&coords_path, SCENARIO_TEXT).expect("write");

    let mut session = Session::new();
    session.load_regions_from_path(&coords_path);
    session.load_background_from_path(&background_path);
    session.select_image_bytes(&png_bytes(8, 8, RED), Some("image/png"));
    session.pointer_down(30.0, 30.0);
    session.pointer_up();

    let frame = session.render(&Compositor::new()).expect("render");
    frame.save(&output_path).expect("save output");

    let reloaded = image::open(&output_path).expect("reload").to_rgba8();
    assert_eq!(reloaded.dimensions(), (120, 120));
    assert_eq!(reloaded.get_pixel(30, 30).0, RED);
    // Unplaced second region keeps its background interior.
    assert_eq!(reloaded.get_pixel(80, 80).0, GRAY);
}
