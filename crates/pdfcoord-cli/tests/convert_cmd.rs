//! Integration tests for the conversion subcommands.

use assert_cmd::Command;
use predicates::prelude::*;

fn cmd() -> Command {
    Command::cargo_bin("pdfcoord").unwrap()
}

fn json_output(args: &[&str]) -> serde_json::Value {
    let output = cmd().args(args).output().unwrap();
    assert!(output.status.success(), "command failed: {output:?}");
    serde_json::from_slice(&output.stdout).unwrap()
}

// ===== point =====

#[test]
fn point_center_of_zoomed_page() {
    cmd()
        .args(["point", "306", "396", "--page", "306x396", "--raster", "612x792"])
        .assert()
        .success()
        .stdout("(153.0, 198.0)\n");
}

#[test]
fn point_uses_default_zoom_of_two() {
    cmd()
        .args(["point", "306", "396", "--page", "306x396"])
        .assert()
        .success()
        .stdout("(153.0, 198.0)\n");
}

#[test]
fn point_with_paper_name_and_zoom() {
    // letter at zoom 1: pixels are points, only y flips
    cmd()
        .args(["point", "72", "72", "--page", "letter", "--zoom", "1"])
        .assert()
        .success()
        .stdout("(72.0, 720.0)\n");
}

#[test]
fn point_negative_coordinates_extrapolate() {
    cmd()
        .args(["point", "-20", "800", "--page", "306x396", "--raster", "612x792"])
        .assert()
        .success()
        .stdout("(-10.0, -4.0)\n");
}

#[test]
fn point_precision() {
    cmd()
        .args([
            "point", "1", "1", "--page", "100x100", "--raster", "300x300", "--precision", "3",
        ])
        .assert()
        .success()
        .stdout("(0.333, 99.667)\n");
}

#[test]
fn point_precision_upper_bound() {
    cmd()
        .args(["point", "1", "1", "--page", "letter", "--precision", "18"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("--precision"));
}

#[test]
fn point_json_output() {
    let json = json_output(&[
        "point", "306", "396", "--page", "306x396", "--raster", "612x792", "--format", "json",
    ]);
    assert_eq!(json["pdf"]["x"], 153.0);
    assert_eq!(json["pdf"]["y"], 198.0);
    assert_eq!(json["pixel"]["x"], 306.0);
    assert_eq!(json["raster"]["pixel_width"], 612.0);
    assert_eq!(json["page"]["point_height"], 396.0);
}

#[test]
fn point_zero_raster_width_fails() {
    cmd()
        .args(["point", "1", "1", "--page", "letter", "--raster", "0x792"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: invalid dimension: pixel_width"));
}

#[test]
fn point_bad_page_fails() {
    cmd()
        .args(["point", "1", "1", "--page", "bogus"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("cannot parse frame"));
}

#[test]
fn point_bad_zoom_fails() {
    cmd()
        .args(["point", "1", "1", "--page", "letter", "--zoom", "-2"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("invalid zoom factor"));
}

// ===== rect =====

#[test]
fn rect_full_raster_keeps_corner_order() {
    cmd()
        .args([
            "rect", "0", "0", "612", "792", "--page", "306x396", "--raster", "612x792",
        ])
        .assert()
        .success()
        .stdout("(0.0, 396.0, 306.0, 0.0)\n");
}

#[test]
fn rect_normalize() {
    cmd()
        .args([
            "rect",
            "0",
            "0",
            "612",
            "792",
            "--page",
            "306x396",
            "--raster",
            "612x792",
            "--normalize",
        ])
        .assert()
        .success()
        .stdout("(0.0, 0.0, 306.0, 396.0)\n");
}

#[test]
fn rect_json_output() {
    let json = json_output(&[
        "rect", "100", "200", "400", "600", "--page", "306x396", "--format", "json",
    ]);
    assert_eq!(json["pdf"]["x1"], 50.0);
    assert_eq!(json["pdf"]["y1"], 296.0);
    assert_eq!(json["pdf"]["x2"], 200.0);
    assert_eq!(json["pdf"]["y2"], 96.0);
    assert_eq!(json["normalized"], false);
    assert_eq!(json["width"], 150.0);
    assert_eq!(json["height"], 200.0);
}

// ===== inverse =====

#[test]
fn inverse_maps_pdf_point_to_pixel() {
    cmd()
        .args(["inverse", "153", "198", "--page", "306x396", "--raster", "612x792"])
        .assert()
        .success()
        .stdout("(306.0, 396.0)\n");
}

#[test]
fn inverse_json_output() {
    let json = json_output(&[
        "inverse", "0", "396", "--page", "306x396", "--format", "json",
    ]);
    assert_eq!(json["pixel"]["x"], 0.0);
    assert_eq!(json["pixel"]["y"], 0.0);
}

// ===== frame =====

#[test]
fn frame_default_zoom() {
    cmd()
        .args(["frame", "--page", "letter"])
        .assert()
        .success()
        .stdout("1224x1584\n");
}

#[test]
fn frame_landscape_with_zoom() {
    cmd()
        .args(["frame", "--page", "a4-landscape", "--zoom", "1"])
        .assert()
        .success()
        .stdout("842x595\n");
}

#[test]
fn frame_overflowing_zoom_fails() {
    cmd()
        .args(["frame", "--page", "1e308x10", "--zoom", "10"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("invalid zoom factor: 10"));
}

#[test]
fn point_overflowing_zoom_blames_zoom() {
    cmd()
        .args(["point", "1", "1", "--page", "1e308x10", "--zoom", "10"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("invalid zoom factor"));
}

#[test]
fn frame_json_output() {
    let json = json_output(&["frame", "--page", "306x396", "--format", "json"]);
    assert_eq!(json["zoom"], 2.0);
    assert_eq!(json["raster"]["pixel_width"], 612.0);
    assert_eq!(json["raster"]["pixel_height"], 792.0);
}

#[test]
fn verbose_logs_to_stderr() {
    cmd()
        .args(["point", "1", "1", "--page", "letter", "-v"])
        .env_remove("RUST_LOG")
        .assert()
        .success()
        .stderr(predicate::str::contains("built pixel-to-pdf transform"));
}
