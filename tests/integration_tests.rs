mod common;

use assert_cmd::Command;
use common::{write_broken_jpeg, write_test_jpeg};
use image::{GenericImageView, ImageReader};
use predicates::prelude::*;
use std::path::Path;
use tempfile::TempDir;

fn jpeg_tidy() -> Command {
    Command::cargo_bin("jpeg-tidy").unwrap()
}

fn dimensions_of(path: &Path) -> (u32, u32) {
    ImageReader::open(path).unwrap().decode().unwrap().dimensions()
}

#[test]
fn test_cli_help() {
    jpeg_tidy().arg("--help").assert().success();
}

#[test]
fn test_compress_help() {
    jpeg_tidy().args(["compress", "--help"]).assert().success();
}

#[test]
fn test_ultra_help() {
    jpeg_tidy().args(["ultra", "--help"]).assert().success();
}

#[test]
fn test_rename_help() {
    jpeg_tidy().args(["rename", "--help"]).assert().success();
}

#[test]
fn test_compress_missing_args() {
    jpeg_tidy().arg("compress").assert().failure();
}

#[test]
fn test_rename_missing_args() {
    jpeg_tidy().args(["rename", "folder-only"]).assert().failure();
}

#[test]
fn test_compress_missing_folder_is_not_fatal() {
    jpeg_tidy()
        .args(["compress", "no/such/folder"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Folder not found"));
}

#[test]
fn test_compress_empty_folder_succeeds() {
    let temp_dir = TempDir::new().unwrap();
    jpeg_tidy()
        .args(["compress", &temp_dir.path().to_string_lossy()])
        .assert()
        .success()
        .stdout(predicate::str::contains("No JPEG files found"));
}

#[test]
fn test_compress_invalid_quality_fails() {
    let temp_dir = TempDir::new().unwrap();
    jpeg_tidy()
        .args(["compress", &temp_dir.path().to_string_lossy(), "-q", "0"])
        .assert()
        .failure();
}

#[test]
fn test_compress_resizes_oversized_image() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("big.jpg");
    write_test_jpeg(&file, 1200, 800);

    jpeg_tidy()
        .args(["compress", &temp_dir.path().to_string_lossy()])
        .args(["-w", "600", "-H", "600", "-q", "60"])
        .assert()
        .success();

    // scale = min(600/1200, 600/800) = 0.5
    assert_eq!(dimensions_of(&file), (600, 400));
}

#[test]
fn test_compress_never_upscales() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("small.jpg");
    write_test_jpeg(&file, 300, 200);

    jpeg_tidy()
        .args(["compress", &temp_dir.path().to_string_lossy()])
        .args(["-w", "600", "-H", "600"])
        .assert()
        .success();

    assert_eq!(dimensions_of(&file), (300, 200));
}

#[test]
fn test_compress_continues_past_undecodable_file() {
    let temp_dir = TempDir::new().unwrap();
    let bad = temp_dir.path().join("bad.jpg");
    let good = temp_dir.path().join("good.jpg");
    write_broken_jpeg(&bad);
    write_test_jpeg(&good, 800, 600);

    jpeg_tidy()
        .args(["compress", &temp_dir.path().to_string_lossy()])
        .args(["-w", "600", "-H", "600"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Failed to process"));

    // The bad file is untouched, the good one was still processed
    assert_eq!(std::fs::read(&bad).unwrap(), b"definitely not a jpeg");
    assert_eq!(dimensions_of(&good), (600, 450));
}

#[test]
fn test_compress_multiple_folders_reports_run_totals() {
    let temp_dir = TempDir::new().unwrap();
    let first = temp_dir.path().join("first");
    let second = temp_dir.path().join("second");
    std::fs::create_dir(&first).unwrap();
    std::fs::create_dir(&second).unwrap();
    write_test_jpeg(&first.join("a.jpg"), 900, 900);
    write_test_jpeg(&second.join("b.jpg"), 900, 900);

    jpeg_tidy()
        .args([
            "compress",
            &first.to_string_lossy(),
            &second.to_string_lossy(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Run summary"));

    assert_eq!(dimensions_of(&first.join("a.jpg")), (600, 600));
    assert_eq!(dimensions_of(&second.join("b.jpg")), (600, 600));
}

#[test]
fn test_quiet_mode_silences_stdout() {
    let temp_dir = TempDir::new().unwrap();
    jpeg_tidy()
        .args(["compress", &temp_dir.path().to_string_lossy(), "--quiet"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_ultra_with_backup_preserves_originals() {
    let temp_dir = TempDir::new().unwrap();
    let folder = temp_dir.path().join("photos");
    std::fs::create_dir(&folder).unwrap();
    let file = folder.join("pic.jpg");
    write_test_jpeg(&file, 800, 600);
    let original_bytes = std::fs::read(&file).unwrap();

    jpeg_tidy()
        .args(["ultra", &folder.to_string_lossy(), "--backup"])
        .assert()
        .success();

    let backup = temp_dir.path().join("photos_backup").join("pic.jpg");
    assert_eq!(std::fs::read(&backup).unwrap(), original_bytes);
    // ultra defaults to 400x400 bounds
    assert_eq!(dimensions_of(&file), (400, 300));
}

#[test]
fn test_ultra_yes_skips_confirmation() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("pic.jpg");
    write_test_jpeg(&file, 800, 600);

    jpeg_tidy()
        .args(["ultra", &temp_dir.path().to_string_lossy(), "--yes"])
        .assert()
        .success();

    assert_eq!(dimensions_of(&file), (400, 300));
}

#[test]
fn test_ultra_declined_confirmation_changes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("pic.jpg");
    write_test_jpeg(&file, 800, 600);
    let original_bytes = std::fs::read(&file).unwrap();

    jpeg_tidy()
        .args(["ultra", &temp_dir.path().to_string_lossy()])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Aborted"));

    assert_eq!(std::fs::read(&file).unwrap(), original_bytes);
}

#[test]
fn test_rename_missing_folder_exits_one() {
    jpeg_tidy()
        .args(["rename", "no/such/folder", "dog_"])
        .assert()
        .failure()
        .code(1);
}

#[test]
fn test_rename_empty_folder_exits_zero() {
    let temp_dir = TempDir::new().unwrap();
    jpeg_tidy()
        .args(["rename", &temp_dir.path().to_string_lossy(), "dog_"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No JPEG files found"));
}

#[test]
fn test_rename_sequences_sorted_files() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("b.jpg"), b"bee").unwrap();
    std::fs::write(temp_dir.path().join("a.JPEG"), b"ay").unwrap();
    std::fs::write(temp_dir.path().join("c.jpeg"), b"sea").unwrap();

    jpeg_tidy()
        .args(["rename", &temp_dir.path().to_string_lossy(), "dog_"])
        .assert()
        .success();

    // N=3 -> single-digit padding; extensions lowercased, contents preserved
    assert_eq!(
        std::fs::read(temp_dir.path().join("dog_1.jpeg")).unwrap(),
        b"ay"
    );
    assert_eq!(
        std::fs::read(temp_dir.path().join("dog_2.jpg")).unwrap(),
        b"bee"
    );
    assert_eq!(
        std::fs::read(temp_dir.path().join("dog_3.jpeg")).unwrap(),
        b"sea"
    );
    assert!(!temp_dir.path().join("a.JPEG").exists());
}

#[test]
fn test_rename_pads_to_digit_count_of_total() {
    let temp_dir = TempDir::new().unwrap();
    for i in 0..12 {
        std::fs::write(temp_dir.path().join(format!("src{i:02}.jpg")), b"x").unwrap();
    }

    jpeg_tidy()
        .args(["rename", &temp_dir.path().to_string_lossy(), "pet_"])
        .assert()
        .success();

    assert!(temp_dir.path().join("pet_01.jpg").exists());
    assert!(temp_dir.path().join("pet_12.jpg").exists());
    assert!(!temp_dir.path().join("pet_1.jpg").exists());
}

#[test]
fn test_rename_twice_is_idempotent() {
    let temp_dir = TempDir::new().unwrap();
    for name in ["b.jpg", "a.jpg", "c.jpg"] {
        std::fs::write(temp_dir.path().join(name), name.as_bytes()).unwrap();
    }

    jpeg_tidy()
        .args(["rename", &temp_dir.path().to_string_lossy(), "pet_"])
        .assert()
        .success();

    let snapshot = |dir: &Path| {
        let mut names: Vec<String> = std::fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    };
    let after_first = snapshot(temp_dir.path());

    jpeg_tidy()
        .args(["rename", &temp_dir.path().to_string_lossy(), "pet_"])
        .assert()
        .success()
        .stdout(predicate::str::contains("3 already named"));

    assert_eq!(snapshot(temp_dir.path()), after_first);
}

#[test]
fn test_rename_collision_is_skipped_with_warning() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("b.jpg"), b"newcomer").unwrap();
    std::fs::write(temp_dir.path().join("dog_1.jpg"), b"occupant").unwrap();

    jpeg_tidy()
        .args(["rename", &temp_dir.path().to_string_lossy(), "dog_"])
        .assert()
        .success()
        .stderr(predicate::str::contains("already exists"));

    assert_eq!(
        std::fs::read(temp_dir.path().join("b.jpg")).unwrap(),
        b"newcomer"
    );
    assert_eq!(
        std::fs::read(temp_dir.path().join("dog_2.jpg")).unwrap(),
        b"occupant"
    );
}
