use anyhow::Result;
use image::{Rgb, RgbImage};
use std::fs;
use std::process::{Command, Output};
use tempfile::tempdir;

const BIN: &str = env!("CARGO_BIN_EXE_generate-brand-assets");

fn run_generator(args: &[&str]) -> Result<Output> {
    let output = Command::new(BIN)
        .args(args)
        .env_remove("BRAND_ASSETS_ROOT")
        .output()?;
    Ok(output)
}

#[test]
fn test_cli_success_prints_summary() -> Result<()> {
    let test_dir = tempdir()?;
    let source = test_dir.path().join("logo.png");
    RgbImage::from_pixel(1200, 800, Rgb([12, 34, 56])).save(&source)?;
    let root = test_dir.path().to_str().unwrap();

    let output = run_generator(&["--project-root", root, source.to_str().unwrap()])?;
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert_eq!(output.status.code(), Some(0), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert!(stdout.contains("Loaded source image: (1200, 800) (RGB)"));
    assert!(stdout.contains("(size: 60x40)"));
    assert!(stdout.contains("All brand assets generated successfully"));
    assert!(test_dir.path().join("app/favicon.ico").is_file());
    assert!(test_dir.path().join("public/icon.png").is_file());
    assert!(test_dir.path().join("public/logo.png").is_file());

    Ok(())
}

#[test]
fn test_cli_missing_argument_exits_with_one() -> Result<()> {
    let output = run_generator(&[])?;
    assert_eq!(output.status.code(), Some(1));
    Ok(())
}

#[test]
fn test_cli_missing_file_exits_with_one() -> Result<()> {
    let test_dir = tempdir()?;
    let missing = test_dir.path().join("nope.jpg");
    let root = test_dir.path().to_str().unwrap();

    let output = run_generator(&["--project-root", root, missing.to_str().unwrap()])?;
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr.contains("Logo file not found"));
    assert!(stderr.contains("nope.jpg"));
    assert!(!test_dir.path().join("app").exists());
    assert!(!test_dir.path().join("public").exists());

    Ok(())
}

#[test]
fn test_cli_invalid_image_exits_with_one() -> Result<()> {
    let test_dir = tempdir()?;
    let source = test_dir.path().join("logo.jpg");
    fs::write(&source, "not really a jpeg")?;
    let root = test_dir.path().to_str().unwrap();

    let output = run_generator(&["--project-root", root, source.to_str().unwrap()])?;
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr.contains("Error loading image"));
    assert!(!test_dir.path().join("app").exists());
    assert!(!test_dir.path().join("public").exists());

    Ok(())
}
