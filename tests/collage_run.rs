use std::path::Path;

use image::{Rgb, RgbImage, Rgba, RgbaImage};
use progress_collage_rs::image_pipeline::{CollageConfig, CollageError, CollagePipeline};

const COLORS: [[u8; 3]; 5] = [
    [220, 30, 30],
    [30, 200, 40],
    [40, 60, 210],
    [230, 210, 20],
    [150, 40, 170],
];

/// Writes `count` solid PNGs named a.png, b.png, ... with the given heights,
/// all 40 px wide.
fn write_photos(dir: &Path, heights: &[u32]) {
    std::fs::create_dir_all(dir).unwrap();
    for (index, (&height, color)) in heights.iter().zip(COLORS).enumerate() {
        let name = format!("{}.png", (b'a' + index as u8) as char);
        RgbImage::from_pixel(40, height, Rgb(color))
            .save(dir.join(name))
            .unwrap();
    }
}

fn config_for(root: &Path) -> CollageConfig {
    CollageConfig::builder()
        .input_dir(root.join("images"))
        .output_dir(root.join("output"))
        .logo_path(Some(root.join("logo.png")))
        .target_height(120)
        .build()
}

fn load(path: &Path) -> RgbImage {
    image::open(path).unwrap().to_rgb8()
}

fn assert_close(px: &Rgb<u8>, want: [u8; 3], tolerance: u8) {
    for (got, want) in px.0.iter().zip(want) {
        assert!(got.abs_diff(want) <= tolerance, "{:?} vs {:?}", px.0, want);
    }
}

#[test]
fn five_photos_produce_three_collages() {
    let root = tempfile::tempdir().unwrap();
    write_photos(&root.path().join("images"), &[80, 120, 150, 120, 90]);

    let report = CollagePipeline::new(config_for(root.path())).run().unwrap();

    assert_eq!(report.source_count, 5);
    let names: Vec<_> = report
        .written
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, ["collage_2.jpg", "collage_3.jpg", "collage_4.jpg"]);
    assert!(!root.path().join("output/collage_5.jpg").exists());

    let dims: Vec<_> = report.written.iter().map(|p| load(p).dimensions()).collect();
    assert_eq!(dims, [(67, 80), (88, 80), (115, 80)]);

    // Frame centers: a at 20, b at 53, c at 77, d at 101
    let collage_4 = load(&report.written[2]);
    for (x, color) in [20, 53, 77, 101].into_iter().zip(COLORS) {
        assert_close(collage_4.get_pixel(x, 40), color, 16);
    }
}

#[test]
fn three_photos_produce_two_collages() {
    let root = tempfile::tempdir().unwrap();
    write_photos(&root.path().join("images"), &[60, 60, 60]);

    let report = CollagePipeline::new(config_for(root.path())).run().unwrap();

    assert_eq!(report.written.len(), 2);
    assert!(root.path().join("output/collage_2.jpg").is_file());
    assert!(root.path().join("output/collage_3.jpg").is_file());
    assert!(!root.path().join("output/collage_4.jpg").exists());
}

#[test]
fn single_photo_fails_without_output() {
    let root = tempfile::tempdir().unwrap();
    write_photos(&root.path().join("images"), &[60]);

    let err = CollagePipeline::new(config_for(root.path())).run().unwrap_err();

    assert!(matches!(err, CollageError::ConfigurationError(_)));
    assert!(!root.path().join("output").exists());
}

#[test]
fn missing_input_directory_fails() {
    let root = tempfile::tempdir().unwrap();

    let err = CollagePipeline::new(config_for(root.path())).run().unwrap_err();

    assert!(matches!(err, CollageError::ConfigurationError(ref msg) if msg.contains("images")));
}

#[test]
fn corrupt_photo_aborts_run() {
    let root = tempfile::tempdir().unwrap();
    let images = root.path().join("images");
    write_photos(&images, &[60, 60]);
    std::fs::write(images.join("c.jpg"), b"not a jpeg").unwrap();

    let err = CollagePipeline::new(config_for(root.path())).run().unwrap_err();

    assert!(matches!(err, CollageError::DecodeError(ref msg) if msg.contains("c.jpg")));
    assert!(!root.path().join("output").exists());
}

#[test]
fn corrupt_logo_aborts_run() {
    let root = tempfile::tempdir().unwrap();
    write_photos(&root.path().join("images"), &[60, 60]);
    std::fs::write(root.path().join("logo.png"), b"garbage, not a png").unwrap();

    let err = CollagePipeline::new(config_for(root.path())).run().unwrap_err();

    assert!(matches!(err, CollageError::DecodeError(ref msg) if msg.contains("logo.png")));
    assert!(!root.path().join("output/collage_2.jpg").exists());
    assert!(!root.path().join("output").exists());
}

#[test]
fn rerun_is_byte_identical() {
    let root = tempfile::tempdir().unwrap();
    write_photos(&root.path().join("images"), &[70, 90, 130]);
    let pipeline = CollagePipeline::new(config_for(root.path()));

    let first = pipeline.run().unwrap();
    let first_bytes: Vec<_> = first.written.iter().map(|p| std::fs::read(p).unwrap()).collect();
    let second = pipeline.run().unwrap();
    let second_bytes: Vec<_> = second.written.iter().map(|p| std::fs::read(p).unwrap()).collect();

    assert_eq!(first.written, second.written);
    assert_eq!(first_bytes, second_bytes);
}

#[test]
fn missing_logo_matches_disabled_stamping() {
    let root = tempfile::tempdir().unwrap();
    write_photos(&root.path().join("images"), &[60, 80]);

    let missing = CollagePipeline::new(config_for(root.path())).run().unwrap();
    let with_missing_logo = std::fs::read(&missing.written[0]).unwrap();

    let mut disabled_config = config_for(root.path());
    disabled_config.logo_path = None;
    let disabled = CollagePipeline::new(disabled_config).run().unwrap();
    let without_logo = std::fs::read(&disabled.written[0]).unwrap();

    assert_eq!(with_missing_logo, without_logo);
}

#[test]
fn logo_is_scaled_and_stamped_bottom_left() {
    let root = tempfile::tempdir().unwrap();
    let config = CollageConfig::builder()
        .input_dir(root.path().join("images"))
        .output_dir(root.path().join("output"))
        .logo_path(Some(root.path().join("logo.png")))
        .target_height(400)
        .build();
    std::fs::create_dir_all(root.path().join("images")).unwrap();
    for name in ["a.png", "b.png"] {
        RgbImage::from_pixel(200, 200, Rgb([255, 255, 255]))
            .save(root.path().join("images").join(name))
            .unwrap();
    }
    // 400 px wide collage caps the logo at 60 px, so this shrinks to 60x30
    RgbaImage::from_pixel(120, 60, Rgba([0, 0, 0, 255]))
        .save(root.path().join("logo.png"))
        .unwrap();

    let report = CollagePipeline::new(config).run().unwrap();
    let collage = load(&report.written[0]);

    assert_eq!(collage.dimensions(), (400, 200));
    // Logo spans x 12..72, y 158..188
    assert_close(collage.get_pixel(40, 172), [0, 0, 0], 24);
    assert_close(collage.get_pixel(90, 172), [255, 255, 255], 24);
    assert_close(collage.get_pixel(40, 140), [255, 255, 255], 24);
    assert_close(collage.get_pixel(40, 196), [255, 255, 255], 24);
}
