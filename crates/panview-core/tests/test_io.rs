mod common;

use image::{ImageFormat, Rgba, RgbaImage};

use panview_core::io::{load_image, save_frame};
use panview_core::ViewerError;

use common::{gradient_image, viewer};

#[test]
fn test_load_png() {
    let img = RgbaImage::from_fn(6, 4, |x, y| Rgba([x as u8 * 40, y as u8 * 60, 7, 255]));
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("input.png");
    img.save_with_format(&path, ImageFormat::Png).unwrap();

    let loaded = load_image(&path).unwrap();
    assert_eq!(loaded.size(), (6, 4));
    assert_eq!(loaded.pixels().get_pixel(5, 3).0, [200, 180, 7, 255]);
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = load_image(&dir.path().join("missing.png"));
    assert!(matches!(
        result,
        Err(ViewerError::ImageError(_)) | Err(ViewerError::Io(_))
    ));
}

#[test]
fn test_save_frame_roundtrip() {
    let v = viewer((400, 300), Some(gradient_image(1000, 500)));
    let frame = v.frame().unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("frame.png");
    save_frame(frame, &path).unwrap();

    let loaded = load_image(&path).unwrap();
    assert_eq!(loaded.size(), frame.pixels().dimensions());
    assert_eq!(loaded.pixels(), frame.pixels());
}
