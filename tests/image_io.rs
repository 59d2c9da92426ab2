#![cfg(feature = "image-io")]

use grayarea::io::{load_gray_image, save_gray_image};
use grayarea::{GrayAreaError, Graymap};
use std::path::PathBuf;

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("grayarea-{}-{name}", std::process::id()))
}

#[test]
fn pgm_save_then_load_preserves_levels() {
    let data: Vec<u8> = (0..48u32).map(|v| (v * 5) as u8).collect();
    let img = Graymap::from_vec(data, 8, 6, 255).unwrap();

    let path = temp_path("full.pgm");
    save_gray_image(&img, &path).unwrap();
    let loaded = load_gray_image(&path).unwrap();
    let _ = std::fs::remove_file(&path);

    assert_eq!(loaded, img);
}

#[test]
fn pgm_keeps_small_maxval_and_writes_binary_graymap() {
    let img = Graymap::from_vec(vec![0, 33, 67, 100, 12, 99], 3, 2, 100).unwrap();

    let path = temp_path("maxval100.pgm");
    save_gray_image(&img, &path).unwrap();
    let bytes = std::fs::read(&path).unwrap();
    let loaded = load_gray_image(&path).unwrap();
    let _ = std::fs::remove_file(&path);

    assert!(bytes.starts_with(b"P5"), "header {:?}", &bytes[..2]);
    assert!(bytes.ends_with(&[0, 33, 67, 100, 12, 99]));
    assert_eq!(loaded.maxval(), 100);
    assert_eq!(loaded, img);
}

#[test]
fn pgm_header_maxval_is_read_back() {
    let path = temp_path("handmade.pgm");
    let mut file = b"P5\n2 2\n40\n".to_vec();
    file.extend_from_slice(&[0, 10, 20, 40]);
    std::fs::write(&path, &file).unwrap();
    let loaded = load_gray_image(&path).unwrap();
    let _ = std::fs::remove_file(&path);

    assert_eq!(loaded.maxval(), 40);
    assert_eq!(loaded.width(), 2);
    assert_eq!(loaded.as_slice(), &[0u8, 10, 20, 40]);
}

#[test]
fn missing_file_reports_image_io_error() {
    let path = temp_path("definitely-missing.pgm");
    let err = load_gray_image(path).err().unwrap();
    assert!(matches!(err, GrayAreaError::ImageIo { .. }));
}
