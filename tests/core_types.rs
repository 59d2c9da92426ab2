use grayarea::{GrayAreaError, Graymap, ImageView};

#[test]
fn image_view_accepts_empty_dimensions() {
    let data = [0u8; 4];

    let view = ImageView::from_slice(&data, 0, 3).unwrap();
    assert!(view.is_empty());
    assert_eq!(view.rows().count(), 3);
    assert!(view.get(0, 0).is_none());

    let view = ImageView::from_slice(&data[..0], 5, 0).unwrap();
    assert!(view.is_empty());
    assert_eq!(view.rows().count(), 0);
}

#[test]
fn image_view_rejects_invalid_stride() {
    let data = [0u8; 8];

    let err = ImageView::new(&data, 4, 1, 3).err().unwrap();
    assert_eq!(
        err,
        GrayAreaError::InvalidStride {
            width: 4,
            stride: 3,
        }
    );
}

#[test]
fn image_view_rejects_small_buffer() {
    let data = [0u8; 3];

    let err = ImageView::new(&data, 2, 2, 2).err().unwrap();
    assert_eq!(err, GrayAreaError::BufferTooSmall { needed: 4, got: 3 });
}

#[test]
fn image_view_roi_matches_expected_values() {
    let data: Vec<u8> = (0u8..16).collect();
    let view = ImageView::from_slice(&data, 4, 4).unwrap();

    let roi = view.roi(1, 1, 2, 2).unwrap();
    assert_eq!(roi.width(), 2);
    assert_eq!(roi.height(), 2);
    assert_eq!(roi.stride(), 4);
    assert_eq!(roi.row(0).unwrap(), &[5u8, 6u8]);
    assert_eq!(roi.row(1).unwrap(), &[9u8, 10u8]);
    assert_eq!(roi.get(0, 0).copied(), Some(5u8));
    assert!(roi.get(2, 0).is_none());
    let rows: Vec<&[u8]> = roi.rows().collect();
    assert_eq!(rows, vec![&[5u8, 6][..], &[9u8, 10][..]]);

    let err = view.roi(3, 3, 2, 2).err().unwrap();
    assert_eq!(
        err,
        GrayAreaError::RoiOutOfBounds {
            x: 3,
            y: 3,
            width: 2,
            height: 2,
            img_width: 4,
            img_height: 4,
        }
    );

    let empty = view.roi(4, 4, 0, 0).unwrap();
    assert!(empty.is_empty());
}

#[test]
fn graymap_new_is_black() {
    let img = Graymap::new(3, 2, 200).unwrap();
    assert_eq!(img.width(), 3);
    assert_eq!(img.height(), 2);
    assert_eq!(img.maxval(), 200);
    assert!(img.as_slice().iter().all(|&v| v == 0));

    let empty = Graymap::new(0, 7, 255).unwrap();
    assert!(empty.is_empty());
    assert!(empty.view().is_empty());
}

#[test]
fn graymap_rejects_zero_maxval() {
    let err = Graymap::new(2, 2, 0).err().unwrap();
    assert_eq!(err, GrayAreaError::InvalidMaxval { maxval: 0 });
}

#[test]
fn graymap_from_vec_validates_layout_and_levels() {
    let err = Graymap::from_vec(vec![0; 5], 3, 2, 255).err().unwrap();
    assert_eq!(err, GrayAreaError::BufferTooSmall { needed: 6, got: 5 });

    let err = Graymap::from_vec(vec![0; 7], 3, 2, 255).err().unwrap();
    assert_eq!(
        err,
        GrayAreaError::InvalidDimensions {
            width: 3,
            height: 2,
        }
    );

    let err = Graymap::from_vec(vec![0, 1, 2, 99], 2, 2, 50).err().unwrap();
    assert_eq!(
        err,
        GrayAreaError::PixelOutOfRange {
            value: 99,
            maxval: 50,
        }
    );
}

#[test]
fn graymap_get_set_use_row_major_layout() {
    let mut img = Graymap::new(4, 3, 255).unwrap();
    img.set(3, 1, 42);
    assert_eq!(img.get(3, 1), 42);
    assert_eq!(img.as_slice()[4 + 3], 42);
    assert_eq!(img.pixel(3, 1), Some(42));
    assert_eq!(img.pixel(4, 1), None);
    assert_eq!(img.view().get(3, 1).copied(), Some(42));
}

#[test]
fn graymap_bounds_queries() {
    let img = Graymap::new(4, 3, 255).unwrap();
    assert!(img.valid_pos(3, 2));
    assert!(!img.valid_pos(4, 0));
    assert!(!img.valid_pos(0, 3));
    assert!(img.valid_rect(1, 1, 3, 2));
    assert!(img.valid_rect(4, 3, 0, 0));
    assert!(!img.valid_rect(2, 0, 3, 1));
    assert!(!img.valid_rect(usize::MAX, 0, 2, 1));
}

#[test]
#[should_panic]
fn graymap_get_panics_outside_image() {
    let img = Graymap::new(2, 2, 255).unwrap();
    let _ = img.get(2, 0);
}

#[test]
#[should_panic]
fn graymap_set_panics_above_maxval() {
    let mut img = Graymap::new(2, 2, 100).unwrap();
    img.set(0, 0, 101);
}

#[test]
fn graymap_from_view_copies_strided_rows() {
    let data: Vec<u8> = (0u8..12).collect();
    let view = ImageView::new(&data, 2, 3, 4).unwrap();
    let img = Graymap::from_view(view, 255).unwrap();
    assert_eq!(img.as_slice(), &[0u8, 1, 4, 5, 8, 9]);

    let err = Graymap::from_view(view, 8).err().unwrap();
    assert_eq!(
        err,
        GrayAreaError::PixelOutOfRange {
            value: 9,
            maxval: 8,
        }
    );
}

#[test]
fn zero_width_strided_view_yields_empty_rows() {
    let view = ImageView::<u8>::new(&[], 0, 3, 5).unwrap();
    assert_eq!(view.rows().count(), 3);
    assert!(view.rows().all(|row| row.is_empty()));
    assert_eq!(view.row(2), Some(&[][..]));
    assert_eq!(view.row(3), None);
}

#[test]
fn empty_roi_rows_and_crop() {
    let img = Graymap::from_vec((0u8..16).collect(), 4, 4, 255).unwrap();
    let view = img.view();

    let roi = view.roi(1, 1, 0, 2).unwrap();
    assert!(roi.is_empty());
    assert_eq!(roi.rows().count(), 2);
    assert!(roi.rows().all(|row| row.is_empty()));

    let cropped = img.crop(1, 1, 0, 2).unwrap();
    assert_eq!(cropped.width(), 0);
    assert_eq!(cropped.height(), 2);
    assert!(cropped.is_empty());

    let flat = img.crop(0, 3, 4, 0).unwrap();
    assert_eq!(flat.width(), 4);
    assert_eq!(flat.height(), 0);
}
