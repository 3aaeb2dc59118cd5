use super::*;

#[test]
fn pure_red_maps_to_first_matrix_column() {
    let out = sepia(PixelBuffer::filled(1, 1, [255, 0, 0, 255]).unwrap());
    assert_eq!(out.pixel(0, 0), Some([100, 89, 69, 255]));
}

#[test]
fn white_saturates_red_and_green() {
    let out = sepia(PixelBuffer::filled(1, 1, [255, 255, 255, 7]).unwrap());
    // 0.272 + 0.534 + 0.131 = 0.937 -> 238.935
    assert_eq!(out.pixel(0, 0), Some([255, 255, 239, 7]));
}

#[test]
fn reads_all_inputs_before_writing() {
    // A sequential rewrite would feed the new R into G and B.
    let out = sepia(PixelBuffer::filled(1, 1, [100, 50, 20, 255]).unwrap());
    assert_eq!(out.pixel(0, 0), Some([82, 73, 57, 255]));
}

#[test]
fn is_not_idempotent() {
    let src = PixelBuffer::filled(2, 1, [100, 50, 20, 255]).unwrap();
    let once = sepia(src);
    let twice = sepia(once.clone());
    assert_ne!(once, twice);
}

#[test]
fn alpha_and_length_are_kept() {
    let src = PixelBuffer::from_raw(2, 1, vec![0, 0, 0, 0, 10, 20, 30, 200]).unwrap();
    let out = sepia(src);
    assert_eq!(out.as_raw().len(), 8);
    assert_eq!(out.pixel(0, 0), Some([0, 0, 0, 0]));
    assert_eq!(out.pixel(1, 0).map(|px| px[3]), Some(200));
}

#[test]
fn slice_form_rejects_bad_shape() {
    let mut data = vec![0u8; 7];
    assert!(sepia_rgba8_in_place(&mut data, 2, 1).is_err());
    assert_eq!(data, vec![0u8; 7]);
}
