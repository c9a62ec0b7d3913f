use super::*;

#[test]
fn over_with_transparent_src_keeps_dst() {
    assert_eq!(over([10, 20, 30, 40], [0, 0, 0, 0]), [10, 20, 30, 40]);
}

#[test]
fn over_with_opaque_src_replaces_dst() {
    assert_eq!(over([10, 20, 30, 255], [255, 0, 0, 255]), [255, 0, 0, 255]);
}

#[test]
fn over_onto_transparent_is_src() {
    assert_eq!(over([0, 0, 0, 0], [128, 0, 0, 128]), [128, 0, 0, 128]);
}

#[test]
fn over_in_place_rejects_mismatched_buffers() {
    let mut dst = vec![0u8; 8];
    assert!(over_in_place(&mut dst, &[0u8; 4]).is_err());
    assert!(over_in_place(&mut dst, &[255u8; 8]).is_ok());
    assert_eq!(dst, vec![255u8; 8]);
}

#[test]
fn unpremultiply_restores_straight_color() {
    let mut px = vec![128, 0, 0, 128, 0, 0, 0, 0, 9, 9, 9, 255];
    unpremultiply_in_place(&mut px);
    assert_eq!(px, vec![255, 0, 0, 128, 0, 0, 0, 0, 9, 9, 9, 255]);
}
