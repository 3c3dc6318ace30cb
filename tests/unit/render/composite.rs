use super::*;

#[test]
fn over_src_alpha_0_is_noop() {
    let dst = [10, 20, 30, 40];
    assert_eq!(over(dst, [0, 0, 0, 0]), dst);
}

#[test]
fn over_src_opaque_replaces_dst() {
    let dst = [0, 0, 0, 255];
    let src = [255, 0, 0, 255];
    assert_eq!(over(dst, src), src);
}

#[test]
fn over_dst_transparent_returns_src() {
    let src = [100, 110, 120, 200];
    assert_eq!(over([0, 0, 0, 0], src), src);
}

#[test]
fn over_half_on_opaque_accumulates_alpha() {
    let out = over([0, 0, 255, 255], [128, 0, 0, 128]);
    assert_eq!(out[3], 255);
    assert_eq!(out[0], 128);
    assert_eq!(out[2], 127);
}

#[test]
fn clear_covered_only_touches_covered_pixels() {
    let mut dst = vec![9u8; 12];
    let coverage = [0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 255];
    let n = clear_covered_in_place(&mut dst, &coverage).unwrap();
    assert_eq!(n, 2);
    assert_eq!(dst, vec![9, 9, 9, 9, 0, 0, 0, 0, 0, 0, 0, 0]);
}

#[test]
fn in_place_ops_reject_mismatched_buffers() {
    let mut dst = vec![0u8; 8];
    assert!(over_in_place(&mut dst, &[0u8; 4]).is_err());
    assert!(clear_covered_in_place(&mut dst, &[0u8; 7]).is_err());
}

#[test]
fn premultiply_then_unpremultiply_keeps_opaque_and_zeroes_transparent() {
    let mut data = vec![200, 100, 50, 255, 200, 100, 50, 0];
    premultiply_in_place(&mut data);
    assert_eq!(data, vec![200, 100, 50, 255, 0, 0, 0, 0]);
    unpremultiply_in_place(&mut data);
    assert_eq!(data, vec![200, 100, 50, 255, 0, 0, 0, 0]);
}
