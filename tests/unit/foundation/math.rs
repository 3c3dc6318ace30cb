use super::*;

#[test]
fn mul_div255_variants_align() {
    for x in [0u16, 1, 127, 255] {
        for y in [0u16, 1, 127, 255] {
            assert_eq!(u16::from(mul_div255_u8(x, y)), mul_div255_u16(x, y));
        }
    }
}

#[test]
fn unpremul_inverts_premul_for_opaque_and_clears_transparent() {
    assert_eq!(unpremul_channel(200, 255), 200);
    assert_eq!(unpremul_channel(50, 0), 0);
    let premul = mul_div255_u8(200, 128);
    let back = unpremul_channel(premul, 128);
    assert!((i32::from(back) - 200).abs() <= 1);
}
