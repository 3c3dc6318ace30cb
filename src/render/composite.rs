use crate::foundation::{
    error::{ShadowLayoutError, ShadowLayoutResult},
    math::{mul_div255_u8, unpremul_channel},
};

pub type PremulRgba8 = [u8; 4];

/// Source-over for premultiplied pixels.
pub fn over(dst: PremulRgba8, src: PremulRgba8) -> PremulRgba8 {
    if src[3] == 0 {
        return dst;
    }
    if src[3] == 255 {
        return src;
    }

    let inv = 255u16 - u16::from(src[3]);
    let mut out = [0u8; 4];
    for i in 0..4 {
        let dc = mul_div255_u8(u16::from(dst[i]), inv);
        out[i] = src[i].saturating_add(dc);
    }
    out
}

pub fn over_in_place(dst: &mut [u8], src: &[u8]) -> ShadowLayoutResult<()> {
    check_same_len(dst, src, "over_in_place")?;
    for (d, s) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
        let out = over([d[0], d[1], d[2], d[3]], [s[0], s[1], s[2], s[3]]);
        d.copy_from_slice(&out);
    }
    Ok(())
}

/// Clear every `dst` pixel whose counterpart in `coverage` has non-zero alpha.
///
/// Returns the number of pixels cleared.
pub fn clear_covered_in_place(dst: &mut [u8], coverage: &[u8]) -> ShadowLayoutResult<usize> {
    check_same_len(dst, coverage, "clear_covered_in_place")?;
    let mut cleared = 0usize;
    for (d, c) in dst.chunks_exact_mut(4).zip(coverage.chunks_exact(4)) {
        if c[3] != 0 {
            d.fill(0);
            cleared += 1;
        }
    }
    Ok(cleared)
}

/// Convert premultiplied RGBA8 to straight RGBA8 in place.
pub fn unpremultiply_in_place(data: &mut [u8]) {
    for px in data.chunks_exact_mut(4) {
        let a = px[3];
        for c in &mut px[..3] {
            *c = unpremul_channel(*c, a);
        }
    }
}

/// Convert straight RGBA8 to premultiplied RGBA8 in place.
pub fn premultiply_in_place(data: &mut [u8]) {
    for px in data.chunks_exact_mut(4) {
        let a = u16::from(px[3]);
        for c in &mut px[..3] {
            *c = mul_div255_u8(u16::from(*c), a);
        }
    }
}

fn check_same_len(a: &[u8], b: &[u8], what: &str) -> ShadowLayoutResult<()> {
    if a.len() != b.len() || !a.len().is_multiple_of(4) {
        return Err(ShadowLayoutError::render(format!(
            "{what} expects equal-length rgba8 buffers"
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/composite.rs"]
mod tests;
