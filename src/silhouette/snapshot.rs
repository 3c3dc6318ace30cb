use crate::foundation::{
    core::Canvas,
    error::{ShadowLayoutError, ShadowLayoutResult},
};

/// Read-only view over a rasterized capture of the content area.
///
/// Pixels are tightly packed RGBA8, row-major. Only the alpha channel takes part in silhouette
/// extraction, so premultiplied and straight buffers behave identically. The snapshot borrows
/// its bytes for the duration of a scan and is never retained across frames.
#[derive(Clone, Copy, Debug)]
pub struct ContentSnapshot<'a> {
    width: u32,
    height: u32,
    data: &'a [u8],
}

impl<'a> ContentSnapshot<'a> {
    pub fn new(data: &'a [u8], width: u32, height: u32) -> ShadowLayoutResult<Self> {
        let expected_len = (width as usize)
            .checked_mul(height as usize)
            .and_then(|v| v.checked_mul(4))
            .ok_or_else(|| ShadowLayoutError::validation("snapshot buffer size overflow"))?;
        if data.len() != expected_len {
            return Err(ShadowLayoutError::validation(format!(
                "snapshot expects {expected_len} bytes for {width}x{height} rgba8, got {}",
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn from_image(img: &'a image::RgbaImage) -> Self {
        Self {
            width: img.width(),
            height: img.height(),
            data: img.as_raw().as_slice(),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn size(&self) -> Canvas {
        Canvas::new(self.width, self.height)
    }

    pub fn is_empty(&self) -> bool {
        self.size().is_empty()
    }

    /// Bytes of row `y`, or `None` past the last row.
    pub fn row(&self, y: u32) -> Option<&'a [u8]> {
        if y >= self.height {
            return None;
        }
        let stride = self.width as usize * 4;
        let start = y as usize * stride;
        self.data.get(start..start + stride)
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width {
            return None;
        }
        let row = self.row(y)?;
        let i = x as usize * 4;
        Some([row[i], row[i + 1], row[i + 2], row[i + 3]])
    }

    pub fn alpha(&self, x: u32, y: u32) -> Option<u8> {
        self.pixel(x, y).map(|px| px[3])
    }

    pub fn as_bytes(&self) -> &'a [u8] {
        self.data
    }
}

#[cfg(test)]
#[path = "../../tests/unit/silhouette/snapshot.rs"]
mod tests;
