use crate::{
    foundation::{
        core::{BezPath, Canvas, Rgba8},
        error::{ShadowLayoutError, ShadowLayoutResult},
    },
    render::{
        canvas::{PaintMode, ShadowCanvas, StrokeCap, StrokeJoin, StrokeStyle},
        composite::{
            clear_covered_in_place, over, over_in_place, premultiply_in_place,
        },
        frame::FrameRGBA,
    },
    silhouette::snapshot::ContentSnapshot,
};

/// CPU canvas backed by `vello_cpu`.
///
/// Holds two premultiplied RGBA8 layers of the same size: the shadow layer the compositor
/// strokes into, and the content layer supplied by the host. Content is always painted on
/// top of the shadow. Snapshots see the same stacking, so rings left on the shadow layer
/// would show up in the silhouette scan.
pub struct CpuCanvas {
    size: Canvas,
    width: u16,
    height: u16,
    shadow: Vec<u8>,
    content: Vec<u8>,
    snapshot: Vec<u8>,
}

impl CpuCanvas {
    pub fn new(size: Canvas) -> ShadowLayoutResult<Self> {
        let width: u16 = size
            .width
            .try_into()
            .map_err(|_| ShadowLayoutError::render("surface width exceeds u16"))?;
        let height: u16 = size
            .height
            .try_into()
            .map_err(|_| ShadowLayoutError::render("surface height exceeds u16"))?;
        let len = size.pixel_count() * 4;
        Ok(Self {
            size,
            width,
            height,
            shadow: vec![0; len],
            content: vec![0; len],
            snapshot: Vec::new(),
        })
    }

    /// Current shadow layer, premultiplied RGBA8.
    pub fn shadow_layer(&self) -> &[u8] {
        &self.shadow
    }

    /// Current content layer, premultiplied RGBA8.
    pub fn content_layer(&self) -> &[u8] {
        &self.content
    }

    pub fn clear_shadow(&mut self) {
        self.shadow.fill(0);
    }

    pub fn clear_content(&mut self) {
        self.content.fill(0);
    }

    pub fn set_content_premul_rgba8(&mut self, rgba8_premul: Vec<u8>) -> ShadowLayoutResult<()> {
        if rgba8_premul.len() != self.content.len() {
            return Err(ShadowLayoutError::validation(format!(
                "content expects {} bytes for {}x{} rgba8, got {}",
                self.content.len(),
                self.size.width,
                self.size.height,
                rgba8_premul.len()
            )));
        }
        self.content = rgba8_premul;
        Ok(())
    }

    /// Replace the content with a straight-alpha image of the same size.
    pub fn set_content_image(&mut self, img: &image::RgbaImage) -> ShadowLayoutResult<()> {
        if img.width() != self.size.width || img.height() != self.size.height {
            return Err(ShadowLayoutError::validation(format!(
                "content image is {}x{}, canvas is {}x{}",
                img.width(),
                img.height(),
                self.size.width,
                self.size.height
            )));
        }
        let mut data = img.as_raw().clone();
        premultiply_in_place(&mut data);
        self.content = data;
        Ok(())
    }

    /// Fill `path` onto the content layer.
    pub fn fill_content_path(&mut self, path: &BezPath, color: Rgba8) -> ShadowLayoutResult<()> {
        if self.size.is_empty() {
            return Ok(());
        }
        let mut ctx = vello_cpu::RenderContext::new(self.width, self.height);
        ctx.set_paint(cpu_color(color));
        ctx.fill_path(&bezpath_to_cpu(path));
        let layer = self.render(&mut ctx);
        over_in_place(&mut self.content, layer.data_as_u8_slice())
    }

    /// Content over shadow over an optional background, premultiplied.
    pub fn compose(&self, background: Option<Rgba8>) -> FrameRGBA {
        let bg = background
            .map(|c| c.to_premul().to_array())
            .unwrap_or([0, 0, 0, 0]);
        let mut data = Vec::with_capacity(self.shadow.len());
        for (s, c) in self.shadow.chunks_exact(4).zip(self.content.chunks_exact(4)) {
            let px = over(bg, [s[0], s[1], s[2], s[3]]);
            let px = over(px, [c[0], c[1], c[2], c[3]]);
            data.extend_from_slice(&px);
        }
        FrameRGBA {
            width: self.size.width,
            height: self.size.height,
            data,
            premultiplied: true,
        }
    }

    fn render(&self, ctx: &mut vello_cpu::RenderContext) -> vello_cpu::Pixmap {
        ctx.flush();
        let mut pixmap = vello_cpu::Pixmap::new(self.width, self.height);
        ctx.render_to_pixmap(&mut pixmap);
        pixmap
    }
}

impl ShadowCanvas for CpuCanvas {
    fn size(&self) -> Canvas {
        self.size
    }

    fn snapshot_content(&mut self) -> ShadowLayoutResult<ContentSnapshot<'_>> {
        self.snapshot.clear();
        self.snapshot.extend_from_slice(&self.shadow);
        over_in_place(&mut self.snapshot, &self.content)?;
        ContentSnapshot::new(&self.snapshot, self.size.width, self.size.height)
    }

    fn stroke_path(
        &mut self,
        path: &BezPath,
        style: &StrokeStyle,
        color: Rgba8,
        mode: PaintMode,
    ) -> ShadowLayoutResult<()> {
        if self.size.is_empty() {
            return Ok(());
        }
        // Clearing needs the stroke's footprint, not its colour.
        let paint = match mode {
            PaintMode::Over if color.is_transparent() => return Ok(()),
            PaintMode::Over => color,
            PaintMode::Clear => Rgba8::new(255, 255, 255, 255),
        };

        let mut ctx = vello_cpu::RenderContext::new(self.width, self.height);
        ctx.set_stroke(stroke_to_cpu(style));
        ctx.set_paint(cpu_color(paint));
        ctx.stroke_path(&bezpath_to_cpu(path));
        let mut layer = self.render(&mut ctx);
        let layer_bytes = layer.data_as_u8_slice_mut();
        if !style.anti_alias {
            harden_coverage(layer_bytes, paint);
        }

        match mode {
            PaintMode::Over => over_in_place(&mut self.shadow, layer_bytes),
            PaintMode::Clear => clear_covered_in_place(&mut self.shadow, layer_bytes).map(|_| ()),
        }
    }
}

/// Snap partial coverage to all-or-nothing at the 50% threshold.
fn harden_coverage(layer: &mut [u8], paint: Rgba8) {
    let full = paint.to_premul().to_array();
    let threshold = u16::from(paint.a).div_ceil(2);
    for px in layer.chunks_exact_mut(4) {
        if u16::from(px[3]) >= threshold && px[3] != 0 {
            px.copy_from_slice(&full);
        } else {
            px.fill(0);
        }
    }
}

fn cpu_color(c: Rgba8) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a)
}

fn stroke_to_cpu(style: &StrokeStyle) -> vello_cpu::kurbo::Stroke {
    use vello_cpu::kurbo::{Cap, Join, Stroke};

    let join = match style.join {
        StrokeJoin::Miter => Join::Miter,
        StrokeJoin::Round => Join::Round,
        StrokeJoin::Bevel => Join::Bevel,
    };
    let cap = match style.cap {
        StrokeCap::Butt => Cap::Butt,
        StrokeCap::Round => Cap::Round,
        StrokeCap::Square => Cap::Square,
    };
    Stroke::new(style.width).with_join(join).with_caps(cap)
}

fn point_to_cpu(p: kurbo::Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3));
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
