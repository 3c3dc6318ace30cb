use crate::{
    foundation::{
        core::{BezPath, Canvas, Rgba8},
        error::ShadowLayoutResult,
    },
    render::{canvas::ShadowCanvas, cpu::CpuCanvas, frame::FrameRGBA},
    shadow::{
        compositor::{RedrawReport, ShadowCompositor},
        config::ShadowConfig,
    },
    silhouette::extract::SilhouetteOutline,
};

/// A container surface whose content casts a silhouette-following shadow.
///
/// Owns the CPU canvas, the compositor state and the resolved shadow configuration. The host
/// updates the content, calls [`ShadowLayout::redraw`] once per invalidation and reads the
/// result back with [`ShadowLayout::compose`].
pub struct ShadowLayout {
    config: ShadowConfig,
    canvas: CpuCanvas,
    compositor: ShadowCompositor,
}

impl ShadowLayout {
    pub fn new(size: Canvas, config: ShadowConfig) -> ShadowLayoutResult<Self> {
        Ok(Self {
            config,
            canvas: CpuCanvas::new(size)?,
            compositor: ShadowCompositor::new(),
        })
    }

    pub fn size(&self) -> Canvas {
        self.canvas.size()
    }

    pub fn config(&self) -> &ShadowConfig {
        &self.config
    }

    /// Takes effect on the next redraw. The rings already on screen are still erased with
    /// the parameters they were drawn with.
    pub fn set_config(&mut self, config: ShadowConfig) {
        self.config = config;
    }

    /// Re-layout to a new size. Drops both layers and the previous outline.
    pub fn resize(&mut self, size: Canvas) -> ShadowLayoutResult<()> {
        if size == self.canvas.size() {
            return Ok(());
        }
        tracing::debug!(width = size.width, height = size.height, "shadow layout resized");
        self.canvas = CpuCanvas::new(size)?;
        self.compositor.reset();
        Ok(())
    }

    pub fn canvas(&self) -> &CpuCanvas {
        &self.canvas
    }

    pub fn previous_outline(&self) -> Option<&SilhouetteOutline> {
        self.compositor.previous_outline()
    }

    pub fn set_content_image(&mut self, img: &image::RgbaImage) -> ShadowLayoutResult<()> {
        self.canvas.set_content_image(img)
    }

    pub fn set_content_premul_rgba8(&mut self, rgba8_premul: Vec<u8>) -> ShadowLayoutResult<()> {
        self.canvas.set_content_premul_rgba8(rgba8_premul)
    }

    pub fn clear_content(&mut self) {
        self.canvas.clear_content();
    }

    pub fn fill_content_path(&mut self, path: &BezPath, color: Rgba8) -> ShadowLayoutResult<()> {
        self.canvas.fill_content_path(path, color)
    }

    pub fn redraw(&mut self) -> ShadowLayoutResult<RedrawReport> {
        self.compositor.redraw(&mut self.canvas, &self.config)
    }

    pub fn compose(&self, background: Option<Rgba8>) -> FrameRGBA {
        self.canvas.compose(background)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/host.rs"]
mod tests;
