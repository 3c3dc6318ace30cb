use crate::{
    foundation::{
        core::{BezPath, Canvas},
        error::ShadowLayoutResult,
    },
    render::canvas::{PaintMode, ShadowCanvas, StrokeStyle},
    shadow::{
        config::ShadowConfig,
        ring::{ShadowRing, erase_rings, shadow_rings},
    },
    silhouette::extract::{SilhouetteOutline, extract_outline},
};

/// Why a redraw drew nothing at all.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub enum SkipReason {
    /// The surface has zero width or height.
    EmptySurface,
}

/// What one redraw did to the shadow layer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct RedrawReport {
    pub erased_rings: u32,
    pub drawn_rings: u32,
    pub outline_points: usize,
    pub skipped: Option<SkipReason>,
}

impl RedrawReport {
    fn skipped(reason: SkipReason) -> Self {
        Self {
            skipped: Some(reason),
            ..Self::default()
        }
    }
}

/// Outline and parameters of the rings currently on the shadow layer.
#[derive(Clone, Debug, PartialEq)]
struct DrawnShadow {
    outline: SilhouetteOutline,
    config: ShadowConfig,
    view: Canvas,
}

/// Keeps a surface's shadow in sync with its content across redraws.
///
/// Holds the single previous-frame slot needed to erase last frame's rings before the content
/// is snapshotted again. One compositor per surface; redraws are sequential (`&mut self`).
#[derive(Debug, Default)]
pub struct ShadowCompositor {
    drawn: Option<DrawnShadow>,
}

impl ShadowCompositor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Outline whose rings are currently on the shadow layer, if any.
    pub fn previous_outline(&self) -> Option<&SilhouetteOutline> {
        self.drawn.as_ref().map(|d| &d.outline)
    }

    /// Forget the previous frame, e.g. after the canvas was cleared or resized.
    pub fn reset(&mut self) {
        self.drawn = None;
    }

    /// Erase the previous rings, re-extract the silhouette and draw the new rings.
    ///
    /// Zero-sized surfaces skip the whole pass and keep the previous slot untouched.
    #[tracing::instrument(skip_all, fields(blur_steps = config.blur_steps))]
    pub fn redraw<C: ShadowCanvas + ?Sized>(
        &mut self,
        canvas: &mut C,
        config: &ShadowConfig,
    ) -> ShadowLayoutResult<RedrawReport> {
        let view = canvas.size();
        if view.is_empty() {
            tracing::debug!(
                width = view.width,
                height = view.height,
                "surface not laid out, skipping shadow pass"
            );
            return Ok(RedrawReport::skipped(SkipReason::EmptySurface));
        }

        // Must precede the snapshot, or stale rings leak into the silhouette.
        let erased_rings = match self.drawn.take() {
            Some(prev) => erase(canvas, &prev.outline, &prev.config, prev.view)?,
            None => 0,
        };

        let outline = {
            let snapshot = canvas.snapshot_content()?;
            extract_outline(&snapshot)
        };

        let drawn_rings = draw(canvas, &outline, config, view)?;
        let outline_points = outline.len();
        if !outline.is_empty() {
            self.drawn = Some(DrawnShadow {
                outline,
                config: *config,
                view,
            });
        }

        tracing::debug!(erased_rings, drawn_rings, outline_points, "shadow redraw");
        Ok(RedrawReport {
            erased_rings,
            drawn_rings,
            outline_points,
            skipped: None,
        })
    }
}

/// Clear the rings `draw` would paint for the same outline and parameters.
///
/// Returns the number of stroke calls issued.
pub fn erase<C: ShadowCanvas + ?Sized>(
    canvas: &mut C,
    outline: &SilhouetteOutline,
    config: &ShadowConfig,
    view: Canvas,
) -> ShadowLayoutResult<u32> {
    stroke_rings(canvas, outline, erase_rings(view, config), PaintMode::Clear)
}

/// Paint the shadow rings of `outline`, innermost and most opaque first.
///
/// Returns the number of stroke calls issued.
pub fn draw<C: ShadowCanvas + ?Sized>(
    canvas: &mut C,
    outline: &SilhouetteOutline,
    config: &ShadowConfig,
    view: Canvas,
) -> ShadowLayoutResult<u32> {
    stroke_rings(canvas, outline, shadow_rings(view, config), PaintMode::Over)
}

fn stroke_rings<C: ShadowCanvas + ?Sized>(
    canvas: &mut C,
    outline: &SilhouetteOutline,
    rings: impl Iterator<Item = ShadowRing>,
    mode: PaintMode,
) -> ShadowLayoutResult<u32> {
    if outline.is_empty() {
        return Ok(0);
    }
    let base = outline.to_bezpath();
    let style = StrokeStyle::shadow_ring();
    let mut n = 0u32;
    for ring in rings {
        let path = ring_path(&base, &ring);
        canvas.stroke_path(&path, &style, ring.stroke_color, mode)?;
        n += 1;
    }
    Ok(n)
}

fn ring_path(base: &BezPath, ring: &ShadowRing) -> BezPath {
    let mut path = base.clone();
    path.apply_affine(ring.transform);
    path
}

#[cfg(test)]
#[path = "../../tests/unit/shadow/compositor.rs"]
mod tests;
