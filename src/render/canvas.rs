use crate::{
    foundation::{
        core::{BezPath, Canvas, Rgba8},
        error::ShadowLayoutResult,
    },
    silhouette::snapshot::ContentSnapshot,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum StrokeJoin {
    Miter,
    Round,
    Bevel,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum StrokeCap {
    Butt,
    Round,
    Square,
}

/// How a stroke combines with the pixels already on the shadow layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum PaintMode {
    /// Source-over blending of the stroke colour.
    Over,
    /// Destination clearing: every pixel touched by the stroke becomes fully transparent.
    /// The stroke colour is ignored.
    Clear,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StrokeStyle {
    pub width: f64,
    pub join: StrokeJoin,
    pub cap: StrokeCap,
    pub anti_alias: bool,
}

impl StrokeStyle {
    /// 1px anti-aliased stroke with round joins and caps, used for every shadow ring.
    pub fn shadow_ring() -> Self {
        Self {
            width: 1.0,
            join: StrokeJoin::Round,
            cap: StrokeCap::Round,
            anti_alias: true,
        }
    }
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self::shadow_ring()
    }
}

/// The drawing backend consumed by the shadow compositor.
///
/// A canvas owns a persistent shadow layer (which strokes are painted into and erased from)
/// and can produce a snapshot of the current composited content for silhouette extraction.
/// All calls are synchronous and only affect this canvas.
pub trait ShadowCanvas {
    /// Laid-out size of the surface; zero on either side means "not laid out yet".
    fn size(&self) -> Canvas;

    /// Rasterized view of what the surface currently shows. Borrowed until dropped.
    fn snapshot_content(&mut self) -> ShadowLayoutResult<ContentSnapshot<'_>>;

    /// Stroke `path` (already in surface coordinates) onto the shadow layer.
    fn stroke_path(
        &mut self,
        path: &BezPath,
        style: &StrokeStyle,
        color: Rgba8,
        mode: PaintMode,
    ) -> ShadowLayoutResult<()>;
}
