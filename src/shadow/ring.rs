//! Ring geometry: the per-step transform and stroke colour of each shadow ring.
//!
//! A soft shadow is approximated by `blur_steps` concentric strokes of the silhouette. Ring
//! `step` is the outline scaled so that it grows by roughly `step` pixels overall, recentred,
//! then shifted by the configured offset. Opacity falls off as `1 - sqrt(step / blur_steps)`.
//! Everything here is pure and independent of any drawing backend.

use crate::{
    foundation::core::{Affine, Canvas, Rgba8, Vec2},
    shadow::config::ShadowConfig,
};

/// Builds ring transforms for a fixed view size and offset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RingTransform {
    view_width: f64,
    view_height: f64,
    offset: Vec2,
    max_offset: f64,
}

impl RingTransform {
    /// `None` when the view has not been laid out (either side is zero).
    pub fn new(view: Canvas, offset: Vec2) -> Option<Self> {
        if view.is_empty() {
            return None;
        }
        Some(Self {
            view_width: f64::from(view.width),
            view_height: f64::from(view.height),
            offset,
            max_offset: 2.0 * offset.x.abs().max(offset.y.abs()),
        })
    }

    pub fn for_config(view: Canvas, config: &ShadowConfig) -> Option<Self> {
        Self::new(view, config.offset())
    }

    /// Twice the larger absolute offset component.
    pub fn max_offset(&self) -> f64 {
        self.max_offset
    }

    pub fn scale(&self, step: u32) -> Vec2 {
        let grow = f64::from(step) - self.max_offset;
        Vec2::new(
            (self.view_width + grow) / self.view_width,
            (self.view_height + grow) / self.view_height,
        )
    }

    /// Scale about the origin, recentre by half the growth, then apply the offset.
    pub fn affine(&self, step: u32) -> Affine {
        let grow = f64::from(step) - self.max_offset;
        let scale = self.scale(step);
        Affine::scale_non_uniform(scale.x, scale.y)
            .then_translate(Vec2::new(-grow / 2.0, -grow / 2.0))
            .then_translate(self.offset)
    }
}

/// Stroke alpha of ring `step` out of `steps`: `trunc(alpha * (1 - sqrt(step / steps)))`.
pub fn ring_alpha(alpha: u8, step: u32, steps: u32) -> u8 {
    if steps == 0 {
        return 0;
    }
    let t = f64::from(step.min(steps)) / f64::from(steps);
    let a = f64::from(alpha) * (1.0 - t.sqrt());
    a.clamp(0.0, 255.0) as u8
}

/// One derived ring; never stored past the draw call that uses it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShadowRing {
    pub step: u32,
    pub transform: Affine,
    pub stroke_color: Rgba8,
}

/// Rings for drawing `config` in a view of size `view`, innermost first.
///
/// Empty when the view is zero-sized or `blur_steps == 0`.
pub fn shadow_rings(view: Canvas, config: &ShadowConfig) -> impl Iterator<Item = ShadowRing> {
    let builder = RingTransform::for_config(view, config);
    let steps = if builder.is_some() {
        config.blur_steps
    } else {
        0
    };
    let color = config.color;
    (1..=steps).filter_map(move |step| {
        let t = builder?;
        Some(ShadowRing {
            step,
            transform: t.affine(step),
            stroke_color: color.with_alpha(ring_alpha(color.a, step, steps)),
        })
    })
}

/// Same geometry as [`shadow_rings`], with a fully transparent stroke colour.
pub fn erase_rings(view: Canvas, config: &ShadowConfig) -> impl Iterator<Item = ShadowRing> {
    shadow_rings(view, config).map(|ring| ShadowRing {
        stroke_color: Rgba8::TRANSPARENT,
        ..ring
    })
}

#[cfg(test)]
#[path = "../../tests/unit/shadow/ring.rs"]
mod tests;
