//! shadowlayout draws a soft drop shadow that follows the silhouette of arbitrarily shaped
//! content rather than its bounding box.
//!
//! # Pipeline overview
//!
//! Every redraw of a surface runs, in order:
//!
//! 1. **Erase**: the rings drawn last frame are cleared, using last frame's outline.
//! 2. **Snapshot**: the current content is captured as an RGBA8 buffer ([`ContentSnapshot`]).
//! 3. **Extract**: each row is scanned from both sides for the first non-transparent pixel and
//!    the two edges are stitched into a closed polygon ([`SilhouetteOutline`]).
//! 4. **Draw**: `blur_steps` scaled, shifted and increasingly transparent 1px strokes of the
//!    outline are painted onto the shadow layer ([`ShadowRing`]).
//!
//! [`ShadowCompositor`] runs this sequence against any [`ShadowCanvas`]; [`CpuCanvas`] is the
//! bundled `vello_cpu` implementation and [`ShadowLayout`] wraps both for hosts.
//!
//! Degenerate frames (zero-size surface, fully transparent content, `blur_steps == 0`) are not
//! errors; they draw nothing.
#![forbid(unsafe_code)]

mod foundation;
mod layout;
mod render;
mod shadow;
mod silhouette;
mod style;

pub use foundation::core::{Affine, BezPath, Canvas, Point, Rgba8, Rgba8Premul, Vec2};
pub use foundation::error::{ShadowLayoutError, ShadowLayoutResult};
pub use layout::host::ShadowLayout;
pub use render::canvas::{PaintMode, ShadowCanvas, StrokeCap, StrokeJoin, StrokeStyle};
pub use render::composite::{over, over_in_place, premultiply_in_place, unpremultiply_in_place};
pub use render::cpu::CpuCanvas;
pub use render::frame::FrameRGBA;
pub use render::recording::{RecordingCanvas, StrokeCall};
pub use shadow::compositor::{RedrawReport, ShadowCompositor, SkipReason, draw, erase};
pub use shadow::config::ShadowConfig;
pub use shadow::ring::{RingTransform, ShadowRing, erase_rings, ring_alpha, shadow_rings};
pub use silhouette::extract::{
    EdgeScan, OutlinePoint, SilhouetteOutline, extract_outline, scan_edges,
};
pub use silhouette::snapshot::ContentSnapshot;
pub use style::color::{ColorDef, parse_hex};
pub use style::shadow_style::{DEFAULT_SHADOW_BLUR, DEFAULT_SHADOW_COLOR, ShadowStyle};
