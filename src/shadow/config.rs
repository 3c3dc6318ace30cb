use crate::foundation::core::{Rgba8, Vec2};

/// Resolved shadow parameters for one draw pass.
///
/// Produced by the styling layer (see [`crate::ShadowStyle`]); the compositor performs no
/// parsing or validation beyond treating `blur_steps == 0` as "no shadow".
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ShadowConfig {
    /// Straight-alpha shadow colour; its alpha is the opacity of the innermost ring.
    pub color: Rgba8,
    /// Number of rings drawn per frame.
    pub blur_steps: u32,
    pub offset_x: f64,
    pub offset_y: f64,
}

impl ShadowConfig {
    pub fn new(color: Rgba8, blur_steps: u32, offset_x: f64, offset_y: f64) -> Self {
        Self {
            color,
            blur_steps,
            offset_x,
            offset_y,
        }
    }

    /// A configuration that never draws anything.
    pub fn disabled() -> Self {
        Self::new(Rgba8::TRANSPARENT, 0, 0.0, 0.0)
    }

    pub fn is_enabled(&self) -> bool {
        self.blur_steps > 0
    }

    pub fn offset(&self) -> Vec2 {
        Vec2::new(self.offset_x, self.offset_y)
    }
}

impl Default for ShadowConfig {
    fn default() -> Self {
        Self::disabled()
    }
}
