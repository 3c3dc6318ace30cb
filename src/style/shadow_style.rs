use std::{fs::File, io::BufReader, path::Path};

use anyhow::Context as _;

use crate::{
    foundation::{
        core::Rgba8,
        error::{ShadowLayoutError, ShadowLayoutResult},
    },
    shadow::config::ShadowConfig,
    style::color::ColorDef,
};

/// Default shadow colour: black at roughly 40% opacity.
pub const DEFAULT_SHADOW_COLOR: Rgba8 = Rgba8::new(0, 0, 0, 0x66);
/// Default blur radius in pixels (one ring per pixel).
pub const DEFAULT_SHADOW_BLUR: f64 = 8.0;

/// Shadow attributes as authored in a style file.
///
/// ```json
/// { "color": "#00000066", "blur": 12, "dx": 0, "dy": 4 }
/// ```
///
/// Every field is optional. [`ShadowStyle::resolve`] turns this into the [`ShadowConfig`]
/// the compositor consumes.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShadowStyle {
    pub color: ColorDef,
    /// Blur radius in pixels; truncated to a whole number of rings.
    pub blur: f64,
    pub dx: f64,
    pub dy: f64,
}

impl Default for ShadowStyle {
    fn default() -> Self {
        Self {
            color: ColorDef::from_rgba8(DEFAULT_SHADOW_COLOR),
            blur: DEFAULT_SHADOW_BLUR,
            dx: 0.0,
            dy: 0.0,
        }
    }
}

impl ShadowStyle {
    pub fn from_json_str(s: &str) -> ShadowLayoutResult<Self> {
        serde_json::from_str(s).map_err(|e| ShadowLayoutError::serde(e.to_string()))
    }

    pub fn from_json_file(path: &Path) -> ShadowLayoutResult<Self> {
        let f = File::open(path)
            .with_context(|| format!("open shadow style '{}'", path.display()))?;
        serde_json::from_reader(BufReader::new(f))
            .map_err(|e| ShadowLayoutError::serde(format!("{}: {e}", path.display())))
    }

    pub fn validate(&self) -> ShadowLayoutResult<()> {
        if !self.color.is_finite() {
            return Err(ShadowLayoutError::validation(
                "shadow color channels must be finite",
            ));
        }
        if !self.blur.is_finite() || self.blur < 0.0 {
            return Err(ShadowLayoutError::validation(
                "shadow blur must be finite and >= 0",
            ));
        }
        if self.blur > f64::from(u32::MAX) {
            return Err(ShadowLayoutError::validation("shadow blur is too large"));
        }
        if !self.dx.is_finite() || !self.dy.is_finite() {
            return Err(ShadowLayoutError::validation(
                "shadow offsets must be finite",
            ));
        }
        Ok(())
    }

    pub fn resolve(&self) -> ShadowLayoutResult<ShadowConfig> {
        self.validate()?;
        Ok(ShadowConfig::new(
            self.color.to_rgba8(),
            self.blur.trunc() as u32,
            self.dx,
            self.dy,
        ))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/style/shadow_style.rs"]
mod tests;
