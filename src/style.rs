pub(crate) mod color;
pub(crate) mod shadow_style;
