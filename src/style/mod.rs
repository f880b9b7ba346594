//! Vector glyph runs and the styled raster layers built from them.

pub(crate) mod glyph;
pub(crate) mod layers;
