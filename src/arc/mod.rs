//! Character-level arc placement: each glyph is rotated onto a circle and drawn with its own
//! style stack, then the whole word receives one world-space shading pass.

pub(crate) mod engine;
pub(crate) mod layout;
