pub(crate) mod blend;
pub(crate) mod blur;
pub(crate) mod bounds;
pub(crate) mod buffer;
pub(crate) mod mask;
pub(crate) mod paint;
pub(crate) mod supersample;
