pub(crate) mod reproject;
pub(crate) mod spec;
