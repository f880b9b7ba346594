pub(crate) mod pipeline;
