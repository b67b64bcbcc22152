pub(crate) mod form;
pub(crate) mod payload;
pub(crate) mod relay;
