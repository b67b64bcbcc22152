pub(crate) mod ease;
pub(crate) mod looping;
pub(crate) mod tween;
