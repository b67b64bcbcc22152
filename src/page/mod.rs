pub(crate) mod counter;
pub(crate) mod nav;
pub(crate) mod pager;
pub(crate) mod reveal;
