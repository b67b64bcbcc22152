pub(crate) mod config;
pub(crate) mod driver;
pub(crate) mod oscillator;
pub(crate) mod rate;
pub(crate) mod session;
pub(crate) mod track;
