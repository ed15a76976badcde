pub mod debounce;
pub mod logging;
pub mod timing;
