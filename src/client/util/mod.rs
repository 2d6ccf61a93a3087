pub mod debounce;
pub mod format;
pub mod path;
