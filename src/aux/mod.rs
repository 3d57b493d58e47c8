pub(crate) mod he;
pub mod global_settings;
pub mod ndarray;
pub mod pbar;
