pub mod params_table;

pub use params_table::{PRESET_PARAMS, preset};
