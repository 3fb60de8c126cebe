//! Configuration file parsing for coinview
//!
//! Settings live in `<config_dir>/coinview/config.toml` unless a path is
//! given on the command line.

pub mod settings;
pub mod types;

pub use settings::{
    default_config_path, init_config_file, load_or_init_settings, load_settings, parse_settings,
};
pub use types::*;
