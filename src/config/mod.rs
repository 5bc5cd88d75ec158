mod core;
mod loader;

pub use self::core::{ClasslensConfig, IgnoreConfig, WalkConfig};
pub use loader::{
    find_config_file, load_config, load_config_from, parse_and_validate_config, CONFIG_FILE_NAME,
};
