use std::fs;
use std::path::{Path, PathBuf};

use super::core::ClasslensConfig;
use crate::errors::{Error, Result};

pub const CONFIG_FILE_NAME: &str = ".classlens.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Parses a `.classlens.toml` body and checks its ignore globs.
pub fn parse_and_validate_config(contents: &str) -> Result<ClasslensConfig> {
    let config = toml::from_str::<ClasslensConfig>(contents)
        .map_err(|e| Error::configuration(format!("Failed to parse {CONFIG_FILE_NAME}: {e}")))?;

    for pattern in config.ignore_patterns() {
        glob::Pattern::new(&pattern).map_err(|e| {
            Error::configuration(format!("Invalid ignore pattern `{pattern}`: {e}"))
        })?;
    }

    Ok(config)
}

/// Nearest `.classlens.toml` at or above `start`.
pub fn find_config_file(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .take(MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find(|path| path.is_file())
}

fn read_config(path: &Path) -> Result<ClasslensConfig> {
    let contents = fs::read_to_string(path)
        .map_err(|e| Error::file_system("Failed to read config file", path, e))?;
    parse_and_validate_config(&contents)
}

/// Loads the nearest config file. The search stops at the first file found, so
/// a broken file yields defaults rather than an ancestor's settings.
pub fn load_config_from(start: &Path) -> ClasslensConfig {
    let Some(path) = find_config_file(start) else {
        log::debug!(
            "No {} within {} levels of {}. Using defaults.",
            CONFIG_FILE_NAME,
            MAX_TRAVERSAL_DEPTH,
            start.display()
        );
        return ClasslensConfig::default();
    };

    match read_config(&path) {
        Ok(config) => {
            log::debug!("Loaded config from {}", path.display());
            config
        }
        Err(e) => {
            log::warn!("Ignoring {}: {}. Using defaults.", path.display(), e);
            ClasslensConfig::default()
        }
    }
}

pub fn load_config() -> ClasslensConfig {
    match std::env::current_dir() {
        Ok(dir) => load_config_from(&dir),
        Err(e) => {
            log::warn!("Cannot determine current directory: {e}. Using defaults.");
            ClasslensConfig::default()
        }
    }
}
