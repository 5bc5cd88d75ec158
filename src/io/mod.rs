pub mod walker;

pub use walker::FileWalker;

use crate::errors::{Error, Result};
use std::fs;
use std::path::Path;

pub fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| Error::file_system("Failed to read file", path, e))
}
