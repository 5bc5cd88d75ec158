//! Source providers that turn a directory into compilation units.

use crate::core::CompilationUnit;
use crate::errors::Result;
use std::path::Path;

pub mod java;

pub use java::{JavaAnalyzer, JavaAstProvider};

pub trait AstProvider {
    /// One entry per candidate source file under `root`, in walk order.
    /// Files that fail to read or parse come back as `Err`.
    fn load_directory(&self, root: &Path) -> Vec<Result<CompilationUnit>>;
}

/// Loads `root` and keeps only the units that parsed.
pub fn load_units(provider: &dyn AstProvider, root: &Path) -> Vec<CompilationUnit> {
    let units: Vec<CompilationUnit> = provider
        .load_directory(root)
        .into_iter()
        .filter_map(|result| match result {
            Ok(unit) => Some(unit),
            Err(e) => {
                log::debug!("Excluding file from load: {}", e);
                None
            }
        })
        .collect();

    log::debug!("Loaded {} compilation units from {}", units.len(), root.display());
    units
}
