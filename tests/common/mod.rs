// Test utility module for classlens integration tests
#![allow(dead_code)]

use classlens::analyzers::JavaAnalyzer;
use classlens::CompilationUnit;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Write `(relative path, source)` pairs into a fresh temporary project
pub fn write_project(files: &[(&str, &str)]) -> TempDir {
    let dir = TempDir::new().unwrap();
    for (rel, source) in files {
        let path = dir.path().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, source).unwrap();
    }
    dir
}

/// Parse in-memory sources, one compilation unit each
pub fn parse_units(sources: &[&str]) -> Vec<CompilationUnit> {
    let mut analyzer = JavaAnalyzer::new().unwrap();
    sources
        .iter()
        .enumerate()
        .map(|(i, source)| {
            analyzer
                .parse_unit(source, Path::new(&format!("Unit{i}.java")))
                .unwrap()
        })
        .collect()
}

pub fn render<T: ToString>(lines: &[T]) -> Vec<String> {
    lines.iter().map(ToString::to_string).collect()
}
