use crate::config::WalkConfig;
use crate::errors::{Error, Result};
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

const JAVA_EXTENSION: &str = "java";

pub struct FileWalker {
    root: PathBuf,
    ignore_patterns: Vec<glob::Pattern>,
    hidden: bool,
    git_ignore: bool,
}

impl FileWalker {
    pub fn new(root: PathBuf) -> Self {
        let defaults = WalkConfig::default();
        Self {
            root,
            ignore_patterns: vec![],
            hidden: defaults.hidden,
            git_ignore: defaults.git_ignore,
        }
    }

    pub fn with_ignore_patterns(mut self, patterns: &[String]) -> Result<Self> {
        self.ignore_patterns = patterns
            .iter()
            .map(|p| glob::Pattern::new(p))
            .collect::<std::result::Result<_, _>>()?;
        Ok(self)
    }

    pub fn with_walk_config(mut self, config: &WalkConfig) -> Self {
        self.hidden = config.hidden;
        self.git_ignore = config.git_ignore;
        self
    }

    /// Candidate source files under the root, sorted by path.
    pub fn walk(&self) -> Result<Vec<PathBuf>> {
        if !self.root.is_dir() {
            return Err(Error::file_system(
                "Not a readable directory",
                &self.root,
                std::io::Error::new(std::io::ErrorKind::NotFound, "no such directory"),
            ));
        }

        let mut files = Vec::new();
        let walker = WalkBuilder::new(&self.root)
            .hidden(!self.hidden)
            .git_ignore(self.git_ignore)
            .require_git(false)
            .sort_by_file_path(|a, b| a.cmp(b))
            .build();

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    log::warn!("Skipping unreadable entry under {}: {}", self.root.display(), e);
                    continue;
                }
            };
            let path = entry.path();

            if path.is_file() && self.should_process(path) {
                files.push(path.to_path_buf());
            }
        }

        log::debug!(
            "Found {} candidate files under {}",
            files.len(),
            self.root.display()
        );
        Ok(files)
    }

    fn should_process(&self, path: &Path) -> bool {
        if path.extension().and_then(|ext| ext.to_str()) != Some(JAVA_EXTENSION) {
            return false;
        }

        let path_str = path.to_string_lossy();
        !self.ignore_patterns.iter().any(|p| p.matches(&path_str))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    fn touch(root: &Path, rel: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "class X {}").unwrap();
    }

    fn relative(root: &Path, files: Vec<PathBuf>) -> Vec<String> {
        files
            .into_iter()
            .map(|f| {
                f.strip_prefix(root)
                    .unwrap()
                    .to_string_lossy()
                    .replace('\\', "/")
            })
            .collect()
    }

    #[test]
    fn test_walk_finds_java_files_sorted() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "b/B.java");
        touch(dir.path(), "a/A.java");
        touch(dir.path(), "a/notes.txt");
        touch(dir.path(), "a/Script.kt");
        touch(dir.path(), "Makefile");

        let files = FileWalker::new(dir.path().to_path_buf()).walk().unwrap();
        assert_eq!(relative(dir.path(), files), vec!["a/A.java", "b/B.java"]);
    }

    #[test]
    fn test_walk_applies_ignore_patterns() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "src/A.java");
        touch(dir.path(), "build/Gen.java");

        let files = FileWalker::new(dir.path().to_path_buf())
            .with_ignore_patterns(&["**/build/**".to_string()])
            .unwrap()
            .walk()
            .unwrap();
        assert_eq!(relative(dir.path(), files), vec!["src/A.java"]);
    }

    #[test]
    fn test_walk_hidden_toggle() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), ".hidden/H.java");
        touch(dir.path(), "V.java");

        let with_hidden = FileWalker::new(dir.path().to_path_buf()).walk().unwrap();
        assert_eq!(with_hidden.len(), 2);

        let without_hidden = FileWalker::new(dir.path().to_path_buf())
            .with_walk_config(&WalkConfig {
                hidden: false,
                git_ignore: true,
            })
            .walk()
            .unwrap();
        assert_eq!(relative(dir.path(), without_hidden), vec!["V.java"]);
    }

    #[test]
    fn test_walk_missing_root_is_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope");
        assert!(FileWalker::new(missing).walk().is_err());
    }
}
