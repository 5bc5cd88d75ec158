use serde::{Deserialize, Serialize};

/// Root configuration structure for classlens
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ClasslensConfig {
    /// Directory traversal configuration
    #[serde(default)]
    pub walk: Option<WalkConfig>,

    /// Ignore patterns
    #[serde(default)]
    pub ignore: Option<IgnoreConfig>,
}

impl ClasslensConfig {
    pub fn walk(&self) -> WalkConfig {
        self.walk.clone().unwrap_or_default()
    }

    pub fn ignore_patterns(&self) -> Vec<String> {
        self.ignore
            .as_ref()
            .map(|ignore| ignore.patterns.clone())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WalkConfig {
    /// Include hidden files and directories
    #[serde(default = "default_true")]
    pub hidden: bool,

    /// Honor .gitignore files
    #[serde(default = "default_true")]
    pub git_ignore: bool,
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self {
            hidden: true,
            git_ignore: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct IgnoreConfig {
    pub patterns: Vec<String>,
}

fn default_true() -> bool {
    true
}
