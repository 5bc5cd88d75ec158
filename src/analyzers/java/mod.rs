mod declarations;
mod modifiers;

pub use modifiers::{MemberContext, Modifiers};

use crate::analyzers::AstProvider;
use crate::config::ClasslensConfig;
use crate::core::CompilationUnit;
use crate::errors::{Error, Result};
use crate::io::{self, FileWalker};
use std::path::Path;
use tree_sitter::{Node, Parser, Tree};

/// Parses Java source text into [`CompilationUnit`]s.
pub struct JavaAnalyzer {
    parser: Parser,
}

impl JavaAnalyzer {
    pub fn new() -> Result<Self> {
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_java::LANGUAGE.into())
            .map_err(|e| Error::ParserSetup(format!("Failed to set Java language: {e}")))?;
        Ok(Self { parser })
    }

    fn parse_tree(&mut self, content: &str, path: &Path) -> Result<Tree> {
        self.parser
            .parse(content, None)
            .ok_or_else(|| Error::parse(path, "parser produced no tree"))
    }

    /// Parses one file's content. Source with syntax errors is rejected as a whole.
    pub fn parse_unit(&mut self, content: &str, path: &Path) -> Result<CompilationUnit> {
        let tree = self.parse_tree(content, path)?;
        let root = tree.root_node();

        if root.has_error() {
            return Err(Error::parse(path, syntax_error_message(root, content)));
        }

        let package = declarations::extract_package(root, content);
        let types = declarations::extract_types(root, content, package.as_deref());
        Ok(CompilationUnit::new(path, package, types))
    }

    pub fn parse_file(&mut self, path: &Path) -> Result<CompilationUnit> {
        let content = io::read_file(path)?;
        self.parse_unit(&content, path)
    }
}

/// Deepest ERROR or MISSING node along the first erroneous path.
fn innermost_error(node: Node) -> Option<Node> {
    let mut cursor = node.walk();
    let children: Vec<Node> = node.children(&mut cursor).collect();
    children
        .into_iter()
        .filter(|child| child.has_error() || child.is_missing())
        .find_map(innermost_error)
        .or_else(|| (node.is_error() || node.is_missing()).then_some(node))
}

fn syntax_error_message(root: Node, content: &str) -> String {
    let Some(node) = innermost_error(root) else {
        return "syntax error".to_string();
    };

    // an ERROR run reaching the end of input is an unclosed construct; its start says nothing
    if node.is_error() && node.end_byte() >= content.trim_end().len() {
        let pos = node.end_position();
        return format!(
            "unexpected end of input at line {}, column {}",
            pos.row + 1,
            pos.column + 1
        );
    }

    let pos = node.start_position();
    format!("syntax error at line {}, column {}", pos.row + 1, pos.column + 1)
}

/// Loads every `.java` file under a directory with tree-sitter.
pub struct JavaAstProvider {
    config: ClasslensConfig,
}

impl JavaAstProvider {
    pub fn new(config: ClasslensConfig) -> Self {
        Self { config }
    }

    fn walker(&self, root: &Path) -> Result<FileWalker> {
        Ok(FileWalker::new(root.to_path_buf())
            .with_walk_config(&self.config.walk())
            .with_ignore_patterns(&self.config.ignore_patterns())?)
    }
}

impl Default for JavaAstProvider {
    fn default() -> Self {
        Self::new(ClasslensConfig::default())
    }
}

impl AstProvider for JavaAstProvider {
    fn load_directory(&self, root: &Path) -> Vec<Result<CompilationUnit>> {
        let files = match self.walker(root).and_then(|walker| walker.walk()) {
            Ok(files) => files,
            Err(e) => {
                log::warn!("Cannot enumerate sources under {}: {}", root.display(), e);
                return Vec::new();
            }
        };

        let mut analyzer = match JavaAnalyzer::new() {
            Ok(analyzer) => analyzer,
            Err(e) => {
                log::error!("{}", e);
                return Vec::new();
            }
        };

        files
            .iter()
            .map(|path| analyzer.parse_file(path))
            .collect()
    }
}
