use crate::errors::{Error, Result};
use crate::queries::QueryKind;
use clap::{CommandFactory, Parser, ValueEnum};
use std::path::PathBuf;

/// Normal completion, help display or interactive exit
pub const EXIT_SUCCESS: u8 = 0;

/// Invalid or missing batch arguments
pub const EXIT_CONFIG_ERROR: u8 = 1;

#[derive(Parser, Debug)]
#[command(name = "classlens")]
#[command(about = "Static-analysis queries over Java codebases", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Directory containing the sources to analyze (batch mode)
    #[arg(long, value_name = "DIRNAME")]
    pub dir: Option<PathBuf>,

    /// Query to run (batch mode): mc, mcp or st
    #[arg(long, value_name = "mc|mcp|st")]
    pub query: Option<String>,

    /// Threshold for count-based queries
    #[arg(long, value_name = "VALUE", default_value_t = 0)]
    pub threshold: usize,

    /// Start an interactive session; --dir and --query are ignored
    #[arg(long)]
    pub interactive: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Interactive,
    Batch(BatchArgs),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchArgs {
    pub dir: PathBuf,
    pub query: QueryKind,
    pub threshold: usize,
}

impl Cli {
    /// Resolves the run mode, reporting every missing or invalid batch argument at once.
    pub fn mode(self) -> Result<Mode> {
        if self.interactive {
            return Ok(Mode::Interactive);
        }

        let mut problems = Vec::new();
        match &self.dir {
            None => problems.push("--dir is required in batch mode".to_string()),
            Some(dir) if !dir.is_dir() => {
                problems.push(format!("--dir {} is not a directory", dir.display()))
            }
            Some(_) => {}
        }
        // checked here rather than by clap so --interactive can ignore it
        let query = match self.query.as_deref().map(parse_query) {
            None => {
                problems.push("--query is required in batch mode".to_string());
                None
            }
            Some(Err(problem)) => {
                problems.push(problem);
                None
            }
            Some(Ok(query)) => Some(query),
        };

        match (self.dir, query) {
            (Some(dir), Some(query)) if problems.is_empty() => Ok(Mode::Batch(BatchArgs {
                dir,
                query,
                threshold: self.threshold,
            })),
            _ => Err(Error::configuration(problems.join("; "))),
        }
    }
}

fn parse_query(name: &str) -> std::result::Result<QueryKind, String> {
    QueryKind::from_str(name, false).map_err(|_| {
        let names: Vec<&str> = QueryKind::value_variants()
            .iter()
            .map(|kind| kind.cli_name())
            .collect();
        format!("--query `{name}` is not one of {}", names.join(", "))
    })
}

pub fn usage() -> String {
    Cli::command().render_usage().to_string()
}
