//! Query engine: pure report functions over loaded compilation units.
//!
//! Every query takes the units in load order plus a threshold and returns
//! [`ReportLine`]s in encounter order. Inputs are never mutated, so running
//! the same query twice over the same session yields identical output.

mod constructors;
mod singletons;

pub use constructors::{many_constructor_parameters, many_constructors};
pub use singletons::{classify, singletons, Classification};

use crate::core::CompilationUnit;
use clap::ValueEnum;
use std::fmt;

/// Batch-selectable queries, named as on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum QueryKind {
    /// Classes with at least N non-private constructors
    #[value(name = "mc")]
    ManyConstructors,
    /// Non-private constructors with at least N parameters
    #[value(name = "mcp")]
    ManyConstructorParameters,
    /// Singleton implementations (threshold is ignored)
    #[value(name = "st")]
    Singletons,
}

impl QueryKind {
    pub fn run(self, units: &[CompilationUnit], threshold: usize) -> Vec<ReportLine> {
        match self {
            QueryKind::ManyConstructors => many_constructors(units, threshold),
            QueryKind::ManyConstructorParameters => many_constructor_parameters(units, threshold),
            QueryKind::Singletons => singletons(units, threshold),
        }
    }

    pub fn cli_name(self) -> &'static str {
        match self {
            QueryKind::ManyConstructors => "mc",
            QueryKind::ManyConstructorParameters => "mcp",
            QueryKind::Singletons => "st",
        }
    }
}

impl fmt::Display for QueryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.cli_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportValue {
    Count(usize),
    Label(Classification),
}

impl fmt::Display for ReportValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportValue::Count(count) => write!(f, "{count}"),
            ReportValue::Label(label) => write!(f, "{label}"),
        }
    }
}

/// One output line: `<subject> : <value>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportLine {
    pub subject: String,
    pub value: ReportValue,
}

impl ReportLine {
    pub fn count(subject: impl Into<String>, count: usize) -> Self {
        Self {
            subject: subject.into(),
            value: ReportValue::Count(count),
        }
    }

    pub fn label(subject: impl Into<String>, label: Classification) -> Self {
        Self {
            subject: subject.into(),
            value: ReportValue::Label(label),
        }
    }
}

impl fmt::Display for ReportLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} : {}", self.subject, self.value)
    }
}
