// Export modules for library usage
pub mod analyzers;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod errors;
pub mod io;
pub mod queries;
pub mod repl;

// Re-export commonly used types
pub use crate::core::{
    ClassDecl, CompilationUnit, Constructor, EnumDecl, Field, Method, TypeDecl, TypeKind,
    Visibility,
};

pub use crate::analyzers::{load_units, AstProvider, JavaAnalyzer, JavaAstProvider};

pub use crate::queries::{
    many_constructor_parameters, many_constructors, singletons, Classification, QueryKind,
    ReportLine,
};

pub use crate::repl::{Command, Interpreter, Session, Transition};
