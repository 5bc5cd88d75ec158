use crate::analyzers::AstProvider;
use crate::repl::{self, Interpreter};
use anyhow::{Context, Result};
use std::io;

/// Runs the interactive session on stdin/stdout until `exit` or end of input.
pub fn run_interactive(provider: &dyn AstProvider) -> Result<()> {
    let interpreter = Interpreter::new(provider);
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    repl::run(&interpreter, stdin.lock(), &mut stdout).context("Interactive session failed")
}
