pub mod grammar;
pub mod interpreter;

pub use grammar::{parse, Command};
pub use interpreter::{Interpreter, Session, Transition, FAREWELL, HELP_TEXT, NO_CLASSES_LOADED};

use crate::errors::Result;
use std::io::{BufRead, Write};

pub const PROMPT: &str = "> ";

/// Read-eval-print loop: prompt, read one line, step, print, until a halt.
pub fn run<R: BufRead, W: Write>(
    interpreter: &Interpreter<'_>,
    mut input: R,
    output: &mut W,
) -> Result<()> {
    let mut session = Session::new();
    let mut line = String::new();

    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        line.clear();
        let transition = if input.read_line(&mut line)? == 0 {
            interpreter.end_of_input()
        } else {
            interpreter.step(session, strip_line_ending(&line))
        };

        for text in transition.output() {
            writeln!(output, "{text}")?;
        }

        match transition {
            Transition::Continue { session: next, .. } => session = next,
            Transition::Halt { .. } => break,
        }
    }

    output.flush()?;
    Ok(())
}

fn strip_line_ending(line: &str) -> &str {
    line.strip_suffix('\n')
        .map(|l| l.strip_suffix('\r').unwrap_or(l))
        .unwrap_or(line)
}
