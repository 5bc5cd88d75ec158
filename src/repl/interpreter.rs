//! One step of the interactive session.
//!
//! The session is threaded explicitly: [`Interpreter::step`] consumes the
//! current [`Session`] and hands back the next one inside a [`Transition`],
//! or halts. Nothing outside the returned value changes.

use super::grammar::{self, Command};
use crate::analyzers::{load_units, AstProvider};
use crate::core::CompilationUnit;
use crate::queries;
use std::path::Path;

pub const NO_CLASSES_LOADED: &str = "no classes loaded, load first";
pub const FAREWELL: &str = "Bye!";

pub const HELP_TEXT: &str = "\
Commands:
  load \"<dir>\"               load every .java file under <dir>, replacing the session
  list                       list the types of the loaded session
  mc th <n>                  classes with at least <n> non-private constructors
  many-constructors th <n>   same as mc
  help | h                   show this message
  exit | quit | q            leave the session";

/// Currently loaded codebase. Absent until the first `load`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    units: Option<Vec<CompilationUnit>>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_units(units: Vec<CompilationUnit>) -> Self {
        Self { units: Some(units) }
    }

    pub fn units(&self) -> Option<&[CompilationUnit]> {
        self.units.as_deref()
    }

    pub fn is_loaded(&self) -> bool {
        self.units.is_some()
    }

    /// Loaded units, or nothing when no load has happened yet.
    fn units_or_empty(&self) -> &[CompilationUnit] {
        self.units().unwrap_or(&[])
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum Transition {
    Continue {
        output: Vec<String>,
        session: Session,
    },
    Halt {
        output: Vec<String>,
    },
}

impl Transition {
    fn continue_with(session: Session, output: Vec<String>) -> Self {
        Transition::Continue { output, session }
    }

    pub fn output(&self) -> &[String] {
        match self {
            Transition::Continue { output, .. } | Transition::Halt { output } => output,
        }
    }

    pub fn session(&self) -> Option<&Session> {
        match self {
            Transition::Continue { session, .. } => Some(session),
            Transition::Halt { .. } => None,
        }
    }

    pub fn is_halt(&self) -> bool {
        matches!(self, Transition::Halt { .. })
    }
}

pub struct Interpreter<'p> {
    provider: &'p dyn AstProvider,
}

impl<'p> Interpreter<'p> {
    pub fn new(provider: &'p dyn AstProvider) -> Self {
        Self { provider }
    }

    /// Parses and executes one raw input line.
    pub fn step(&self, session: Session, line: &str) -> Transition {
        match grammar::parse(line) {
            Ok(command) => self.execute(session, command),
            Err(e) => {
                log::debug!("Rejected input {:?}: {}", line, e);
                Transition::continue_with(session, vec![e.to_string()])
            }
        }
    }

    /// The line source ran dry; same as `exit`.
    pub fn end_of_input(&self) -> Transition {
        Transition::Halt {
            output: vec![FAREWELL.to_string()],
        }
    }

    pub fn execute(&self, session: Session, command: Command) -> Transition {
        match command {
            Command::Help => Transition::continue_with(session, vec![HELP_TEXT.to_string()]),
            Command::Exit => self.end_of_input(),
            Command::Load { path } => self.load(&path),
            Command::List => {
                let output = list(&session);
                Transition::continue_with(session, output)
            }
            Command::ManyConstructors { threshold } => {
                let output = queries::many_constructors(session.units_or_empty(), threshold)
                    .iter()
                    .map(ToString::to_string)
                    .collect();
                Transition::continue_with(session, output)
            }
        }
    }

    /// The previous session is dropped whatever the outcome; an empty load is
    /// still a load.
    fn load(&self, path: &str) -> Transition {
        let units = load_units(self.provider, Path::new(path));
        let output = vec![format!("Loaded {} files from {}", units.len(), path)];
        Transition::continue_with(Session::with_units(units), output)
    }
}

fn list(session: &Session) -> Vec<String> {
    match session.units() {
        Some(units) if !units.is_empty() => units
            .iter()
            .flat_map(|unit| unit.types())
            .map(|decl| decl.qualified_name().to_string())
            .collect(),
        _ => vec![NO_CLASSES_LOADED.to_string()],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ClassDecl, ClassFlavor, Constructor, Members, TypeDecl, Visibility};
    use crate::errors::Result;
    use pretty_assertions::assert_eq;

    fn class_with_ctors(name: &str, ctors: usize) -> TypeDecl {
        let mut members = Members::named(name, None);
        members.constructors = (0..ctors)
            .map(|_| Constructor {
                visibility: Visibility::Public,
                name: name.to_string(),
                parameters: vec![],
            })
            .collect();
        TypeDecl::Class(ClassDecl {
            flavor: ClassFlavor::Class,
            members,
        })
    }

    struct Fixed(Vec<(String, Vec<TypeDecl>)>);

    impl AstProvider for Fixed {
        fn load_directory(&self, root: &Path) -> Vec<Result<CompilationUnit>> {
            self.0
                .iter()
                .map(|(file, types)| Ok(CompilationUnit::new(root.join(file), None, types.clone())))
                .collect()
        }
    }

    fn next_session(transition: Transition) -> Session {
        match transition {
            Transition::Continue { session, .. } => session,
            Transition::Halt { .. } => panic!("unexpected halt"),
        }
    }

    #[test]
    fn test_list_on_empty_session() {
        let provider = Fixed(vec![]);
        let interpreter = Interpreter::new(&provider);
        let transition = interpreter.step(Session::new(), "list");
        assert_eq!(transition.output(), &[NO_CLASSES_LOADED.to_string()]);
        assert_eq!(transition.session(), Some(&Session::new()));
    }

    #[test]
    fn test_load_then_query() {
        let provider = Fixed(vec![(
            "Foo.java".to_string(),
            vec![class_with_ctors("Foo", 3), class_with_ctors("Bar", 1)],
        )]);
        let interpreter = Interpreter::new(&provider);

        let loaded = interpreter.step(Session::new(), "load \"proj\"");
        assert_eq!(loaded.output(), &["Loaded 1 files from proj".to_string()]);
        let session = next_session(loaded);

        let listed = interpreter.step(session, "list");
        assert_eq!(listed.output(), &["Foo".to_string(), "Bar".to_string()]);
        let session = next_session(listed);

        let at_three = interpreter.step(session, "mc th 3");
        assert_eq!(at_three.output(), &["Foo : 3".to_string()]);
        let at_four = interpreter.step(next_session(at_three), "mc th 4");
        assert!(at_four.output().is_empty());
    }

    #[test]
    fn test_query_without_session_prints_nothing() {
        let provider = Fixed(vec![]);
        let interpreter = Interpreter::new(&provider);
        let transition = interpreter.step(Session::new(), "mc th 0");
        assert!(transition.output().is_empty());
        assert!(!transition.is_halt());
    }

    #[test]
    fn test_empty_load_replaces_session() {
        let provider = Fixed(vec![]);
        let interpreter = Interpreter::new(&provider);
        let previous = Session::with_units(vec![CompilationUnit::new(
            "Old.java",
            None,
            vec![class_with_ctors("Old", 1)],
        )]);

        let transition = interpreter.step(previous, "load \"elsewhere\"");
        assert_eq!(transition.output(), &["Loaded 0 files from elsewhere".to_string()]);
        let session = next_session(transition);
        assert_eq!(session.units(), Some(&[][..]));

        let listed = interpreter.step(session, "list");
        assert_eq!(listed.output(), &[NO_CLASSES_LOADED.to_string()]);
    }

    #[test]
    fn test_parse_error_keeps_session() {
        let provider = Fixed(vec![]);
        let interpreter = Interpreter::new(&provider);
        let session = Session::with_units(vec![]);
        let transition = interpreter.step(session.clone(), "load /no/quotes");
        assert!(transition.output()[0].starts_with("Invalid command \"load /no/quotes\""));
        assert_eq!(transition.session(), Some(&session));
    }

    #[test]
    fn test_exit_and_help() {
        let provider = Fixed(vec![]);
        let interpreter = Interpreter::new(&provider);
        let exit = interpreter.step(Session::new(), "q");
        assert!(exit.is_halt());
        assert_eq!(exit.output(), &[FAREWELL.to_string()]);

        let help = interpreter.step(Session::new(), "h");
        assert_eq!(help.output(), &[HELP_TEXT.to_string()]);
        assert_eq!(help.session(), Some(&Session::new()));
    }
}
