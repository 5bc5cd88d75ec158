mod common;

use assert_cmd::Command;
use common::write_project;
use indoc::indoc;

fn classlens() -> Command {
    let mut cmd = Command::cargo_bin("classlens").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

fn stdout_of(output: &std::process::Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

fn sample_project() -> tempfile::TempDir {
    write_project(&[
        (
            "Foo.java",
            indoc! {r#"
                public class Foo {
                    public Foo() {}
                    public Foo(int a) {}
                    public Foo(int a, String b) {}
                    private Foo(long l) {}
                }
            "#},
        ),
        ("Solo.java", "public enum Solo { INSTANCE }"),
    ])
}

#[test]
fn test_batch_many_constructors() {
    let project = sample_project();
    let output = classlens()
        .args(["--dir", project.path().to_str().unwrap()])
        .args(["--query", "mc", "--threshold", "3"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout_of(&output), "Foo : 3\n");
}

#[test]
fn test_batch_parameters_and_singletons() {
    let project = sample_project();
    let dir = project.path().to_str().unwrap();

    let params = classlens()
        .args(["--dir", dir, "--query", "mcp", "--threshold", "2"])
        .output()
        .unwrap();
    assert_eq!(stdout_of(&params), "Foo.Foo(int, String) : 2\n");

    let singles = classlens()
        .args(["--dir", dir, "--query", "st", "--threshold", "5"])
        .output()
        .unwrap();
    assert_eq!(stdout_of(&singles), "Solo : singletonEnum\n");
}

#[test]
fn test_missing_batch_arguments_exit_1() {
    let output = classlens().args(["--query", "mc"]).output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("--dir is required"));
    assert!(stderr.contains("Usage:"));
}

#[test]
fn test_invalid_arguments_exit_1() {
    let project = sample_project();
    let dir = project.path().to_str().unwrap();

    for args in [
        vec!["--dir", dir, "--query", "nope"],
        vec!["--dir", dir, "--query", "mc", "--threshold", "-3"],
        vec!["--dir", dir, "--query", "mc", "--threshold", "many"],
        vec!["--dir", "/definitely/not/here", "--query", "mc"],
    ] {
        let output = classlens().args(&args).output().unwrap();
        assert_eq!(output.status.code(), Some(1), "args: {args:?}");
    }
}

#[test]
fn test_help_exits_0() {
    let output = classlens().arg("--help").output().unwrap();
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout_of(&output).contains("--interactive"));
}

#[test]
fn test_interactive_session_over_stdin() {
    let project = sample_project();
    let output = classlens()
        .arg("--interactive")
        .write_stdin(format!(
            "load \"{}\"\nmc th 3\nquit\nlist\n",
            project.path().display()
        ))
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout_of(&output),
        format!(
            "> Loaded 2 files from {}\n> Foo : 3\n> Bye!\n",
            project.path().display()
        )
    );
}

#[test]
fn test_interactive_ignores_invalid_batch_arguments() {
    let output = classlens()
        .args(["--interactive", "--query", "bogus", "--dir", "/definitely/not/here"])
        .write_stdin("exit\n")
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout_of(&output), "> Bye!\n");
}
