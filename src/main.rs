use anyhow::Result;
use clap::error::ErrorKind;
use clap::Parser;
use classlens::analyzers::JavaAstProvider;
use classlens::cli::{self, Cli, Mode, EXIT_CONFIG_ERROR, EXIT_SUCCESS};
use classlens::errors::Error;
use std::process::ExitCode;

fn main() -> ExitCode {
    init_logging();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => return handle_argument_error(e),
    };

    let mode = match cli.mode() {
        Ok(mode) => mode,
        Err(e) => {
            report_configuration_error(&e);
            return ExitCode::from(EXIT_CONFIG_ERROR);
        }
    };

    match run(mode) {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

// Logs go to stderr so they never interleave with report output
fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
}

fn run(mode: Mode) -> Result<()> {
    let provider = JavaAstProvider::new(classlens::config::load_config());

    match mode {
        Mode::Interactive => classlens::commands::run_interactive(&provider),
        Mode::Batch(args) => {
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            classlens::commands::run_batch(&args, &provider, &mut out)
        }
    }
}

// Help and version are successful exits; anything else clap rejects is a bad batch invocation
fn handle_argument_error(e: clap::Error) -> ExitCode {
    let _ = e.print();
    match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::from(EXIT_SUCCESS),
        _ => ExitCode::from(EXIT_CONFIG_ERROR),
    }
}

fn report_configuration_error(e: &Error) {
    eprintln!("error: {e}");
    eprintln!();
    eprintln!("{}", cli::usage());
    eprintln!();
    eprintln!("For more information, try '--help'.");
}
