use std::{
    fs,
    io::{self, Write},
    path::PathBuf,
    process::ExitCode,
};

use clap::Parser;
use reckon::{error::Error, parse_program, run};
use tracing_subscriber::EnvFilter;

/// reckon runs programs written in a small calculator language with
/// variables, functions, conditionals and recursion.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path of the program to run.
    path: PathBuf,

    /// Only check that the program lexes and parses; run nothing.
    #[arg(short, long)]
    check: bool,

    /// Log interpreter phases to stderr (`-v` debug, `-vv` trace).
    /// `RUST_LOG` takes precedence when set.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    let source = match fs::read_to_string(&args.path) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Failed to read the input file '{}': {e}", args.path.display());
            return ExitCode::FAILURE;
        },
    };

    let result: Result<(), Error> = if args.check {
        parse_program(&source).map(|_| ()).map_err(Into::into)
    } else {
        let mut stdout = io::stdout().lock();
        run(&source, &mut stdout).and_then(|()| stdout.flush().map_err(Into::into))
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(kind = ?e.kind(), position = ?e.position(), "program failed");
            eprintln!("{e}");
            ExitCode::FAILURE
        },
    }
}

/// Installs a stderr logger, filtered by `RUST_LOG` or else by `verbosity`.
fn init_tracing(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                                                      EnvFilter::new(match verbosity {
                                                                         0 => "warn",
                                                                         1 => "debug",
                                                                         _ => "trace",
                                                                     })
                                                  });

    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(io::stderr)
                             .without_time()
                             .with_target(false)
                             .init();
}
