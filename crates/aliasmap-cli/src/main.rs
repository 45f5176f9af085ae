use aliasmap_cli::{command, config_from_matches, run};
use std::io::{self, BufWriter};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let matches = command().get_matches();
    init_tracing(matches.get_flag("verbose"));

    let result = config_from_matches(&matches).and_then(|config| {
        let stdin = io::stdin().lock();
        let stdout = BufWriter::new(io::stdout().lock());
        run(stdin, stdout, &config, matches.get_flag("pretty"))
    });

    match result {
        Ok(stats) => {
            tracing::info!(
                workers = stats.workers,
                chunks = stats.chunks,
                rounds = stats.rounds,
                discovered = stats.discovered,
                converged = stats.converged,
                "done"
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr; stdout carries only the output payload
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
