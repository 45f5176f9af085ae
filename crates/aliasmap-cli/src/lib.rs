//! aliasmap command-line front end
//!
//! Reads the alias-pair and function-map payloads from one input stream,
//! expands them, and writes the discovered pairs as JSON.
//!
//! ```text
//! $ printf '[["a","x"]] {"a.b.c":0}' | aliasmap --workers 1
//! [["x.b.c","a.b.c"]]
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod error;
pub mod input;
pub mod output;

pub use error::InputError;
pub use input::{parse_alias_pairs, parse_function_map, read_payloads, Payloads};
pub use output::write_pairs;

use aliasmap_expansion::{expand, ExpansionConfig, ExpansionStats};
use anyhow::Context;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use std::io::{Read, Write};
use std::path::PathBuf;

/// Command-line definition
#[must_use]
pub fn command() -> Command {
    Command::new("aliasmap")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Expand dotted identifiers through alias pairs")
        .long_about(
            "Reads two JSON values from stdin: an array of [pattern, replacement] \
             alias pairs, then an object whose keys are the identifiers to expand. \
             Writes [[expandedKey, originalValue], ...] to stdout.",
        )
        .arg(
            Arg::new("workers")
                .long("workers")
                .short('w')
                .value_parser(value_parser!(usize))
                .help("Worker count (default: available parallelism)"),
        )
        .arg(
            Arg::new("strategy")
                .long("strategy")
                .value_parser(["single-pass", "fixed-point"])
                .help("Expansion strategy"),
        )
        .arg(
            Arg::new("max-rounds")
                .long("max-rounds")
                .value_parser(value_parser!(usize))
                .help("Round limit for the fixed-point strategy"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .value_parser(value_parser!(PathBuf))
                .help("TOML configuration file"),
        )
        .arg(
            Arg::new("pretty")
                .long("pretty")
                .action(ArgAction::SetTrue)
                .help("Indent the output"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .action(ArgAction::SetTrue)
                .help("Log expansion progress to stderr"),
        )
}

/// Layer the config file and flags over the defaults
///
/// # Errors
/// Fails if the config file cannot be loaded or the strategy is unknown.
pub fn config_from_matches(matches: &ArgMatches) -> anyhow::Result<ExpansionConfig> {
    let mut config = match matches.get_one::<PathBuf>("config") {
        Some(path) => ExpansionConfig::from_file(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => ExpansionConfig::new(),
    };

    if let Some(&workers) = matches.get_one::<usize>("workers") {
        config = config.with_workers(workers);
    }
    if let Some(strategy) = matches.get_one::<String>("strategy") {
        config = config.with_strategy(strategy.parse()?);
    }
    if let Some(&max_rounds) = matches.get_one::<usize>("max-rounds") {
        config = config.with_max_rounds(max_rounds);
    }

    config.validate()?;
    Ok(config)
}

/// Read payloads from `input`, expand, and write the result to `output`
///
/// Nothing is written to `output` unless parsing and expansion succeed.
///
/// # Errors
/// Fails on malformed input, invalid configuration, or a write error.
pub fn run<R: Read, W: Write>(
    input: R,
    output: W,
    config: &ExpansionConfig,
    pretty: bool,
) -> anyhow::Result<ExpansionStats> {
    let payloads = read_payloads(input).context("failed to read input payloads")?;
    let outcome = expand(&payloads.aliases, &payloads.keys, config).context("expansion failed")?;
    write_pairs(output, &outcome.pairs, pretty).context("failed to write output")?;
    Ok(outcome.stats)
}
