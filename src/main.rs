use anyhow::Result;
use cctr::cli::{parse_args, Invocation};
use cctr::config::{self, Config};
use cctr::expander::Expander;
use cctr::logger;
use cctr::processor;
use std::io;

fn main() -> Result<()> {
    let args = parse_args();

    let config = match config::load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Warning: Could not load config, using defaults: {:#}", e);
            Config::default()
        }
    };
    // An invalid key falls back on its own; the rest of the file still applies
    if let Err(e) = config::validate_config(&config) {
        eprintln!("Warning: {:#}, using the default", e);
    }

    if let Some(log_path) = logger::init_debug_logging(args.debug || config.debug_enabled())? {
        tracing::debug!(path = %log_path.display(), "debug logging enabled");
    }

    let boundaries = match args.ranges {
        Some(boundaries) => boundaries,
        None => config.range_boundaries().unwrap_or_default(),
    };

    // Usage problems go to stdout and the process still exits successfully
    let invocation = match args.invocation {
        Ok(invocation) => invocation,
        Err(e) => {
            tracing::debug!(error = %e, "rejected arguments");
            println!("{}", e);
            return Ok(());
        }
    };

    run(&invocation, Expander::new(boundaries))
}

fn run(invocation: &Invocation, expander: Expander) -> Result<()> {
    let transformer = match invocation.transformer(&expander) {
        Ok(transformer) => transformer,
        Err(e) => {
            println!("{}", e);
            return Ok(());
        }
    };

    tracing::info!(mode = ?transformer.mode(), ranges = %expander.boundaries(), "starting");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let summary = processor::process(stdin.lock(), &mut out, &transformer)?;

    tracing::info!(lines = summary.lines, read_error = ?summary.read_error, "finished");
    Ok(())
}
