mod cli;
mod detect;
mod error;
mod hash;
mod input;

use clap::Parser;
use cli::Cli;
use error::exit_with_error;
use std::io::Write;

fn init_tracing(cli: &Cli) {
    // CLI tracing policy:
    //   --quiet   → always "off"
    //   --verbose → honour RUST_LOG if set, otherwise "info"
    //   default   → "off"; RUST_LOG is ignored so log lines never mix
    //               into digest output by accident
    let filter = if cli.quiet {
        tracing_subscriber::EnvFilter::new("off")
    } else if cli.verbose {
        tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into())
    } else {
        tracing_subscriber::EnvFilter::new("off")
    };

    let ansi = !(cli.no_color || std::env::var_os("NO_COLOR").is_some());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(ansi)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();

    // Errors go to stderr, so color is not tied to whether stdout is a TTY.
    if cli.no_color || std::env::var_os("NO_COLOR").is_some() {
        colored::control::set_override(false);
    }

    init_tracing(&cli);

    if let Err(e) = run(cli) {
        exit_with_error(e);
    }
}

fn run(cli: Cli) -> error::CliResult<()> {
    let settings = hash::HashSettings::from_cli(&cli)?;
    let sources = input::resolve_inputs(&cli.files)?;

    let results = hash::hash_all(&sources, &settings);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for (source, result) in sources.iter().zip(results) {
        let digest = result?;
        writeln!(out, "{}", hash::format_line(&digest, source))?;
    }
    out.flush()?;
    Ok(())
}
