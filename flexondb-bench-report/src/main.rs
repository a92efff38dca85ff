use anyhow::{Context, Result};
use clap::Parser;
use flexondb_bench_report::{
    Cli, Config, JsonReporter, OutputFormat, ReportBuilder, Reporter, TerminalReporter,
};
use std::io::IsTerminal;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // Usage errors exit with 1; --help and --version are not errors.
            let _ = err.print();
            std::process::exit(if err.use_stderr() { 1 } else { 0 });
        }
    };

    init_logging(cli.verbose);

    // Load config and apply CLI overrides
    let mut config = Config::load_from(cli.config.as_deref())?;
    cli.apply_to_config(&mut config);
    debug!("Configuration: {:?}", config);

    let builder = ReportBuilder::new(&config)?;
    let report = builder
        .build(&cli.output_dir)
        .context("Could not generate report")?;

    let reporter: Box<dyn Reporter> = match config.report.format {
        OutputFormat::Json => Box::new(JsonReporter::new()),
        OutputFormat::Table if std::io::stdout().is_terminal() => Box::new(TerminalReporter::new()),
        OutputFormat::Table => Box::new(TerminalReporter::without_colors()),
    };
    reporter.report(&report).context("Failed to write report")?;

    Ok(())
}

/// Log to stderr so stdout carries only the report. `RUST_LOG` takes
/// precedence over `--verbose`.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .init();
}
