//! compbench - compression benchmark harness
//!
//! Compresses one input file with a selection of algorithms and prints a
//! comparison of compressed size, ratio, savings and compression time.

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use compbench_compression::{
    resolve, BenchmarkRunner, OutputMode, OutputWriter, Registry, Report, RunOptions,
};
use compbench_config::{Config, ConfigLoader, ReportFormat};
use compbench_types::{Error, LevelHint, Verbosity};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

mod display;
mod json_output;

use display::{display_algorithm_list, display_error, display_report, display_write_summary};
use json_output::BenchmarkRunJson;

/// compbench - compare compression algorithms on one file
#[derive(Parser)]
#[command(
    name = "compbench",
    version = env!("CARGO_PKG_VERSION"),
    about = "Compare compression ratio and speed across algorithms",
    long_about = "compbench compresses a single input file with every selected algorithm\n\
                  and reports compressed size, ratio, space saved and compression time."
)]
struct Cli {
    /// Input file to benchmark
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Write payloads to this path instead of `<input stem><extension>`
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Comma separated algorithm list, or `all`
    #[arg(short, long)]
    algorithms: Option<String>,

    /// Compression level hint; negative selects each codec's default
    #[arg(short, long, allow_negative_numbers = true)]
    level: Option<i32>,

    /// Diagnostic verbosity (0-2)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(0..=2))]
    verbosity: Option<u8>,

    /// List algorithms without a codec on this platform
    #[arg(long)]
    show_all: bool,

    /// Derive one output file per algorithm from --output
    #[arg(long)]
    split_output: bool,

    /// Write payloads next to the input file
    #[arg(long)]
    write_outputs: bool,

    /// Decompress every payload and compare it with the input
    #[arg(long)]
    verify: bool,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// List registered algorithms and exit
    #[arg(long)]
    list: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let registry = Registry::standard();

    if cli.list {
        display_algorithm_list(&registry);
        return Ok(());
    }

    let Some(input) = cli.input.clone() else {
        eprintln!("{}", Cli::command().render_usage());
        eprintln!();
        eprintln!("Supported algorithms: {}", registry.supported_identifiers().join(", "));
        std::process::exit(1);
    };

    let config = load_config(&cli)?;
    init_logging(config.logging.verbosity)?;

    if let Err(e) = run(&input, &cli, &config, &registry).await {
        display_error(&format!("{:#}", e));
        if e.downcast_ref::<Error>().map_or(true, Error::is_fatal) {
            std::process::exit(1);
        }
    }

    Ok(())
}

/// Layer command line flags over the file and environment configuration
fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => ConfigLoader::load_from_file(path),
        None => ConfigLoader::load_default(),
    }
    .map_err(Error::from)
    .context("Failed to load configuration")?;

    if let Some(algorithms) = &cli.algorithms {
        config.benchmark.algorithms = algorithms.clone();
    }
    if let Some(level) = cli.level {
        config.benchmark.level = LevelHint::new(level);
    }
    if let Some(verbosity) = cli.verbosity {
        config.logging.verbosity = Verbosity::new(verbosity).map_err(anyhow::Error::msg)?;
    }
    config.benchmark.verify |= cli.verify;
    config.output.show_unsupported |= cli.show_all;
    config.output.split_output |= cli.split_output;
    if cli.json {
        config.output.format = ReportFormat::Json;
    }

    Ok(config)
}

fn init_logging(verbosity: Verbosity) -> Result<()> {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(verbosity.filter_directive()))?;

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .init();

    Ok(())
}

fn platform() -> String {
    format!("{}/{}", std::env::consts::OS, std::env::consts::ARCH)
}

async fn run(input: &Path, cli: &Cli, config: &Config, registry: &Registry) -> Result<()> {
    info!("Platform: {}", platform());
    info!("Input file: {}", input.display());

    let data = tokio::fs::read(input)
        .await
        .map_err(|e| Error::input_read(input, e.to_string()))?;
    info!("Original size: {} bytes", data.len());

    let selection = resolve(
        &config.benchmark.algorithms,
        &registry.supported_identifiers(),
    );
    debug!("Selected algorithms: {:?}", selection.selected());

    let runner = BenchmarkRunner::new(registry).with_options(RunOptions {
        level: config.benchmark.level,
        verify: config.benchmark.verify,
    });
    let results = runner.run(&data, &selection);

    let mode = match &cli.output {
        Some(path) if config.output.split_output => Some(OutputMode::Split(path.clone())),
        Some(path) => Some(OutputMode::Single(path.clone())),
        None if cli.write_outputs => Some(OutputMode::PerAlgorithm),
        None => None,
    };

    let summary = match mode {
        Some(mode) => {
            let writer = OutputWriter::new(input, mode);
            info!("Output destination: {:?}", writer.mode());
            let summary = writer.write_all(&results, registry).await;
            if !summary.is_success() {
                display_write_summary(&summary);
            }
            Some(summary)
        }
        None => None,
    };

    let file_name = input
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| input.display().to_string());
    let report = Report::build(file_name, data.len() as u64, &results, registry);

    match config.output.format {
        ReportFormat::Text => display_report(&report, config.output.show_unsupported),
        ReportFormat::Json => {
            let options = runner.options();
            let document = BenchmarkRunJson::new(
                &report,
                input,
                options.level.get(),
                options.verify,
                summary.as_ref(),
            );
            println!("{}", document.to_json()?);
        }
    }

    Ok(())
}
