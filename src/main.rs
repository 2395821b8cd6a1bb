use clap::Parser;
use colored::Colorize;
use javachecks::report::ReportOptions;
use javachecks::{Analyzer, Config, FileFinder, IssueKind, ReportFormat, Reporter, SourceUnit};
use miette::{miette, IntoDiagnostic, Result};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// javachecks - redundant null checks and trust-all hostname verifiers
#[derive(Parser, Debug)]
#[command(name = "javachecks")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Files or directories containing `*.tree.json` compilation units
    #[arg(default_value = ".")]
    paths: Vec<PathBuf>,

    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "terminal")]
    format: OutputFormat,

    /// Output file (JSON format only)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Only run these rules (can be specified multiple times)
    #[arg(short, long = "rule", value_name = "ID")]
    rules: Vec<String>,

    /// Patterns to exclude (can be specified multiple times)
    #[arg(short, long, value_name = "REGEX")]
    exclude: Vec<String>,

    /// Treat every unit as lacking a semantic model
    #[arg(long)]
    no_semantic: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Quiet mode - only output results
    #[arg(short, long)]
    quiet: bool,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, Default)]
enum OutputFormat {
    #[default]
    Terminal,
    Compact,
    Json,
}

impl From<OutputFormat> for ReportFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Terminal => ReportFormat::Terminal,
            OutputFormat::Compact => ReportFormat::Compact,
            OutputFormat::Json => ReportFormat::Json,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    if cli.output.is_some() && !matches!(cli.format, OutputFormat::Json) {
        return Err(miette!("--output is only supported with --format json"));
    }

    init_logging(cli.verbose, cli.quiet);

    info!("javachecks v{}", env!("CARGO_PKG_VERSION"));

    let config = load_config(&cli)?;
    run_analysis(&config, &cli)
}

fn init_logging(verbose: bool, quiet: bool) {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = if quiet {
        EnvFilter::new("error")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Directory searched for a default config file
fn config_dir(paths: &[PathBuf]) -> PathBuf {
    match paths.first() {
        Some(path) if path.is_dir() => path.clone(),
        Some(path) => path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(".")),
        None => PathBuf::from("."),
    }
}

fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = if let Some(config_path) = &cli.config {
        Config::from_file(config_path).into_diagnostic()?
    } else {
        Config::from_default_locations(&config_dir(&cli.paths)).into_diagnostic()?
    };

    // Override with CLI arguments
    if !cli.rules.is_empty() {
        let rules = cli
            .rules
            .iter()
            .map(|id| IssueKind::from_code(id).ok_or_else(|| miette!("unknown rule id '{}'", id)))
            .collect::<Result<Vec<_>>>()?;
        config.restrict_to(&rules);
    }
    if !cli.exclude.is_empty() {
        config.exclude.extend(cli.exclude.clone());
    }
    if cli.no_semantic {
        config.assume_semantic = Some(false);
    }

    config.validate().into_diagnostic()?;
    Ok(config)
}

fn run_analysis(config: &Config, cli: &Cli) -> Result<()> {
    info!("Discovering files...");
    let finder = FileFinder::new(config).into_diagnostic()?;
    let files = finder.find_all(&cli.paths);
    info!("Found {} compilation units", files.len());

    let units: Vec<SourceUnit> = files
        .iter()
        .filter_map(|path| match SourceUnit::from_file(path) {
            Ok(unit) => Some(unit),
            Err(err) => {
                warn!("Skipping {}: {}", path.display(), err);
                None
            }
        })
        .collect();

    let analyzer = Analyzer::from_config(config);
    let issues = analyzer.analyze(&units);

    let options = ReportOptions {
        output_path: cli.output.clone(),
        base_path: cli.paths.first().filter(|p| p.is_dir()).cloned(),
    };
    Reporter::with_options(cli.format.into(), options).report(&issues)?;

    if !cli.quiet && !matches!(cli.format, OutputFormat::Json) {
        println!(
            "{}",
            format!(
                "Checked {} units with {} rules",
                units.len(),
                analyzer.enabled_rules().len()
            )
            .dimmed()
        );
    }

    Ok(())
}
