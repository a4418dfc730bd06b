mod input;
mod logging;
mod model;
mod pipeline;
mod report;

use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand, ValueEnum};
use thiserror::Error;
use tracing::{error, info};

use crate::input::csv_table::write_population_csv;
use crate::input::sheet::AccessGate;
use crate::input::synthetic::{DEFAULT_ROWS, DEFAULT_SEED, SyntheticParams, generate_population};
use crate::input::{ProviderConfig, ProviderError, build_provider};
use crate::model::window::{DEFAULT_AGE_RADIUS, DEFAULT_IQ_RADIUS};
use crate::model::{CONSTRUCTS, CohortWindow, Query, QueryError};
use crate::pipeline::compute_z_scores;
use crate::pipeline::stage4_report::{Stage4Input, write_reports};
use crate::report::json::{render_chart_json, render_error_json};

#[derive(Debug, Parser)]
#[command(name = "cohort-zscore", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Score a query against its age/IQ peers and write reports
    Run(RunArgs),
    /// Write a seeded synthetic population as CSV
    Synth(SynthArgs),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum SourceKind {
    Synthetic,
    #[value(name = "csv")]
    PublicCsv,
    #[value(name = "sheet")]
    AuthenticatedSheet,
}

#[derive(Debug, Args)]
struct RunArgs {
    /// Query JSON file, or `-` for stdin
    #[arg(long)]
    query: PathBuf,
    /// Output directory for zscores.json, plot.json and report.txt
    #[arg(long)]
    out: PathBuf,
    #[arg(long, value_enum, default_value_t = SourceKind::Synthetic)]
    source: SourceKind,
    /// CSV export (csv) or sheet values export (sheet)
    #[arg(long)]
    population: Option<PathBuf>,
    #[arg(long, env = "COHORT_ACCESS_TOKEN", hide_env_values = true)]
    access_token: Option<String>,
    #[arg(long, default_value_t = DEFAULT_ROWS)]
    rows: usize,
    #[arg(long, default_value_t = DEFAULT_SEED)]
    seed: u64,
    #[arg(long, default_value_t = DEFAULT_AGE_RADIUS)]
    age_window: i64,
    #[arg(long, default_value_t = DEFAULT_IQ_RADIUS)]
    iq_window: i64,
    /// Also print the chart JSON to stdout
    #[arg(long)]
    stdout: bool,
}

#[derive(Debug, Args)]
struct SynthArgs {
    #[arg(long)]
    out: PathBuf,
    #[arg(long, default_value_t = DEFAULT_ROWS)]
    rows: usize,
    #[arg(long, default_value_t = DEFAULT_SEED)]
    seed: u64,
}

#[derive(Debug, Clone)]
struct RunConfig {
    query_path: PathBuf,
    out_dir: PathBuf,
    provider: ProviderConfig,
    window: CohortWindow,
    print_chart: bool,
}

#[derive(Debug, Error)]
enum AppError {
    #[error(transparent)]
    Query(#[from] QueryError),
    #[error("population unavailable: {0}")]
    Provider(#[from] ProviderError),
    #[error("invalid configuration: {0}")]
    Config(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    fn kind(&self) -> &'static str {
        match self {
            AppError::Query(QueryError::MissingField(_)) => "missing_field",
            AppError::Query(_) => "invalid_field",
            AppError::Provider(_) => "upstream_unavailable",
            AppError::Config(_) => "config",
            AppError::Io(_) => "io",
        }
    }

    fn field(&self) -> Option<String> {
        match self {
            AppError::Query(e) => e.field().map(str::to_string),
            _ => None,
        }
    }

    fn exit_code(&self) -> u8 {
        match self {
            AppError::Query(_) => 2,
            AppError::Provider(_) => 3,
            AppError::Config(_) | AppError::Io(_) => 1,
        }
    }
}

impl TryFrom<RunArgs> for RunConfig {
    type Error = AppError;

    fn try_from(args: RunArgs) -> Result<Self, Self::Error> {
        if args.age_window < 0 || args.iq_window < 0 {
            return Err(AppError::Config(
                "--age-window and --iq-window must be non-negative".to_string(),
            ));
        }
        let require_population = |flag: &str| {
            args.population
                .clone()
                .ok_or_else(|| AppError::Config(format!("--source {flag} requires --population")))
        };
        let provider = match args.source {
            SourceKind::Synthetic => ProviderConfig::Synthetic(SyntheticParams {
                rows: args.rows,
                seed: args.seed,
                ..SyntheticParams::default()
            }),
            SourceKind::PublicCsv => ProviderConfig::PublicCsv {
                path: require_population("csv")?,
            },
            SourceKind::AuthenticatedSheet => ProviderConfig::AuthenticatedSheet {
                path: require_population("sheet")?,
                gate: AccessGate::from_token(args.access_token.as_deref()),
            },
        };
        Ok(RunConfig {
            query_path: args.query,
            out_dir: args.out,
            provider,
            window: CohortWindow {
                age_radius: args.age_window,
                iq_radius: args.iq_window,
            },
            print_chart: args.stdout,
        })
    }
}

fn main() -> ExitCode {
    logging::init();
    let cli = Cli::parse();
    match dispatch(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            match render_error_json(err.kind(), err.to_string(), err.field()) {
                Ok(json) => println!("{json}"),
                Err(e) => error!("failed to render error response: {e}"),
            }
            ExitCode::from(err.exit_code())
        }
    }
}

fn dispatch(command: Command) -> Result<(), AppError> {
    match command {
        Command::Run(args) => run(&RunConfig::try_from(args)?),
        Command::Synth(args) => synth(&args),
    }
}

fn run(config: &RunConfig) -> Result<(), AppError> {
    let query = load_query(&config.query_path)?;

    let provider = build_provider(&config.provider)?;
    let table = provider.load()?;
    log_missing_cells(&table);

    let result = compute_z_scores(&table, &query, &config.window);
    info!(
        "scored query against {} peers from {} ({} rows)",
        result.cohort_size,
        provider.name(),
        table.len()
    );

    write_reports(
        &Stage4Input {
            result: &result,
            query: &query,
            source: provider.name(),
        },
        &config.out_dir,
    )?;

    if config.print_chart {
        println!(
            "{}",
            render_chart_json(&result).map_err(std::io::Error::from)?
        );
    }
    Ok(())
}

fn synth(args: &SynthArgs) -> Result<(), AppError> {
    let params = SyntheticParams {
        rows: args.rows,
        seed: args.seed,
        ..SyntheticParams::default()
    };
    let table = generate_population(&params)?;
    write_population_csv(&table, &args.out)?;
    info!(
        "wrote {} synthetic rows to {}",
        table.len(),
        args.out.display()
    );
    Ok(())
}

fn load_query(path: &Path) -> Result<Query, AppError> {
    let text = if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(path)?
    };
    Ok(Query::from_json_str(&text)?)
}

fn log_missing_cells(table: &model::PopulationTable) {
    let missing = table.missing_counts();
    let names = ["age", "IQ"]
        .into_iter()
        .chain(CONSTRUCTS.iter().map(|c| c.name()));
    let parts: Vec<String> = names
        .zip(missing)
        .filter(|(_, n)| *n > 0)
        .map(|(name, n)| format!("{name}={n}"))
        .collect();
    if !parts.is_empty() {
        info!("missing cells excluded per column: {}", parts.join(", "));
    }
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
