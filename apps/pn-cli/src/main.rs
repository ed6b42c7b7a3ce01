use clap::{Parser, Subcommand, ValueEnum};
use pn_app::{AppError, AppResult, ErrorReport, Response, project_service};
use pn_solver::AnalysisOptions;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "pipenet")]
#[command(about = "PipeNet CLI - pump sizing for branching pipe networks", long_about = None)]
struct Cli {
    /// Log solver stages at debug level (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a network description and check that it forms a tree
    Validate {
        /// Path to the network YAML or JSON file
        network_path: PathBuf,
    },
    /// Show node, pipe and demand counts of a network description
    Summary {
        /// Path to the network YAML or JSON file
        network_path: PathBuf,
    },
    /// Compute pipe flows, losses and the pump duty point
    Analyze {
        /// Path to the network YAML or JSON file
        network_path: PathBuf,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
        /// Output file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
    Yaml,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let outcome = match cli.command {
        Commands::Validate { network_path } => cmd_validate(&network_path),
        Commands::Summary { network_path } => cmd_summary(&network_path),
        Commands::Analyze {
            network_path,
            format,
            output,
        } => cmd_analyze(&network_path, format, output.as_deref()),
    };

    match outcome {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn cmd_validate(network_path: &Path) -> AppResult<bool> {
    println!("Validating network: {}", network_path.display());
    let def = project_service::load_network(network_path)?;
    let network = pn_app::compile_network(&def)?;
    println!(
        "✓ Network is a valid tree ({} nodes, {} pipes, {} demand nodes)",
        network.nodes().len(),
        network.pipes().len(),
        network.demand_nodes().count()
    );
    Ok(true)
}

fn cmd_summary(network_path: &Path) -> AppResult<bool> {
    let def = project_service::load_network(network_path)?;
    let summary = project_service::summarize(&def);
    println!("{}", summary.name);
    println!("  Nodes:        {}", summary.node_count);
    println!("  Pipes:        {}", summary.pipe_count);
    println!("  Demand nodes: {}", summary.demand_node_count);
    println!("  Total demand: {:.2} l/s", summary.total_demand_lps);
    Ok(true)
}

/// Returns `Ok(false)` when the analysis produced an error object.
fn cmd_analyze(
    network_path: &Path,
    format: OutputFormat,
    output: Option<&Path>,
) -> AppResult<bool> {
    let options = AnalysisOptions::default();
    let response = match project_service::load_network(network_path) {
        Ok(def) => pn_app::respond(&def, &options),
        Err(e) => Response::Error(ErrorReport {
            error: e.to_string(),
        }),
    };

    let rendered = match (&response, format) {
        (Response::Report(report), OutputFormat::Text) => report.render_text(),
        (Response::Error(e), OutputFormat::Text) => format!("Error: {}\n", e.error),
        (_, OutputFormat::Json) => to_json(&response)?,
        (_, OutputFormat::Yaml) => serde_yaml::to_string(&response)?,
    };

    match output {
        Some(path) => {
            std::fs::write(path, rendered)?;
            println!("✓ Wrote report to {}", path.display());
        }
        None => print!("{rendered}"),
    }

    Ok(!response.is_error())
}

fn to_json<T: Serialize>(value: &T) -> Result<String, AppError> {
    let mut json = serde_json::to_string_pretty(value)?;
    json.push('\n');
    Ok(json)
}
