//! apicheck CLI.
//!
//! `run` executes suites against live endpoints, `analyze` grades a recorded
//! response offline, `kinds` lists the assertion vocabulary.

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use apicheck::assertions::{allowed_operators, AssertionKind};
use apicheck::config::Config;
use apicheck::discovery::discover_suites;
use apicheck::output::{OutputConfig, OutputFormatter};
use apicheck::response::load_recorded_response;
use apicheck::runner::HttpRunner;
use apicheck::yaml::{load_suite, run_request_assertions, summarize, Suite, SuiteSummary};

#[derive(Parser)]
#[command(name = "apicheck")]
#[command(about = "Validate HTTP API responses against declarative assertions")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run suites against live endpoints
    Run {
        /// Suite file or directory to search (defaults to the current directory)
        path: Option<PathBuf>,

        /// Always print response bodies, not just on failure
        #[arg(short, long)]
        verbose: bool,

        /// Override the suite file pattern
        #[arg(short, long)]
        pattern: Option<String>,

        /// Override the search root
        #[arg(short, long)]
        root: Option<PathBuf>,

        /// Do not scan directories recursively
        #[arg(long)]
        no_recursive: bool,

        /// Explicit config file path
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// List discovered suite files without running them
        #[arg(long)]
        list_suites: bool,

        /// Suppress flavor commentary
        #[arg(long)]
        no_humor: bool,
    },

    /// Grade a recorded response against a suite, offline
    Analyze {
        /// Suite file
        suite: PathBuf,

        /// Recorded response JSON file
        response: PathBuf,

        /// Name of the request whose assertions to use (defaults to the first)
        #[arg(long)]
        request: Option<String>,

        /// Always print the response body
        #[arg(short, long)]
        verbose: bool,
    },

    /// List assertion kinds and the operators each accepts
    Kinds,
}

fn main() {
    let cli = Cli::parse();

    let outcome = match cli.command {
        Commands::Run {
            path,
            verbose,
            pattern,
            root,
            no_recursive,
            config,
            list_suites,
            no_humor,
        } => run(
            path,
            verbose,
            pattern,
            root,
            no_recursive,
            config,
            list_suites,
            no_humor,
        ),
        Commands::Analyze {
            suite,
            response,
            request,
            verbose,
        } => analyze(&suite, &response, request.as_deref(), verbose),
        Commands::Kinds => {
            print_kinds();
            Ok(SuiteSummary::default())
        }
    };

    match outcome {
        Ok(summary) if summary.all_passed() => {}
        Ok(_) => std::process::exit(1),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            std::process::exit(2);
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn run(
    path: Option<PathBuf>,
    verbose: bool,
    pattern: Option<String>,
    root: Option<PathBuf>,
    no_recursive: bool,
    config_path: Option<PathBuf>,
    list_suites: bool,
    no_humor: bool,
) -> Result<SuiteSummary> {
    let cwd = std::env::current_dir().context("Failed to resolve current directory")?;

    let suites = if path.as_deref().map_or(false, Path::is_file) {
        vec![path.unwrap_or_default()]
    } else {
        let base_dir = path.unwrap_or_else(|| cwd.clone());
        let (config, config_dir) = resolve_config(config_path.as_deref(), &cwd)?;
        let config = config.with_overrides(pattern, root, no_recursive);
        let search_dir = config.search_dir(&base_dir, config_dir.as_deref());
        discover_suites(&search_dir, &config)
            .with_context(|| format!("Suite discovery failed in {:?}", search_dir))?
    };

    if suites.is_empty() {
        return Err(anyhow!("No suite files found"));
    }

    if list_suites {
        for suite in &suites {
            println!("{}", suite.display());
        }
        return Ok(SuiteSummary::default());
    }

    let output = output_config(verbose, no_humor);
    let formatter = OutputFormatter::new(output);
    let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;
    let runner = HttpRunner::new()?;

    let mut total = SuiteSummary::default();
    for path in &suites {
        let suite = load_suite(path)?;
        let summary = runtime.block_on(run_suite(&runner, &suite, &formatter))?;
        total.merge(summary);
    }

    formatter.print_summary(total.passed, total.failed);
    Ok(total)
}

async fn run_suite(
    runner: &HttpRunner,
    suite: &Suite,
    formatter: &OutputFormatter,
) -> Result<SuiteSummary> {
    println!("\nSuite: {}", suite.name);
    if let Some(description) = &suite.description {
        println!("  {}", description);
    }

    let mut summary = SuiteSummary::default();
    for request in &suite.requests {
        println!("\n{}", request.label());
        let response = runner.execute(request).await?;
        formatter.print_response_status(&response);

        let results = run_request_assertions(&request.assertions, &response);
        formatter.print_results(&results);

        let request_summary = summarize(&results);
        formatter.print_response_body(&response, request_summary.all_passed());
        summary.merge(request_summary);
    }

    Ok(summary)
}

fn analyze(
    suite_path: &Path,
    response_path: &Path,
    request_name: Option<&str>,
    verbose: bool,
) -> Result<SuiteSummary> {
    let suite = load_suite(suite_path)?;
    let recorded = load_recorded_response(response_path)?;

    let request = match request_name {
        Some(name) => suite
            .requests
            .iter()
            .find(|r| r.label() == name)
            .ok_or_else(|| anyhow!("No request named '{}' in suite '{}'", name, suite.name))?,
        None => &suite.requests[0],
    };

    println!("\nSuite: {}", suite.name);
    println!("\n{}", request.label());
    if let Some(recorded_at) = recorded.recorded_at {
        println!("  recorded at {}", recorded_at.to_rfc3339());
    }

    let formatter = OutputFormatter::new(output_config(verbose, false));
    formatter.print_response_status(&recorded.response);

    let results = run_request_assertions(&request.assertions, &recorded.response);
    formatter.print_results(&results);

    let summary = summarize(&results);
    formatter.print_response_body(&recorded.response, summary.all_passed());
    formatter.print_summary(summary.passed, summary.failed);
    Ok(summary)
}

fn print_kinds() {
    println!("Assertion kinds:\n");
    for kind in AssertionKind::known() {
        let operators: Vec<&str> = allowed_operators(*kind)
            .iter()
            .map(|op| op.as_str())
            .collect();
        println!("  {:<15} operators: {}", kind.as_str(), operators.join(", "));
    }
}

fn resolve_config(
    explicit: Option<&Path>,
    cwd: &Path,
) -> Result<(Config, Option<PathBuf>)> {
    if let Some(path) = explicit {
        let (config, dir) = Config::load(path)?;
        return Ok((config, Some(dir)));
    }
    match Config::discover(cwd) {
        Some((config, dir)) => Ok((config, Some(dir))),
        None => Ok((Config::default(), None)),
    }
}

fn output_config(verbose: bool, no_humor: bool) -> OutputConfig {
    let config = if verbose {
        OutputConfig::verbose()
    } else {
        OutputConfig::new()
    };
    if no_humor {
        config.without_humor()
    } else {
        config
    }
}
