use std::path::PathBuf;
use std::process::ExitCode;
use anyhow::Result;
use clap::{Parser, ValueEnum};
use log::debug;

use build_size_info::{DEFAULT_PROJECT_NAME, ReportConfig, collect_build_report};

const BINARY_NAME: &str = "build-size-info";

/// Report the on-disk sizes of the packaged artifacts in a mobile build output directory.
#[derive(Parser, Debug)]
#[command(name = BINARY_NAME, version, about = "Mobile build artifact size report", long_about = None)]
struct Cli {
    /// Build output directory for one platform
    build_root: PathBuf,

    /// Project name matched against the project pak directory
    #[arg(long, default_value = DEFAULT_PROJECT_NAME)]
    project: String,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Paths report followed by sizes report
    Text,
    /// A single JSON document
    Json,
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // --help and --version
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            println!("{} error: {}", BINARY_NAME, usage_error_line(&e));
            return ExitCode::FAILURE;
        }
    };
    debug!("{:?}", cli);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            println!("{} error: {}", BINARY_NAME, e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = ReportConfig {
        build_root: &cli.build_root,
        project_name: &cli.project,
    };
    let report = collect_build_report(config)?;

    match cli.format {
        OutputFormat::Text => {
            println!("{}", report.paths_string());
            println!("{}", report.sizes_string());
        }
        OutputFormat::Json => println!("{}", report.to_json()?),
    }
    Ok(())
}

/// Collapse a clap usage error into a single line, dropping the usage hint
fn usage_error_line(err: &clap::Error) -> String {
    let rendered = err.render().to_string();
    let message = rendered
        .lines()
        .take_while(|line| !line.starts_with("Usage:"))
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    message
        .strip_prefix("error: ")
        .map(str::to_string)
        .unwrap_or(message)
}
