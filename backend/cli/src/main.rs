mod check_cmd;
mod config;
mod fields_cmd;
mod logging;
mod terminal_output;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;

use check_cmd::OutputFormat;
use config::Config;
use logging::{init_logger, LogFormat};
use terminal_output::supports_color;

#[derive(Parser)]
#[command(name = "cronguard")]
#[command(about = "Validate cron schedule expressions")]
#[command(version)]
struct Cli {
    /// YAML config file (defaults to $CRONGUARD_CONFIG or the user config dir)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log filter when RUST_LOG is unset
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[arg(long, global = true, value_enum)]
    log_format: Option<LogFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate expressions given as arguments, or one per line on stdin
    Check {
        expressions: Vec<String>,

        /// Expect 6 fields with a leading seconds field
        #[arg(long)]
        seconds: bool,

        /// Reject month and weekday names
        #[arg(long)]
        no_alias: bool,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        output: OutputFormat,
    },
    /// Show the field layout and bounds
    Fields {
        #[arg(long)]
        seconds: bool,
    },
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref())?;
    let rejected_env = config.apply_env();
    if let Some(level) = cli.log_level {
        config.log_level = level;
    }
    if let Some(format) = cli.log_format {
        config.log_format = format;
    }
    init_logger(&config.log_level, config.log_format);
    for rejected in &rejected_env {
        rejected.log();
    }
    debug!(?config, "Resolved configuration");

    let color = supports_color(&std::io::stdout());
    let mut options = config.cron;

    match cli.command {
        Commands::Check {
            expressions,
            seconds,
            no_alias,
            output,
        } => {
            options.seconds |= seconds;
            if no_alias {
                options.alias = false;
            }
            let expressions = if expressions.is_empty() {
                check_cmd::read_expressions(std::io::stdin().lock())?
            } else {
                expressions
            };
            let all_valid = check_cmd::run(&expressions, options, output, color)?;
            Ok(if all_valid {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        Commands::Fields { seconds } => {
            options.seconds |= seconds;
            print!("{}", fields_cmd::render(options, color));
            Ok(ExitCode::SUCCESS)
        }
    }
}
