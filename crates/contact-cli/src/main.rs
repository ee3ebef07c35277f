//! Contact Form CLI.

use std::io::{self, IsTerminal};

use anyhow::Result;
use clap::{ColorChoice, Parser};
use contact_cli::cli::{Cli, Command, LogFormatArg, LogLevelArg, SubmitArgs};
use contact_cli::commands::{SubmitReport, run_check, run_submit};
use contact_cli::logging::{LogConfig, LogFormat, init_logging};
use contact_cli::summary::{
    SUBMITTED_HEADING, error_list, errors_json, fields_table, submission_json, submission_table,
};
use tracing::level_filters::LevelFilter;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let outcome = match &cli.command {
        Command::Submit(args) => submit(args),
        Command::Check(args) => run_check(args).map(|error| match error {
            Some(error) => {
                println!("{error}");
                1
            }
            None => {
                println!("ok");
                0
            }
        }),
        Command::Fields => {
            println!("{}", fields_table());
            Ok(0)
        }
    };
    let exit_code = match outcome {
        Ok(code) => code,
        Err(error) => {
            tracing::error!(error = %format!("{error:#}"), "command failed");
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn submit(args: &SubmitArgs) -> Result<i32> {
    match run_submit(args) {
        SubmitReport::Accepted(submitted) => {
            if args.json {
                println!("{}", submission_json(&submitted)?);
            } else {
                println!("{SUBMITTED_HEADING}");
                println!("{}", submission_table(&submitted));
            }
            Ok(0)
        }
        SubmitReport::Rejected(errors) => {
            if args.json {
                println!("{}", errors_json(&errors)?);
            } else {
                eprintln!("{}", error_list(&errors));
            }
            Ok(1)
        }
    }
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.log_data = cli.log_data;
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
