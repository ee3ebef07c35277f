//! CLI argument definitions for the contact form driver.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "contact-form",
    version,
    about = "Contact Form - validate and submit contact details",
    long_about = "Validate and submit contact details without a window.\n\n\
                  Runs the same rules as the desktop form: first name of at least\n\
                  5 characters, required last name, and a valid email address."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Include typed field values in log output (redacted by default).
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Fill in the form and submit it.
    Submit(SubmitArgs),

    /// Run the live rule for a single field.
    Check(CheckArgs),

    /// List the form fields and their rules.
    Fields,
}

#[derive(Parser)]
pub struct SubmitArgs {
    #[arg(long = "first-name", value_name = "NAME", default_value = "")]
    pub first_name: String,

    #[arg(long = "last-name", value_name = "NAME", default_value = "")]
    pub last_name: String,

    #[arg(long = "email", value_name = "ADDRESS", default_value = "")]
    pub email: String,

    /// Optional free text; never validated.
    #[arg(long = "message", value_name = "TEXT", default_value = "")]
    pub message: String,

    /// Print the submission (or the errors) as JSON.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct CheckArgs {
    /// Field key (firstName, lastName, email, message; case and separators ignored).
    #[arg(value_name = "FIELD")]
    pub field: String,

    /// Value to check.
    #[arg(value_name = "VALUE", default_value = "")]
    pub value: String,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
