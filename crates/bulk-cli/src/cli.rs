//! CLI argument definitions for the bulk import validator.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "bulk-import",
    version,
    about = "Validate bulk contact and credential spreadsheets",
    long_about = "Validate bulk contact and credential spreadsheets before import.\n\n\
                  Checks headers against an import profile, then every row for missing,\n\
                  extra, repeated or inconsistent values, and reports each finding by cell."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
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
}

#[derive(Subcommand)]
pub enum Command {
    /// Validate a spreadsheet of new contacts.
    Contacts(ContactsArgs),

    /// Validate a spreadsheet of credential data.
    Credentials(CredentialsArgs),

    /// Write a CSV template for an import profile.
    Template(TemplateArgs),
}

#[derive(Args)]
pub struct InputArgs {
    /// CSV file to validate.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Import profile (JSON header mapping and field schema).
    #[arg(long = "profile", value_name = "PATH")]
    pub profile: PathBuf,

    /// Field delimiter of the CSV file.
    #[arg(long = "delimiter", default_value_t = ',')]
    pub delimiter: char,

    /// Report format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: ReportFormatArg,
}

#[derive(Parser)]
pub struct ContactsArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// JSON array of existing contacts; their external IDs may not be reused.
    #[arg(long = "existing", value_name = "PATH")]
    pub existing: Option<PathBuf>,
}

#[derive(Parser)]
pub struct CredentialsArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// JSON array of selected recipients every row must match.
    #[arg(long = "recipients", value_name = "PATH")]
    pub recipients: Option<PathBuf>,

    /// JSON array of known contacts, checked when no recipients are given.
    #[arg(long = "contacts", value_name = "PATH")]
    pub contacts: Option<PathBuf>,
}

#[derive(Parser)]
pub struct TemplateArgs {
    /// Import profile (JSON header mapping).
    #[arg(long = "profile", value_name = "PATH")]
    pub profile: PathBuf,

    /// JSON array of records to pre-fill, keyed by field key.
    #[arg(long = "records", value_name = "PATH")]
    pub records: Option<PathBuf>,

    /// Write the template here instead of stdout.
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,
}

/// Report output choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormatArg {
    Table,
    Json,
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
