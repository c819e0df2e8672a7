use clap::{Args, Parser, Subcommand, ValueEnum};
use deploy_assess::report::OutputFormat;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "deploy-assess",
    version,
    about = "Deployment strategy assessment: separate instance vs enterprise integration"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score a responses file (TOML, or JSON by extension)
    Assess(AssessCommand),
    /// Score the built-in sample responses
    Sample(SampleCommand),
    /// List categories, weights and recognized response keys
    Factors,
}

#[derive(Args)]
pub struct AssessCommand {
    pub responses: PathBuf,
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
    /// Clamp out-of-range ratings into 0-10 instead of rejecting them
    #[arg(long)]
    pub clamp: bool,
}

#[derive(Args)]
pub struct SampleCommand {
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormat {
    Text,
    Md,
    Json,
}

impl From<ReportFormat> for OutputFormat {
    fn from(format: ReportFormat) -> Self {
        match format {
            ReportFormat::Text => OutputFormat::Text,
            ReportFormat::Md => OutputFormat::Md,
            ReportFormat::Json => OutputFormat::Json,
        }
    }
}
