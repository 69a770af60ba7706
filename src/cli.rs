use clap::{Args, Parser, Subcommand, ValueEnum};
use std::net::SocketAddr;
use std::path::PathBuf;

use crate::request::parse_subject_spec;
use crate::types::request::SubjectRecord;

#[derive(Parser)]
#[command(
    name = "study-planner",
    version,
    about = "Split a study-hour budget across subjects by marks, attendance and importance"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Config file to use instead of ./planner.toml
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute recommended hours and print the schedule
    Generate(GenerateCommand),
    /// Validate a request file without computing a schedule
    Check(CheckCommand),
    /// Serve the schedule form over HTTP
    Serve(ServeCommand),
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ReportFormat {
    Table,
    Md,
    Json,
    Csv,
}

#[derive(Args)]
pub struct GenerateCommand {
    /// Request file (TOML, or JSON when the extension is .json)
    #[arg(
        long,
        required_unless_present = "subject",
        conflicts_with_all = ["subject", "hours", "student"]
    )]
    pub request: Option<PathBuf>,

    /// Total available study hours (1-24)
    #[arg(long)]
    pub hours: Option<f64>,

    /// Subject as NAME:MARKS:ATTENDANCE:IMPORTANCE; repeat for each subject
    #[arg(long, value_parser = parse_subject_spec, required_unless_present = "request")]
    pub subject: Vec<SubjectRecord>,

    #[arg(long)]
    pub student: Option<String>,

    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,

    /// Leave out the bar chart
    #[arg(long)]
    pub no_chart: bool,
}

#[derive(Args)]
pub struct CheckCommand {
    pub request: PathBuf,
}

#[derive(Args)]
pub struct ServeCommand {
    /// Listen address, e.g. 127.0.0.1:8501
    #[arg(long)]
    pub addr: Option<SocketAddr>,
}
