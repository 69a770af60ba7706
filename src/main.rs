mod allocate;
mod cli;
mod config;
mod error;
mod planner;
mod report;
mod request;
mod server;
mod types;
mod validate;

use crate::error::PlannerError;
use clap::Parser;
use tracing_subscriber::EnvFilter;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const INVALID_INPUT: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn init_tracing(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: cli::Cli) -> Result<i32, PlannerError> {
    let cwd = std::env::current_dir()?;
    let loaded = config::load_config(&cwd, cli.config.as_deref())?;

    match cli.command {
        cli::Commands::Generate(cmd) => {
            let request = match &cmd.request {
                Some(path) => request::load_request(path)?,
                None => {
                    let request = types::request::ScheduleRequest::new(
                        cmd.hours.unwrap_or_else(|| loaded.default_total_hours()),
                        cmd.subject.clone(),
                    );
                    match &cmd.student {
                        Some(student) => request.with_student(student.as_str()),
                        None => request,
                    }
                }
            };

            let report = planner::generate(&request)?;
            let format = cmd
                .format
                .map(|format| match format {
                    cli::ReportFormat::Table => report::OutputFormat::Table,
                    cli::ReportFormat::Md => report::OutputFormat::Md,
                    cli::ReportFormat::Json => report::OutputFormat::Json,
                    cli::ReportFormat::Csv => report::OutputFormat::Csv,
                })
                .unwrap_or_else(|| loaded.output_format().into());
            let options = report::RenderOptions {
                chart: loaded.chart_enabled() && !cmd.no_chart,
                chart_width: loaded.chart_width(),
            };
            let rendered = report::render(&report, format, options)?;
            print!("{rendered}");
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Check(cmd) => {
            let request = request::load_request(&cmd.request)?;
            validate::validate(&request)?;
            println!(
                "ok: {} subject(s), {} hours",
                request.subjects.len(),
                request.total_hours
            );
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Serve(cmd) => {
            let addr = match cmd.addr {
                Some(addr) => addr,
                None => loaded.server_addr()?,
            };
            let runtime = tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .build()?;
            runtime.block_on(server::serve(addr, loaded))?;
            Ok(exit_code::SUCCESS)
        }
    }
}

fn main() {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    match run(cli) {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(PlannerError::Validation(err)) => {
            eprintln!("error: invalid request");
            for issue in &err.issues {
                eprintln!("  - {issue}");
            }
            std::process::exit(exit_code::INVALID_INPUT);
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
