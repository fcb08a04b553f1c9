//! dr-core - HTML diff report step for automation workflows.
//!
//! Compares two text files and writes a styled HTML report highlighting
//! their differences. Emits a structured result on stdout for the calling
//! orchestrator; logs go to stderr.

use clap::Parser;
use dr_core::exit_codes::ExitCode;
use dr_core::logging::{init_logging, LogLevel};
use dr_core::outcome::{OutputFormat, TaskFailure, TaskReport};
use dr_core::runner::run_task;
use dr_core::task::DiffTask;

/// Compare two text files and write a styled HTML diff report
#[derive(Parser)]
#[command(name = "dr-core")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the "before" file
    #[arg(long)]
    before_file: String,

    /// Path to the "after" file
    #[arg(long)]
    after_file: String,

    /// Human-readable label used in headings and titles
    #[arg(long)]
    label: String,

    /// Path to write the resulting HTML report
    #[arg(long)]
    output_file: String,

    /// Output format for the result payload
    #[arg(long, short = 'f', default_value = "json")]
    format: OutputFormat,

    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Decrease verbosity (quiet mode)
    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.quiet {
        LogLevel::Error
    } else {
        match cli.verbose {
            0 => LogLevel::Info,
            1 => LogLevel::Debug,
            _ => LogLevel::Trace,
        }
    };
    init_logging(level);

    let task = DiffTask {
        before_file: cli.before_file,
        after_file: cli.after_file,
        label: cli.label,
        output_file: cli.output_file,
    };

    // Single error boundary: any failure past validation becomes one
    // structured failure payload on stdout.
    let exit = match task.validate() {
        Err(err) => {
            print_failure(&TaskFailure::new(err.to_string()), cli.format);
            ExitCode::ArgsError
        }
        Ok(()) => match run_task(&task) {
            Ok(report) => {
                print_report(&report, cli.format);
                ExitCode::Created
            }
            Err(err) => {
                print_failure(&TaskFailure::new(err.to_string()), cli.format);
                ExitCode::IoError
            }
        },
    };
    std::process::exit(exit.as_i32());
}

fn print_report(report: &TaskReport, format: OutputFormat) {
    match format {
        OutputFormat::Json => println!("{}", report.to_json()),
        OutputFormat::Summary => println!("{}", report.summary()),
    }
}

fn print_failure(failure: &TaskFailure, format: OutputFormat) {
    match format {
        OutputFormat::Json => println!("{}", failure.to_json()),
        OutputFormat::Summary => println!("{}", failure.summary()),
    }
}
