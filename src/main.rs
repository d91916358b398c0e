//! `louvois` command line entry point.
//!
//! Without a subcommand, prints the payroll ledger for the data directory
//! (optionally for a single employee id, given positionally or with
//! `--employee`). `serve` exposes the same ledger
//! over HTTP and `reformat` pretty-prints a JSON document.

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use louvois_ledger::api::{AppState, create_router};
use louvois_ledger::config::DataLoader;
use louvois_ledger::engine::PayrollEngine;
use louvois_ledger::error::{EngineError, EngineResult};
use louvois_ledger::ledger::LedgerWriter;
use louvois_ledger::reformat::reformat_file;

/// Louvois payroll ledger.
///
/// Computes every pay component for each employee in the data directory and
/// prints one comma-separated row per employee.
#[derive(Parser, Debug)]
#[command(name = "louvois", version, about, long_about = None)]
struct Cli {
    /// Only print the row of the employee with this id.
    employee_id: Option<String>,

    /// Same as the positional id; also selects ids such as `serve` that
    /// would otherwise be read as a subcommand.
    #[arg(long = "employee", value_name = "ID", conflicts_with = "employee_id")]
    employee: Option<String>,

    /// Directory holding the input documents.
    #[arg(long, default_value = "data", global = true)]
    data_dir: PathBuf,

    /// Enable verbose logging on stderr. Repeat for more (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl Cli {
    fn employee_filter(&self) -> Option<&str> {
        self.employee.as_deref().or(self.employee_id.as_deref())
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Serve the ledger as JSON over HTTP.
    Serve {
        /// Address to listen on.
        #[arg(long, default_value = "127.0.0.1:3000")]
        addr: String,
    },

    /// Pretty-print a JSON document.
    Reformat {
        /// Document to read.
        input: PathBuf,
        /// Path to write the pretty-printed document to.
        output: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    match &cli.command {
        None => print_ledger(&cli.data_dir, cli.employee_filter()),
        Some(Commands::Serve { addr }) => exit_code(serve(&cli.data_dir, addr)),
        Some(Commands::Reformat { input, output }) => {
            let result = reformat_file(input, output);
            if result.is_ok() {
                println!("Reformatted {} -> {}", input.display(), output.display());
            }
            exit_code(result)
        }
    }
}

/// Prints the ledger, then the runtime line whatever the outcome.
fn print_ledger(data_dir: &Path, employee_id: Option<&str>) -> ExitCode {
    let start_time = Instant::now();
    let mut writer = LedgerWriter::new(io::stdout().lock());

    let result = write_ledger(data_dir, employee_id, &mut writer);
    let message = match &result {
        Err(err @ EngineError::RuleNotFound { .. }) => writer.write_message(&err.to_string()),
        _ => Ok(()),
    };
    let runtime = writer.write_runtime(start_time.elapsed());

    exit_code(result.and(message).and(runtime))
}

fn write_ledger<W: Write>(
    data_dir: &Path,
    employee_id: Option<&str>,
    writer: &mut LedgerWriter<W>,
) -> EngineResult<()> {
    let dataset = DataLoader::new(data_dir).load()?;
    let engine = PayrollEngine::from_dataset(&dataset)?;
    let rows = engine.run(&dataset.employees, employee_id);

    writer.write_header()?;
    writer.write_rows(&rows)
}

fn serve(data_dir: &Path, addr: &str) -> EngineResult<()> {
    let dataset = DataLoader::new(data_dir).load()?;
    let engine = PayrollEngine::from_dataset(&dataset)?;
    let router = create_router(AppState::new(engine, dataset.employees));

    let server_error = |error: io::Error| EngineError::Server {
        addr: addr.to_string(),
        message: error.to_string(),
    };

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(server_error)?;
    runtime.block_on(async {
        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(server_error)?;
        tracing::info!(addr = %addr, "Ledger API listening");
        axum::serve(listener, router).await.map_err(server_error)
    })
}

fn exit_code(result: EngineResult<()>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(EngineError::RuleNotFound { .. }) => ExitCode::from(1),
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::from(1)
        }
    }
}
