// crates/ident-rig-cli/src/main.rs
// ============================================================================
// Module: ident-rig CLI Entry Point
// Description: Command dispatcher for the standalone fake record service.
// Purpose: Start the service on loopback and block until interrupted.
// Dependencies: clap, ident-rig-server
// ============================================================================

//! ## Overview
//! The ident-rig CLI starts the fake student-records service for manual
//! testing of the identification client: it loads the optional TOML config,
//! applies flag overrides, prints the startup banner, and blocks in the
//! single-threaded serving loop until the process is interrupted.

// ============================================================================
// SECTION: Modules
// ============================================================================


// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io::Write;
use std::net::IpAddr;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Args;
use clap::Parser;
use clap::Subcommand;
use ident_rig_server::RecordServer;
use ident_rig_server::RigConfig;

// ============================================================================
// SECTION: CLI Types
// ============================================================================

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(name = "ident-rig", version, about = "Test rig for the student identification client")]
struct Cli {
    /// Selected subcommand to execute.
    #[command(subcommand)]
    command: Commands,
}

/// Supported CLI subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the fake student-records service.
    Serve(ServeCommand),
}

/// Configuration for the `serve` command.
#[derive(Args, Debug)]
struct ServeCommand {
    /// Host to bind instead of the configured address.
    #[arg(long, value_name = "HOST")]
    host: Option<IpAddr>,
    /// Port to bind instead of the configured port.
    #[arg(long, value_name = "PORT")]
    port: Option<u16>,
    /// Path to a TOML configuration file.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// CLI failure carrying a user-facing message.
#[derive(Debug)]
struct CliError {
    /// Message printed to stderr before exiting.
    message: String,
}

impl CliError {
    /// Creates a CLI error from any displayable message.
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Result alias for CLI command handlers.
type CliResult<T> = Result<T, CliError>;

// ============================================================================
// SECTION: Entry Point
// ============================================================================

/// CLI entry point returning an exit code.
fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(err) => {
            let _ = write_stderr_line(&err.message);
            ExitCode::FAILURE
        }
    }
}

/// Parses arguments and dispatches the selected subcommand.
fn run() -> CliResult<ExitCode> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Serve(command) => command_serve(&command),
    }
}

// ============================================================================
// SECTION: Serve Command
// ============================================================================

/// Executes the `serve` command.
fn command_serve(command: &ServeCommand) -> CliResult<ExitCode> {
    let mut config = RigConfig::load(command.config.as_deref())
        .map_err(|err| CliError::new(format!("failed to load config: {err}")))?;
    apply_bind_overrides(&mut config, command.host, command.port);

    let server = RecordServer::bind(config.bind).map_err(|err| CliError::new(err.to_string()))?;
    let addr = server.local_addr().unwrap_or(config.bind);
    write_stdout_line(&format!("Starting server at {addr}"))
        .map_err(|err| CliError::new(output_error("stdout", &err)))?;
    write_stdout_line("Press ^C (Ctrl-c) to abort.")
        .map_err(|err| CliError::new(output_error("stdout", &err)))?;

    server.serve_forever().map_err(|err| CliError::new(err.to_string()))?;
    Ok(ExitCode::SUCCESS)
}

/// Applies host/port flag overrides onto the loaded configuration.
fn apply_bind_overrides(config: &mut RigConfig, host: Option<IpAddr>, port: Option<u16>) {
    if let Some(host) = host {
        config.bind.set_ip(host);
    }
    if let Some(port) = port {
        config.bind.set_port(port);
    }
}

// ============================================================================
// SECTION: Output Helpers
// ============================================================================

/// Writes a single line to stdout.
fn write_stdout_line(message: &str) -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    writeln!(&mut stdout, "{message}")
}

/// Writes a single line to stderr.
fn write_stderr_line(message: &str) -> std::io::Result<()> {
    let mut stderr = std::io::stderr();
    writeln!(&mut stderr, "{message}")
}

/// Formats an output-stream failure message.
fn output_error(stream: &str, err: &std::io::Error) -> String {
    format!("failed to write to {stream}: {err}")
}
