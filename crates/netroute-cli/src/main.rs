//! netroute CLI - Network routing simulator.
//!
//! # Commands
//!
//! - `netroute route` - Fastest route between two nodes
//! - `netroute simulate` - Route before and after a link failure
//! - `netroute table` - Latency and route to every node
//!
//! # Examples
//!
//! ```bash
//! # Fastest route on the built-in four-city network
//! netroute route --from Ottawa --to Toronto
//!
//! # Same route with the Ottawa-Kingston link down
//! netroute route --from Ottawa --to Toronto --cut Ottawa:Kingston
//!
//! # Routing table over a custom topology
//! netroute table --topology backbone.toml --from core1
//! ```

use std::io;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing_subscriber::EnvFilter;

mod commands;
mod error;

use commands::{load_network, route, simulate, table};
use error::CliResult;

/// netroute - Shortest-path network routing simulator
#[derive(Parser)]
#[command(name = "netroute")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the fastest route between two nodes
    Route {
        /// Source node
        #[arg(short, long)]
        from: String,

        /// Destination node
        #[arg(short, long)]
        to: String,

        /// Topology file (default: built-in demonstration network)
        #[arg(long)]
        topology: Option<String>,

        /// Links to cut before routing (FROM:TO, repeatable)
        #[arg(short, long)]
        cut: Vec<String>,

        /// Ignore routes longer than this many milliseconds
        #[arg(long)]
        max_latency: Option<f64>,
    },

    /// Route before and after a link failure
    Simulate {
        /// Source node
        #[arg(short, long, default_value = "Ottawa")]
        from: String,

        /// Destination node
        #[arg(short, long, default_value = "Toronto")]
        to: String,

        /// Topology file (default: built-in demonstration network)
        #[arg(long)]
        topology: Option<String>,

        /// Link to cut (FROM:TO)
        #[arg(short, long, default_value = "Ottawa:Kingston")]
        cut: String,
    },

    /// Print latency and route to every node
    Table {
        /// Source node
        #[arg(short, long)]
        from: String,

        /// Topology file (default: built-in demonstration network)
        #[arg(long)]
        topology: Option<String>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

fn setup_logging(verbose: bool, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(io::stderr)
        .init();
}

fn run(command: Commands) -> CliResult<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match command {
        Commands::Route {
            from,
            to,
            topology,
            cut,
            max_latency,
        } => {
            let mut network = load_network(topology.as_deref())?;
            route::execute(&mut network, &from, &to, &cut, max_latency, &mut out)
        }

        Commands::Simulate {
            from,
            to,
            topology,
            cut,
        } => {
            let mut network = load_network(topology.as_deref())?;
            simulate::execute(&mut network, &from, &to, &cut, &mut out)
        }

        Commands::Table { from, topology } => {
            let network = load_network(topology.as_deref())?;
            table::execute(&network, &from, &mut out)
        }

        Commands::Completions { shell } => {
            use clap::CommandFactory;
            clap_complete::generate(shell, &mut Cli::command(), "netroute", &mut out);
            Ok(())
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}
