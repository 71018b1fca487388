//! Skoll Command-Line Interface
//!
//! Smoke-verify hybrid annealing tutorial notebooks: execute them end to end
//! in a fresh interpreter, retry the known-transient embedding failure a
//! bounded number of times, and assert on captured cell outputs.

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

use commands::{run, topo};

/// Skoll - notebook smoke verification for hybrid annealing tutorials
#[derive(Parser)]
#[command(name = "skoll")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Execute a notebook with bounded retry and output assertions
    Run {
        /// Notebook file (.ipynb)
        notebook: String,

        /// Wall-clock limit for one whole execution pass, in seconds
        #[arg(short, long, default_value = "200")]
        timeout: u64,

        /// Maximum number of full execution passes
        #[arg(short, long, default_value = "3")]
        retries: u32,

        /// Output assertion, CELL:TEXT for a substring or CELL:/RE/ for a
        /// pattern; repeatable
        #[arg(short, long = "assert")]
        asserts: Vec<String>,

        /// Interpreter executable
        #[arg(long, default_value = "python3", env = "SKOLL_PYTHON")]
        python: String,

        /// Write the executed notebook (outputs attached) to this path
        #[arg(long)]
        save: Option<String>,
    },

    /// Build the working graph of a solver description
    Topo {
        /// Solver hardware description (JSON)
        solver: String,

        /// Render the working graph to this SVG file
        #[arg(long)]
        svg: Option<String>,
    },
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Run {
            notebook,
            timeout,
            retries,
            asserts,
            python,
            save,
        } => run::execute(&notebook, timeout, retries, &asserts, &python, save.as_deref()).await,
        Commands::Topo { solver, svg } => topo::execute(&solver, svg.as_deref()),
    }
}
