#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use pi4_bench::sweep::FailurePolicy;
use pi4_bench::sweep_cmd::SweepOverrides;
use pi4_bench::{check_cmd, env_cmd, sweep_cmd};

#[derive(Parser, Debug)]
#[command(name = "pi4-bench")]
#[command(about = "Benchmark harness for the Pi4 type checker", long_about = None)]
struct Cli {
    /// Enable verbose logging (or set PI4_BENCH_LOG)
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the full benchmark sweep and write the result CSV
    Sweep {
        /// Path to a TOML sweep config (defaults to the built-in catalog)
        #[arg(long)]
        config: Option<std::path::PathBuf>,
        /// Path to the checker executable
        #[arg(long)]
        checker: Option<std::path::PathBuf>,
        /// Directory holding the .pi4/.pi4_type artifact pairs
        #[arg(long)]
        programs_dir: Option<std::path::PathBuf>,
        /// Output CSV path (overwritten)
        #[arg(long)]
        out: Option<std::path::PathBuf>,
        /// Repetitions per configuration
        #[arg(long)]
        rounds: Option<u32>,
        /// Per-invocation timeout in seconds (0 = none)
        #[arg(long)]
        timeout: Option<u64>,
        /// What to do when the checker exits non-zero
        #[arg(long, value_enum)]
        on_failure: Option<FailurePolicy>,
    },

    /// Print the sweep plan without running anything
    List {
        /// Path to a TOML sweep config (defaults to the built-in catalog)
        #[arg(long)]
        config: Option<std::path::PathBuf>,
    },

    /// Run the checker once over a program and print the reported runtime
    Check {
        /// Path to the .pi4 program file
        program: std::path::PathBuf,
        /// Path to the .pi4_type annotation file (defaults to the program
        /// path with the .pi4_type extension)
        #[arg(long, short = 't')]
        types: Option<std::path::PathBuf>,
        /// Path to the checker executable
        #[arg(long)]
        checker: Option<std::path::PathBuf>,
        /// Timeout in seconds (0 = none)
        #[arg(long, default_value_t = 0)]
        timeout: u64,
        /// Flags passed through to the checker verbatim
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        flags: Vec<String>,
    },

    /// Print host environment info as JSON
    Env {
        /// Checker executable to probe for a version
        #[arg(long)]
        checker: Option<std::path::PathBuf>,
    },
}

fn init_tracing(verbose: bool) {
    let env = std::env::var("PI4_BENCH_LOG").unwrap_or_else(|_| {
        if verbose {
            "pi4_bench=debug".to_string()
        } else {
            "pi4_bench=info".to_string()
        }
    });
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_env_filter(EnvFilter::new(env))
        .try_init();
}

fn main() {
    color_eyre::install().ok();
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Sweep {
            config,
            checker,
            programs_dir,
            out,
            rounds,
            timeout,
            on_failure,
        } => sweep_cmd::run(
            config,
            SweepOverrides {
                checker,
                programs_dir,
                out,
                rounds,
                timeout_secs: timeout,
                on_failure,
            },
        ),
        Commands::List { config } => sweep_cmd::list(config),
        Commands::Check {
            program,
            types,
            checker,
            timeout,
            flags,
        } => check_cmd::run(program, types, checker, timeout, flags),
        Commands::Env { checker } => env_cmd::run(checker),
    };

    if let Err(e) = result {
        eprintln!("{:#}", e);
        std::process::exit(1);
    }
}
