//! LS-8 virtual machine CLI.
//!
//! This binary provides a single entry point for running LS-8 programs. It performs:
//! 1. **Run:** Load a `.ls8` program, attach the stdin keyboard, and run to completion.
//! 2. **List:** Show the program files available in a directory.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use ls8_core::config::Config;
use ls8_core::sim::loader;
use ls8_core::{ExitReason, Simulator};

/// Exit status for a run that faulted.
const EXIT_FAULT: u8 = 1;
/// Exit status for configuration and load failures.
const EXIT_LOAD: u8 = 2;

#[derive(Parser, Debug)]
#[command(
    name = "ls8",
    author,
    version,
    about = "LS-8 8-bit virtual machine",
    long_about = "Run LS-8 programs written as one binary byte per line.\n\nExamples:\n  ls8 run programs/print8.ls8\n  ls8 run programs/interrupts.ls8 --max-cycles 100000 --stats\n  ls8 list programs"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Load and run a program.
    Run {
        /// Program file (`.ls8`).
        program: PathBuf,

        /// JSON configuration file.
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Log every executed instruction.
        #[arg(long)]
        trace: bool,

        /// Print run statistics to stderr when the run ends.
        #[arg(long)]
        stats: bool,

        /// Do not listen for key presses on stdin.
        #[arg(long)]
        no_keyboard: bool,

        /// Stop after this many cycles.
        #[arg(long)]
        max_cycles: Option<u64>,
    },

    /// List the program files in a directory.
    List {
        /// Directory to search.
        #[arg(default_value = ".")]
        dir: PathBuf,
    },
}

/// Options for a single `run` invocation.
struct RunArgs {
    program: PathBuf,
    config: Option<PathBuf>,
    trace: bool,
    stats: bool,
    no_keyboard: bool,
    max_cycles: Option<u64>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            program,
            config,
            trace,
            stats,
            no_keyboard,
            max_cycles,
        } => cmd_run(&RunArgs {
            program,
            config,
            trace,
            stats,
            no_keyboard,
            max_cycles,
        }),
        Commands::List { dir } => cmd_list(&dir),
    }
}

/// Installs the stderr log subscriber. `RUST_LOG` wins unless `--trace` is given.
fn init_logging(trace: bool) {
    let filter = if trace {
        EnvFilter::new("trace")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Loads the program, runs it, and maps the outcome to an exit status.
fn cmd_run(args: &RunArgs) -> ExitCode {
    init_logging(args.trace);

    let mut config = match &args.config {
        Some(path) => match Config::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("[!] {e}");
                return ExitCode::from(EXIT_LOAD);
            }
        },
        None => Config::default(),
    };
    if args.trace {
        config.general.trace_instructions = true;
    }
    if args.max_cycles.is_some() {
        config.general.max_cycles = args.max_cycles;
    }

    let mut sim = Simulator::new(&config);
    info!(program = %args.program.display(), "loading program");
    if let Err(e) = sim.load_file(&args.program) {
        eprintln!("[!] {e}");
        return ExitCode::from(EXIT_LOAD);
    }

    if !args.no_keyboard {
        if let Err(e) = sim.attach_stdin_keyboard() {
            eprintln!("[!] keyboard unavailable: {e}");
        }
    }

    let status = match sim.run() {
        Ok(reason) => {
            if reason != ExitReason::Halted {
                eprintln!("[*] run ended: {reason:?}");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("[!] FATAL: {e}");
            eprintln!("    regs: {}", sim.cpu.regs.dump());
            ExitCode::from(EXIT_FAULT)
        }
    };

    if args.stats {
        sim.cpu.stats.print();
    }
    status
}

/// Prints every `.ls8` file in `dir`, one per line.
fn cmd_list(dir: &Path) -> ExitCode {
    init_logging(false);
    match loader::list_programs(dir) {
        Ok(programs) => {
            for path in programs {
                println!("{}", path.display());
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("[!] {e}");
            ExitCode::from(EXIT_LOAD)
        }
    }
}
