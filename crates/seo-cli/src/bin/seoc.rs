//! Seoggi CLI Binary
//!
//! The command-line interface for `seoc`, the Seoggi bootstrap compiler. It
//! rewrites a `.seo` source file line by line into a host language and
//! prefixes the fixed runtime prelude the translated code relies on.
//!
//! # Usage
//!
//! ```bash
//! # Translate to Python (default target), writing build/seoggi.py
//! seoc hello.seo
//!
//! # Translate to Rust at an explicit location
//! seoc hello.seo --target rust --output hello.rs
//!
//! # Keep a JSON record of dropped lines
//! seoc hello.seo --report build/report.json
//! ```

use clap::{Parser, ValueEnum};
use console::style;
use seo_cli::commands::{compile_command, CompileArgs};
use seo_cli::Result;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "seoc",
    version = env!("CARGO_PKG_VERSION"),
    about = "Seoggi bootstrap compiler: line-granular translation to a host language",
    long_about = r#"
seoc rewrites Seoggi declarations into a host language one line at a time and
prefixes a fixed runtime prelude. Structure and function bodies are not
translated yet; lines no rule recognizes are dropped and reported.

EXAMPLES:
    seoc hello.seo                        # Python output in build/seoggi.py
    seoc hello.seo --target rust          # Rust output in build/seoggi.rs
    seoc hello.seo --strict               # Fail instead of dropping lines
    "#
)]
struct Cli {
    #[command(flatten)]
    compile: CompileArgs,

    /// Enable verbose logging (use multiple times for increased verbosity)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long)]
    quiet: bool,

    /// Set log level (overrides --verbose/--quiet)
    #[arg(long, value_enum)]
    log: Option<LogLevel>,

    /// Set log output format
    #[arg(long, value_enum, default_value = "pretty")]
    log_format: LogFormat,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum LogFormat {
    Pretty,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Configure logging
    setup_logging(cli.verbose, cli.quiet, cli.log, cli.log_format)?;

    match compile_command(cli.compile) {
        Ok(()) => {
            if cli.verbose > 0 {
                info!("Command completed successfully");
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("{} {}", style("✗").red(), e);
            std::process::exit(1);
        }
    }
}

fn setup_logging(
    verbose: u8,
    quiet: bool,
    log_level: Option<LogLevel>,
    log_format: LogFormat,
) -> Result<()> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = if let Some(level) = log_level {
        EnvFilter::new(match level {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        })
    } else if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("warn"),
            1 => EnvFilter::new("info"),
            2 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    let formatter = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_timer(tracing_subscriber::fmt::time::uptime())
        .with_level(true);

    match log_format {
        LogFormat::Pretty => {
            tracing_subscriber::registry()
                .with(formatter)
                .with(filter)
                .init();
        }
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(formatter.json())
                .with(filter)
                .init();
        }
    }

    Ok(())
}
