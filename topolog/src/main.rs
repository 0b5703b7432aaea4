use clap::{Parser, Subcommand};
use std::path::PathBuf;
use topolog_core::cli;
use topolog_core::logging::{LogMode, init_logging};

#[derive(Parser, Debug)]
#[command(
    name = "topolog",
    version,
    about = "topolog: live log table and IoT topology from a log stream"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Configuration tooling
    Config {
        #[command(subcommand)]
        cmd: cli::conf::ConfigCmd,
    },

    /// Follow the configured source and render (default)
    Watch {
        /// Path to the topolog config file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Append rows instead of redrawing the screen
        #[arg(long)]
        plain: bool,
    },

    /// Replay newline-delimited records from stdin
    Replay {
        #[arg(long)]
        config: Option<PathBuf>,

        /// Print the final topology as JSON instead of the log table
        #[arg(long)]
        topology: bool,

        #[arg(long)]
        plain: bool,
    },
}

fn table_mode(plain: bool) -> LogMode {
    LogMode::for_stdout(plain)
}

fn runtime() -> tokio::runtime::Runtime {
    match tokio::runtime::Builder::new_multi_thread().enable_all().build() {
        Ok(rt) => rt,
        Err(e) => fail("failed to start runtime", e),
    }
}

fn fail(context: &str, err: impl std::fmt::Display) -> ! {
    eprintln!("{context}: {err}");
    std::process::exit(1);
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Some(Command::Config { cmd }) => {
            if let Err(e) = cli::conf::run(cmd) {
                fail("config error", format!("{e:#}"));
            }
        }

        Some(Command::Replay {
            config,
            topology,
            plain,
        }) => {
            init_logging();

            let result = runtime().block_on(cli::replay::run_replay(
                config.as_deref(),
                topology,
                table_mode(plain),
            ));
            if let Err(e) = result {
                fail("replay failed", format!("{e:#}"));
            }
        }

        Some(Command::Watch { config, plain }) => {
            init_logging();

            let result =
                runtime().block_on(cli::watch::run_watch(config.as_deref(), table_mode(plain)));
            if let Err(e) = result {
                fail("watch failed", format!("{e:#}"));
            }
        }

        None => {
            init_logging();

            let result = runtime().block_on(cli::watch::run_watch(None, table_mode(false)));
            if let Err(e) = result {
                fail("watch failed", format!("{e:#}"));
            }
        }
    }
}
