use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use row_echelon::shell::{SessionSummary, Shell, ShellConfig};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Read matrices from this file instead of stdin
    #[arg(short, long)]
    pub input: Option<PathBuf>,
    /// End every printed result with `;`
    #[arg(short, long, default_value_t = false)]
    pub terminated_output: bool,
    /// Skip the greeting
    #[arg(short, long, default_value_t = false)]
    pub quiet: bool,
}

impl Args {
    fn shell_config(&self) -> ShellConfig {
        ShellConfig {
            greeting: !self.quiet,
            terminated_output: self.terminated_output,
        }
    }
}

fn run_shell(args: &Args) -> Result<SessionSummary> {
    let stdout = io::stdout().lock();
    match &args.input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("opening input file {}", path.display()))?;
            Shell::new(BufReader::new(file), stdout, args.shell_config()).run()
        }
        None => Shell::new(io::stdin().lock(), stdout, args.shell_config()).run(),
    }
}

fn main() {
    let args = Args::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    log::debug!("Running with: {args:?}");
    match run_shell(&args) {
        Ok(summary) => log::info!(
            "session finished: {} reduced, {} rejected",
            summary.accepted,
            summary.rejected
        ),
        Err(err) => {
            eprintln!("ran into shell error: {err:?}");
            process::exit(1)
        }
    }
}
