#![forbid(unsafe_code)]

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use crate::config;
use crate::repl;
use crate::task::store::TaskStore;

#[derive(Debug, Parser)]
#[command(
    name = "tasktab",
    version,
    about = "Interactive tracker for a bounded task table"
)]
pub struct Cli {
    /// Task database file (overrides storage.path from the config file)
    #[arg(short = 'f', long = "file")]
    pub file: Option<PathBuf>,
}

pub fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::from(1)
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let cfg = config::load()?;
    let path = match cli.file {
        Some(path) => path,
        None => config::resolve_storage_path(&cfg)?,
    };

    let store = TaskStore::new(path);
    store.ensure_initialized()?;
    // A database that cannot be parsed is a startup failure; commands never
    // get a chance to run against corrupt state.
    store.load()?;

    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    repl::run(&store, stdin, stdout)
}
