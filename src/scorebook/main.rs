use clap::Parser;
use colored::Colorize;
use scorebook::api::ScorebookApi;
use scorebook::config::ScorebookConfig;
use scorebook::error::Result;
use scorebook::input::Terminal;
use scorebook::session::Session;
use scorebook::store::fs::FileStore;
use scorebook::store::DataStore;
use std::io;

mod cli;
use cli::args::Cli;
use cli::setup::{config_dir, init_logging};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "Error".red(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match config_dir(cli.config_dir) {
        Some(dir) => ScorebookConfig::load(dir)?,
        None => ScorebookConfig::default(),
    };
    let truncate = config.truncate_on_open && !cli.keep;

    let mut store = FileStore::open(&cli.file, truncate)?;
    let records = store.record_count()?;
    tracing::info!(path = %store.path().display(), records, "session started");

    let terminal = Terminal::new(io::stdin().lock(), io::stdout(), config.input_limit);
    let mut session = Session::new(ScorebookApi::new(store), terminal, io::stderr());
    session.run()?;

    println!("Exiting...");
    Ok(())
}
