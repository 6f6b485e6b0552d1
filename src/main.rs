mod config;
mod logging;
mod models;
mod run;
mod store;
mod ui;

use anyhow::Result;
use clap::Parser;

use config::{Cli, Settings};
use store::TransactionStore;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = Settings::from_cli(&cli)?;
    logging::init(&settings)?;

    let mut store = if settings.load_examples {
        TransactionStore::with_examples(settings.items_per_page)
    } else {
        TransactionStore::new(settings.items_per_page)
    };
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        page_size = store.items_per_page(),
        transactions = store.len(),
        "starting expense-tracker"
    );

    match &cli.command {
        None => run::as_tui(store),
        Some(command) => run::as_cli(command, &mut store),
    }
}
