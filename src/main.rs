use std::io::{stderr, stdout};
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use banking_ledger::actors::LedgerActor;
use banking_ledger::config::Config;
use banking_ledger::ledger::Ledger;
use banking_ledger::report::write_balance_report;
use banking_ledger::rpc;
use banking_ledger::storage::MemoryStorage;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();

    setup_logging(config.log_level);

    let storage = Arc::new(MemoryStorage::new());
    let (ledger, actor) = LedgerActor::spawn(Ledger::new(storage.clone()), config.queue_depth);

    rpc::serve(&config, ledger).await?;

    //NOTE: The server has dropped its handle; wait for the actor to drain whatever is still queued
    actor.await?;

    if config.report {
        info!("Writing balance report");
        write_balance_report(storage.as_ref(), stdout().lock())?;
    }

    Ok(())
}

fn setup_logging(level: LevelFilter) {
    //NOTE: stdout is reserved for the balance report, so logging goes to stderr
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}
