use anyhow::Context;
use clap::Parser;

use weatherbar::cli::Cli;
use weatherbar::config::Config;
use weatherbar::forecast::ForecastClient;
use weatherbar::logging::init_tracing;
use weatherbar::scheduler;
use weatherbar::segments::SegmentStore;
use weatherbar::ui::events::EventHandler;
use weatherbar::ui::runtime;

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("failed to load configuration")?;

    let store = SegmentStore::new();
    let events = EventHandler::new(runtime::TICK_RATE);
    let client =
        ForecastClient::new(config.api.clone()).context("failed to build the HTTP client")?;

    let tokio_runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start the async runtime")?;
    let refresh_task = tokio_runtime.spawn(scheduler::run(
        client,
        store.clone(),
        events.sender(),
        config.refresh.clone(),
    ));

    let result = runtime::run(store, events);

    refresh_task.abort();
    tokio_runtime.shutdown_background();
    result.context("UI loop failed")
}
