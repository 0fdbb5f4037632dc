//! Counter example binary
//!
//! A terminal rendition of the counter page: type a command, the view
//! re-renders from the store.

use counter::app::make_store;
use counter::command::{Command, HELP};
use counter::config::CounterConfig;
use counter::view::CounterView;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine
    let _ = dotenvy::dotenv();
    let config = CounterConfig::from_env()?;

    // Initialize tracing
    tracing_subscriber::registry()
        .with(EnvFilter::try_new(&config.log_filter)?)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!(add_amount = config.add_amount, "Starting counter");

    let store = make_store();
    let mut view = CounterView::mount(&store, config.add_amount).await;

    println!("=== Counter ===\n");
    println!("{}\n", view.render());
    println!("{HELP}\n");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(error) => {
                println!("{error}");
                continue;
            },
        };

        match command {
            Command::Quit => break,
            Command::Help => println!("{HELP}"),
            command => {
                view.dispatch(command).await?;
            },
        }

        if view.is_dirty() {
            println!("\n{}\n", view.render());
        }
    }

    view.unmount();
    store.shutdown(Duration::from_secs(1)).await?;
    tracing::info!("Counter stopped");
    Ok(())
}
