//! Contact Book - Main entry point
//!
//! Boots a session from the configured user directory, then reads search
//! queries from stdin, one per line, and prints the matching rows.

use anyhow::Result;
use contact_book::{
    AsyncSourceClient, Config, ContactSession, ContactStore, Metrics, Row, SourceClient,
};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Logging goes to stderr; stdout carries the rendered rows
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("error"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!("Configuration loaded, source: {}", config.source_url);

    let metrics = Metrics::new();
    let store = ContactStore::with_policy(config.validation_policy()).with_metrics(metrics.clone());
    let source = AsyncSourceClient::new(SourceClient::new(&config).with_metrics(metrics.clone()));

    let mut session = ContactSession::new(store);
    session.bootstrap(&source).await;
    render(&session);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        session.set_query(line.trim_end_matches('\r'));
        render(&session);
    }

    let summary = metrics.summary();
    info!(
        searches = summary.searches_total,
        loaded = summary.contacts_loaded_total,
        load_failures = summary.load_failures_total,
        "Contact Book shutdown complete"
    );
    Ok(())
}

fn render(session: &ContactSession) {
    for row in session.rows() {
        match row {
            Row::Contact(contact) => {
                println!("{}\t{}\t{}", contact.id, contact.display_name(), contact.phone)
            }
            Row::Message { text } => println!("{}", text),
        }
    }
    if let Some(notice) = session.empty_notice() {
        println!("{}", notice);
    }
    println!();
}
