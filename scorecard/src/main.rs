use anyhow::{Context, Result};
use clap::Parser;
use scorecard::{
    BatchNotification, Cli, Config, DashboardNotifier, JsonDocumentStore, Orchestrator,
    RecordSource, Reporter, TerminalReporter,
};
use std::path::Path;
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load config and apply CLI overrides
    let mut config = Config::load_from(Some(Path::new(&cli.config)).filter(|p| p.exists()))?;
    cli.apply_to_config(&mut config);

    if cli.verbose {
        eprintln!("Configuration: {:?}", config);
    }

    // 1. Fetch the document
    eprintln!("Fetching document '{}'...", cli.document);
    let store = JsonDocumentStore::new(config.store.root.clone());
    let document = store
        .fetch(&cli.document)
        .context("Failed to fetch scorecard document")?;

    let document_id = document.id.clone();
    let title = document.title.clone();

    // 2. Evaluate all cells
    eprintln!("Evaluating {} cell(s)...", document.cells.len());
    let orchestrator = Orchestrator::new(
        config.orchestration.workers,
        config.significance.thresholds(),
    );
    let outcomes = orchestrator
        .run(document)
        .await
        .context("Failed to evaluate scorecard")?;

    // 3. Report results
    let reporter = if cli.no_color {
        TerminalReporter::without_colors()
    } else {
        TerminalReporter::new()
    };
    reporter.report(&title, &outcomes)?;

    // 4. Notify the dashboard (best-effort)
    if let Some(url) = &config.notify.dashboard_url {
        eprintln!("Notifying dashboard...");
        let notifier = DashboardNotifier::new(url, Duration::from_millis(config.notify.timeout_ms))?;
        let notification = BatchNotification::from_outcomes(&document_id, &outcomes);
        if let Err(e) = notifier.notify(&notification).await {
            eprintln!("Dashboard notification failed: {}", e);
        }
    }

    Ok(())
}
