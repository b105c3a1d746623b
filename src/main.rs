// src/main.rs
// =============================================================================
// Entry point of the site-sentinel daemon.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging and load the config file
// 3. Build the HTTP fetcher and the notifier
// 4. Run the poll loop forever (or a single cycle with --once)
//
// Exit codes: 2 when startup fails; with --once, 0 for a clean cycle and
// 1 if anything failed. Without --once the process only stops when killed.
// =============================================================================

mod cli;
mod config;
mod crawl;
mod diff;
mod errors;
mod fetch;
mod logging;
mod monitor;
mod notify;
mod snapshot;
#[cfg(test)]
mod testing;
mod types;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use cli::Cli;
use config::Config;
use fetch::HttpFetcher;
use monitor::{CycleSummary, PollCycle, Scheduler};
use notify::{LogNotifier, Notifier, SmtpNotifier};
use snapshot::SnapshotStore;

#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

async fn run() -> Result<i32> {
    let cli = Cli::parse();

    logging::init_logging(cli.log_level)?;

    let cfg = config::load(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    log_startup(&cfg, cli.dry_run);

    let fetcher = HttpFetcher::new(cfg.request_timeout)?;
    let notifier: Box<dyn Notifier> = if cli.dry_run {
        Box::new(LogNotifier)
    } else {
        Box::new(SmtpNotifier::new(&cfg.email).context("setting up SMTP notifier")?)
    };

    let cycle = PollCycle::new(&fetcher, notifier.as_ref());
    let scheduler = Scheduler::new(cfg.poll_interval);
    let mut store = SnapshotStore::new();

    if cli.once {
        let summaries = scheduler.run_cycles(1, &cycle, &cfg.sites, &mut store).await;
        let summary = summaries.into_iter().next().unwrap_or_default();
        print_summary(&summary, cli.json)?;
        return Ok(if summary.has_failures() { 1 } else { 0 });
    }

    scheduler.run(&cycle, &cfg.sites, &mut store).await;
    Ok(0)
}

fn log_startup(cfg: &Config, dry_run: bool) {
    info!("site-sentinel running");
    info!(sender = %cfg.email.sender_email, "sender email");
    info!(recipient = %cfg.email.recipient_email, "recipient email");
    info!(
        server = %cfg.email.smtp_server,
        port = cfg.email.smtp_port,
        dry_run,
        "SMTP server"
    );
    info!(
        sites = cfg.sites.len(),
        interval_secs = cfg.poll_interval.as_secs(),
        "monitoring"
    );
    for site in &cfg.sites {
        info!(site = %site, "watching");
    }
}

// Prints the summary either as a table or JSON
fn print_summary(summary: &CycleSummary, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(summary)?);
        return Ok(());
    }

    println!("{:<24} {:>8}", "METRIC", "COUNT");
    println!("{}", "=".repeat(33));
    let rows = [
        ("sites crawled", summary.sites_crawled),
        ("sites failed", summary.sites_failed),
        ("files fetched", summary.files_fetched),
        ("files failed", summary.files_failed),
        ("files new", summary.files_new),
        ("changes", summary.changes),
        ("notifications sent", summary.notifications_sent),
        ("notifications failed", summary.notifications_failed),
    ];
    for (name, count) in rows {
        println!("{:<24} {:>8}", name, count);
    }
    Ok(())
}
