//! Handlers for `scan` and `replay`.
//!
//! Both run the same pipeline; they differ only in the feed behind the
//! scanner.

use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::info;

use crate::adapter::inbound::cli::command::{ReplayArgs, ScanArgs};
use crate::adapter::inbound::cli::{config, output, report};
use crate::application::scanner::{ScanReport, Scanner};
use crate::domain::SportKey;
use crate::error::{FeedError, Result};
use crate::infrastructure::bootstrap;

/// Execute `scan` against the live feed.
pub async fn execute_scan(args: &ScanArgs) -> Result<()> {
    let config = config::resolve(&args.detection)?;
    config.init_logging();

    let feed = bootstrap::build_live_feed(&config)?;
    let scanner = bootstrap::build_scanner(&config, feed);

    run(&scanner, &config.sports, args.detection.bankroll).await
}

/// Execute `replay` over a saved dump.
///
/// Without `--sport`, every sport present in the dump is replayed.
pub async fn execute_replay(args: &ReplayArgs) -> Result<()> {
    let config = config::resolve(&args.detection)?;
    config.init_logging();

    let feed = bootstrap::build_replay_feed(&args.file)?;
    let sports = if args.detection.sports.is_empty() {
        feed.sports()
    } else {
        config.sports.clone()
    };
    let scanner = bootstrap::build_scanner(&config, Arc::new(feed));

    run(&scanner, &sports, args.detection.bankroll).await
}

async fn run(scanner: &Scanner, sports: &[SportKey], bankroll: Option<Decimal>) -> Result<()> {
    info!(sports = sports.len(), "Scan starting");
    output::header(env!("CARGO_PKG_VERSION"));

    let pb = output::spinner(&format!("Scanning {} sport(s)", sports.len()));
    let scan = scanner.scan(sports).await;
    finish_spinner(&pb, &scan);

    for opportunity in scan.opportunities() {
        report::opportunity(opportunity, bankroll)?;
    }
    report::summary(&scan);

    if scan.all_failed() {
        return Err(FeedError::AllSportsFailed {
            count: scan.sports().len(),
        }
        .into());
    }
    if scan.opportunity_count() == 0 {
        output::note("No arbitrage opportunities found");
    }
    Ok(())
}

fn finish_spinner(pb: &indicatif::ProgressBar, scan: &ScanReport) {
    let message = format!(
        "Scanned {} sport(s), {} event(s)",
        scan.sports().len(),
        scan.event_count()
    );
    if scan.all_failed() {
        output::spinner_fail(pb, &message);
    } else {
        output::spinner_success(pb, &message);
    }
}
