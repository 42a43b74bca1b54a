//! Rendering of scan results.

use owo_colors::Style;
use rust_decimal::Decimal;
use serde_json::json;
use tabled::{Table, Tabled};

use crate::adapter::inbound::cli::output;
use crate::application::scanner::{ScanReport, SportOutcome};
use crate::domain::{ArbitrageOpportunity, MarketKind, OpportunityLeg};
use crate::error::Result;

const SEPARATOR: &str = "===============================";

#[derive(Tabled)]
struct SportRow {
    #[tabled(rename = "Sport")]
    sport: String,
    #[tabled(rename = "Events")]
    events: String,
    #[tabled(rename = "Opportunities")]
    opportunities: usize,
    #[tabled(rename = "Status")]
    status: String,
}

/// Outcome label with its line, e.g. `Lakers +6.5` or `Over 220.5`.
pub fn leg_label(leg: &OpportunityLeg, kind: MarketKind) -> String {
    match (leg.point, kind) {
        (Some(point), MarketKind::Spreads) if point > Decimal::ZERO => {
            format!("{} +{}", leg.label, point.normalize())
        }
        (Some(point), MarketKind::Spreads | MarketKind::Totals) => {
            format!("{} {}", leg.label, point.normalize())
        }
        _ => leg.label.clone(),
    }
}

/// `ARBITRAGE FOUND — SPORT — TYPE`
pub fn headline(opportunity: &ArbitrageOpportunity) -> String {
    format!(
        "ARBITRAGE FOUND — {} — {}",
        opportunity.sport().as_str().to_uppercase(),
        opportunity.kind().as_str().to_uppercase()
    )
}

/// Plain-text body of one opportunity, headline excluded.
pub fn body_lines(opportunity: &ArbitrageOpportunity, bankroll: Option<Decimal>) -> Vec<String> {
    let [first, second] = opportunity.legs();
    let stakes = opportunity.stakes();
    let first_label = leg_label(first, opportunity.kind());
    let second_label = leg_label(second, opportunity.kind());

    let mut lines = vec![
        format!(
            "{} @ {}  ({})",
            opportunity.away_team(),
            opportunity.home_team(),
            opportunity.market()
        ),
        format!("{} @ {} : {}", first_label, first.book, first.price),
        format!("{} @ {} : {}", second_label, second.book, second.price),
        String::new(),
        "Stake Percentages:".to_string(),
        format!("  {}: {:.2}%", first_label, stakes.first_pct.round_dp(2)),
        format!("  {}: {:.2}%", second_label, stakes.second_pct.round_dp(2)),
    ];

    if let Some(bankroll) = bankroll {
        lines.push(String::new());
        match (stakes.amounts(bankroll), stakes.guaranteed_return(bankroll)) {
            (Some((first_amount, second_amount)), Some(payout)) => {
                lines.push(format!("Stakes for {bankroll}:"));
                lines.push(format!("  {}: {first_amount:.2}", first_label));
                lines.push(format!("  {}: {second_amount:.2}", second_label));
                lines.push(format!("  Guaranteed return: {payout:.2}"));
            }
            _ => lines.push(format!("Stakes for {bankroll}: out of range")),
        }
    }

    lines.push(String::new());
    lines.push(format!(
        "Profit Margin: {:.3}%",
        opportunity.profit_pct().round_dp(3)
    ));
    lines
}

/// Print one opportunity.
///
/// Shown in quiet mode too; it is the command's actual output.
pub fn opportunity(opportunity: &ArbitrageOpportunity, bankroll: Option<Decimal>) -> Result<()> {
    if output::is_json() {
        let mut payload = serde_json::to_value(opportunity)?;
        if let (Some(bankroll), Some(map)) = (bankroll, payload.as_object_mut()) {
            let stakes = opportunity.stakes();
            map.insert(
                "bankroll".into(),
                json!({
                    "amount": bankroll,
                    "stakes": stakes.amounts(bankroll).map(|(first, second)| [first, second]),
                    "guaranteed_return": stakes.guaranteed_return(bankroll),
                }),
            );
        }
        output::emit_json_line("opportunity", payload);
        return Ok(());
    }

    println!();
    println!("{}", output::paint(SEPARATOR, Style::new().dimmed()));
    println!(
        "{}",
        output::paint(headline(opportunity), Style::new().bold().yellow())
    );
    for line in body_lines(opportunity, bankroll) {
        println!("{line}");
    }
    Ok(())
}

/// Print the per-sport summary table and totals.
pub fn summary(report: &ScanReport) {
    if output::is_json() {
        let sports: Vec<serde_json::Value> = report
            .sports()
            .iter()
            .map(|scan| match &scan.outcome {
                SportOutcome::Completed {
                    events,
                    opportunities,
                } => json!({
                    "sport": scan.sport,
                    "status": "ok",
                    "events": events,
                    "opportunities": opportunities.len(),
                }),
                SportOutcome::Failed { error } => json!({
                    "sport": scan.sport,
                    "status": "failed",
                    "error": error,
                }),
            })
            .collect();
        output::emit_json_line(
            "summary",
            json!({
                "sports": sports,
                "events": report.event_count(),
                "opportunities": report.opportunity_count(),
                "failed": report.failed_count(),
            }),
        );
        return;
    }

    for scan in report.sports() {
        if let SportOutcome::Failed { error } = &scan.outcome {
            output::warning(&format!("{}: {error}", scan.sport));
        }
    }

    if output::is_quiet() {
        return;
    }

    let rows: Vec<SportRow> = report
        .sports()
        .iter()
        .map(|scan| match &scan.outcome {
            SportOutcome::Completed {
                events,
                opportunities,
            } => SportRow {
                sport: scan.sport.to_string(),
                events: events.to_string(),
                opportunities: opportunities.len(),
                status: "ok".to_string(),
            },
            SportOutcome::Failed { .. } => SportRow {
                sport: scan.sport.to_string(),
                events: "-".to_string(),
                opportunities: 0,
                status: "failed".to_string(),
            },
        })
        .collect();

    output::section("Summary");
    output::lines(&Table::new(rows).to_string());
    output::field("Events", report.event_count());
    output::field(
        "Opportunities",
        output::positive(report.opportunity_count()),
    );
    if report.failed_count() > 0 {
        output::field("Failed sports", report.failed_count());
    }
}
