use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn fixture() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/odds_dump.json")
}

/// Binary run from an empty directory so no stray config.toml or .env leaks in.
fn oddsarb(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("oddsarb").expect("binary built");
    cmd.current_dir(dir.path())
        .env_remove("ODDS_API_KEY")
        .env_remove("RUST_LOG")
        .arg("--color")
        .arg("never");
    cmd
}

#[test]
fn replay_reports_cross_book_opportunities() {
    let dir = tempfile::tempdir().unwrap();
    oddsarb(&dir)
        .arg("replay")
        .arg(fixture())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "ARBITRAGE FOUND — BASKETBALL_NBA — H2H",
        ))
        .stdout(predicate::str::contains("Lakers @ FanDuel : +105"))
        .stdout(predicate::str::contains("Celtics @ DraftKings : +102"))
        .stdout(predicate::str::contains("Profit Margin: 1.715%"))
        .stdout(predicate::str::contains(
            "ARBITRAGE FOUND — ICEHOCKEY_NHL — SPREADS",
        ))
        .stdout(predicate::str::contains("Bruins -1.5 @ BetMGM : +180"))
        .stdout(predicate::str::contains("Rangers +1.5 @ Caesars : -160"))
        .stdout(predicate::str::contains("Profit Margin: 2.747%"))
        .stdout(predicate::str::contains("TOTALS").not());
}

#[test]
fn replay_filters_by_sport() {
    let dir = tempfile::tempdir().unwrap();
    oddsarb(&dir)
        .args(["replay", "--sport", "icehockey_nhl"])
        .arg(fixture())
        .assert()
        .success()
        .stdout(predicate::str::contains("ICEHOCKEY_NHL"))
        .stdout(predicate::str::contains("BASKETBALL_NBA").not());
}

#[test]
fn replay_applies_margin_ceiling_override() {
    let dir = tempfile::tempdir().unwrap();
    oddsarb(&dir)
        .args(["replay", "--max-arb-pct", "1.5"])
        .arg(fixture())
        .assert()
        .success()
        .stdout(predicate::str::contains("ARBITRAGE FOUND").not())
        .stdout(predicate::str::contains("No arbitrage opportunities found"));
}

#[test]
fn replay_prints_stakes_for_bankroll() {
    let dir = tempfile::tempdir().unwrap();
    oddsarb(&dir)
        .args(["replay", "--sport", "basketball_nba", "--bankroll", "1000"])
        .arg(fixture())
        .assert()
        .success()
        .stdout(predicate::str::contains("Lakers: 49.63%"))
        .stdout(predicate::str::contains("Celtics: 50.37%"))
        .stdout(predicate::str::contains("Lakers: 496.31"))
        .stdout(predicate::str::contains("Guaranteed return: 1017.44"));
}

#[test]
fn replay_rejects_non_positive_bankroll() {
    let dir = tempfile::tempdir().unwrap();
    oddsarb(&dir)
        .args(["replay", "--bankroll", "0"])
        .arg(fixture())
        .assert()
        .failure()
        .stderr(predicate::str::contains("greater than zero"));
}

#[test]
fn replay_json_emits_one_object_per_line() {
    let dir = tempfile::tempdir().unwrap();
    let output = oddsarb(&dir)
        .args(["--json", "replay"])
        .arg(fixture())
        .output()
        .expect("run oddsarb");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<serde_json::Value> = stdout
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| serde_json::from_str(line).expect("valid JSON line"))
        .collect();

    let opportunities: Vec<&serde_json::Value> = lines
        .iter()
        .filter(|line| line["type"] == "opportunity")
        .collect();
    assert_eq!(opportunities.len(), 2);
    assert_eq!(opportunities[0]["payload"]["sport"], "basketball_nba");
    assert_eq!(opportunities[0]["payload"]["market"]["type"], "head_to_head");
    assert_eq!(opportunities[1]["payload"]["market"]["type"], "spreads");

    let summary = lines
        .iter()
        .find(|line| line["type"] == "summary")
        .expect("summary line");
    assert_eq!(summary["payload"]["opportunities"], 2);
    assert_eq!(summary["payload"]["events"], 2);
}

#[test]
fn replay_missing_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    oddsarb(&dir)
        .args(["replay", "does-not-exist.json"])
        .assert()
        .failure();
}

#[test]
fn replay_rejects_non_dump_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dump.json");
    fs::write(&path, "42").unwrap();

    oddsarb(&dir)
        .arg("replay")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid feed dump"));
}

#[test]
fn scan_without_api_key_fails() {
    let dir = tempfile::tempdir().unwrap();
    oddsarb(&dir)
        .arg("scan")
        .assert()
        .failure()
        .stderr(predicate::str::contains("ODDS_API_KEY"));
}

#[test]
fn cli_returns_nonzero_on_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[detection]\nmax_abs_odds = 50\n").unwrap();

    oddsarb(&dir)
        .args(["config", "validate", "--config"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("max_abs_odds"));
}

#[test]
fn config_init_then_validate() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("generated.toml");

    oddsarb(&dir)
        .args(["config", "init"])
        .arg(&path)
        .assert()
        .success();
    assert!(path.exists());

    oddsarb(&dir)
        .args(["config", "validate", "-c"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Config file is valid"));

    oddsarb(&dir)
        .args(["config", "init"])
        .arg(&path)
        .assert()
        .failure();
}

#[test]
fn config_show_lists_sports() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "sports = [\"baseball_mlb\"]\n").unwrap();

    oddsarb(&dir)
        .args(["config", "show", "-c"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("baseball_mlb"))
        .stdout(predicate::str::contains("ODDS_API_KEY not set"));
}
