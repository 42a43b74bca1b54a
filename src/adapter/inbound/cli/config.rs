//! Handler for the `config` command group, plus config resolution shared by
//! `scan` and `replay`.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use crate::adapter::inbound::cli::command::{DetectionArgs, DEFAULT_CONFIG};
use crate::adapter::inbound::cli::output;
use crate::adapter::outbound::oddsapi::settings::API_KEY_ENV;
use crate::domain::{BookName, SportKey};
use crate::error::{ConfigError, Result};
use crate::infrastructure::config::settings::Config;

/// Default config template with documentation.
const CONFIG_TEMPLATE: &str = include_str!("../../../../config.toml.example");

/// Load the configuration a detection run should use and apply CLI overrides.
///
/// An explicit `--config` path must exist. Without one, `config.toml` in the
/// working directory is used when present and defaults apply otherwise.
pub fn resolve(args: &DetectionArgs) -> Result<Config> {
    let mut config = match &args.config {
        Some(path) => Config::load(path)?,
        None if Path::new(DEFAULT_CONFIG).exists() => Config::load(DEFAULT_CONFIG)?,
        None => Config::parse_toml("")?,
    };
    apply_overrides(&mut config, args);
    config.validate()?;
    Ok(config)
}

/// Overlay command-line values on a loaded configuration.
pub fn apply_overrides(config: &mut Config, args: &DetectionArgs) {
    if !args.sports.is_empty() {
        config.sports = args
            .sports
            .iter()
            .map(|sport| SportKey::from(sport.as_str()))
            .collect();
    }
    if let Some(pct) = args.max_arb_pct {
        config.detection.max_arbitrage_pct = pct;
    }
    if let Some(odds) = args.max_abs_odds {
        config.detection.max_abs_odds = odds;
    }
    if !args.books.is_empty() {
        let books: BTreeSet<BookName> = args
            .books
            .iter()
            .map(|book| BookName::from(book.as_str()))
            .collect();
        config.detection.allowed_books = Some(books);
    }
    if output::verbosity() > 0 {
        config.logging.level = if output::verbosity() == 1 {
            "debug".into()
        } else {
            "trace".into()
        };
    }
}

/// Execute `config init`.
pub fn execute_init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(ConfigError::InvalidValue {
            field: "config",
            reason: "file already exists (use --force to overwrite)".to_string(),
        }
        .into());
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    fs::write(path, CONFIG_TEMPLATE)?;
    output::section("Config Initialized");
    output::success("Created configuration file");
    output::field("Path", path.display());
    output::section("Next Steps");
    output::note(&format!("1. Edit {} with your settings", path.display()));
    output::note(&format!("2. Set the {API_KEY_ENV} environment variable"));
    output::note(&format!("3. Run: oddsarb config validate -c {}", path.display()));
    output::note(&format!("4. Run: oddsarb scan -c {}", path.display()));
    Ok(())
}

/// Execute `config show`.
pub fn execute_show(path: &Path) -> Result<()> {
    let config = Config::load(path)?;

    output::section("Effective Configuration");
    output::field("Path", path.display());
    output::field("Concurrency", config.max_concurrent_sports);

    output::section("Sports");
    for sport in &config.sports {
        output::note(&format!("- {sport}"));
    }

    output::section("Feed");
    output::field("API", &config.feed.api_url);
    output::field("Regions", &config.feed.regions);
    output::field("Markets", &config.feed.markets);
    output::field("Timeout", format!("{}ms", config.feed.timeout_ms));
    output::field("Connect", format!("{}ms", config.feed.connect_timeout_ms));
    output::field(
        "Retries",
        format!(
            "{} attempt(s), {}ms backoff",
            config.feed.retry_max_attempts, config.feed.retry_backoff_ms
        ),
    );
    if config.has_api_key() {
        output::success(&format!("API key loaded from {API_KEY_ENV}"));
    } else {
        output::warning(&format!("{API_KEY_ENV} not set; only replay will work"));
    }

    output::section("Detection");
    output::field(
        "Max margin",
        format!("{}%", config.detection.max_arbitrage_pct.normalize()),
    );
    output::field("Max |odds|", config.detection.max_abs_odds);
    match config.detection.allowed_books.as_ref().filter(|b| !b.is_empty()) {
        Some(books) => {
            let names: Vec<&str> = books.iter().map(BookName::as_str).collect();
            output::field("Books", names.join(", "));
        }
        None => output::field("Books", "all"),
    }

    output::section("Logging");
    output::field("Level", &config.logging.level);
    output::field("Format", &config.logging.format);

    Ok(())
}

/// Execute `config validate`.
pub fn execute_validate(path: &Path) -> Result<()> {
    output::section("Config Validation");
    output::field("Path", path.display());
    let config = Config::load(path)?;
    output::success("Config file is valid");

    if !config.has_api_key() {
        output::warning(&format!("{API_KEY_ENV} is not set"));
    }

    output::field(
        "Next",
        format!("oddsarb config show -c {}", path.display()),
    );

    Ok(())
}
