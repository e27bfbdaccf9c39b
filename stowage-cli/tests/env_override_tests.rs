//! Environment override tests for `stowage config`.
//!
//! Every test here mutates process environment variables, so each one holds
//! `ENV_LOCK` for its whole body and clears the `STOWAGE_*` pricing variables
//! on the way in and out.

use clap::Parser;
use rust_decimal::Decimal;
use serde_json::Value;
use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard};
use stowage_cli::{commands, Cli, CliError};
use tempfile::TempDir;

const OVERRIDE_VARS: [&str; 4] = [
    "STOWAGE_CURRENCY",
    "STOWAGE_TAX_RATE_PERCENT",
    "STOWAGE_MIN_DURATION_DAYS",
    "STOWAGE_PAYMENT_TERMS_DAYS",
];

const FILE_CONFIG: &str = r#"
[pricing]
currency = "USD"
tax_rate_percent = "5"
min_duration_days = 7
payment_terms_days = 45
"#;

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Holds the env lock with the override variables cleared.
struct EnvGuard {
    _lock: MutexGuard<'static, ()>,
}

impl EnvGuard {
    fn acquire() -> Self {
        // a failed test poisons the lock; the env is reset below anyway
        let lock = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        clear_overrides();
        Self { _lock: lock }
    }

    fn set(&self, key: &str, value: &str) {
        std::env::set_var(key, value);
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        clear_overrides();
    }
}

fn clear_overrides() {
    for key in OVERRIDE_VARS {
        std::env::remove_var(key);
    }
    std::env::remove_var("STOWAGE_CONFIG");
}

fn config_file(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("stowage.toml");
    std::fs::write(&path, FILE_CONFIG).unwrap();
    path
}

fn effective_config(path: Option<&PathBuf>) -> Result<Value, CliError> {
    let mut args = vec!["stowage".to_string()];
    if let Some(path) = path {
        args.push("--config".to_string());
        args.push(path.to_str().unwrap().to_string());
    }
    args.push("config".to_string());

    let cli = Cli::try_parse_from(args).unwrap();
    let output = commands::run(&cli)?;
    Ok(serde_json::from_str(&output).unwrap())
}

fn decimal(value: &Value) -> Decimal {
    match value {
        Value::String(s) => s.parse().unwrap(),
        other => other.to_string().parse().unwrap(),
    }
}

// ============================================================================
// BASELINE
// ============================================================================

#[test]
fn test_config_command_renders_defaults() {
    let _env = EnvGuard::acquire();

    let config = effective_config(None).unwrap();
    assert_eq!(config["pricing"]["currency"], "USD");
    assert_eq!(config["pricing"]["min_duration_days"], 1);
    assert_eq!(config["pricing"]["payment_terms_days"], 30);
    assert_eq!(decimal(&config["pricing"]["tax_rate_percent"]), Decimal::ZERO);
    assert_eq!(config["capacity"]["clearances"]["sprinkler"], 0.9);
}

#[test]
fn test_config_command_renders_file_values() {
    let _env = EnvGuard::acquire();
    let dir = TempDir::new().unwrap();
    let path = config_file(&dir);

    let config = effective_config(Some(&path)).unwrap();
    assert_eq!(config["pricing"]["min_duration_days"], 7);
    assert_eq!(config["pricing"]["payment_terms_days"], 45);
    assert_eq!(decimal(&config["pricing"]["tax_rate_percent"]), Decimal::from(5));
}

// ============================================================================
// OVERRIDES
// ============================================================================

#[test]
fn test_currency_env_overrides_file() {
    let env = EnvGuard::acquire();
    let dir = TempDir::new().unwrap();
    let path = config_file(&dir);

    env.set("STOWAGE_CURRENCY", " eur ");
    let config = effective_config(Some(&path)).unwrap();
    assert_eq!(config["pricing"]["currency"], "EUR");
}

#[test]
fn test_tax_rate_env_overrides_file() {
    let env = EnvGuard::acquire();
    let dir = TempDir::new().unwrap();
    let path = config_file(&dir);

    env.set("STOWAGE_TAX_RATE_PERCENT", "8.25");
    let config = effective_config(Some(&path)).unwrap();
    assert_eq!(
        decimal(&config["pricing"]["tax_rate_percent"]),
        Decimal::new(825, 2)
    );
}

#[test]
fn test_min_duration_env_overrides_file() {
    let env = EnvGuard::acquire();
    let dir = TempDir::new().unwrap();
    let path = config_file(&dir);

    env.set("STOWAGE_MIN_DURATION_DAYS", "14");
    let config = effective_config(Some(&path)).unwrap();
    assert_eq!(config["pricing"]["min_duration_days"], 14);
}

#[test]
fn test_payment_terms_env_overrides_file() {
    let env = EnvGuard::acquire();
    let dir = TempDir::new().unwrap();
    let path = config_file(&dir);

    env.set("STOWAGE_PAYMENT_TERMS_DAYS", "60");
    let config = effective_config(Some(&path)).unwrap();
    assert_eq!(config["pricing"]["payment_terms_days"], 60);
}

#[test]
fn test_unparseable_env_values_are_ignored() {
    let env = EnvGuard::acquire();
    let dir = TempDir::new().unwrap();
    let path = config_file(&dir);

    env.set("STOWAGE_CURRENCY", "   ");
    env.set("STOWAGE_TAX_RATE_PERCENT", "lots");
    env.set("STOWAGE_MIN_DURATION_DAYS", "-3");
    env.set("STOWAGE_PAYMENT_TERMS_DAYS", "net30");

    let config = effective_config(Some(&path)).unwrap();
    assert_eq!(config["pricing"]["currency"], "USD");
    assert_eq!(decimal(&config["pricing"]["tax_rate_percent"]), Decimal::from(5));
    assert_eq!(config["pricing"]["min_duration_days"], 7);
    assert_eq!(config["pricing"]["payment_terms_days"], 45);
}

#[test]
fn test_env_override_is_still_validated() {
    let env = EnvGuard::acquire();
    let dir = TempDir::new().unwrap();
    let path = config_file(&dir);

    env.set("STOWAGE_TAX_RATE_PERCENT", "150");
    let err = effective_config(Some(&path)).unwrap_err();
    assert!(matches!(err, CliError::Config(_)));
}
