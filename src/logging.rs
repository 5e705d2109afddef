use tracing_subscriber::EnvFilter;

use crate::errors::{LoanError, Result};

/// install a global fmt subscriber filtered at `level`
///
/// `level` accepts anything `EnvFilter` parses, e.g. `info` or
/// `loan_accrual_rs=debug,warn`. Fails if a global subscriber is already set.
pub fn init(level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(level).map_err(|e| LoanError::InvalidConfiguration {
        message: format!("invalid log level {level}: {e}"),
    })?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(true)
        .with_line_number(true)
        .with_target(false)
        .compact()
        .try_init()
        .map_err(|e| LoanError::InvalidConfiguration {
            message: format!("logging already initialised: {e}"),
        })
}

/// install a global subscriber filtered by `RUST_LOG`, falling back to `default_level`
pub fn init_from_env(default_level: &str) -> Result<()> {
    let level =
        std::env::var(EnvFilter::DEFAULT_ENV).unwrap_or_else(|_| default_level.to_string());
    init(&level)
}
