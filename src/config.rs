use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::calendar::HolidayCalendarKind;
use crate::decimal::Money;
use crate::errors::{LoanError, Result};
use crate::types::Currency;

pub const ENV_CURRENCIES: &str = "LOAN_CURRENCIES";
pub const ENV_PERIOD_START: &str = "LOANS_PERIOD_START";
pub const ENV_PERIOD_END: &str = "LOANS_PERIOD_END";
pub const ENV_MAXIMUM_AMOUNT: &str = "MAXIMUM_LOAN_AMOUNT";
pub const ENV_LOG_LEVEL: &str = "LOG_LEVEL";

/// largest configurable `maximum_loan_amount`, 10^15
pub const MAXIMUM_LOAN_AMOUNT_CEILING: i64 = 1_000_000_000_000_000;

/// limits a loan request is checked against before calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanPolicy {
    pub allowed_currencies: Vec<Currency>,
    /// first permitted year, from january 1st
    pub period_start_year: i32,
    /// last permitted year, through december 31st
    pub period_end_year: i32,
    /// exclusive upper bound on principal
    pub maximum_loan_amount: Money,
    #[serde(default)]
    pub holiday_calendar: HolidayCalendarKind,
}

impl Default for LoanPolicy {
    fn default() -> Self {
        Self {
            allowed_currencies: ["GBP", "EUR", "USD"]
                .iter()
                .filter_map(|c| Currency::new(c).ok())
                .collect(),
            period_start_year: 2000,
            period_end_year: 2030,
            maximum_loan_amount: Money::from_major(1_000_000),
            holiday_calendar: HolidayCalendarKind::UkBankHolidays,
        }
    }
}

impl LoanPolicy {
    pub fn allows(&self, currency: &Currency) -> bool {
        self.allowed_currencies.contains(currency)
    }

    /// first and last permitted dates, both inclusive
    pub fn permitted_period(&self) -> Result<(NaiveDate, NaiveDate)> {
        let start = NaiveDate::from_ymd_opt(self.period_start_year, 1, 1);
        let end = NaiveDate::from_ymd_opt(self.period_end_year, 12, 31);
        match (start, end) {
            (Some(start), Some(end)) => Ok((start, end)),
            _ => Err(LoanError::InvalidConfiguration {
                message: format!(
                    "loan period {}..{} is not representable",
                    self.period_start_year, self.period_end_year
                ),
            }),
        }
    }

    /// check the policy is internally consistent
    pub fn validate(&self) -> Result<()> {
        if self.allowed_currencies.is_empty() {
            return Err(LoanError::InvalidConfiguration {
                message: "no loan currencies configured".to_string(),
            });
        }
        if self.period_start_year > self.period_end_year {
            return Err(LoanError::InvalidConfiguration {
                message: format!(
                    "loan period start {} is after end {}",
                    self.period_start_year, self.period_end_year
                ),
            });
        }
        if !self.maximum_loan_amount.is_positive() {
            return Err(LoanError::InvalidConfiguration {
                message: format!(
                    "maximum loan amount must be positive, got {}",
                    self.maximum_loan_amount
                ),
            });
        }
        if self.maximum_loan_amount > Money::from_major(MAXIMUM_LOAN_AMOUNT_CEILING) {
            return Err(LoanError::InvalidConfiguration {
                message: format!(
                    "maximum loan amount {} exceeds {MAXIMUM_LOAN_AMOUNT_CEILING}",
                    self.maximum_loan_amount
                ),
            });
        }
        self.permitted_period().map(|_| ())
    }
}

/// top-level settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub policy: LoanPolicy,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            policy: LoanPolicy::default(),
            log_level: default_log_level(),
        }
    }
}

impl Settings {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let settings: Settings =
            serde_json::from_str(json).map_err(|e| LoanError::InvalidConfiguration {
                message: format!("malformed settings: {e}"),
            })?;
        settings.policy.validate()?;
        Ok(settings)
    }

    /// read settings from a local json file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| LoanError::InvalidConfiguration {
            message: format!("cannot read {}: {e}", path.display()),
        })?;
        Self::from_json_str(&contents)
    }

    /// read settings from process environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// read settings through an arbitrary variable lookup
    ///
    /// Currencies, period years and maximum amount are required. The log
    /// level defaults to `info` and the calendar to UK bank holidays.
    pub fn from_vars<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key).ok_or_else(|| LoanError::InvalidConfiguration {
                message: format!("missing environment variable {key}"),
            })
        };

        let allowed_currencies = required(ENV_CURRENCIES)?
            .split(',')
            .map(|c| Currency::new(c.trim()))
            .collect::<Result<Vec<_>>>()?;
        let period_start_year = parse_year(ENV_PERIOD_START, &required(ENV_PERIOD_START)?)?;
        let period_end_year = parse_year(ENV_PERIOD_END, &required(ENV_PERIOD_END)?)?;
        let raw_maximum = required(ENV_MAXIMUM_AMOUNT)?;
        let maximum_loan_amount =
            raw_maximum.trim().parse::<Money>().map_err(|e| LoanError::InvalidConfiguration {
                message: format!("{ENV_MAXIMUM_AMOUNT}={raw_maximum}: {e}"),
            })?;

        let policy = LoanPolicy {
            allowed_currencies,
            period_start_year,
            period_end_year,
            maximum_loan_amount,
            holiday_calendar: HolidayCalendarKind::UkBankHolidays,
        };
        policy.validate()?;

        Ok(Self {
            policy,
            log_level: lookup(ENV_LOG_LEVEL).unwrap_or_else(default_log_level),
        })
    }
}

fn parse_year(key: &str, value: &str) -> Result<i32> {
    value.trim().parse().map_err(|_| LoanError::InvalidConfiguration {
        message: format!("{key}={value} is not a year"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_default_policy_is_valid() {
        let policy = LoanPolicy::default();
        assert!(policy.validate().is_ok());
        assert!(policy.allows(&Currency::new("GBP").unwrap()));
        assert!(!policy.allows(&Currency::new("JPY").unwrap()));
    }

    #[test]
    fn test_permitted_period() {
        let policy = LoanPolicy {
            period_start_year: 2020,
            period_end_year: 2022,
            ..LoanPolicy::default()
        };
        let (start, end) = policy.permitted_period().unwrap();
        assert_eq!(start, NaiveDate::from_ymd_opt(2020, 1, 1).unwrap());
        assert_eq!(end, NaiveDate::from_ymd_opt(2022, 12, 31).unwrap());
    }

    #[test]
    fn test_inconsistent_policy() {
        let policy = LoanPolicy {
            period_start_year: 2025,
            period_end_year: 2020,
            ..LoanPolicy::default()
        };
        assert!(matches!(policy.validate(), Err(LoanError::InvalidConfiguration { .. })));

        let policy = LoanPolicy { allowed_currencies: vec![], ..LoanPolicy::default() };
        assert!(policy.validate().is_err());

        let policy = LoanPolicy { maximum_loan_amount: Money::ZERO, ..LoanPolicy::default() };
        assert!(policy.validate().is_err());
    }

    #[test]
    fn test_maximum_amount_ceiling() {
        let at_ceiling = LoanPolicy {
            maximum_loan_amount: Money::from_major(MAXIMUM_LOAN_AMOUNT_CEILING),
            ..LoanPolicy::default()
        };
        assert!(at_ceiling.validate().is_ok());

        let huge = LoanPolicy {
            maximum_loan_amount: Money::from_str_exact("10000000000000000000000000000").unwrap(),
            ..LoanPolicy::default()
        };
        let err = huge.validate().unwrap_err();
        assert!(matches!(err, LoanError::InvalidConfiguration { .. }));
        assert!(err.to_string().contains("exceeds"));

        let from_env = Settings::from_vars(vars(&[
            (ENV_CURRENCIES, "GBP"),
            (ENV_PERIOD_START, "2020"),
            (ENV_PERIOD_END, "2025"),
            (ENV_MAXIMUM_AMOUNT, "1000000000000000.01"),
        ]));
        assert!(from_env.is_err());
    }

    #[test]
    fn test_settings_from_vars() {
        let settings = Settings::from_vars(vars(&[
            (ENV_CURRENCIES, "GBP, USD"),
            (ENV_PERIOD_START, "2015"),
            (ENV_PERIOD_END, "2025"),
            (ENV_MAXIMUM_AMOUNT, "500000.0"),
        ]))
        .unwrap();

        assert_eq!(settings.policy.allowed_currencies.len(), 2);
        assert_eq!(settings.policy.period_start_year, 2015);
        assert_eq!(settings.policy.maximum_loan_amount, Money::from_major(500_000));
        assert_eq!(settings.log_level, "info");
    }

    #[test]
    fn test_settings_from_vars_missing_or_bad() {
        let missing = Settings::from_vars(vars(&[(ENV_CURRENCIES, "GBP")]));
        assert!(matches!(missing, Err(LoanError::InvalidConfiguration { .. })));

        let bad_year = Settings::from_vars(vars(&[
            (ENV_CURRENCIES, "GBP"),
            (ENV_PERIOD_START, "twenty"),
            (ENV_PERIOD_END, "2025"),
            (ENV_MAXIMUM_AMOUNT, "1000"),
        ]));
        assert!(bad_year.is_err());

        let bad_currency = Settings::from_vars(vars(&[
            (ENV_CURRENCIES, "gbp"),
            (ENV_PERIOD_START, "2020"),
            (ENV_PERIOD_END, "2025"),
            (ENV_MAXIMUM_AMOUNT, "1000"),
        ]));
        assert!(matches!(bad_currency, Err(LoanError::InvalidCurrency { .. })));
    }

    #[test]
    fn test_settings_from_json() {
        let json = r#"{
            "policy": {
                "allowed_currencies": ["EUR"],
                "period_start_year": 2021,
                "period_end_year": 2021,
                "maximum_loan_amount": "250000",
                "holiday_calendar": { "type": "fixed", "dates": ["2021-12-24"] }
            },
            "log_level": "debug"
        }"#;

        let settings = Settings::from_json_str(json).unwrap();
        assert_eq!(settings.log_level, "debug");
        assert_eq!(
            settings.policy.holiday_calendar,
            HolidayCalendarKind::Fixed {
                dates: vec![NaiveDate::from_ymd_opt(2021, 12, 24).unwrap()]
            }
        );

        assert!(Settings::from_json_str("{").is_err());
    }

    #[test]
    fn test_settings_round_trip_default_calendar() {
        let json = r#"{"policy": {"allowed_currencies": ["USD"], "period_start_year": 2000,
            "period_end_year": 2001, "maximum_loan_amount": "10"}}"#;
        let settings = Settings::from_json_str(json).unwrap();
        assert_eq!(settings.policy.holiday_calendar, HolidayCalendarKind::UkBankHolidays);
        assert_eq!(settings.log_level, "info");
    }

    #[test]
    fn test_missing_settings_file() {
        let err = Settings::from_file("/nonexistent/loan-settings.json").unwrap_err();
        assert!(matches!(err, LoanError::InvalidConfiguration { .. }));
    }
}
