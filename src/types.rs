use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::decimal::{Money, Rate};
use crate::errors::{LoanError, Result};

/// unique identifier for a stored loan
pub type LoanId = Uuid;

/// three-letter currency code, upper case (e.g., "GBP")
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Currency(String);

impl Currency {
    pub fn new(code: &str) -> Result<Self> {
        let valid = code.len() == 3 && code.bytes().all(|b| b.is_ascii_uppercase());
        if !valid {
            return Err(LoanError::InvalidCurrency {
                code: code.to_string(),
            });
        }
        Ok(Currency(code.to_string()))
    }

    pub fn code(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Currency {
    type Err = LoanError;

    fn from_str(s: &str) -> Result<Self> {
        Currency::new(s)
    }
}

impl TryFrom<String> for Currency {
    type Error = LoanError;

    fn try_from(s: String) -> Result<Self> {
        Currency::new(&s)
    }
}

impl From<Currency> for String {
    fn from(c: Currency) -> Self {
        c.0
    }
}

/// composite lookup key for the base rate table
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RateKey {
    pub currency: Currency,
    pub date: NaiveDate,
}

impl RateKey {
    pub fn new(currency: Currency, date: NaiveDate) -> Self {
        Self { currency, date }
    }
}

/// validated loan parameters, end date inclusive
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanTerm {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub currency: Currency,
    pub principal: Money,
    /// fraction, 0.05 for 5%
    pub annual_margin: Rate,
}

impl LoanTerm {
    /// number of accrual days in the term, zero if the range is inverted
    pub fn days(&self) -> usize {
        let days = (self.end_date - self.start_date).num_days() + 1;
        days.max(0) as usize
    }
}
