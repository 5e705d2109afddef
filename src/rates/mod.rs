pub mod source;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::decimal::Rate;
use crate::types::{Currency, RateKey};

pub use source::{InMemoryRateSource, RateSource};

/// one base interest rate observation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseRate {
    pub currency: Currency,
    pub date: NaiveDate,
    /// daily rate
    pub interest_rate: Rate,
}

/// read-only lookup of daily base rates keyed by (currency, date)
///
/// Built once by the caller and lent to a calculation. A later row for the
/// same key replaces an earlier one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BaseRateTable {
    rates: HashMap<RateKey, Rate>,
}

impl BaseRateTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_rates<I: IntoIterator<Item = BaseRate>>(rates: I) -> Self {
        rates.into_iter().collect()
    }

    pub fn get(&self, currency: &Currency, date: NaiveDate) -> Option<Rate> {
        self.rates.get(&RateKey::new(currency.clone(), date)).copied()
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}

impl FromIterator<BaseRate> for BaseRateTable {
    fn from_iter<I: IntoIterator<Item = BaseRate>>(iter: I) -> Self {
        let rates = iter
            .into_iter()
            .map(|r| (RateKey::new(r.currency, r.date), r.interest_rate))
            .collect();
        Self { rates }
    }
}

impl FromIterator<(RateKey, Rate)> for BaseRateTable {
    fn from_iter<I: IntoIterator<Item = (RateKey, Rate)>>(iter: I) -> Self {
        Self {
            rates: iter.into_iter().collect(),
        }
    }
}
