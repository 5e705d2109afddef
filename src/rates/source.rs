use chrono::NaiveDate;
use rand::Rng;
use rust_decimal::Decimal;
use std::collections::BTreeMap;

use crate::calendar::DateRange;
use crate::decimal::Rate;
use crate::errors::{LoanError, Result};
use crate::rates::BaseRate;
use crate::types::Currency;

/// supplier of base interest rates for a currency over a date range
pub trait RateSource {
    /// rows for every stored date in `[start_date, end_date]`, ascending
    ///
    /// Fails with `BaseRatesNotFound` when the range holds no rows at all.
    /// Gaps inside the range are not an error here.
    fn base_rates(
        &self,
        currency: &Currency,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Vec<BaseRate>>;
}

/// in-memory base rate store
#[derive(Debug, Clone, Default)]
pub struct InMemoryRateSource {
    rates: BTreeMap<(Currency, NaiveDate), Rate>,
}

impl InMemoryRateSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// insert or replace one observation
    pub fn insert(&mut self, currency: Currency, date: NaiveDate, interest_rate: Rate) {
        self.rates.insert((currency, date), interest_rate);
    }

    /// fill every day of `start_year..=end_year` for each currency
    ///
    /// Uses `interest_rate` when given, otherwise a random 2 dp rate in
    /// `[1, 10)` per (currency, day).
    pub fn populate(
        &mut self,
        currencies: &[Currency],
        start_year: i32,
        end_year: i32,
        interest_rate: Option<Rate>,
    ) -> usize {
        self.populate_with_rng(
            currencies,
            start_year,
            end_year,
            interest_rate,
            &mut rand::thread_rng(),
        )
    }

    pub fn populate_with_rng<R: Rng + ?Sized>(
        &mut self,
        currencies: &[Currency],
        start_year: i32,
        end_year: i32,
        interest_rate: Option<Rate>,
        rng: &mut R,
    ) -> usize {
        let mut inserted = 0;
        for currency in currencies {
            for date in DateRange::years(start_year, end_year) {
                let rate = interest_rate.unwrap_or_else(|| random_rate(rng));
                self.insert(currency.clone(), date, rate);
                inserted += 1;
            }
        }
        tracing::info!(
            currencies = currencies.len(),
            start_year,
            end_year,
            rows = inserted,
            random = interest_rate.is_none(),
            "populated base interest rates"
        );
        inserted
    }

    /// remove every stored rate
    pub fn clear(&mut self) -> usize {
        let removed = self.rates.len();
        self.rates.clear();
        tracing::info!(rows = removed, "removed base interest rates");
        removed
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}

// hundredths in 100..1000, i.e. 1.00 to 9.99
fn random_rate<R: Rng + ?Sized>(rng: &mut R) -> Rate {
    Rate::from_decimal(Decimal::new(rng.gen_range(100..1000), 2))
}

impl RateSource for InMemoryRateSource {
    fn base_rates(
        &self,
        currency: &Currency,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Vec<BaseRate>> {
        let not_found = || LoanError::BaseRatesNotFound {
            currency: currency.clone(),
            start_date,
            end_date,
        };
        if start_date > end_date {
            return Err(not_found());
        }

        let rows: Vec<BaseRate> = self
            .rates
            .range((currency.clone(), start_date)..=(currency.clone(), end_date))
            .map(|((c, d), r)| BaseRate {
                currency: c.clone(),
                date: *d,
                interest_rate: *r,
            })
            .collect();

        if rows.is_empty() {
            return Err(not_found());
        }
        Ok(rows)
    }
}
