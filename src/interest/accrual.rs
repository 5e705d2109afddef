use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calendar::DateRange;
use crate::decimal::{Money, Rate};
use crate::errors::{LoanError, Result};
use crate::interest::margin::daily_margin_on;
use crate::rates::BaseRateTable;
use crate::types::{Currency, LoanTerm};

/// interest accrued on a single day of a loan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyAccrualRecord {
    pub date: NaiveDate,
    /// zero on the start date
    pub days_elapsed_since_start: u32,
    pub interest_accrual_amount: Money,
    pub interest_accrual_amount_without_margin: Money,
}

impl DailyAccrualRecord {
    /// portion of the day's accrual attributable to the margin
    pub fn margin_amount(&self) -> Money {
        self.interest_accrual_amount - self.interest_accrual_amount_without_margin
    }
}

/// full calculation for one loan term
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanCalculation {
    pub records: Vec<DailyAccrualRecord>,
    pub total_interest: Money,
}

impl LoanCalculation {
    /// accrue every day of `term` against `base_rates`
    pub fn for_term(term: &LoanTerm, base_rates: &BaseRateTable) -> Result<Self> {
        let records = calculate_loan(
            term.start_date,
            term.end_date,
            term.principal,
            &term.currency,
            term.annual_margin,
            base_rates,
        )?;
        let total_interest = total_interest(&records);
        Ok(Self { records, total_interest })
    }

    pub fn days(&self) -> usize {
        self.records.len()
    }
}

/// simple interest with margin: p * (base + margin) * days
pub fn interest_accrual_amount(
    principal: Money,
    base_rate: Rate,
    daily_margin: Rate,
    days: u32,
) -> Money {
    principal.accrue(base_rate + daily_margin, days)
}

/// simple interest on the base rate alone: p * base * days
pub fn interest_accrual_amount_without_margin(
    principal: Money,
    base_rate: Rate,
    days: u32,
) -> Money {
    principal.accrue(base_rate, days)
}

/// sum of `interest_accrual_amount` over all records
pub fn total_interest(records: &[DailyAccrualRecord]) -> Money {
    records.iter().map(|r| r.interest_accrual_amount).sum()
}

/// daily accrual for every date from `start_date` to `end_date` inclusive
///
/// Each day looks up `(currency, date)` in `base_rates` and converts the
/// annual margin using the day count of that date's year. The first missing
/// rate aborts the whole calculation with `BaseRateNotFound`; no partial
/// result is returned. An inverted range yields no records.
pub fn calculate_loan(
    start_date: NaiveDate,
    end_date: NaiveDate,
    principal: Money,
    currency: &Currency,
    annual_margin: Rate,
    base_rates: &BaseRateTable,
) -> Result<Vec<DailyAccrualRecord>> {
    let dates = DateRange::inclusive(start_date, end_date);
    tracing::debug!(
        %currency,
        %start_date,
        %end_date,
        days = dates.len(),
        "calculating loan accrual"
    );

    let mut records = Vec::with_capacity(dates.len());
    for (days_elapsed, date) in (0u32..).zip(dates) {
        let Some(base_rate) = base_rates.get(currency, date) else {
            tracing::warn!(%currency, %date, "base interest rate missing");
            return Err(LoanError::BaseRateNotFound {
                currency: currency.clone(),
                date,
            });
        };
        let daily_margin = daily_margin_on(date, annual_margin);

        records.push(DailyAccrualRecord {
            date,
            days_elapsed_since_start: days_elapsed,
            interest_accrual_amount: interest_accrual_amount(principal, base_rate, daily_margin, 1),
            interest_accrual_amount_without_margin: interest_accrual_amount_without_margin(
                principal, base_rate, 1,
            ),
        });
    }

    tracing::debug!(%currency, days = records.len(), "loan accrual calculated");
    Ok(records)
}
