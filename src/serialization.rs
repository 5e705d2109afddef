//! serializable views of stored loans
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::interest::DailyAccrualRecord;
use crate::repository::LoanRecord;
use crate::types::LoanId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyAccrualView {
    pub date: NaiveDate,
    pub interest_accrual_amount: Money,
    pub interest_accrual_amount_without_margin: Money,
    pub days_elapsed_since_loan_start_date: u32,
}

impl From<&DailyAccrualRecord> for DailyAccrualView {
    fn from(record: &DailyAccrualRecord) -> Self {
        Self {
            date: record.date,
            interest_accrual_amount: record.interest_accrual_amount,
            interest_accrual_amount_without_margin: record.interest_accrual_amount_without_margin,
            days_elapsed_since_loan_start_date: record.days_elapsed_since_start,
        }
    }
}

/// loan summary without the daily breakdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListedLoanView {
    pub id: LoanId,
    pub amount: Money,
    pub currency: String,
    pub annual_margin_in_percent: Decimal,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub total_interest: Money,
}

impl ListedLoanView {
    pub fn from_record(loan: &LoanRecord) -> Self {
        Self {
            id: loan.id,
            amount: loan.term.principal,
            currency: loan.term.currency.to_string(),
            annual_margin_in_percent: loan.term.annual_margin.as_percentage().normalize(),
            start_date: loan.term.start_date,
            end_date: loan.term.end_date,
            total_interest: loan.total_interest,
        }
    }
}

/// loan summary with one entry per accrual day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanView {
    #[serde(flatten)]
    pub loan: ListedLoanView,
    pub calculation_results: Vec<DailyAccrualView>,
}

impl LoanView {
    pub fn from_record(loan: &LoanRecord) -> Self {
        Self {
            loan: ListedLoanView::from_record(loan),
            calculation_results: loan
                .calculation_results
                .iter()
                .map(DailyAccrualView::from)
                .collect(),
        }
    }

    /// convert to pretty-printed json string
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListLoansView {
    pub loans: Vec<ListedLoanView>,
    pub count: usize,
}

impl ListLoansView {
    pub fn from_records(loans: &[LoanRecord]) -> Self {
        Self {
            loans: loans.iter().map(ListedLoanView::from_record).collect(),
            count: loans.len(),
        }
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
