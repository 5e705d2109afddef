use chrono::{DateTime, Utc};
use hourglass_rs::SafeTimeProvider;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::decimal::Money;
use crate::errors::{LoanError, Result};
use crate::interest::{DailyAccrualRecord, LoanCalculation};
use crate::types::{LoanId, LoanTerm};

/// stored loan: summary row plus one accrual row per day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanRecord {
    pub id: LoanId,
    pub term: LoanTerm,
    pub total_interest: Money,
    pub calculation_results: Vec<DailyAccrualRecord>,
    pub created_on: DateTime<Utc>,
    pub updated_on: DateTime<Utc>,
}

/// in-memory loan store, kept in creation order
#[derive(Debug, Default)]
pub struct LoanRepository {
    loans: Vec<LoanRecord>,
}

impl LoanRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(
        &mut self,
        term: LoanTerm,
        calculation: LoanCalculation,
        time_provider: &SafeTimeProvider,
    ) -> &LoanRecord {
        let now = time_provider.now();
        self.loans.push(LoanRecord {
            id: Uuid::new_v4(),
            term,
            total_interest: calculation.total_interest,
            calculation_results: calculation.records,
            created_on: now,
            updated_on: now,
        });
        &self.loans[self.loans.len() - 1]
    }

    pub fn get(&self, id: LoanId) -> Result<&LoanRecord> {
        self.loans
            .iter()
            .find(|l| l.id == id)
            .ok_or(LoanError::LoanNotFound { id })
    }

    pub fn list(&self) -> &[LoanRecord] {
        &self.loans
    }

    /// replace the term and results of an existing loan, keeping `created_on`
    pub fn update(
        &mut self,
        id: LoanId,
        term: LoanTerm,
        calculation: LoanCalculation,
        time_provider: &SafeTimeProvider,
    ) -> Result<&LoanRecord> {
        let loan = self
            .loans
            .iter_mut()
            .find(|l| l.id == id)
            .ok_or(LoanError::LoanNotFound { id })?;

        loan.term = term;
        loan.total_interest = calculation.total_interest;
        loan.calculation_results = calculation.records;
        loan.updated_on = time_provider.now();
        Ok(&*loan)
    }

    pub fn delete(&mut self, id: LoanId) -> Result<LoanRecord> {
        let index = self
            .loans
            .iter()
            .position(|l| l.id == id)
            .ok_or(LoanError::LoanNotFound { id })?;
        Ok(self.loans.remove(index))
    }

    pub fn len(&self) -> usize {
        self.loans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.loans.is_empty()
    }
}
