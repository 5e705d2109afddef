use hourglass_rs::SafeTimeProvider;

use crate::config::LoanPolicy;
use crate::errors::Result;
use crate::interest::LoanCalculation;
use crate::rates::{BaseRateTable, RateSource};
use crate::repository::{LoanRecord, LoanRepository};
use crate::types::{LoanId, LoanTerm};
use crate::validation::{LoanRequest, LoanValidator};

/// validates requests, runs the accrual calculation and stores the result
pub struct LoanService<S: RateSource> {
    validator: LoanValidator,
    rates: S,
    repository: LoanRepository,
}

impl<S: RateSource> LoanService<S> {
    pub fn new(policy: LoanPolicy, rates: S) -> Result<Self> {
        Ok(Self {
            validator: LoanValidator::new(policy)?,
            rates,
            repository: LoanRepository::new(),
        })
    }

    pub fn rates(&self) -> &S {
        &self.rates
    }

    pub fn rates_mut(&mut self) -> &mut S {
        &mut self.rates
    }

    pub fn policy(&self) -> &LoanPolicy {
        self.validator.policy()
    }

    /// fetch the rates a term needs and accrue it
    pub fn calculate(&self, term: &LoanTerm) -> Result<LoanCalculation> {
        let rows = self
            .rates
            .base_rates(&term.currency, term.start_date, term.end_date)?;
        let table = BaseRateTable::from_rates(rows);
        LoanCalculation::for_term(term, &table)
    }

    /// validate, calculate and store a new loan; nothing is stored on failure
    pub fn create_loan(
        &mut self,
        request: &LoanRequest,
        time_provider: &SafeTimeProvider,
    ) -> Result<&LoanRecord> {
        let term = self.validator.validate(request)?;
        let calculation = self.calculate(&term)?;

        let loan = self.repository.add(term, calculation, time_provider);
        tracing::info!(
            loan_id = %loan.id,
            currency = %loan.term.currency,
            days = loan.calculation_results.len(),
            total_interest = %loan.total_interest,
            "loan created"
        );
        Ok(loan)
    }

    pub fn get_loan(&self, id: LoanId) -> Result<&LoanRecord> {
        self.repository.get(id)
    }

    pub fn list_loans(&self) -> &[LoanRecord] {
        self.repository.list()
    }

    /// recalculate an existing loan from a new request
    pub fn update_loan(
        &mut self,
        id: LoanId,
        request: &LoanRequest,
        time_provider: &SafeTimeProvider,
    ) -> Result<&LoanRecord> {
        self.repository.get(id)?;
        let term = self.validator.validate(request)?;
        let calculation = self.calculate(&term)?;

        let loan = self.repository.update(id, term, calculation, time_provider)?;
        tracing::info!(loan_id = %id, total_interest = %loan.total_interest, "loan updated");
        Ok(loan)
    }

    pub fn delete_loan(&mut self, id: LoanId) -> Result<LoanRecord> {
        let loan = self.repository.delete(id)?;
        tracing::info!(loan_id = %id, "loan deleted");
        Ok(loan)
    }
}
