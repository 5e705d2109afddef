use chrono::NaiveDate;
use thiserror::Error;
use uuid::Uuid;

use crate::decimal::{Money, Rate};
use crate::types::Currency;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LoanError {
    #[error("base interest rate is not available for: currency {currency}, date {date}")]
    BaseRateNotFound {
        currency: Currency,
        date: NaiveDate,
    },

    #[error("no base interest rates found for: currency {currency}, {start_date} to {end_date}")]
    BaseRatesNotFound {
        currency: Currency,
        start_date: NaiveDate,
        end_date: NaiveDate,
    },

    #[error("inconsistent loan dates: start {start_date} must precede end {end_date}")]
    InconsistentDates {
        start_date: NaiveDate,
        end_date: NaiveDate,
    },

    #[error("loan date {date} falls on a holiday of calendar {calendar}")]
    DateOnHoliday {
        date: NaiveDate,
        calendar: String,
    },

    #[error("loan date {date} outside permitted period {period_start} to {period_end}")]
    DateOutsidePermittedPeriod {
        date: NaiveDate,
        period_start: NaiveDate,
        period_end: NaiveDate,
    },

    #[error("currency not allowed: {currency}")]
    CurrencyNotAllowed {
        currency: Currency,
    },

    #[error("invalid currency code: {code}")]
    InvalidCurrency {
        code: String,
    },

    #[error("invalid loan amount: {amount}, must be positive and below {maximum}")]
    InvalidAmount {
        amount: Money,
        maximum: Money,
    },

    #[error("invalid margin: {margin}")]
    InvalidMargin {
        margin: Rate,
    },

    #[error("loan not found: {id}")]
    LoanNotFound {
        id: Uuid,
    },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration {
        message: String,
    },
}

pub type Result<T> = std::result::Result<T, LoanError>;
