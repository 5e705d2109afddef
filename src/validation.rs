use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calendar::HolidayCalendar;
use crate::config::LoanPolicy;
use crate::decimal::{Money, Rate};
use crate::errors::{LoanError, Result};
use crate::types::{Currency, LoanTerm};

/// incoming loan parameters, as submitted by a client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanRequest {
    pub amount: Money,
    pub currency: String,
    /// e.g. 5 for 5% a year
    pub annual_margin_in_percent: Decimal,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl LoanRequest {
    pub fn annual_margin(&self) -> Rate {
        Rate::from_percentage_decimal(self.annual_margin_in_percent)
    }
}

/// checks requests against a loan policy
#[derive(Debug, Clone)]
pub struct LoanValidator {
    policy: LoanPolicy,
    period_start: NaiveDate,
    period_end: NaiveDate,
}

impl LoanValidator {
    pub fn new(policy: LoanPolicy) -> Result<Self> {
        policy.validate()?;
        let (period_start, period_end) = policy.permitted_period()?;
        Ok(Self {
            policy,
            period_start,
            period_end,
        })
    }

    pub fn policy(&self) -> &LoanPolicy {
        &self.policy
    }

    /// validate a request and convert it into a loan term
    pub fn validate(&self, request: &LoanRequest) -> Result<LoanTerm> {
        let currency = Currency::new(&request.currency)?;
        if !self.policy.allows(&currency) {
            return Err(LoanError::CurrencyNotAllowed { currency });
        }

        let maximum = self.policy.maximum_loan_amount;
        if !request.amount.is_positive() || request.amount >= maximum {
            return Err(LoanError::InvalidAmount {
                amount: request.amount,
                maximum,
            });
        }

        let annual_margin = request.annual_margin();
        if annual_margin.is_negative() {
            return Err(LoanError::InvalidMargin {
                margin: annual_margin,
            });
        }

        for date in [request.start_date, request.end_date] {
            self.check_in_period(date)?;
        }

        if request.start_date >= request.end_date {
            return Err(LoanError::InconsistentDates {
                start_date: request.start_date,
                end_date: request.end_date,
            });
        }

        let calendar = &self.policy.holiday_calendar;
        for date in [request.start_date, request.end_date] {
            if calendar.is_holiday(date) {
                return Err(LoanError::DateOnHoliday {
                    date,
                    calendar: calendar.name().to_string(),
                });
            }
        }

        Ok(LoanTerm {
            start_date: request.start_date,
            end_date: request.end_date,
            currency,
            principal: request.amount,
            annual_margin,
        })
    }

    fn check_in_period(&self, date: NaiveDate) -> Result<()> {
        if date < self.period_start || date > self.period_end {
            return Err(LoanError::DateOutsidePermittedPeriod {
                date,
                period_start: self.period_start,
                period_end: self.period_end,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::HolidayCalendarKind;
    use rust_decimal_macros::dec;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn validator() -> LoanValidator {
        LoanValidator::new(LoanPolicy {
            period_start_year: 2020,
            period_end_year: 2022,
            ..LoanPolicy::default()
        })
        .unwrap()
    }

    fn request() -> LoanRequest {
        LoanRequest {
            amount: Money::from_major(1_000),
            currency: "GBP".to_string(),
            annual_margin_in_percent: dec!(5),
            start_date: ymd(2021, 1, 4),
            end_date: ymd(2021, 2, 4),
        }
    }

    #[test]
    fn test_valid_request_becomes_term() {
        let term = validator().validate(&request()).unwrap();
        assert_eq!(term.currency, Currency::new("GBP").unwrap());
        assert_eq!(term.principal, Money::from_major(1_000));
        assert_eq!(term.annual_margin, Rate::from_decimal(dec!(0.05)));
        assert_eq!(term.days(), 32);
    }

    #[test]
    fn test_currency_checks() {
        let v = validator();
        let err = v
            .validate(&LoanRequest { currency: "JPY".into(), ..request() })
            .unwrap_err();
        assert!(matches!(err, LoanError::CurrencyNotAllowed { .. }));

        let err = v
            .validate(&LoanRequest { currency: "pounds".into(), ..request() })
            .unwrap_err();
        assert!(matches!(err, LoanError::InvalidCurrency { .. }));
    }

    #[test]
    fn test_amount_bounds() {
        let v = validator();
        for amount in [Money::ZERO, Money::from_major(-5), Money::from_major(1_000_000)] {
            let err = v.validate(&LoanRequest { amount, ..request() }).unwrap_err();
            assert!(matches!(err, LoanError::InvalidAmount { .. }), "amount {amount}");
        }
        let just_below = Money::from_str_exact("999999.99").unwrap();
        assert!(v.validate(&LoanRequest { amount: just_below, ..request() }).is_ok());
    }

    #[test]
    fn test_margin_non_negative() {
        let v = validator();
        let negative = LoanRequest { annual_margin_in_percent: dec!(-0.5), ..request() };
        let err = v.validate(&negative).unwrap_err();
        assert!(matches!(err, LoanError::InvalidMargin { .. }));

        let zero = LoanRequest { annual_margin_in_percent: dec!(0), ..request() };
        assert!(v.validate(&zero).is_ok());
    }

    #[test]
    fn test_dates_inside_period() {
        let v = validator();
        let err = v
            .validate(&LoanRequest { start_date: ymd(2019, 12, 31), ..request() })
            .unwrap_err();
        assert_eq!(
            err,
            LoanError::DateOutsidePermittedPeriod {
                date: ymd(2019, 12, 31),
                period_start: ymd(2020, 1, 1),
                period_end: ymd(2022, 12, 31),
            }
        );
        assert!(v.validate(&LoanRequest { end_date: ymd(2023, 1, 3), ..request() }).is_err());
    }

    #[test]
    fn test_start_must_precede_end() {
        let v = validator();
        let same = LoanRequest { end_date: ymd(2021, 1, 4), ..request() };
        assert!(matches!(v.validate(&same), Err(LoanError::InconsistentDates { .. })));

        let inverted = LoanRequest { start_date: ymd(2021, 3, 1), ..request() };
        assert!(matches!(v.validate(&inverted), Err(LoanError::InconsistentDates { .. })));
    }

    #[test]
    fn test_holiday_dates_rejected() {
        let v = validator();
        // christmas day 2020
        let err = v
            .validate(&LoanRequest { start_date: ymd(2020, 12, 25), ..request() })
            .unwrap_err();
        assert_eq!(
            err,
            LoanError::DateOnHoliday {
                date: ymd(2020, 12, 25),
                calendar: "UK Bank Holidays".to_string(),
            }
        );

        // easter monday 2021
        let err = v.validate(&LoanRequest { end_date: ymd(2021, 4, 5), ..request() }).unwrap_err();
        assert!(matches!(err, LoanError::DateOnHoliday { .. }));
    }

    #[test]
    fn test_holidays_follow_configured_calendar() {
        let v = LoanValidator::new(LoanPolicy {
            holiday_calendar: HolidayCalendarKind::NoHolidays,
            ..LoanPolicy::default()
        })
        .unwrap();
        assert!(v.validate(&LoanRequest { start_date: ymd(2020, 12, 25), ..request() }).is_ok());
    }

    #[test]
    fn test_invalid_policy_rejected() {
        let policy = LoanPolicy { allowed_currencies: vec![], ..LoanPolicy::default() };
        assert!(LoanValidator::new(policy).is_err());
    }
}
