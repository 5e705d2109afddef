pub mod calendar;
pub mod config;
pub mod decimal;
pub mod errors;
pub mod interest;
pub mod logging;
pub mod rates;
pub mod repository;
pub mod serialization;
pub mod service;
pub mod types;
pub mod validation;

// re-export key types
pub use calendar::{DateRange, FixedHolidays, HolidayCalendar, HolidayCalendarKind, UkBankHolidays};
pub use config::{LoanPolicy, Settings};
pub use decimal::{Money, Rate};
pub use errors::{LoanError, Result};
pub use interest::{calculate_loan, daily_margin, is_leap_year, DailyAccrualRecord, LoanCalculation};
pub use rates::{BaseRate, BaseRateTable, InMemoryRateSource, RateSource};
pub use repository::{LoanRecord, LoanRepository};
pub use serialization::{DailyAccrualView, ListLoansView, ListedLoanView, LoanView};
pub use service::LoanService;
pub use types::{Currency, LoanId, LoanTerm, RateKey};
pub use validation::{LoanRequest, LoanValidator};

// re-export external dependencies that users will need
pub use chrono;
pub use hourglass_rs::{SafeTimeProvider, TimeSource};
pub use rust_decimal::Decimal;
pub use uuid::Uuid;
