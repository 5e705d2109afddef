pub mod accrual;
pub mod margin;

pub use accrual::{
    calculate_loan, interest_accrual_amount, interest_accrual_amount_without_margin,
    total_interest, DailyAccrualRecord, LoanCalculation,
};
pub use margin::{daily_margin, daily_margin_on, days_in_year, is_leap_year};
