use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

use crate::decimal::Rate;

/// gregorian leap year rule
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

/// 366 in a leap year, otherwise 365
pub fn days_in_year(year: i32) -> u32 {
    if is_leap_year(year) { 366 } else { 365 }
}

/// convert an annual margin to the daily margin applicable in `year`
pub fn daily_margin(year: i32, annual_margin: Rate) -> Rate {
    Rate::from_decimal(annual_margin.as_decimal() / Decimal::from(days_in_year(year)))
}

/// daily margin for the year the accrual date falls in
pub fn daily_margin_on(date: NaiveDate, annual_margin: Rate) -> Rate {
    daily_margin(date.year(), annual_margin)
}
