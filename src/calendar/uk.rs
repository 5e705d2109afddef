//! England and Wales bank holidays.
//!
//! Both the nominal day and its weekend substitute count as holidays, so a
//! loan can neither start on Christmas Day falling on a Saturday nor on the
//! Monday that replaces it.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

use super::HolidayCalendar;

pub(crate) const CALENDAR_NAME: &str = "UK Bank Holidays";

/// england and wales bank holiday calendar
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UkBankHolidays;

impl UkBankHolidays {
    /// all holidays in a year, sorted
    pub fn holidays_in(&self, year: i32) -> Vec<NaiveDate> {
        let mut holidays = Vec::with_capacity(12);

        holidays.extend(new_years(year));
        if let Some(easter) = easter_sunday(year) {
            holidays.push(easter - Duration::days(2));
            holidays.push(easter + Duration::days(1));
        }
        holidays.extend(early_may(year));
        holidays.extend(spring(year));
        holidays.extend(last_weekday_of_month(year, 8, Weekday::Mon));
        holidays.extend(christmas(year));
        holidays.extend(one_off(year));

        holidays.sort();
        holidays.dedup();
        holidays
    }
}

impl HolidayCalendar for UkBankHolidays {
    fn name(&self) -> &str {
        CALENDAR_NAME
    }

    fn is_holiday(&self, date: NaiveDate) -> bool {
        self.holidays_in(date.year()).binary_search(&date).is_ok()
    }
}

fn new_years(year: i32) -> Vec<NaiveDate> {
    let Some(day) = NaiveDate::from_ymd_opt(year, 1, 1) else {
        return Vec::new();
    };
    match day.weekday() {
        Weekday::Sat => vec![day, day + Duration::days(2)],
        Weekday::Sun => vec![day, day + Duration::days(1)],
        _ => vec![day],
    }
}

fn early_may(year: i32) -> Option<NaiveDate> {
    match year {
        // VE day anniversaries
        1995 | 2020 => NaiveDate::from_ymd_opt(year, 5, 8),
        _ => NaiveDate::from_weekday_of_month_opt(year, 5, Weekday::Mon, 1),
    }
}

fn spring(year: i32) -> Option<NaiveDate> {
    match year {
        // moved for jubilees
        2002 | 2012 => NaiveDate::from_ymd_opt(year, 6, 4),
        2022 => NaiveDate::from_ymd_opt(year, 6, 2),
        _ => last_weekday_of_month(year, 5, Weekday::Mon),
    }
}

fn christmas(year: i32) -> Vec<NaiveDate> {
    let (Some(xmas), Some(boxing)) = (
        NaiveDate::from_ymd_opt(year, 12, 25),
        NaiveDate::from_ymd_opt(year, 12, 26),
    ) else {
        return Vec::new();
    };

    let mut days = vec![xmas, boxing];
    match xmas.weekday() {
        Weekday::Fri => days.push(xmas + Duration::days(3)),
        Weekday::Sat => {
            days.push(xmas + Duration::days(2));
            days.push(xmas + Duration::days(3));
        }
        Weekday::Sun => days.push(xmas + Duration::days(2)),
        _ => {}
    }
    days
}

fn one_off(year: i32) -> Vec<NaiveDate> {
    let dates: &[(u32, u32)] = match year {
        1981 => &[(7, 29)],
        1999 => &[(12, 31)],
        2002 => &[(6, 3)],
        2011 => &[(4, 29)],
        2012 => &[(6, 5)],
        2022 => &[(6, 3), (9, 19)],
        2023 => &[(5, 8)],
        _ => &[],
    };
    dates
        .iter()
        .filter_map(|&(m, d)| NaiveDate::from_ymd_opt(year, m, d))
        .collect()
}

fn last_weekday_of_month(year: i32, month: u32, weekday: Weekday) -> Option<NaiveDate> {
    let first_of_next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    let last = first_of_next.pred_opt()?;
    let back = (7 + last.weekday().num_days_from_monday() - weekday.num_days_from_monday()) % 7;
    Some(last - Duration::days(back as i64))
}

/// easter sunday, anonymous gregorian algorithm
fn easter_sunday(year: i32) -> Option<NaiveDate> {
    let a = year % 19;
    let b = year / 100;
    let c = year % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = (h + l - 7 * m + 114) % 31 + 1;

    NaiveDate::from_ymd_opt(year, month as u32, day as u32)
}
