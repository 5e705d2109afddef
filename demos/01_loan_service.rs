//! loan service - validate, calculate, store and render loans
use loan_accrual_rs::chrono::{NaiveDate, TimeZone, Utc};
use loan_accrual_rs::{
    logging, Decimal, InMemoryRateSource, ListLoansView, LoanRequest, LoanService, LoanView, Money,
    Rate, SafeTimeProvider, Settings, TimeSource,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let settings = Settings::default();
    logging::init(&settings.log_level)?;

    let mut rates = InMemoryRateSource::new();
    rates.populate(
        &settings.policy.allowed_currencies,
        2021,
        2022,
        Some(Rate::from_decimal(Decimal::new(15, 5))),
    );
    let mut service = LoanService::new(settings.policy.clone(), rates)?;

    let time = SafeTimeProvider::new(TimeSource::Test(
        Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap()
    ));

    let request = LoanRequest {
        amount: Money::from_major(250_000),
        currency: "GBP".to_string(),
        annual_margin_in_percent: Decimal::new(35, 1),
        start_date: NaiveDate::from_ymd_opt(2021, 3, 1).ok_or("bad start date")?,
        end_date: NaiveDate::from_ymd_opt(2021, 3, 5).ok_or("bad end date")?,
    };
    let id = service.create_loan(&request, &time)?.id;
    println!("{}", LoanView::from_record(service.get_loan(id)?).to_json_pretty()?);

    // christmas day is rejected by the uk bank holiday calendar
    let holiday = LoanRequest {
        start_date: NaiveDate::from_ymd_opt(2021, 12, 25).ok_or("bad date")?,
        end_date: NaiveDate::from_ymd_opt(2022, 1, 10).ok_or("bad date")?,
        ..request
    };
    if let Err(e) = service.create_loan(&holiday, &time) {
        println!("rejected: {e}");
    }

    println!("{}", ListLoansView::from_records(service.list_loans()).to_json_pretty()?);
    Ok(())
}
