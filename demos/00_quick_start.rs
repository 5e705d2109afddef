//! quick start - accrue a three day loan against a flat base rate
use loan_accrual_rs::chrono::NaiveDate;
use loan_accrual_rs::interest::total_interest;
use loan_accrual_rs::{
    calculate_loan, BaseRate, BaseRateTable, Currency, DateRange, Decimal, Money, Rate,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let usd = Currency::new("USD")?;
    let start = NaiveDate::from_ymd_opt(2021, 1, 1).ok_or("bad start date")?;
    let end = NaiveDate::from_ymd_opt(2021, 1, 3).ok_or("bad end date")?;

    let base_rate = Rate::from_decimal(Decimal::new(2, 4)); // 0.0002 per day
    let rates: BaseRateTable = DateRange::inclusive(start, end)
        .map(|date| BaseRate {
            currency: usd.clone(),
            date,
            interest_rate: base_rate,
        })
        .collect();

    let principal = Money::from_major(1_000);
    let margin = Rate::from_percentage(5);
    let records = calculate_loan(start, end, principal, &usd, margin, &rates)?;

    for record in &records {
        println!(
            "{} day {}: {} ({} without margin)",
            record.date,
            record.days_elapsed_since_start,
            record.interest_accrual_amount.round_dp(8),
            record.interest_accrual_amount_without_margin.round_dp(8),
        );
    }
    println!("total interest: {}", total_interest(&records).round_dp(8));

    Ok(())
}
