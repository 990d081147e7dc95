// ============================================================================
// Basic Usage Example
// ============================================================================
//
// Run with: cargo run --example basic_usage --features logging

use money_value::prelude::*;
use rust_decimal::Decimal;

fn main() -> Result<(), MoneyError> {
    #[cfg(feature = "logging")]
    money_value::logging::init_logging("money_value=debug");

    println!("=== Money Value Example ===\n");

    let usd = Currency::new("USD")?;
    let eur = Currency::new("EUR")?;
    let config = MoneyConfig::commercial(usd);

    // Build an invoice
    let unit_price = config.parse("24.99")?;
    let subtotal = unit_price.multiply(4, config.rounding_mode)?;
    let shipping = config.money(5)?;
    let total = subtotal.add(&shipping)?;
    println!("Subtotal: {}", subtotal);
    println!("Shipping: {}", shipping);
    println!("Total:    {}\n", total);

    // Split between three people
    println!("Equal split:");
    for (i, share) in total.allocate_to(3)?.iter().enumerate() {
        println!("  person {}: {}", i + 1, share);
    }

    // Split by ownership ratio
    println!("\nSplit 50/30/20:");
    for (i, share) in total.allocate(&[50, 30, 20])?.iter().enumerate() {
        println!("  partner {}: {}", i + 1, share);
    }

    // Currency safety
    let euros = Money::new(10, eur)?;
    match total.add(&euros) {
        Ok(sum) => println!("\nUnexpected sum: {}", sum),
        Err(err) => println!("\nRejected: {}", err),
    }

    // Explicit conversion
    let converted = total.convert(eur, Decimal::new(9187, 4))?;
    println!("Converted at 0.9187: {}", converted);

    // Parsing user input into cents
    for input in ["-12.5", "3,4", "1.999"] {
        match Money::string_to_units(input) {
            Ok(units) => println!("{:>6} -> {} cents", input, units),
            Err(err) => println!("{:>6} -> {}", input, err),
        }
    }

    Ok(())
}
