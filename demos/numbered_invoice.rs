//! Invoice numbering examples

use chrono::NaiveDate;
use invoicing_core::{assign_invoice_number, utils::MemoryNumbering, TransactionKind};
use uuid::Uuid;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("🔢 Invoicing Core - Invoice Numbering Examples\n");

    let mut numbering = MemoryNumbering::new();
    let company_id = Uuid::new_v4();

    // 1. Sales invoices draw from the INV sequence per fiscal year
    println!("📈 Sales sequence (fiscal year 2024-25):");
    for day in 1..=3 {
        let date = NaiveDate::from_ymd_opt(2024, 7, day).unwrap();
        let issued = assign_invoice_number(&mut numbering, TransactionKind::Sales, company_id, date)
            .await?
            .expect("sales are numbered");
        println!("  {} -> {}", date, issued.invoice_number);
    }
    println!();

    // 2. Purchases count independently
    println!("📥 Purchase sequence:");
    let date = NaiveDate::from_ymd_opt(2024, 7, 10).unwrap();
    let issued =
        assign_invoice_number(&mut numbering, TransactionKind::Purchase, company_id, date)
            .await?
            .expect("purchases are numbered");
    println!("  {} -> {}", date, issued.invoice_number);
    println!();

    // 3. The sequence restarts at the fiscal year boundary
    println!("📅 Fiscal year rollover:");
    for date in [
        NaiveDate::from_ymd_opt(2025, 3, 31).unwrap(),
        NaiveDate::from_ymd_opt(2025, 4, 1).unwrap(),
    ] {
        let issued = assign_invoice_number(&mut numbering, TransactionKind::Sales, company_id, date)
            .await?
            .expect("sales are numbered");
        println!("  {} -> {}", date, issued.invoice_number);
    }
    println!();

    // 4. Receipts, payments, journals, and proformas are never numbered
    println!("🚫 Unnumbered transaction kinds:");
    for kind in [
        TransactionKind::Receipt,
        TransactionKind::Payment,
        TransactionKind::Journal,
        TransactionKind::Proforma,
    ] {
        let issued = assign_invoice_number(&mut numbering, kind, company_id, date).await?;
        println!("  {:?} -> {:?}", kind, issued);
    }

    println!("\n🎉 Numbering examples completed successfully!");
    Ok(())
}
