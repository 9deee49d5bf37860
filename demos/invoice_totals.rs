//! GST invoice computation examples

use bigdecimal::BigDecimal;
use invoicing_core::{aggregate, resolve, resolve_shipped, LineItem, TaxProfile};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("🧾 Invoicing Core - GST Computation Examples\n");

    let company = TaxProfile::registered("27AAPFU0939F1ZV", "Maharashtra");

    let lines = vec![
        LineItem::product(
            "Wireless router",
            BigDecimal::from(2),
            BigDecimal::from(2500),
            BigDecimal::from(18),
            Some("8517".to_string()),
        ),
        LineItem::product(
            "Cat-6 cable (per meter)",
            BigDecimal::from(50),
            "12.50".parse()?,
            BigDecimal::from(18),
            Some("8544".to_string()),
        ),
        LineItem::service(
            "Network installation",
            BigDecimal::from(3000),
            BigDecimal::from(18),
            Some("9987".to_string()),
        ),
    ];

    // 1. Intrastate sale: CGST + SGST
    println!("🏢 Intrastate Sale (customer in Maharashtra):");
    let local_customer = TaxProfile::registered("27AABCU9603R1ZM", "Maharashtra");
    let jurisdiction = resolve(&company, &local_customer);
    let computed = aggregate(&lines, &jurisdiction);

    for (line, tax) in lines.iter().zip(&computed.line_taxes) {
        println!(
            "  {:<28} ₹{:>10}  CGST ₹{:>8}  SGST ₹{:>8}",
            line.description, tax.taxable_value, tax.cgst, tax.sgst
        );
    }
    println!("  Sub Total:     ₹{}", computed.totals.sub_total);
    println!("  Tax Amount:    ₹{}", computed.totals.tax_amount);
    println!("  Invoice Total: ₹{}", computed.totals.invoice_total);
    println!();

    // 2. Interstate sale: the same lines, IGST form
    println!("🌍 Interstate Sale (customer in Gujarat):");
    let remote_customer = TaxProfile::registered("24AABCU9603R1ZX", "Gujarat");
    let jurisdiction = resolve(&company, &remote_customer);
    let computed = aggregate(&lines, &jurisdiction);

    for (line, tax) in lines.iter().zip(&computed.line_taxes) {
        println!(
            "  {:<28} ₹{:>10}  IGST ₹{:>8}",
            line.description, tax.taxable_value, tax.igst
        );
    }
    println!("  Invoice Total: ₹{}", computed.totals.invoice_total);
    println!();

    // 3. Shipping address override
    println!("🚚 Shipped Order (registered locally, delivered to Karnataka):");
    let jurisdiction = resolve_shipped(&company, &local_customer, Some("Karnataka"));
    println!(
        "  applicable={}, interstate={}",
        jurisdiction.applicable, jurisdiction.interstate
    );
    println!();

    // 4. HSN/SAC summary for the printed invoice
    println!("📋 HSN/SAC Summary (interstate):");
    let computed = aggregate(&lines, &resolve(&company, &remote_customer));
    println!(
        "  {:<8} {:>6} {:>12} {:>10} {:>12}",
        "Code", "Rate", "Taxable", "IGST", "Total"
    );
    for row in &computed.hsn_summary {
        println!(
            "  {:<8} {:>5}% {:>12} {:>10} {:>12}",
            row.classification_code,
            row.tax_rate_percent,
            row.taxable_value,
            row.igst_amount,
            row.total
        );
    }
    println!();

    // 5. Unregistered seller: no tax regardless of the buyer
    println!("🚫 Unregistered Seller:");
    let unregistered = TaxProfile::unregistered(Some("Maharashtra".to_string()));
    let computed = aggregate(&lines, &resolve(&unregistered, &remote_customer));
    println!("  Tax Amount:    ₹{}", computed.totals.tax_amount);
    println!("  Invoice Total: ₹{}", computed.totals.invoice_total);

    println!("\n🎉 GST computation examples completed successfully!");
    Ok(())
}
