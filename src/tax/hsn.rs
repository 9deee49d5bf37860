//! HSN/SAC tax summary
//!
//! Printed invoices carry a table of tax grouped by classification code and
//! rate. Groups appear in the order their first line appears on the invoice,
//! not sorted, so the summary reads in the same order items were entered.

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

use crate::tax::TaxResult;
use crate::types::LineItem;

/// Sentinel group for lines without a classification code
pub const UNCLASSIFIED: &str = "-";

/// One row of the HSN/SAC summary table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HsnSummaryRow {
    /// HSN or SAC code, or `"-"` for unclassified lines
    pub classification_code: String,
    /// GST rate shared by all lines in this group
    pub tax_rate_percent: BigDecimal,
    /// Summed taxable value of the group
    pub taxable_value: BigDecimal,
    /// Summed CGST across the group
    pub cgst_amount: BigDecimal,
    /// Summed SGST across the group
    pub sgst_amount: BigDecimal,
    /// Summed IGST across the group
    pub igst_amount: BigDecimal,
    /// Summed line totals (taxable value plus tax)
    pub total: BigDecimal,
}

/// Group per-line tax results by `(classification code, rate)`
///
/// Lines with a blank or missing code are kept under the [`UNCLASSIFIED`]
/// sentinel rather than dropped; their tax still has to appear on the
/// printed summary. Expects `line_taxes` to be index-aligned with `lines`,
/// which is how [`crate::tax::aggregate`] produces them.
pub fn summarize(lines: &[LineItem], line_taxes: &[TaxResult]) -> Vec<HsnSummaryRow> {
    let mut rows: Vec<HsnSummaryRow> = Vec::new();

    for (line, tax) in lines.iter().zip(line_taxes) {
        let code = line
            .classification_code
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .unwrap_or(UNCLASSIFIED);

        let existing = rows.iter_mut().find(|row| {
            row.classification_code == code && row.tax_rate_percent == line.tax_rate_percent
        });

        match existing {
            Some(row) => {
                row.taxable_value += &tax.taxable_value;
                row.cgst_amount += &tax.cgst;
                row.sgst_amount += &tax.sgst;
                row.igst_amount += &tax.igst;
                row.total += &tax.total;
            }
            None => rows.push(HsnSummaryRow {
                classification_code: code.to_string(),
                tax_rate_percent: line.tax_rate_percent.clone(),
                taxable_value: tax.taxable_value.clone(),
                cgst_amount: tax.cgst.clone(),
                sgst_amount: tax.sgst.clone(),
                igst_amount: tax.igst.clone(),
                total: tax.total.clone(),
            }),
        }
    }

    rows
}
