//! Invoice totals aggregation
//!
//! One pass over the line items produces everything a form or a rendering
//! template needs: per-line tax breakdowns, invoice-level totals, and the
//! HSN/SAC summary. The computation is a pure function of its inputs, so
//! callers can re-run it after every edit and compare output records
//! directly instead of guarding against drift.

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

use crate::tax::{compute_line_tax, round2, summarize, HsnSummaryRow, Jurisdiction, TaxResult};
use crate::types::{ItemType, LineItem};

/// Invoice-level totals
///
/// Each line is rounded before summing (round-then-sum), which makes
/// `invoice_total == sub_total + tax_amount` hold exactly at 2 decimal
/// places instead of drifting by accumulated rounding remainders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceTotals {
    /// Sum of taxable line values, before tax
    pub sub_total: BigDecimal,
    /// Sum of all CGST, SGST, and IGST amounts across lines
    pub tax_amount: BigDecimal,
    /// Final payable amount: sub_total + tax_amount
    pub invoice_total: BigDecimal,
    /// Number of line items
    pub total_item_count: usize,
    /// Sum of quantities across product lines; services contribute nothing
    pub total_quantity: BigDecimal,
}

/// Complete computed view of an invoice
///
/// This is the record every consumer displays from. Rendering templates
/// must not recompute tax on their own; they read these figures, which
/// keeps every layout in agreement on the totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceComputation {
    /// Per-line tax breakdown, in line order
    pub line_taxes: Vec<TaxResult>,
    /// Invoice-level totals
    pub totals: InvoiceTotals,
    /// Tax summary grouped by HSN/SAC code and rate
    pub hsn_summary: Vec<HsnSummaryRow>,
}

/// Compute per-line taxes, invoice totals, and the HSN summary
///
/// Product line amounts are recomputed from quantity and unit price before
/// taxing; service amounts are taken as entered and rounded to the money
/// scale (see [`LineItem::taxable_value`]). Every line is therefore already
/// at 2 decimal places before it is summed, so the subtotal is exactly the
/// sum of the per-line taxable values the lines themselves show. The same
/// jurisdiction applies to every line.
///
/// Aggregation is idempotent: the same input always yields an identical
/// output record, so UI code re-running this on every edit can write the
/// result back into form state without update loops.
pub fn aggregate(lines: &[LineItem], jurisdiction: &Jurisdiction) -> InvoiceComputation {
    let line_taxes: Vec<TaxResult> = lines
        .iter()
        .map(|line| compute_line_tax(&line.taxable_value(), &line.tax_rate_percent, jurisdiction))
        .collect();

    let sub_total = round2(&line_taxes.iter().map(|t| &t.taxable_value).sum());
    let tax_amount: BigDecimal = line_taxes.iter().map(TaxResult::tax_amount).sum();
    let invoice_total = round2(&(&sub_total + &tax_amount));

    let total_quantity = lines
        .iter()
        .filter(|line| line.item_type == ItemType::Product)
        .filter_map(|line| line.quantity.as_ref())
        .sum();

    let hsn_summary = summarize(lines, &line_taxes);

    InvoiceComputation {
        totals: InvoiceTotals {
            sub_total,
            tax_amount,
            invoice_total,
            total_item_count: lines.len(),
            total_quantity,
        },
        line_taxes,
        hsn_summary,
    }
}
