//! Per-line GST calculation

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

use crate::tax::{round2, Jurisdiction};

/// Computed tax breakdown for a single line
///
/// Always derived, never persisted as a source of truth. At most one of the
/// CGST+SGST pair and IGST is non-zero, and which one is fixed by the
/// transaction-level jurisdiction, never per line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxResult {
    /// Taxable base the tax was computed on
    pub taxable_value: BigDecimal,
    /// Central GST amount (intrastate only)
    pub cgst: BigDecimal,
    /// State GST amount (intrastate only, always equal to CGST)
    pub sgst: BigDecimal,
    /// Integrated GST amount (interstate only)
    pub igst: BigDecimal,
    /// Taxable value plus all tax amounts, rounded to 2 decimal places
    pub total: BigDecimal,
    /// Whether GST applied to the transaction
    pub is_gst_applicable: bool,
    /// Whether the interstate (IGST) form was used
    pub is_interstate: bool,
}

/// Compute the GST breakdown for one line
///
/// - Not applicable, or a zero/negative rate: every tax field is zero and
///   the total equals the taxable value.
/// - Interstate: `igst = round(taxable x rate / 100, 2)`.
/// - Intrastate: `cgst = sgst = round(taxable x rate / 200, 2)` - each half
///   is rounded independently rather than halving a rounded full-rate
///   figure, so the two halves never disagree by a rounding remainder.
///
/// The calculator trusts its numeric inputs. Rates above 100 or negative
/// values are not clamped here; constraining input to sane ranges is the
/// form layer's job (see [`crate::utils::validation`]).
pub fn compute_line_tax(
    taxable_value: &BigDecimal,
    rate_percent: &BigDecimal,
    jurisdiction: &Jurisdiction,
) -> TaxResult {
    let zero = BigDecimal::from(0);

    if !jurisdiction.applicable || *rate_percent <= zero {
        return TaxResult {
            taxable_value: taxable_value.clone(),
            cgst: zero.clone(),
            sgst: zero.clone(),
            igst: zero,
            total: round2(taxable_value),
            is_gst_applicable: jurisdiction.applicable,
            is_interstate: false,
        };
    }

    let (cgst, sgst, igst) = if jurisdiction.interstate {
        let igst = round2(&((taxable_value * rate_percent) / BigDecimal::from(100)));
        (zero.clone(), zero, igst)
    } else {
        let half = round2(&((taxable_value * rate_percent) / BigDecimal::from(200)));
        (half.clone(), half, zero)
    };

    let total = round2(&(taxable_value + &cgst + &sgst + &igst));

    TaxResult {
        taxable_value: taxable_value.clone(),
        cgst,
        sgst,
        igst,
        total,
        is_gst_applicable: true,
        is_interstate: jurisdiction.interstate,
    }
}

impl TaxResult {
    /// Total tax charged on this line
    pub fn tax_amount(&self) -> BigDecimal {
        &self.cgst + &self.sgst + &self.igst
    }
}
