//! GST computation engine: jurisdiction resolution, per-line tax, invoice
//! totals, and HSN/SAC summaries
//!
//! Every form and every rendering template must derive its figures from this
//! module; nothing downstream recomputes tax on its own.

pub mod hsn;
pub mod jurisdiction;
pub mod line;
pub mod totals;

pub use hsn::*;
pub use jurisdiction::*;
pub use line::*;
pub use totals::*;

use bigdecimal::{BigDecimal, RoundingMode};

/// Round a monetary value to 2 decimal places, half-up
///
/// This is the single rounding convention of the engine. Every line-level
/// figure is rounded with this before it is summed into invoice totals
/// (round-then-sum), which is what keeps `invoice_total` exactly equal to
/// `sub_total + tax_amount` at 2 decimal places.
pub fn round2(value: &BigDecimal) -> BigDecimal {
    value.with_scale_round(2, RoundingMode::HalfUp)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round2_is_half_up_at_two_places() {
        assert_eq!(
            round2(&"12.345".parse().unwrap()),
            "12.35".parse::<BigDecimal>().unwrap()
        );
        assert_eq!(
            round2(&"12.344".parse().unwrap()),
            "12.34".parse::<BigDecimal>().unwrap()
        );
        assert_eq!(
            round2(&BigDecimal::from(7)),
            "7.00".parse::<BigDecimal>().unwrap()
        );
    }
}
