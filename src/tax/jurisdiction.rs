//! Tax jurisdiction resolution
//!
//! Determines, from the seller's and buyer's tax profiles, whether GST
//! applies to a transaction at all and whether it takes the intrastate
//! (CGST + SGST) or interstate (IGST) form. Jurisdiction is a
//! transaction-level fact: it is resolved once and applied to every line.

use serde::{Deserialize, Serialize};

use crate::types::TaxProfile;

/// Resolved tax jurisdiction for a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Jurisdiction {
    /// Whether GST applies to the transaction at all
    pub applicable: bool,
    /// Whether the transaction crosses state lines (IGST instead of CGST+SGST)
    pub interstate: bool,
}

impl Jurisdiction {
    /// GST applies in the combined CGST + SGST form
    pub fn intra_state() -> Self {
        Self {
            applicable: true,
            interstate: false,
        }
    }

    /// GST applies in the integrated IGST form
    pub fn inter_state() -> Self {
        Self {
            applicable: true,
            interstate: true,
        }
    }

    /// GST does not apply (seller is not registered)
    pub fn not_applicable() -> Self {
        Self {
            applicable: false,
            interstate: false,
        }
    }
}

/// Resolve the jurisdiction from the seller's and buyer's registered states
///
/// GST is applicable iff the company (seller) is GST-registered; an
/// unregistered seller charges no tax regardless of the buyer's status.
/// When applicable, the transaction is interstate iff both states are known
/// and differ under trimmed, case-insensitive comparison.
///
/// Missing state data on either side deliberately resolves to intrastate
/// rather than an error, so invoice creation is never blocked by an
/// incomplete address. This default is policy, not an accident.
pub fn resolve(company: &TaxProfile, counterparty: &TaxProfile) -> Jurisdiction {
    resolve_shipped(company, counterparty, None)
}

/// Resolve the jurisdiction for a shipped transaction
///
/// A non-blank `shipping_state` overrides the counterparty's registered
/// state, since place of supply follows the delivery address.
pub fn resolve_shipped(
    company: &TaxProfile,
    counterparty: &TaxProfile,
    shipping_state: Option<&str>,
) -> Jurisdiction {
    if !company.is_registered() {
        return Jurisdiction::not_applicable();
    }

    let effective_state = shipping_state
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .or_else(|| counterparty.trimmed_state());

    match (company.trimmed_state(), effective_state) {
        (Some(seller), Some(buyer)) if !seller.eq_ignore_ascii_case(buyer) => {
            Jurisdiction::inter_state()
        }
        _ => Jurisdiction::intra_state(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn company() -> TaxProfile {
        TaxProfile::registered("27AAPFU0939F1ZV", "Maharashtra")
    }

    #[test]
    fn same_state_is_intrastate() {
        let buyer = TaxProfile::registered("27AABCU9603R1ZM", "Maharashtra");
        assert_eq!(resolve(&company(), &buyer), Jurisdiction::intra_state());
    }

    #[test]
    fn different_state_is_interstate() {
        let buyer = TaxProfile::registered("24AABCU9603R1ZX", "Gujarat");
        assert_eq!(resolve(&company(), &buyer), Jurisdiction::inter_state());
    }

    #[test]
    fn state_comparison_ignores_case_and_whitespace() {
        let buyer = TaxProfile {
            gstin: None,
            state: Some("  maharashtra ".to_string()),
        };
        assert_eq!(resolve(&company(), &buyer), Jurisdiction::intra_state());
    }

    #[test]
    fn unregistered_seller_charges_no_tax() {
        let seller = TaxProfile::unregistered(Some("Maharashtra".to_string()));
        let buyer = TaxProfile::registered("24AABCU9603R1ZX", "Gujarat");
        assert_eq!(resolve(&seller, &buyer), Jurisdiction::not_applicable());
    }

    #[test]
    fn blank_gstin_counts_as_unregistered() {
        let seller = TaxProfile {
            gstin: Some("  ".to_string()),
            state: Some("Maharashtra".to_string()),
        };
        let buyer = TaxProfile::registered("27AABCU9603R1ZM", "Maharashtra");
        assert_eq!(resolve(&seller, &buyer), Jurisdiction::not_applicable());
    }

    #[test]
    fn missing_state_defaults_to_intrastate() {
        let buyer = TaxProfile {
            gstin: None,
            state: None,
        };
        assert_eq!(resolve(&company(), &buyer), Jurisdiction::intra_state());

        let stateless_company = TaxProfile {
            gstin: Some("27AAPFU0939F1ZV".to_string()),
            state: None,
        };
        let gujarat = TaxProfile::registered("24AABCU9603R1ZX", "Gujarat");
        assert_eq!(
            resolve(&stateless_company, &gujarat),
            Jurisdiction::intra_state()
        );
    }

    #[test]
    fn shipping_state_overrides_registered_state() {
        let buyer = TaxProfile::registered("27AABCU9603R1ZM", "Maharashtra");
        assert_eq!(
            resolve_shipped(&company(), &buyer, Some("Gujarat")),
            Jurisdiction::inter_state()
        );
        // Blank shipping state falls back to the registered state
        assert_eq!(
            resolve_shipped(&company(), &buyer, Some("   ")),
            Jurisdiction::intra_state()
        );
    }
}
