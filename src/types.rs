//! Core types and data structures for the invoicing engine

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

use crate::tax::round2;

/// Tax registration profile of a company or counterparty
///
/// Derived from a company or party record; any further fields on those
/// records (address lines, PAN, contact details) are opaque to the engine.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TaxProfile {
    /// GST Identification Number, if the entity is registered
    pub gstin: Option<String>,
    /// Registered state, used for intrastate/interstate determination
    pub state: Option<String>,
}

impl TaxProfile {
    /// Create a profile for a GST-registered entity
    pub fn registered(gstin: impl Into<String>, state: impl Into<String>) -> Self {
        Self {
            gstin: Some(gstin.into()),
            state: Some(state.into()),
        }
    }

    /// Create a profile for an entity without GST registration
    pub fn unregistered(state: Option<String>) -> Self {
        Self { gstin: None, state }
    }

    /// An entity is GST-registered iff its GSTIN is present and non-blank
    pub fn is_registered(&self) -> bool {
        self.gstin
            .as_deref()
            .is_some_and(|gstin| !gstin.trim().is_empty())
    }

    /// Registered state with surrounding whitespace removed, if usable
    pub fn trimmed_state(&self) -> Option<&str> {
        self.state
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

/// Whether a line item is a physical product or a rendered service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemType {
    /// Product line - amount derived from quantity and unit price, HSN coded
    Product,
    /// Service line - amount entered directly, SAC coded
    Service,
}

/// A single invoice line item
///
/// The taxable base of a product line is always recomputed from quantity and
/// unit price; the `amount` field is not trusted when both are present. For
/// service lines the amount is a manually entered figure, taken as entered
/// and rounded to the money scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Product or service
    pub item_type: ItemType,
    /// Item description
    pub description: String,
    /// Quantity (product lines only)
    pub quantity: Option<BigDecimal>,
    /// Unit price before tax (product lines only)
    pub unit_price: Option<BigDecimal>,
    /// Taxable base amount
    pub amount: BigDecimal,
    /// GST rate as a percentage (e.g. 18 for 18%)
    pub tax_rate_percent: BigDecimal,
    /// HSN code for products, SAC code for services
    pub classification_code: Option<String>,
}

impl LineItem {
    /// Create a product line; the amount is derived from quantity x unit price
    pub fn product(
        description: impl Into<String>,
        quantity: BigDecimal,
        unit_price: BigDecimal,
        tax_rate_percent: BigDecimal,
        hsn_code: Option<String>,
    ) -> Self {
        let amount = round2(&(&quantity * &unit_price));
        Self {
            item_type: ItemType::Product,
            description: description.into(),
            quantity: Some(quantity),
            unit_price: Some(unit_price),
            amount,
            tax_rate_percent,
            classification_code: hsn_code,
        }
    }

    /// Create a service line with a directly entered amount
    pub fn service(
        description: impl Into<String>,
        amount: BigDecimal,
        tax_rate_percent: BigDecimal,
        sac_code: Option<String>,
    ) -> Self {
        Self {
            item_type: ItemType::Service,
            description: description.into(),
            quantity: None,
            unit_price: None,
            amount,
            tax_rate_percent,
            classification_code: sac_code,
        }
    }

    /// Taxable base of this line, at the money scale
    ///
    /// Product lines are recomputed as `round(quantity x unit_price, 2)`
    /// whenever both figures are present, so a stale caller-supplied amount
    /// can never leak into the totals. All other lines round `amount` to
    /// 2 decimal places. Every line enters the totals already rounded
    /// (round-then-sum); a sub-cent entered amount would otherwise make the
    /// summed line totals and the invoice total disagree by a cent.
    pub fn taxable_value(&self) -> BigDecimal {
        match (self.item_type, &self.quantity, &self.unit_price) {
            (ItemType::Product, Some(quantity), Some(unit_price)) => {
                round2(&(quantity * unit_price))
            }
            _ => round2(&self.amount),
        }
    }
}

/// Kinds of financial transactions handled by the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionKind {
    /// Sales invoice - numbered from the fiscal sequence
    Sales,
    /// Purchase bill - numbered from the fiscal sequence
    Purchase,
    /// Money received against outstanding invoices
    Receipt,
    /// Money paid against outstanding bills
    Payment,
    /// Manual journal entry
    Journal,
    /// Proforma invoice - a quotation, never numbered
    Proforma,
}

/// Errors that can occur in the invoicing engine
#[derive(Debug, thiserror::Error)]
pub enum InvoiceError {
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("Invoice numbering failed: {0}")]
    Numbering(String),
}

/// Result type for invoicing operations
pub type InvoiceResult<T> = Result<T, InvoiceError>;
