//! # Invoicing Core
//!
//! The GST computation and invoice-totals engine behind a business
//! accounting application: given line items, the company's and
//! counterparty's tax profiles, and per-line rates, it resolves the tax
//! jurisdiction, computes CGST/SGST or IGST per line, and derives the
//! invoice totals and HSN/SAC summary that forms and rendering templates
//! display.
//!
//! ## Features
//!
//! - **Jurisdiction resolution**: registered-seller check and
//!   intrastate/interstate determination from state data, including
//!   shipping-address overrides
//! - **Line tax calculation**: half-rate CGST/SGST split or full-rate IGST,
//!   rounded per line to 2 decimal places
//! - **Totals aggregation**: round-then-sum invoice totals that stay exact
//!   under recomputation
//! - **HSN/SAC summary**: tax grouped by classification code and rate in
//!   entry order
//! - **Invoice numbering**: gap-free per-company fiscal-year sequences
//!   behind an async service trait
//!
//! ## Quick Start
//!
//! ```rust
//! use invoicing_core::{aggregate, resolve, LineItem, TaxProfile};
//! use bigdecimal::BigDecimal;
//!
//! let company = TaxProfile::registered("27AAPFU0939F1ZV", "Maharashtra");
//! let customer = TaxProfile::registered("27AABCU9603R1ZM", "Maharashtra");
//! let jurisdiction = resolve(&company, &customer);
//!
//! let lines = vec![LineItem::product(
//!     "Laptop stand",
//!     BigDecimal::from(2),
//!     BigDecimal::from(500),
//!     BigDecimal::from(18),
//!     Some("8473".to_string()),
//! )];
//!
//! let computed = aggregate(&lines, &jurisdiction);
//! assert_eq!(
//!     computed.totals.invoice_total,
//!     "1180.00".parse::<BigDecimal>().unwrap()
//! );
//! ```

pub mod numbering;
pub mod tax;
pub mod types;
pub mod utils;

// Re-export commonly used types
pub use numbering::*;
pub use tax::*;
pub use types::*;
