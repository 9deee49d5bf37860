//! Invoice numbering service boundary
//!
//! Sales and purchase transactions must carry a sequential, gap-free number
//! per company, series, and fiscal year before they are finalized. Issuing
//! that number safely under concurrent submissions is the numbering
//! service's problem; this module defines only the contract the engine
//! holds it to, plus the fiscal-year arithmetic both sides share.

use async_trait::async_trait;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::{InvoiceResult, TransactionKind};

/// Numbering series an invoice number is drawn from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Series {
    /// Outgoing sales invoices
    Sales,
    /// Incoming purchase bills
    Purchase,
}

impl Series {
    /// Document prefix used when formatting numbers from this series
    pub fn prefix(&self) -> &'static str {
        match self {
            Series::Sales => "INV",
            Series::Purchase => "PUR",
        }
    }

    /// Series required by a transaction kind, if it is numbered at all
    ///
    /// Receipts, payments, journals, and proforma invoices are never drawn
    /// from the fiscal sequence.
    pub fn for_kind(kind: TransactionKind) -> Option<Self> {
        match kind {
            TransactionKind::Sales => Some(Series::Sales),
            TransactionKind::Purchase => Some(Series::Purchase),
            TransactionKind::Receipt
            | TransactionKind::Payment
            | TransactionKind::Journal
            | TransactionKind::Proforma => None,
        }
    }
}

/// Indian fiscal year, running April 1 through March 31
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FiscalYear {
    start_year: i32,
}

impl FiscalYear {
    /// Fiscal year a given date falls in
    pub fn for_date(date: NaiveDate) -> Self {
        let start_year = if date.month() >= 4 {
            date.year()
        } else {
            date.year() - 1
        };
        Self { start_year }
    }

    /// Calendar year the fiscal year starts in
    pub fn start_year(&self) -> i32 {
        self.start_year
    }

    /// Display label in the conventional short form, e.g. `2024-25`
    pub fn label(&self) -> String {
        format!("{}-{:02}", self.start_year, (self.start_year + 1) % 100)
    }
}

/// Request for the next number in a sequence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberingRequest {
    /// Company the sequence belongs to
    pub company_id: Uuid,
    /// Transaction date, used to pick the fiscal year
    pub date: NaiveDate,
    /// Sales or purchase series
    pub series: Series,
}

/// A number issued from a sequence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssuedNumber {
    /// Formatted invoice number, e.g. `INV/2024-25/0042`
    pub invoice_number: String,
    /// Position in the sequence, starting at 1
    pub sequence: u64,
}

/// Contract for the external numbering service
///
/// Implementations must hand out a gap-free, strictly increasing sequence
/// per `(company, series, fiscal year)` even under concurrent submissions
/// from multiple users of the same company.
#[async_trait]
pub trait InvoiceNumbering: Send + Sync {
    /// Issue the next number in the requested sequence
    async fn next_number(&mut self, request: &NumberingRequest) -> InvoiceResult<IssuedNumber>;
}

/// Obtain an invoice number for a transaction about to be finalized
///
/// Returns `Ok(None)` for kinds that are not numbered. For sales and
/// purchase transactions a numbering failure is fatal to the submission:
/// the error propagates and the caller must not create the transaction
/// without a valid number. Retry policy, if any, belongs to the caller's
/// network layer.
pub async fn assign_invoice_number<N: InvoiceNumbering + ?Sized>(
    numbering: &mut N,
    kind: TransactionKind,
    company_id: Uuid,
    date: NaiveDate,
) -> InvoiceResult<Option<IssuedNumber>> {
    match Series::for_kind(kind) {
        Some(series) => {
            let request = NumberingRequest {
                company_id,
                date,
                series,
            };
            let issued = numbering.next_number(&request).await?;
            Ok(Some(issued))
        }
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fiscal_year_boundaries() {
        let march = NaiveDate::from_ymd_opt(2025, 3, 31).unwrap();
        let april = NaiveDate::from_ymd_opt(2025, 4, 1).unwrap();

        assert_eq!(FiscalYear::for_date(march).start_year(), 2024);
        assert_eq!(FiscalYear::for_date(april).start_year(), 2025);
        assert_eq!(FiscalYear::for_date(march).label(), "2024-25");
        assert_eq!(FiscalYear::for_date(april).label(), "2025-26");
    }

    #[test]
    fn century_rollover_label() {
        let date = NaiveDate::from_ymd_opt(2099, 6, 1).unwrap();
        assert_eq!(FiscalYear::for_date(date).label(), "2099-00");
    }

    #[test]
    fn only_sales_and_purchases_are_numbered() {
        assert_eq!(Series::for_kind(TransactionKind::Sales), Some(Series::Sales));
        assert_eq!(
            Series::for_kind(TransactionKind::Purchase),
            Some(Series::Purchase)
        );
        for kind in [
            TransactionKind::Receipt,
            TransactionKind::Payment,
            TransactionKind::Journal,
            TransactionKind::Proforma,
        ] {
            assert_eq!(Series::for_kind(kind), None);
        }
    }
}
