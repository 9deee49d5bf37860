//! In-memory invoice numbering for testing and development

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use uuid::Uuid;

use crate::numbering::{FiscalYear, InvoiceNumbering, IssuedNumber, NumberingRequest, Series};
use crate::types::InvoiceResult;

type SequenceKey = (Uuid, Series, FiscalYear);

/// In-memory numbering service
///
/// Keeps one counter per `(company, series, fiscal year)` behind a lock, so
/// it satisfies the gap-free contract within a single process. Production
/// deployments replace this with a backend that serializes issuance across
/// processes.
#[derive(Debug, Clone, Default)]
pub struct MemoryNumbering {
    counters: Arc<RwLock<HashMap<SequenceKey, u64>>>,
}

impl MemoryNumbering {
    /// Create a new in-memory numbering service
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all sequences (useful for testing)
    pub fn clear(&self) {
        self.counters.write().unwrap().clear();
    }
}

#[async_trait]
impl InvoiceNumbering for MemoryNumbering {
    async fn next_number(&mut self, request: &NumberingRequest) -> InvoiceResult<IssuedNumber> {
        let fiscal_year = FiscalYear::for_date(request.date);
        let key = (request.company_id, request.series, fiscal_year);

        let mut counters = self.counters.write().unwrap();
        let sequence = counters.entry(key).and_modify(|c| *c += 1).or_insert(1);

        Ok(IssuedNumber {
            invoice_number: format!(
                "{}/{}/{:04}",
                request.series.prefix(),
                fiscal_year.label(),
                sequence
            ),
            sequence: *sequence,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn request(company_id: Uuid, series: Series, date: NaiveDate) -> NumberingRequest {
        NumberingRequest {
            company_id,
            date,
            series,
        }
    }

    #[tokio::test]
    async fn sequence_is_gap_free_per_series() {
        let mut numbering = MemoryNumbering::new();
        let company = Uuid::new_v4();
        let date = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();

        for expected in 1..=3 {
            let issued = numbering
                .next_number(&request(company, Series::Sales, date))
                .await
                .unwrap();
            assert_eq!(issued.sequence, expected);
        }

        // The purchase series counts independently
        let purchase = numbering
            .next_number(&request(company, Series::Purchase, date))
            .await
            .unwrap();
        assert_eq!(purchase.sequence, 1);
        assert_eq!(purchase.invoice_number, "PUR/2024-25/0001");
    }

    #[tokio::test]
    async fn companies_do_not_share_sequences() {
        let mut numbering = MemoryNumbering::new();
        let date = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();

        let first = numbering
            .next_number(&request(Uuid::new_v4(), Series::Sales, date))
            .await
            .unwrap();
        let second = numbering
            .next_number(&request(Uuid::new_v4(), Series::Sales, date))
            .await
            .unwrap();

        assert_eq!(first.sequence, 1);
        assert_eq!(second.sequence, 1);
    }

    #[tokio::test]
    async fn fiscal_year_rollover_restarts_the_sequence() {
        let mut numbering = MemoryNumbering::new();
        let company = Uuid::new_v4();

        let march = NaiveDate::from_ymd_opt(2025, 3, 31).unwrap();
        let april = NaiveDate::from_ymd_opt(2025, 4, 1).unwrap();

        let before = numbering
            .next_number(&request(company, Series::Sales, march))
            .await
            .unwrap();
        let after = numbering
            .next_number(&request(company, Series::Sales, april))
            .await
            .unwrap();

        assert_eq!(before.invoice_number, "INV/2024-25/0001");
        assert_eq!(after.invoice_number, "INV/2025-26/0001");
    }
}
