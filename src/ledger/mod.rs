use crate::domain::payment::PaymentRecord;
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use std::sync::Arc;

pub mod summary;

use summary::{summarize_records, PaymentsSummary};

/// Append-only in-memory store of processed payments.
///
/// Cloning yields another handle to the same records. The write lock is held only
/// for the push; callers must not hold it across an await point.
#[derive(Clone, Default)]
pub struct Ledger {
    records: Arc<RwLock<Vec<PaymentRecord>>>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&self, record: PaymentRecord) {
        self.records.write().push(record);
    }

    /// Totals per destination for `from <= timestamp <= to`.
    /// `to` defaults to the time of this call.
    pub fn summarize(
        &self,
        from: Option<DateTime<Utc>>,
        to: Option<DateTime<Utc>>,
    ) -> PaymentsSummary {
        let to = to.unwrap_or_else(Utc::now);
        let records = self.records.read();
        summarize_records(records.iter(), from, to)
    }

    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn snapshot(&self) -> Vec<PaymentRecord> {
        self.records.read().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::payment::Destination;
    use uuid::Uuid;

    fn record(amount: f64, destination: Destination) -> PaymentRecord {
        PaymentRecord {
            correlation_id: Uuid::new_v4(),
            amount,
            timestamp: Utc::now(),
            destination,
        }
    }

    #[test]
    fn empty_ledger_reports_both_destinations() {
        let ledger = Ledger::new();
        let s = ledger.summarize(None, None);
        assert_eq!(s.default.total_requests, 0);
        assert_eq!(s.fallback.total_requests, 0);
        assert!(ledger.is_empty());
    }

    #[test]
    fn clones_share_records() {
        let ledger = Ledger::new();
        let handle = ledger.clone();
        handle.append(record(19.90, Destination::Default));

        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.snapshot()[0].amount, 19.90);
    }

    #[test]
    fn open_to_bound_is_taken_at_query_time() {
        let ledger = Ledger::new();
        let before = Utc::now();
        ledger.append(record(1.0, Destination::Fallback));

        let s = ledger.summarize(Some(before), None);
        assert_eq!(s.fallback.total_requests, 1);
        assert_eq!(s.fallback.total_amount, 1.0);
    }

    #[test]
    fn concurrent_appends_are_not_lost() {
        let ledger = Ledger::new();
        let writers = 8;
        let per_writer = 250;

        std::thread::scope(|scope| {
            for w in 0..writers {
                let ledger = ledger.clone();
                scope.spawn(move || {
                    let destination = if w % 2 == 0 {
                        Destination::Default
                    } else {
                        Destination::Fallback
                    };
                    for _ in 0..per_writer {
                        ledger.append(record(1.0, destination));
                        let _ = ledger.summarize(None, None);
                    }
                });
            }
        });

        assert_eq!(ledger.len(), writers * per_writer);
        let s = ledger.summarize(None, None);
        assert_eq!(s.default.total_requests + s.fallback.total_requests, (writers * per_writer) as u64);
        assert_eq!(s.default.total_amount, (writers / 2 * per_writer) as f64);

        let mut ids: Vec<Uuid> = ledger.snapshot().iter().map(|r| r.correlation_id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), writers * per_writer);
    }
}
