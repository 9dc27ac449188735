use crate::domain::payment::{Destination, PaymentRecord};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub total_requests: u64,
    pub total_amount: f64,
}

/// Per-destination totals. Both destinations are always present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentsSummary {
    pub default: Summary,
    pub fallback: Summary,
}

impl PaymentsSummary {
    fn entry(&mut self, destination: Destination) -> &mut Summary {
        match destination {
            Destination::Default => &mut self.default,
            Destination::Fallback => &mut self.fallback,
        }
    }
}

/// Folds every record with `from <= timestamp <= to`. `None` for `from` is unbounded.
pub fn summarize_records<'a, I>(
    records: I,
    from: Option<DateTime<Utc>>,
    to: DateTime<Utc>,
) -> PaymentsSummary
where
    I: IntoIterator<Item = &'a PaymentRecord>,
{
    let mut out = PaymentsSummary::default();
    for record in records {
        if from.is_some_and(|f| record.timestamp < f) || record.timestamp > to {
            continue;
        }
        let entry = out.entry(record.destination);
        entry.total_requests += 1;
        entry.total_amount += record.amount;
    }
    out
}
