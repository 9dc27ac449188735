use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// Inbound `POST /payments` body. Missing or null fields decode to empty values and
/// are caught by correlation-id validation.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    #[serde(default, deserialize_with = "null_as_default")]
    pub correlation_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub amount: f64,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Body sent to a processor's `POST /payments`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProcessorPayload {
    pub correlation_id: String,
    pub amount: f64,
}

impl From<&PaymentRequest> for ProcessorPayload {
    fn from(req: &PaymentRequest) -> Self {
        Self {
            correlation_id: req.correlation_id.clone(),
            amount: req.amount,
        }
    }
}

/// Which processor accepted a payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Destination {
    Default,
    Fallback,
}

impl Destination {
    pub fn as_str(&self) -> &'static str {
        match self {
            Destination::Default => "default",
            Destination::Fallback => "fallback",
        }
    }
}

impl std::fmt::Display for Destination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRecord {
    pub correlation_id: Uuid,
    pub amount: f64,
    pub timestamp: DateTime<Utc>,
    pub destination: Destination,
}
