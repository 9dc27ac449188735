use crate::error::RouteError;
use crate::AppState;
use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::{DateTime, Utc};

#[derive(Debug, Default)]
pub struct SummaryQuery {
    pub from: Option<String>,
    pub to: Option<String>,
}

impl SummaryQuery {
    /// The first occurrence of a repeated key wins; unknown keys are ignored.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "from" => &mut query.from,
                "to" => &mut query.to,
                _ => continue,
            };
            slot.get_or_insert(value);
        }
        query
    }
}

pub async fn payments_summary(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Response {
    let query = SummaryQuery::from_pairs(pairs);
    match parse_range(&query) {
        Ok((from, to)) => Json(state.ledger.summarize(from, to)).into_response(),
        Err(e) => e.into_response(),
    }
}

fn parse_range(
    query: &SummaryQuery,
) -> Result<(Option<DateTime<Utc>>, Option<DateTime<Utc>>), RouteError> {
    let from = parse_bound(query.from.as_deref(), "from")?;
    let to = parse_bound(query.to.as_deref(), "to")?;
    Ok((from, to))
}

/// Empty or missing values are unbounded.
pub fn parse_bound(
    raw: Option<&str>,
    param: &'static str,
) -> Result<Option<DateTime<Utc>>, RouteError> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => Ok(None),
        Some(s) => DateTime::parse_from_rfc3339(s)
            .map(|ts| Some(ts.with_timezone(&Utc)))
            .map_err(|_| RouteError::InvalidTimestamp { param }),
    }
}
