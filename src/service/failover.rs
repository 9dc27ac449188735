use crate::processors::{ProcessorResponse, TransportError};

#[derive(Debug, Clone, PartialEq)]
pub enum FailoverDirective {
    /// Relay this response and record it.
    Accept(ProcessorResponse),
    /// Try the fallback processor.
    Failover(String),
    /// Give up with a gateway error.
    FailNow(String),
}

/// Primary attempt: transport errors and 5xx both move on to the fallback.
/// The 5xx body is dropped.
pub fn classify_primary(result: Result<ProcessorResponse, TransportError>) -> FailoverDirective {
    match result {
        Ok(resp) if resp.is_server_error() => {
            FailoverDirective::Failover(format!("primary returned {}", resp.status))
        }
        Ok(resp) => FailoverDirective::Accept(resp),
        Err(e) => FailoverDirective::Failover(e.to_string()),
    }
}

/// Fallback attempt: only a transport error is fatal. Any response, 5xx included,
/// is final; there is no third attempt.
pub fn classify_fallback(result: Result<ProcessorResponse, TransportError>) -> FailoverDirective {
    match result {
        Ok(resp) => FailoverDirective::Accept(resp),
        Err(e) => FailoverDirective::FailNow(e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_client_error_is_accepted() {
        let resp = ProcessorResponse::new(422, "dup");
        assert_eq!(
            classify_primary(Ok(resp.clone())),
            FailoverDirective::Accept(resp)
        );
    }

    #[test]
    fn primary_server_error_fails_over() {
        let directive = classify_primary(Ok(ProcessorResponse::new(500, "")));
        assert_eq!(
            directive,
            FailoverDirective::Failover("primary returned 500".to_string())
        );
    }

    #[test]
    fn primary_timeout_fails_over() {
        assert_eq!(
            classify_primary(Err(TransportError::Timeout)),
            FailoverDirective::Failover("processor timed out".to_string())
        );
    }

    #[test]
    fn fallback_server_error_is_final() {
        let resp = ProcessorResponse::new(503, "busy");
        assert_eq!(
            classify_fallback(Ok(resp.clone())),
            FailoverDirective::Accept(resp)
        );
    }

    #[test]
    fn fallback_transport_error_is_fatal() {
        let directive = classify_fallback(Err(TransportError::Connect("refused".to_string())));
        assert!(matches!(directive, FailoverDirective::FailNow(_)));
    }
}
