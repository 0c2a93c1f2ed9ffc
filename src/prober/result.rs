// src/prober/result.rs
// =============================================================================
// The result of probing one URL.
//
// A probe either got a response (any status code, 404 and 500 included) or
// it failed before a response arrived. The two cases are the two variants of
// `Outcome`, so a result can never carry both a status and an error, and it
// can never carry neither.
// =============================================================================

use reqwest::StatusCode;

/// What happened when we probed a URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The server answered; HTTP error codes are data, not failures
    Response { status_code: u16, status_text: String },
    /// No response: DNS, connection refused, malformed URL, transport error
    Failed { error: String },
}

/// The outcome of one probe, created once and never changed afterwards
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeResult {
    pub url: String,
    pub outcome: Outcome,
}

/// The bucket a result falls into, used to pick its color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusClass {
    Informational,
    Success,
    Redirect,
    ClientError,
    ServerError,
    Failed,
}

impl ProbeResult {
    pub fn response(url: impl Into<String>, status: StatusCode) -> Self {
        ProbeResult {
            url: url.into(),
            outcome: Outcome::Response {
                status_code: status.as_u16(),
                status_text: status_line(status),
            },
        }
    }

    pub fn failed(url: impl Into<String>, error: impl Into<String>) -> Self {
        let mut error = error.into();
        // A failure always says something
        if error.is_empty() {
            error.push_str("unknown error");
        }
        ProbeResult {
            url: url.into(),
            outcome: Outcome::Failed { error },
        }
    }

    /// The numeric status code, 0 when the request failed
    pub fn status_code(&self) -> u16 {
        match &self.outcome {
            Outcome::Response { status_code, .. } => *status_code,
            Outcome::Failed { .. } => 0,
        }
    }

    /// The status line text (e.g. "404 Not Found"), empty when the request failed
    pub fn status_text(&self) -> &str {
        match &self.outcome {
            Outcome::Response { status_text, .. } => status_text,
            Outcome::Failed { .. } => "",
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.outcome {
            Outcome::Response { .. } => None,
            Outcome::Failed { error } => Some(error),
        }
    }

    pub fn class(&self) -> StatusClass {
        match self.outcome {
            Outcome::Failed { .. } => StatusClass::Failed,
            Outcome::Response { status_code, .. } => match status_code {
                200..=299 => StatusClass::Success,
                300..=399 => StatusClass::Redirect,
                400..=499 => StatusClass::ClientError,
                500..=u16::MAX => StatusClass::ServerError,
                _ => StatusClass::Informational,
            },
        }
    }
}

// "200 OK", or just "599" when the code has no registered reason phrase
fn status_line(status: StatusCode) -> String {
    match status.canonical_reason() {
        Some(reason) => format!("{} {}", status.as_u16(), reason),
        None => status.as_u16().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_response_fields() {
        let result = ProbeResult::response("https://example.com", StatusCode::NOT_FOUND);
        assert_eq!(result.status_code(), 404);
        assert_eq!(result.status_text(), "404 Not Found");
        assert_eq!(result.error(), None);
        assert_eq!(result.class(), StatusClass::ClientError);
    }

    #[test]
    fn test_failed_fields() {
        let result = ProbeResult::failed("http://example.invalid", "dns error");
        assert_eq!(result.status_code(), 0);
        assert_eq!(result.status_text(), "");
        assert_eq!(result.error(), Some("dns error"));
        assert_eq!(result.class(), StatusClass::Failed);
    }

    #[test]
    fn test_failed_never_has_empty_error() {
        let result = ProbeResult::failed("http://x", "");
        assert_eq!(result.error(), Some("unknown error"));
    }

    #[test]
    fn test_unregistered_code_still_has_text() {
        let status = StatusCode::from_u16(599).unwrap();
        let result = ProbeResult::response("https://example.com", status);
        assert_eq!(result.status_text(), "599");
        assert_eq!(result.class(), StatusClass::ServerError);
    }

    #[test]
    fn test_classes() {
        let class_of = |code: u16| {
            ProbeResult::response("u", StatusCode::from_u16(code).unwrap()).class()
        };
        assert_eq!(class_of(101), StatusClass::Informational);
        assert_eq!(class_of(200), StatusClass::Success);
        assert_eq!(class_of(204), StatusClass::Success);
        assert_eq!(class_of(301), StatusClass::Redirect);
        assert_eq!(class_of(399), StatusClass::Redirect);
        assert_eq!(class_of(400), StatusClass::ClientError);
        assert_eq!(class_of(500), StatusClass::ServerError);
        assert_eq!(class_of(503), StatusClass::ServerError);
    }
}
