// src/formatters/json.rs
// =============================================================================
// One JSON object per result:
//
//   {"url":"https://example.com","status_code":200,"status_msg":"200 OK"}
//   {"url":"http://example.invalid","status_code":0,"status_msg":"","error":"..."}
//
// `error` only appears when the probe failed.
// =============================================================================

use super::ResultFormatter;
use crate::prober::ProbeResult;
use anyhow::{Context, Result};
use serde::Serialize;

// The wire shape of a result. Borrowing keeps serialization allocation-free
// apart from the output string itself.
#[derive(Serialize)]
struct JsonRecord<'a> {
    url: &'a str,
    status_code: u16,
    status_msg: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'a str>,
}

impl<'a> From<&'a ProbeResult> for JsonRecord<'a> {
    fn from(result: &'a ProbeResult) -> Self {
        JsonRecord {
            url: &result.url,
            status_code: result.status_code(),
            status_msg: result.status_text(),
            error: result.error(),
        }
    }
}

pub struct JsonFormatter;

impl ResultFormatter for JsonFormatter {
    fn format_result(&self, result: &ProbeResult) -> Result<String> {
        serde_json::to_string(&JsonRecord::from(result))
            .with_context(|| format!("Cannot serialize result for {}", result.url))
    }
}
