// src/formatters/summary.rs
// Counts results per status class for the log line printed after a run.

use crate::prober::{ProbeResult, StatusClass};
use std::fmt;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Summary {
    pub total: usize,
    pub success: usize,
    pub redirect: usize,
    pub client_error: usize,
    pub server_error: usize,
    pub failed: usize,
    pub other: usize,
}

impl Summary {
    pub fn add(&mut self, result: &ProbeResult) {
        self.total += 1;
        match result.class() {
            StatusClass::Success => self.success += 1,
            StatusClass::Redirect => self.redirect += 1,
            StatusClass::ClientError => self.client_error += 1,
            StatusClass::ServerError => self.server_error += 1,
            StatusClass::Failed => self.failed += 1,
            StatusClass::Informational => self.other += 1,
        }
    }
}

impl<'a> FromIterator<&'a ProbeResult> for Summary {
    fn from_iter<I: IntoIterator<Item = &'a ProbeResult>>(iter: I) -> Self {
        let mut summary = Summary::default();
        for result in iter {
            summary.add(result);
        }
        summary
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} probed: {} 2xx, {} 3xx, {} 4xx, {} 5xx, {} failed",
            self.total,
            self.success,
            self.redirect,
            self.client_error,
            self.server_error,
            self.failed
        )?;
        if self.other > 0 {
            write!(f, ", {} other", self.other)?;
        }
        Ok(())
    }
}
