// src/prober/http.rs
// =============================================================================
// This module checks URLs by making one HTTP GET request each.
//
// Key functionality:
// - One reqwest Client for the whole run, shared by every worker
// - Keep-alive connections, with a cap on idle connections per host so a
//   single busy host cannot hog the pool
// - Any response at all is a successful probe; only transport-level
//   problems become errors
//
// What we deliberately leave at reqwest's defaults: timeouts (none), redirect
// policy, TLS. There are no retries.
// =============================================================================

use super::{ProbeResult, Prober};
use anyhow::{Context, Result};
use reqwest::Client;
use std::error::Error as StdError;
use std::time::Duration;

/// Idle connections kept per host
pub const MAX_IDLE_PER_HOST: usize = 10;

/// How long an idle connection stays in the pool
pub const IDLE_TIMEOUT: Duration = Duration::from_secs(90);

/// Probes URLs over the network with a shared connection pool
///
/// Cloning is cheap: clones share the same pool.
#[derive(Debug, Clone)]
pub struct HttpProber {
    client: Client,
}

impl HttpProber {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .pool_max_idle_per_host(MAX_IDLE_PER_HOST)
            .pool_idle_timeout(IDLE_TIMEOUT)
            .tcp_keepalive(IDLE_TIMEOUT)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(HttpProber { client })
    }
}

impl Prober for HttpProber {
    fn probe(&self, url: &str) -> impl std::future::Future<Output = ProbeResult> + Send {
        let request = self.client.get(url).send();
        let url = url.to_string();

        async move {
            match request.await {
                // The body is never read; dropping the response is enough
                Ok(response) => ProbeResult::response(url, response.status()),
                Err(e) => ProbeResult::failed(url, describe_error(&e)),
            }
        }
    }
}

// reqwest's own message is only the outermost layer ("error sending request
// for url ..."). The actual cause (DNS lookup, connection refused, ...) lives
// further down the source chain, so we walk all of it.
fn describe_error(error: &reqwest::Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();

    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }

    message
}
