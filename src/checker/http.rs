// src/checker/http.rs
// =============================================================================
// This module probes a single URL with an HTTP HEAD request.
//
// Key functionality:
// - Cleans up raw catalog strings (stray spaces, quotes, brackets...)
// - Makes HTTP HEAD requests (lightweight, no body download)
// - Classifies the result into one of five outcomes
// - Gives up after a fixed timeout and drops the request
//
// Classification:
//   status < 400        -> alive
//   403 / 405           -> alive (lots of servers refuse HEAD or unknown bots
//                          while the page itself is fine; no GET is retried)
//   any other >= 400    -> dead
//   transport failure   -> error
//   no answer in time   -> timeout
//   unparseable string  -> invalid_url (no request is made)
// =============================================================================

use crate::error::Result;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::future::Future;
use std::time::Duration;
use tracing::debug;
use url::Url;

use super::CheckerConfig;

/// Outcome of probing one URL.
///
/// Serialized with a "status" tag, e.g. `{"status":"dead","code":404}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CheckOutcome {
    /// Server answered with a status we treat as reachable
    Alive { code: u16 },
    /// Server answered with an error status (404, 410, 500, ...)
    Dead { code: u16 },
    /// No response before the timeout
    Timeout,
    /// DNS failure, refused connection, reset, TLS failure, ...
    Error { message: String },
    /// The string could not be parsed as a URL
    InvalidUrl { message: String },
}

impl CheckOutcome {
    pub fn is_alive(&self) -> bool {
        matches!(self, CheckOutcome::Alive { .. })
    }

    /// Lowercase classification name, matching the serde tag.
    pub fn reason(&self) -> &'static str {
        match self {
            CheckOutcome::Alive { .. } => "alive",
            CheckOutcome::Dead { .. } => "dead",
            CheckOutcome::Timeout => "timeout",
            CheckOutcome::Error { .. } => "error",
            CheckOutcome::InvalidUrl { .. } => "invalid_url",
        }
    }

    pub fn code(&self) -> Option<u16> {
        match self {
            CheckOutcome::Alive { code } | CheckOutcome::Dead { code } => Some(*code),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            CheckOutcome::Error { message } | CheckOutcome::InvalidUrl { message } => {
                Some(message)
            }
            _ => None,
        }
    }
}

/// Anything that can turn a URL string into a CheckOutcome.
///
/// The engine only talks to this trait, so tests can swap the network out.
pub trait Prober {
    fn probe(&self, url: &str) -> impl Future<Output = CheckOutcome> + Send;
}

/// The real prober: HEAD requests through a shared reqwest client.
#[derive(Debug, Clone)]
pub struct HttpProbe {
    client: Client,
    timeout: Duration,
}

impl HttpProbe {
    // Builds the client once; it is reused (and connection-pooled) for every
    // probe of the run.
    //
    // Redirects are not followed: a 301/302 is a status below 400 and already
    // counts as alive.
    pub fn new(config: &CheckerConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .redirect(reqwest::redirect::Policy::none())
            .build()?;

        Ok(Self {
            client,
            timeout: config.timeout,
        })
    }
}

impl Prober for HttpProbe {
    async fn probe(&self, url: &str) -> CheckOutcome {
        let target = match request_target(url) {
            Ok(target) => target,
            Err(outcome) => {
                debug!("not probing {}: {:?}", url, outcome);
                return outcome;
            }
        };

        debug!("HEAD {}", target);

        // Dropping the request future on timeout closes its connection.
        let outcome = match tokio::time::timeout(self.timeout, self.client.head(target).send()).await
        {
            Err(_elapsed) => CheckOutcome::Timeout,
            Ok(Ok(response)) => classify_status(response.status().as_u16()),
            Ok(Err(e)) => CheckOutcome::Error {
                message: error_chain(&e),
            },
        };

        debug!("{} -> {}", url, outcome.reason());
        outcome
    }
}

// Maps an HTTP status code to an outcome
pub fn classify_status(code: u16) -> CheckOutcome {
    match code {
        0..=399 | 403 | 405 => CheckOutcome::Alive { code },
        _ => CheckOutcome::Dead { code },
    }
}

// Characters that show up in hand-written catalog entries but are not allowed
// raw in an HTTP request path.
const UNSAFE_CHARS: &[char] = &[' ', '"', '<', '>', '\\', '^', '`', '{', '|', '}', '[', ']'];

// Trims the string and percent-encodes the UNSAFE_CHARS
//
// Example:
//   "  https://example.com/a b  " -> "https://example.com/a%20b"
pub fn sanitize_url(raw: &str) -> String {
    let mut clean = String::with_capacity(raw.len());
    for c in raw.trim().chars() {
        if UNSAFE_CHARS.contains(&c) {
            // All UNSAFE_CHARS are ASCII, so one byte each
            let _ = write!(clean, "%{:02X}", c as u32);
        } else {
            clean.push(c);
        }
    }
    clean
}

// Builds the URL the HEAD request is actually sent to
//
// Only host, port, path and query survive; the fragment and any credentials
// are dropped. "https" keeps TLS, every other scheme is spoken to as plain
// http on the same host and port. The host is re-read under http rules, so
// the opaque host of a non-special scheme ("foo://ex%41mple") comes out
// percent-decoded and lowercased ("example").
//
// Returns Err(outcome) when no request should be made at all.
pub fn request_target(raw: &str) -> std::result::Result<Url, CheckOutcome> {
    let clean = sanitize_url(raw);
    let parsed = Url::parse(&clean).map_err(|e| CheckOutcome::InvalidUrl {
        message: e.to_string(),
    })?;

    let host = parsed.host_str().ok_or_else(|| CheckOutcome::Error {
        message: format!("URL has no host: {}", clean),
    })?;

    let scheme = if parsed.scheme() == "https" { "https" } else { "http" };
    let mut target = format!("{}://{}", scheme, host);
    if let Some(port) = parsed.port() {
        let _ = write!(target, ":{}", port);
    }
    target.push_str(parsed.path());
    if let Some(query) = parsed.query() {
        target.push('?');
        target.push_str(query);
    }

    Url::parse(&target).map_err(|e| CheckOutcome::InvalidUrl {
        message: e.to_string(),
    })
}

// reqwest's Display only shows the outermost layer ("error sending
// request..."); the useful part (DNS, refused, reset) is further down.
fn error_chain(error: &reqwest::Error) -> String {
    let mut message = error.to_string();
    let mut source = std::error::Error::source(error);
    while let Some(cause) = source {
        let _ = write!(message, ": {}", cause);
        source = cause.source();
    }
    message
}
