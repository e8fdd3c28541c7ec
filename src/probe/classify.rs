use reqwest::header::{HeaderMap, HeaderName};

use crate::core::ProbeOutcome;
use crate::core::constants::{http_status, routing};

/// The header the hosting platform sets on responses it routed, and the
/// value it uses when no server is bound to the requested address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutingMarker {
    header: HeaderName,
    no_server_value: String,
}

impl RoutingMarker {
    pub fn new(header: HeaderName, no_server_value: impl Into<String>) -> Self {
        Self {
            header,
            no_server_value: no_server_value.into(),
        }
    }

    pub fn header(&self) -> &HeaderName {
        &self.header
    }

    pub fn no_server_value(&self) -> &str {
        &self.no_server_value
    }

    fn means_no_server(&self, value: &str) -> bool {
        value.trim().eq_ignore_ascii_case(self.no_server_value.trim())
    }
}

impl Default for RoutingMarker {
    fn default() -> Self {
        Self::new(
            HeaderName::from_static(routing::MARKER_HEADER),
            routing::NO_SERVER,
        )
    }
}

/// Classify a response that is not `200 OK`.
///
/// A 404 is split three ways by the routing marker: absent means the
/// application itself answered, the no-server value means the platform has
/// nothing bound to the address, any other value means the platform found a
/// server but failed to route to it.
pub fn classify_status(status: u16, headers: &HeaderMap, marker: &RoutingMarker) -> ProbeOutcome {
    if status != http_status::NOT_FOUND {
        return ProbeOutcome::OtherStatus(status);
    }

    match headers.get(marker.header()) {
        None => ProbeOutcome::NotFoundApp,
        Some(value) => {
            let value = String::from_utf8_lossy(value.as_bytes());
            if marker.means_no_server(&value) {
                ProbeOutcome::NotFoundPlatform
            } else {
                ProbeOutcome::Misrouted {
                    marker: format!("{}: {}", marker.header(), value.trim()),
                }
            }
        }
    }
}

/// Classify a transport failure. Connection failures win over timeouts, and
/// anything else is kept verbatim.
pub fn classify_error(err: &reqwest::Error) -> ProbeOutcome {
    if err.is_connect() {
        let detail = std::error::Error::source(err)
            .map(|e| e.to_string())
            .unwrap_or_else(|| err.to_string());
        ProbeOutcome::ConnectionFailed(detail)
    } else if err.is_timeout() {
        ProbeOutcome::Timeout
    } else {
        ProbeOutcome::UnexpectedError(err.to_string())
    }
}

/// First `max_chars` characters of a response body.
pub fn body_preview(body: &str, max_chars: usize) -> String {
    body.chars().take(max_chars).collect()
}
