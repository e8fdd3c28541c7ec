use std::fmt;
use std::time::Duration;

/// A candidate address under test for liveness.
///
/// Candidates have no identity beyond their string value and are probed in
/// the order they were given.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Candidate(String);

impl Candidate {
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Candidate {
    fn from(url: &str) -> Self {
        Self::new(url)
    }
}

impl From<String> for Candidate {
    fn from(url: String) -> Self {
        Self(url)
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Classification of a single probe attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// Answered `200 OK`; carries the first characters of the body
    Live { preview: String },
    /// 404 from the platform itself: no server is bound to this address
    NotFoundPlatform,
    /// 404 from the deployed application
    NotFoundApp,
    /// 404 where the platform found a server but could not route to it
    Misrouted { marker: String },
    /// Any other HTTP status
    OtherStatus(u16),
    /// No response within the timeout window
    Timeout,
    /// Connection could not be established
    ConnectionFailed(String),
    /// Anything not covered above, message kept verbatim
    UnexpectedError(String),
}

impl ProbeOutcome {
    pub fn is_live(&self) -> bool {
        matches!(self, ProbeOutcome::Live { .. })
    }

    /// Stable kebab-case tag for the classification.
    pub fn tag(&self) -> &'static str {
        match self {
            ProbeOutcome::Live { .. } => "live",
            ProbeOutcome::NotFoundPlatform => "not-found-platform",
            ProbeOutcome::NotFoundApp => "not-found-app",
            ProbeOutcome::Misrouted { .. } => "misrouted",
            ProbeOutcome::OtherStatus(_) => "other-status",
            ProbeOutcome::Timeout => "timeout",
            ProbeOutcome::ConnectionFailed(_) => "connection-failed",
            ProbeOutcome::UnexpectedError(_) => "unexpected-error",
        }
    }
}

impl fmt::Display for ProbeOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProbeOutcome::Live { .. } => write!(f, "200 OK"),
            ProbeOutcome::NotFoundPlatform => {
                write!(f, "404 - address is not registered with the hosting platform")
            }
            ProbeOutcome::NotFoundApp => write!(f, "404 - the application returned not found"),
            ProbeOutcome::Misrouted { marker } => {
                write!(f, "404 - platform could not route the request ({marker})")
            }
            ProbeOutcome::OtherStatus(code) => write!(f, "unexpected status {code}"),
            ProbeOutcome::Timeout => write!(f, "timed out"),
            ProbeOutcome::ConnectionFailed(detail) => write!(f, "connection failed: {detail}"),
            ProbeOutcome::UnexpectedError(message) => write!(f, "unexpected error: {message}"),
        }
    }
}

/// Outcome of probing one candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeResult {
    pub candidate: Candidate,
    pub outcome: ProbeOutcome,
    pub elapsed: Duration,
}

impl ProbeResult {
    pub fn new(candidate: Candidate, outcome: ProbeOutcome, elapsed: Duration) -> Self {
        Self {
            candidate,
            outcome,
            elapsed,
        }
    }

    pub fn is_live(&self) -> bool {
        self.outcome.is_live()
    }
}

impl fmt::Display for ProbeResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.candidate, self.outcome)
    }
}

/// Ordered results of one probe run.
///
/// Results appear in candidate order and stop at the first live candidate,
/// so at most one result is live and, if present, it is the last one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProbeReport {
    results: Vec<ProbeResult>,
}

impl ProbeReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an attempt. Returns `false` once a live result is held and the
    /// run must stop.
    pub(crate) fn push(&mut self, result: ProbeResult) -> bool {
        debug_assert!(self.live().is_none(), "no attempts after a live candidate");
        let live = result.is_live();
        self.results.push(result);
        !live
    }

    pub fn results(&self) -> &[ProbeResult] {
        &self.results
    }

    pub fn attempted(&self) -> usize {
        self.results.len()
    }

    /// The live result, if the run found one.
    pub fn live(&self) -> Option<&ProbeResult> {
        self.results.last().filter(|result| result.is_live())
    }

    /// The discovered address, or `None` when no candidate was live.
    pub fn live_candidate(&self) -> Option<&Candidate> {
        self.live().map(|result| &result.candidate)
    }

    pub fn preview(&self) -> Option<&str> {
        match self.live().map(|result| &result.outcome) {
            Some(ProbeOutcome::Live { preview }) => Some(preview),
            _ => None,
        }
    }

    pub fn failures(&self) -> impl Iterator<Item = &ProbeResult> {
        self.results.iter().filter(|result| !result.is_live())
    }
}
