use async_trait::async_trait;
use reqwest::redirect::Policy;
use std::time::{Duration, Instant};

use crate::config::Config;
use crate::core::constants::{http_status, probe};
use crate::core::{Candidate, ProbeOutcome, ProbeReport, ProbeResult, Result};
use crate::probe::classify::{RoutingMarker, body_preview, classify_error, classify_status};
use crate::reporting::logging;

/// Observes a probe run as it happens.
///
/// `index` is zero-based; `total` is the length of the candidate list, not
/// the number of candidates that will end up attempted.
pub trait ProbeListener: Send {
    fn on_probe_start(&mut self, _index: usize, _total: usize, _candidate: &Candidate) {}

    fn on_probe_result(&mut self, _index: usize, _total: usize, _result: &ProbeResult) {}
}

/// Listener that ignores every event.
#[derive(Debug, Default)]
pub struct NoopListener;

impl ProbeListener for NoopListener {}

#[async_trait]
pub trait FindLive {
    /// Probe `candidates` in order and stop at the first live one.
    async fn find_live(
        &self,
        candidates: &[Candidate],
        listener: &mut dyn ProbeListener,
    ) -> ProbeReport;
}

/// Everything a [`Prober`] needs to build its HTTP client.
#[derive(Debug, Clone)]
pub struct ProbeSettings {
    pub timeout: Duration,
    pub user_agent: String,
    pub marker: RoutingMarker,
}

impl Default for ProbeSettings {
    fn default() -> Self {
        Self {
            timeout: Config::default().timeout_duration(),
            user_agent: default_user_agent().to_string(),
            marker: RoutingMarker::default(),
        }
    }
}

impl ProbeSettings {
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self {
            timeout: config.timeout_duration(),
            user_agent: config
                .user_agent
                .clone()
                .unwrap_or_else(|| default_user_agent().to_string()),
            marker: RoutingMarker::new(config.marker_header_name()?, config.no_server_value()),
        })
    }
}

fn default_user_agent() -> &'static str {
    concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"))
}

/// Sequential candidate prober. One GET per candidate, no retries.
#[derive(Debug)]
pub struct Prober {
    client: reqwest::Client,
    marker: RoutingMarker,
}

impl Prober {
    pub fn new(settings: ProbeSettings) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(settings.timeout)
            .redirect(Policy::limited(probe::MAX_REDIRECTS))
            .user_agent(settings.user_agent)
            .build()?;

        Ok(Self {
            client,
            marker: settings.marker,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(ProbeSettings::from_config(config)?)
    }

    /// Probe a single candidate. Never fails; every failure is classified.
    pub async fn probe(&self, candidate: &Candidate) -> ProbeResult {
        let started = Instant::now();
        let outcome = self.request(candidate).await;
        ProbeResult::new(candidate.clone(), outcome, started.elapsed())
    }

    async fn request(&self, candidate: &Candidate) -> ProbeOutcome {
        let response = match self.client.get(candidate.as_str()).send().await {
            Ok(response) => response,
            Err(err) => return classify_error(&err),
        };

        let status = response.status().as_u16();
        if status != http_status::OK {
            return classify_status(status, response.headers(), &self.marker);
        }

        // A body that fails to arrive is classified like a failed send.
        match response.text().await {
            Ok(body) => ProbeOutcome::Live {
                preview: body_preview(&body, probe::BODY_PREVIEW_CHARS),
            },
            Err(err) => classify_error(&err),
        }
    }
}

#[async_trait]
impl FindLive for Prober {
    async fn find_live(
        &self,
        candidates: &[Candidate],
        listener: &mut dyn ProbeListener,
    ) -> ProbeReport {
        let total = candidates.len();
        let mut report = ProbeReport::new();

        logging::log_probe_start(total);
        let started = Instant::now();

        for (index, candidate) in candidates.iter().enumerate() {
            listener.on_probe_start(index, total, candidate);
            let result = self.probe(candidate).await;
            logging::log_probe_result(&result);
            listener.on_probe_result(index, total, &result);

            if !report.push(result) {
                break;
            }
        }

        logging::log_probe_complete(&report, total, started.elapsed().as_millis());
        report
    }
}
