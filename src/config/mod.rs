//! Configuration management
//!
//! This module handles loading and managing configuration from
//! TOML files and CLI arguments.

use reqwest::header::HeaderName;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::core::Candidate;
use crate::core::constants::{config_files, output_formats, probe, routing, timeouts};
use crate::core::error::{DeployProbeError, Result};

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Timeout in seconds for each probe request
    pub timeout: Option<u64>,

    /// Candidate URLs, probed in order
    pub candidates: Option<Vec<String>>,

    /// Custom User-Agent header
    pub user_agent: Option<String>,

    /// Response header the hosting platform uses to report routing
    pub marker_header: Option<String>,

    /// Marker header value meaning no server is bound to the address
    pub no_server_value: Option<String>,

    /// Output format (text, minimal)
    pub output_format: Option<String>,

    /// Enable verbose logging
    pub verbose: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timeout: Some(timeouts::DEFAULT_TIMEOUT_SECONDS),
            candidates: None, // Falls back to the built-in candidate list
            user_agent: None,
            marker_header: Some(routing::MARKER_HEADER.to_string()),
            no_server_value: Some(routing::NO_SERVER.to_string()),
            output_format: Some(output_formats::DEFAULT.to_string()),
            verbose: Some(false),
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            DeployProbeError::Config(format!(
                "Could not read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| {
            DeployProbeError::Config(format!(
                "Invalid TOML in config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Load the first config file found in standard locations, or defaults
    /// when there is none. A file that exists but does not load is an error.
    pub fn load_from_standard_locations() -> Result<Self> {
        Self::load_from_first_existing(&Self::standard_locations())
    }

    /// The current directory, then up to three parent directories
    pub fn standard_locations() -> Vec<PathBuf> {
        (0..=config_files::PARENT_SEARCH_DEPTH)
            .map(|depth| PathBuf::from(format!("{}{}", "../".repeat(depth), config_files::FILE_NAME)))
            .collect()
    }

    fn load_from_first_existing(paths: &[PathBuf]) -> Result<Self> {
        match paths.iter().find(|path| path.is_file()) {
            Some(path) => Self::load_from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Merge this config with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli_config: &CliConfig) {
        if let Some(timeout) = cli_config.timeout {
            self.timeout = Some(timeout);
        }
        if let Some(ref candidates) = cli_config.candidates {
            self.candidates = Some(candidates.clone());
        }

        if let Some(ref user_agent) = cli_config.user_agent {
            self.user_agent = Some(user_agent.clone());
        }
        if let Some(ref marker_header) = cli_config.marker_header {
            self.marker_header = Some(marker_header.clone());
        }
        if let Some(ref no_server_value) = cli_config.no_server_value {
            self.no_server_value = Some(no_server_value.clone());
        }

        if cli_config.verbose {
            self.verbose = Some(true);
        }
        if let Some(ref output_format) = cli_config.output_format {
            self.output_format = Some(output_format.clone());
        }
    }

    /// Candidates to probe, in order
    pub fn candidate_list(&self) -> Vec<Candidate> {
        match self.candidates {
            Some(ref candidates) => candidates.iter().map(|c| Candidate::from(c.trim())).collect(),
            None => probe::DEFAULT_CANDIDATES
                .iter()
                .map(|c| Candidate::from(*c))
                .collect(),
        }
    }

    /// Get timeout as Duration
    pub fn timeout_duration(&self) -> Duration {
        Duration::from_secs(self.timeout.unwrap_or(timeouts::DEFAULT_TIMEOUT_SECONDS))
    }

    pub fn marker_header_name(&self) -> Result<HeaderName> {
        let name = self.marker_header_label();
        HeaderName::from_bytes(name.as_bytes()).map_err(|_| {
            DeployProbeError::Config(format!(
                "Marker header '{name}' is not a valid HTTP header name."
            ))
        })
    }

    /// Marker header name as configured, before validation
    pub fn marker_header_label(&self) -> &str {
        self.marker_header.as_deref().unwrap_or(routing::MARKER_HEADER)
    }

    pub fn no_server_value(&self) -> &str {
        self.no_server_value.as_deref().unwrap_or(routing::NO_SERVER)
    }

    pub fn output_format(&self) -> &str {
        self.output_format
            .as_deref()
            .unwrap_or(output_formats::DEFAULT)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if let Some(timeout) = self.timeout {
            if timeout == 0 {
                return Err(DeployProbeError::Config(
                    "Timeout cannot be 0. Expected a positive integer representing seconds."
                        .to_string(),
                ));
            }
            if timeout > timeouts::MAX_TIMEOUT_SECONDS {
                return Err(DeployProbeError::Config(format!(
                    "Timeout of {timeout} seconds is too large. Expected at most {} seconds.",
                    timeouts::MAX_TIMEOUT_SECONDS
                )));
            }
        }

        if let Some(ref candidates) = self.candidates {
            if candidates.is_empty() {
                return Err(DeployProbeError::Config(
                    "Candidate list is empty. Expected at least one URL.".to_string(),
                ));
            }
            if candidates.iter().any(|c| c.trim().is_empty()) {
                return Err(DeployProbeError::Config(
                    "Candidate list contains a blank entry.".to_string(),
                ));
            }
        }

        self.marker_header_name()?;

        if self.no_server_value().trim().is_empty() {
            return Err(DeployProbeError::Config(
                "No-server marker value cannot be empty.".to_string(),
            ));
        }

        if let Some(ref format) = self.output_format
            && !output_formats::ALL.contains(&format.as_str())
        {
            return Err(DeployProbeError::Config(format!(
                "Invalid output format '{format}'. Expected one of: {}.",
                output_formats::ALL.join(", ")
            )));
        }

        Ok(())
    }
}

/// Configuration options that can come from CLI
#[derive(Debug, Default)]
pub struct CliConfig {
    // Probe options
    pub timeout: Option<u64>,            // --timeout
    pub candidates: Option<Vec<String>>, // positional CANDIDATES

    // Routing marker
    pub marker_header: Option<String>,   // --marker-header
    pub no_server_value: Option<String>, // --no-server-value

    // Output & format
    pub quiet: bool,                   // --quiet
    pub verbose: bool,                 // --verbose
    pub output_format: Option<String>, // --format
    pub no_progress: bool,             // --no-progress

    // Network
    pub user_agent: Option<String>, // --user-agent

    // Configuration
    pub config_file: Option<String>, // --config
    pub no_config: bool,             // --no-config
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.timeout, Some(timeouts::DEFAULT_TIMEOUT_SECONDS));
        assert_eq!(config.marker_header.as_deref(), Some("x-render-routing"));
        assert_eq!(config.no_server_value(), "no-server");
        assert_eq!(config.output_format(), output_formats::DEFAULT);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_candidate_list_matches_builtin_order() {
        let config = Config::default();
        let candidates = config.candidate_list();

        assert_eq!(candidates.len(), probe::DEFAULT_CANDIDATES.len());
        for (candidate, expected) in candidates.iter().zip(probe::DEFAULT_CANDIDATES) {
            assert_eq!(candidate.as_str(), expected);
        }
    }

    #[test]
    fn test_config_load_from_file() -> Result<()> {
        let mut file = tempfile::NamedTempFile::new()?;
        file.write_all(
            br#"
timeout = 5
candidates = ["https://one.example.com", " https://two.example.com "]
marker_header = "x-platform-routing"
no_server_value = "unbound"
"#,
        )?;

        let config = Config::load_from_file(file.path())?;
        assert_eq!(config.timeout, Some(5));
        assert_eq!(config.no_server_value(), "unbound");
        assert_eq!(config.marker_header_name()?.as_str(), "x-platform-routing");

        let candidates = config.candidate_list();
        assert_eq!(candidates[0].as_str(), "https://one.example.com");
        assert_eq!(candidates[1].as_str(), "https://two.example.com");
        Ok(())
    }

    #[test]
    fn test_config_load_from_file_invalid_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"invalid toml content [").unwrap();

        let result = Config::load_from_file(file.path());
        assert!(matches!(result, Err(DeployProbeError::Config(_))));
    }

    #[test]
    fn test_config_load_from_file_nonexistent() {
        let result = Config::load_from_file("/path/that/does/not/exist.toml");
        assert!(result.is_err());
    }

    #[test]
    fn test_config_load_from_file_with_validation() -> Result<()> {
        let mut file = tempfile::NamedTempFile::new()?;
        file.write_all(b"timeout = 0")?;

        assert!(Config::load_from_file(file.path()).is_err());
        Ok(())
    }

    #[test]
    fn test_config_load_from_standard_locations_falls_back() -> Result<()> {
        let config = Config::load_from_standard_locations()?;
        assert!(config.validate().is_ok());
        Ok(())
    }

    #[test]
    fn test_standard_locations_search_parents() {
        let locations = Config::standard_locations();
        assert_eq!(locations.len(), config_files::PARENT_SEARCH_DEPTH + 1);
        assert_eq!(locations[0], PathBuf::from(".deployprobe.toml"));
        assert_eq!(locations[3], PathBuf::from("../../../.deployprobe.toml"));
    }

    #[test]
    fn test_load_from_first_existing_uses_nearest_file() -> Result<()> {
        let dir = tempfile::TempDir::new()?;
        let near = dir.path().join("near.toml");
        let far = dir.path().join("far.toml");
        fs::write(&near, "timeout = 4")?;
        fs::write(&far, "timeout = 8")?;
        let missing = dir.path().join("missing.toml");

        let config = Config::load_from_first_existing(&[missing, near, far])?;
        assert_eq!(config.timeout, Some(4));
        Ok(())
    }

    #[test]
    fn test_load_from_first_existing_rejects_invalid_file() -> Result<()> {
        let dir = tempfile::TempDir::new()?;
        let broken = dir.path().join(".deployprobe.toml");
        fs::write(&broken, "timeout = \"soon\"")?;

        let result = Config::load_from_first_existing(&[broken]);
        assert!(matches!(result, Err(DeployProbeError::Config(_))));
        Ok(())
    }

    #[test]
    fn test_load_from_first_existing_defaults_without_files() -> Result<()> {
        let config = Config::load_from_first_existing(&[PathBuf::from("/definitely/not/here.toml")])?;
        assert_eq!(config.timeout, Some(timeouts::DEFAULT_TIMEOUT_SECONDS));
        Ok(())
    }

    #[test]
    fn test_config_merge_with_cli() {
        let mut config = Config {
            timeout: Some(3),
            candidates: Some(vec!["https://file.example.com".to_string()]),
            ..Default::default()
        };
        let cli_config = CliConfig {
            timeout: Some(7),
            candidates: Some(vec!["https://cli.example.com".to_string()]),
            marker_header: Some("x-edge".to_string()),
            no_server_value: Some("none".to_string()),
            verbose: true,
            output_format: Some(output_formats::MINIMAL.to_string()),
            user_agent: Some("probe-test/1.0".to_string()),
            ..Default::default()
        };

        config.merge_with_cli(&cli_config);

        assert_eq!(config.timeout, Some(7));
        assert_eq!(
            config.candidates,
            Some(vec!["https://cli.example.com".to_string()])
        );
        assert_eq!(config.marker_header.as_deref(), Some("x-edge"));
        assert_eq!(config.no_server_value(), "none");
        assert_eq!(config.verbose, Some(true));
        assert_eq!(config.output_format(), output_formats::MINIMAL);
        assert_eq!(config.user_agent.as_deref(), Some("probe-test/1.0"));
    }

    #[test]
    fn test_config_merge_preserves_unset_values() {
        let mut config = Config {
            timeout: Some(4),
            candidates: Some(vec!["https://file.example.com".to_string()]),
            ..Default::default()
        };

        config.merge_with_cli(&CliConfig::default());

        assert_eq!(config.timeout, Some(4));
        assert_eq!(
            config.candidates,
            Some(vec!["https://file.example.com".to_string()])
        );
        assert_eq!(config.verbose, Some(false));
    }

    #[test]
    fn test_timeout_duration() {
        let config = Config {
            timeout: Some(45),
            ..Default::default()
        };
        assert_eq!(config.timeout_duration(), Duration::from_secs(45));

        let fallback = Config {
            timeout: None,
            ..Default::default()
        };
        assert_eq!(
            fallback.timeout_duration(),
            Duration::from_secs(timeouts::DEFAULT_TIMEOUT_SECONDS)
        );
    }

    #[test]
    fn test_config_validation_invalid_timeout() {
        for timeout in [0, timeouts::MAX_TIMEOUT_SECONDS + 1] {
            let config = Config {
                timeout: Some(timeout),
                ..Default::default()
            };
            assert!(config.validate().is_err());
        }
    }

    #[test]
    fn test_config_validation_empty_candidates() {
        let config = Config {
            candidates: Some(vec![]),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_blank_candidate() {
        let config = Config {
            candidates: Some(vec!["https://a.example.com".to_string(), "  ".to_string()]),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_leaves_malformed_urls_to_the_prober() {
        let config = Config {
            candidates: Some(vec!["not-a-url".to_string()]),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation_invalid_marker_header() {
        let config = Config {
            marker_header: Some("not a header".to_string()),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_blank_no_server_value() {
        let config = Config {
            no_server_value: Some("  ".to_string()),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_invalid_output_format() {
        let config = Config {
            output_format: Some("json".to_string()),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_cli_config_default() {
        let cli_config = CliConfig::default();
        assert_eq!(cli_config.timeout, None);
        assert_eq!(cli_config.candidates, None);
        assert!(!cli_config.quiet);
        assert!(!cli_config.verbose);
        assert!(!cli_config.no_progress);
        assert!(!cli_config.no_config);
        assert_eq!(cli_config.config_file, None);
    }
}
