use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::str::FromStr;

use crate::core::constants::ads_txt;

static PUBLISHER_ID_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^ca-pub-[0-9]+$").expect("publisher ID pattern is valid"));

/// A validated AdSense publisher identifier, e.g. `ca-pub-123456789012345`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PublisherId(String);

/// Reasons a publisher identifier is rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublisherIdError {
    /// Identifier is empty after trimming
    Empty,
    /// Identifier does not start with `ca-pub-`
    MissingPrefix,
    /// Identifier has the wrong total length
    WrongLength { expected: usize, actual: usize },
    /// Something other than ASCII digits follows the prefix
    NonDigitSuffix,
}

impl fmt::Display for PublisherIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "identifier is empty"),
            Self::MissingPrefix => {
                write!(f, "identifier must start with '{}'", ads_txt::PUBLISHER_PREFIX)
            }
            Self::WrongLength { expected, actual } => write!(
                f,
                "identifier must be exactly {expected} characters long, got {actual}"
            ),
            Self::NonDigitSuffix => write!(
                f,
                "identifier must contain only digits after '{}'",
                ads_txt::PUBLISHER_PREFIX
            ),
        }
    }
}

impl std::error::Error for PublisherIdError {}

impl PublisherId {
    /// Validate a raw identifier. Surrounding whitespace is ignored.
    pub fn parse(raw: &str) -> Result<Self, PublisherIdError> {
        let id = raw.trim();
        if id.is_empty() {
            return Err(PublisherIdError::Empty);
        }
        if !id.starts_with(ads_txt::PUBLISHER_PREFIX) {
            return Err(PublisherIdError::MissingPrefix);
        }

        let actual = id.chars().count();
        if actual != ads_txt::PUBLISHER_ID_LEN {
            return Err(PublisherIdError::WrongLength {
                expected: ads_txt::PUBLISHER_ID_LEN,
                actual,
            });
        }

        if !PUBLISHER_ID_PATTERN.is_match(id) {
            return Err(PublisherIdError::NonDigitSuffix);
        }

        Ok(Self(id.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for PublisherId {
    type Err = PublisherIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for PublisherId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_id() {
        let id = PublisherId::parse("ca-pub-123456789012345").unwrap();
        assert_eq!(id.as_str(), "ca-pub-123456789012345");
        assert_eq!(id.to_string(), "ca-pub-123456789012345");
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let id: PublisherId = "  ca-pub-123456789012345\n".parse().unwrap();
        assert_eq!(id.as_str(), "ca-pub-123456789012345");
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(PublisherId::parse("   "), Err(PublisherIdError::Empty));
    }

    #[test]
    fn test_parse_wrong_prefix() {
        assert_eq!(
            PublisherId::parse("pub-1234567890123456789"),
            Err(PublisherIdError::MissingPrefix)
        );
        assert_eq!(
            PublisherId::parse("CA-PUB-123456789012345"),
            Err(PublisherIdError::MissingPrefix)
        );
    }

    #[test]
    fn test_parse_too_short() {
        assert_eq!(
            PublisherId::parse("ca-pub-12345"),
            Err(PublisherIdError::WrongLength {
                expected: 22,
                actual: 12
            })
        );
    }

    #[test]
    fn test_parse_too_long() {
        assert_eq!(
            PublisherId::parse("ca-pub-1234567890123456"),
            Err(PublisherIdError::WrongLength {
                expected: 22,
                actual: 23
            })
        );
    }

    #[test]
    fn test_parse_non_digit_suffix() {
        assert_eq!(
            PublisherId::parse("ca-pub-12345678901234x"),
            Err(PublisherIdError::NonDigitSuffix)
        );
        assert_eq!(
            PublisherId::parse("ca-pub-١٢٣٤٥٦٧٨٩٠١٢٣٤٥"),
            Err(PublisherIdError::NonDigitSuffix)
        );
    }

    #[test]
    fn test_error_messages_name_the_rule() {
        assert!(
            PublisherIdError::MissingPrefix
                .to_string()
                .contains("ca-pub-")
        );
        assert!(
            PublisherIdError::WrongLength {
                expected: 22,
                actual: 3
            }
            .to_string()
            .contains("22")
        );
    }
}
