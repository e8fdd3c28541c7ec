/// Application-wide constants to avoid magic values throughout the codebase.
///
/// Output format constants
pub mod output_formats {
    /// Text output format - colorful, emoji-enhanced output
    pub const TEXT: &str = "text";
    /// Minimal output format - plain text without colors or emojis
    pub const MINIMAL: &str = "minimal";

    /// Default output format
    pub const DEFAULT: &str = TEXT;

    /// All valid output formats
    pub const ALL: [&str; 2] = [TEXT, MINIMAL];
}

/// HTTP status code constants
pub mod http_status {
    /// HTTP 200 OK - the only status that marks a candidate live
    pub const OK: u16 = 200;
    /// HTTP 404 Not Found - split further by the routing marker
    pub const NOT_FOUND: u16 = 404;
}

/// Timeout and duration constants
pub mod timeouts {
    /// Default per-request timeout in seconds
    pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;
    /// Maximum accepted timeout in seconds (1 hour)
    pub const MAX_TIMEOUT_SECONDS: u64 = 3600;
}

/// Probe behaviour constants
pub mod probe {
    /// Number of body characters kept as evidence for a live candidate
    pub const BODY_PREVIEW_CHARS: usize = 100;
    /// Redirects followed before a request is given up on
    pub const MAX_REDIRECTS: usize = 10;
    /// Candidates probed when neither the config file nor the CLI names any
    pub const DEFAULT_CANDIDATES: [&str; 3] = [
        "https://adsense-site.onrender.com",
        "https://adsense-site-web.onrender.com",
        "https://adsense-site-app.onrender.com",
    ];
}

/// Hosting-platform routing marker
pub mod routing {
    /// Header the platform (not the application) sets on routed responses
    pub const MARKER_HEADER: &str = "x-render-routing";
    /// Marker value meaning no server is bound to the requested address
    pub const NO_SERVER: &str = "no-server";
}

/// ads.txt publisher record constants
pub mod ads_txt {
    /// Prefix every AdSense publisher identifier starts with
    pub const PUBLISHER_PREFIX: &str = "ca-pub-";
    /// Exact length of a publisher identifier, prefix included
    pub const PUBLISHER_ID_LEN: usize = 22;
    /// Ad system domain written into the seller record
    pub const AD_SYSTEM_DOMAIN: &str = "google.com";
    /// Relationship written into the seller record
    pub const RELATIONSHIP: &str = "DIRECT";
    /// Google's certification authority ID
    pub const CERTIFICATION_AUTHORITY_ID: &str = "f08c47fec0942fa0";
    /// File rewritten when no path is given
    pub const DEFAULT_PATH: &str = "ads.txt";
}

/// Configuration file constants
pub mod config_files {
    /// Config file looked up in the working directory and its parents
    pub const FILE_NAME: &str = ".deployprobe.toml";
    /// How many parent directories are searched for the config file
    pub const PARENT_SEARCH_DEPTH: usize = 3;
}

/// Process exit codes
pub mod exit_codes {
    /// A live candidate was found, or the file was rewritten
    pub const SUCCESS: i32 = 0;
    /// No candidate was live, or the rewrite was rejected
    pub const FAILURE: i32 = 1;
    /// Configuration or argument error before any probe ran
    pub const SETUP_ERROR: i32 = 2;
}

/// Display and formatting constants
pub mod display {
    /// Emoji for a live candidate
    pub const SUCCESS_EMOJI: &str = "✅";
    /// Emoji for the total-failure summary
    pub const ERROR_EMOJI: &str = "❌";
    /// Emoji for 404 outcomes
    pub const NOT_FOUND_EMOJI: &str = "🚫";
    /// Emoji for misrouted requests
    pub const MISROUTED_EMOJI: &str = "🔀";
    /// Emoji for network/connection errors
    pub const NETWORK_ERROR_EMOJI: &str = "🔌";
    /// Emoji for timeouts
    pub const TIMEOUT_EMOJI: &str = "⏱️";
    /// Emoji for other issues
    pub const OTHER_EMOJI: &str = "❓";
}
