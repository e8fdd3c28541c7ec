//! ads.txt rewriting
//!
//! Validates an AdSense publisher identifier and replaces an `ads.txt`
//! file with a seller record for it.

pub mod ads_txt;
pub mod id;

// Re-export commonly used items
pub use ads_txt::{render_ads_txt, rewrite_ads_txt, write_ads_txt};
pub use id::{PublisherId, PublisherIdError};
