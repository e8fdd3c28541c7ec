use log::info;
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

use crate::core::constants::ads_txt;
use crate::core::error::{DeployProbeError, Result};
use crate::publisher::id::PublisherId;

/// Render the three-line ads.txt body for `id`.
pub fn render_ads_txt(id: &PublisherId) -> String {
    format!(
        "# ads.txt - authorized digital sellers\n# Publisher: {id}\n{}, {id}, {}, {}\n",
        ads_txt::AD_SYSTEM_DOMAIN,
        ads_txt::RELATIONSHIP,
        ads_txt::CERTIFICATION_AUTHORITY_ID,
    )
}

/// Replace the file at `path` with the ads.txt body for `id`.
///
/// The body goes to a temporary file in the same directory which is then
/// renamed over `path`, so a failed write leaves the old file in place.
pub fn write_ads_txt(path: &Path, id: &PublisherId) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut staged = NamedTempFile::new_in(dir)?;
    staged.write_all(render_ads_txt(id).as_bytes())?;
    staged.as_file().sync_all()?;

    if let Ok(metadata) = fs::metadata(path) {
        staged.as_file().set_permissions(metadata.permissions())?;
    }

    staged
        .persist(path)
        .map_err(|err| DeployProbeError::Io(err.error))?;
    Ok(())
}

/// Validate `raw` and rewrite `path` with it. Nothing is written unless the
/// identifier is valid.
pub fn rewrite_ads_txt(path: &Path, raw: &str) -> Result<PublisherId> {
    let id = PublisherId::parse(raw)?;
    write_ads_txt(path, &id)?;
    info!("Wrote publisher record for {id} to {}", path.display());
    Ok(id)
}
