//! First-open seeding of the catalog database from a bundled copy.

use std::path::Path;

use tracing::{debug, info, warn};

use catalog_core::config::DatabaseConfig;
use catalog_core::result::AppResult;

/// What [`ensure_database`] found or did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootstrapOutcome {
    /// The database file already existed and was left untouched.
    Existing,
    /// The database was copied from the bundled seed.
    Seeded,
    /// No seed was available; an empty catalog will be created on connect.
    Fresh,
}

/// Make sure a catalog database file exists at `config.path`.
///
/// An existing file is never overwritten. The seed is copied through a
/// temporary sibling file and renamed into place, so an interrupted copy
/// cannot leave a truncated catalog behind.
pub async fn ensure_database(config: &DatabaseConfig) -> AppResult<BootstrapOutcome> {
    let target = Path::new(&config.path);
    if tokio::fs::try_exists(target).await? {
        debug!(path = %config.path, "Catalog database present");
        return Ok(BootstrapOutcome::Existing);
    }

    if let Some(parent) = target.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await?;
    }

    let Some(seed_path) = config.seed_path.as_deref() else {
        info!(path = %config.path, "No seed configured, creating empty catalog");
        return Ok(BootstrapOutcome::Fresh);
    };

    if !tokio::fs::try_exists(seed_path).await? {
        warn!(seed = %seed_path, "Seed catalog not found, creating empty catalog");
        return Ok(BootstrapOutcome::Fresh);
    }

    let staging = target.with_extension("seeding");
    let bytes = match copy_seed(Path::new(seed_path), &staging, target).await {
        Ok(bytes) => bytes,
        Err(e) => {
            warn!(seed = %seed_path, error = %e, "Seeding failed, removing staging file");
            if let Err(cleanup) = tokio::fs::remove_file(&staging).await {
                if cleanup.kind() != std::io::ErrorKind::NotFound {
                    warn!(path = %staging.display(), error = %cleanup, "Failed to remove staging file");
                }
            }
            return Err(e.into());
        }
    };

    info!(
        seed = %seed_path,
        path = %config.path,
        bytes,
        "Catalog database seeded"
    );
    Ok(BootstrapOutcome::Seeded)
}

async fn copy_seed(seed: &Path, staging: &Path, target: &Path) -> std::io::Result<u64> {
    let bytes = tokio::fs::copy(seed, staging).await?;
    tokio::fs::rename(staging, target).await?;
    Ok(bytes)
}
