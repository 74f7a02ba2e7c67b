use crate::candidates;
use crate::consts::{STORE_ASSETS_REL, STORE_PACKAGE_NAME};
use crate::error::{LocateError, LocationKind, Result};
use crate::host::HostEnv;
use crate::locations::Locations;
use crate::package::{PackageQuery, PowerShellQuery};
use crate::platform::Platform;
use crate::version;
use std::path::PathBuf;
use std::sync::Arc;
use std::thread;

/// Resolves save-data and asset directories for one platform.
///
/// Nothing is cached: each call re-reads the environment snapshot it was built
/// with and re-probes the filesystem.
#[derive(Clone)]
pub struct Locator {
    platform: Platform,
    env: HostEnv,
    package_name: String,
    query: Arc<dyn PackageQuery>,
}

impl std::fmt::Debug for Locator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Locator")
            .field("platform", &self.platform)
            .field("env", &self.env)
            .field("package_name", &self.package_name)
            .finish_non_exhaustive()
    }
}

impl Locator {
    /// Locator for `platform` using the current process environment.
    pub fn new(platform: Platform) -> Self {
        Self {
            platform,
            env: HostEnv::from_process(),
            package_name: STORE_PACKAGE_NAME.to_string(),
            query: Arc::new(PowerShellQuery::default()),
        }
    }

    /// Locator for the platform this binary runs on.
    pub fn for_host() -> Result<Self> {
        Ok(Self::new(Platform::current()?))
    }

    /// Replace the environment snapshot.
    pub fn env(mut self, env: HostEnv) -> Self {
        self.env = env;
        self
    }

    /// Override the store package name queried on Windows.
    pub fn package_name(mut self, name: impl Into<String>) -> Self {
        self.package_name = name.into();
        self
    }

    /// Replace the package query implementation.
    pub fn package_query(mut self, query: impl PackageQuery + 'static) -> Self {
        self.query = Arc::new(query);
        self
    }

    /// Platform being resolved.
    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// Unverified save-data candidates.
    pub fn data_candidates(&self) -> Result<Vec<PathBuf>> {
        candidates::data_candidates(self.platform, &self.env)
    }

    /// Existing save-data directories.
    pub fn data_locations(&self) -> Result<Locations> {
        let candidates = self.data_candidates()?;
        Locations::existing(LocationKind::Data, self.platform, candidates)
    }

    /// Existing asset directories.
    ///
    /// On launcher platforms every existing launcher root must carry valid
    /// version metadata; one broken root fails the whole call.
    pub fn asset_locations(&self) -> Result<Locations> {
        let candidates = match self.platform {
            Platform::Windows => vec![self.store_assets()?],
            Platform::Linux | Platform::MacOs | Platform::FreeBsd => {
                let roots = candidates::launcher_roots(self.platform, &self.env)?;
                let roots = Locations::existing(LocationKind::Assets, self.platform, roots)?;
                select_versions(roots.as_slice())?
            }
            Platform::Android => {
                return Err(LocateError::UnsupportedPlatform {
                    platform: self.platform.to_string(),
                    supported: Platform::WITH_ASSETS.to_vec(),
                })
            }
        };

        tracing::debug!(platform = %self.platform, ?candidates, "asset candidates");
        Locations::existing(LocationKind::Assets, self.platform, candidates)
    }

    fn store_assets(&self) -> Result<PathBuf> {
        let package = self
            .query
            .query(&self.package_name)
            .map_err(|source| LocateError::ExternalQuery {
                package: self.package_name.clone(),
                source,
            })?;
        Ok(package.install_location.join(STORE_ASSETS_REL))
    }
}

/// Run version selection for every root concurrently; results keep root order and
/// the first failing root (in root order) fails the batch.
fn select_versions(roots: &[PathBuf]) -> Result<Vec<PathBuf>> {
    thread::scope(|s| {
        let handles: Vec<_> = roots
            .iter()
            .map(|root| s.spawn(move || version::current_version_assets(root)))
            .collect();

        handles
            .into_iter()
            .map(|h| h.join().unwrap_or_else(|panic| std::panic::resume_unwind(panic)))
            .collect()
    })
}
