use crate::consts::*;
use crate::error::Result;
use crate::host::HostEnv;
use crate::platform::Platform;
use std::path::PathBuf;

/// Save-data candidates for `platform`, ordered by plausibility.
pub(crate) fn data_candidates(platform: Platform, env: &HostEnv) -> Result<Vec<PathBuf>> {
    let candidates = match platform {
        Platform::Windows => vec![env
            .require_local_app_data()?
            .join("Packages")
            .join(STORE_PACKAGE_FAMILY)
            .join("LocalState")
            .join(COM_MOJANG_REL)],
        Platform::Linux | Platform::MacOs | Platform::FreeBsd => launcher_roots(platform, env)?
            .into_iter()
            .map(|root| root.join(COM_MOJANG_REL))
            .collect(),
        Platform::Android => ANDROID_STORAGE_ROOTS
            .iter()
            .map(|root| PathBuf::from(root).join(COM_MOJANG_REL))
            .collect(),
    };

    tracing::debug!(%platform, ?candidates, "data candidates");
    Ok(candidates)
}

/// Community launcher roots for `platform`. Empty where no launcher is used.
pub(crate) fn launcher_roots(platform: Platform, env: &HostEnv) -> Result<Vec<PathBuf>> {
    let rels: &[&str] = match platform {
        Platform::Linux => &[LAUNCHER_ROOT_XDG_REL, LAUNCHER_ROOT_FLATPAK_REL],
        Platform::MacOs => &[LAUNCHER_ROOT_MACOS_REL],
        Platform::FreeBsd => &[LAUNCHER_ROOT_XDG_REL],
        Platform::Windows | Platform::Android => return Ok(Vec::new()),
    };

    let home = env.require_home()?;
    Ok(rels.iter().map(|rel| home.join(rel)).collect())
}
