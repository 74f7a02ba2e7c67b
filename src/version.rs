use crate::consts::{VERSIONS_DIR, VERSIONS_INI, VERSION_ASSETS_DIR};
use crate::error::{LocateError, Result};
use crate::ini::{Ini, IniSection};
use std::path::{Path, PathBuf};

/// One installed version listed in a launcher's `versions.ini`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallRecord {
    /// Numeric version code, `None` when missing or not a number.
    pub version_code: Option<i64>,
    /// Directory name under `versions/`, empty when missing.
    pub version_name: String,
}

impl InstallRecord {
    fn from_section(section: &IniSection) -> Self {
        Self {
            version_code: section
                .get("versionCode")
                .and_then(|v| v.trim().parse::<i64>().ok()),
            version_name: section.get("versionName").cloned().unwrap_or_default(),
        }
    }

    fn is_valid(&self) -> bool {
        self.version_code.is_some() && !self.version_name.is_empty()
    }
}

/// `<root>/versions/versions.ini`
pub fn versions_ini_path(launcher_root: &Path) -> PathBuf {
    launcher_root.join(VERSIONS_DIR).join(VERSIONS_INI)
}

/// Records from every named section in file order; the sectionless part is ignored.
pub fn install_records(ini: &Ini) -> Vec<InstallRecord> {
    ini.sections()
        .map(|(_, section)| InstallRecord::from_section(section))
        .collect()
}

/// Pick the record with the strictly greatest version code; earlier records win ties.
pub fn newest_record(records: &[InstallRecord]) -> Option<&InstallRecord> {
    records
        .iter()
        .filter(|r| r.is_valid())
        .fold(None, |best: Option<&InstallRecord>, r| match best {
            Some(b) if r.version_code <= b.version_code => Some(b),
            _ => Some(r),
        })
}

/// Asset directory of the newest valid version installed under `launcher_root`.
///
/// The returned directory is not checked for existence.
pub fn current_version_assets(launcher_root: &Path) -> Result<PathBuf> {
    let ini_path = versions_ini_path(launcher_root);
    let ini = Ini::read(&ini_path)?;

    let records = install_records(&ini);
    let invalid = records.iter().filter(|r| !r.is_valid()).count();
    if invalid > 0 {
        tracing::debug!(path = %ini_path.display(), invalid, "skipping version entries without code or name");
    }

    let newest = newest_record(&records).ok_or_else(|| LocateError::MetadataInvalid {
        path: ini_path.clone(),
    })?;

    tracing::debug!(
        root = %launcher_root.display(),
        version = %newest.version_name,
        "selected launcher version"
    );
    Ok(launcher_root
        .join(VERSIONS_DIR)
        .join(&newest.version_name)
        .join(VERSION_ASSETS_DIR))
}
