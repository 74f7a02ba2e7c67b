use crate::consts::LOCAL_APP_DATA_VAR;
use crate::error::{LocateError, Result};
use std::path::{Path, PathBuf};

/// Ambient host context the resolvers read: home directory and `LOCALAPPDATA`.
///
/// [`HostEnv::from_process`] captures the running process's view; the builder
/// methods replace individual values (useful for tests and for callers that
/// resolve on behalf of another user).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostEnv {
    home: Option<PathBuf>,
    local_app_data: Option<PathBuf>,
}

impl HostEnv {
    /// Capture the current process environment.
    pub fn from_process() -> Self {
        Self {
            home: dirs::home_dir(),
            local_app_data: std::env::var_os(LOCAL_APP_DATA_VAR)
                .filter(|v| !v.is_empty())
                .map(PathBuf::from),
        }
    }

    /// Empty context: no home, no `LOCALAPPDATA`.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Set the home directory.
    pub fn home(mut self, dir: impl Into<PathBuf>) -> Self {
        self.home = Some(dir.into());
        self
    }

    /// Set the `LOCALAPPDATA` directory.
    pub fn local_app_data(mut self, dir: impl Into<PathBuf>) -> Self {
        self.local_app_data = Some(dir.into());
        self
    }

    pub(crate) fn require_home(&self) -> Result<&Path> {
        self.home
            .as_deref()
            .ok_or(LocateError::MissingEnv { var: "HOME" })
    }

    pub(crate) fn require_local_app_data(&self) -> Result<&Path> {
        self.local_app_data
            .as_deref()
            .ok_or(LocateError::MissingEnv {
                var: LOCAL_APP_DATA_VAR,
            })
    }
}
