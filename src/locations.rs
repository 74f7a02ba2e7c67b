use crate::error::{LocateError, LocationKind, Result};
use crate::platform::Platform;
use std::path::{Path, PathBuf};

/// A non-empty, ordered set of directories that existed when probed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locations {
    paths: Vec<PathBuf>,
}

impl Locations {
    /// Keep the candidates that are existing directories, in order.
    ///
    /// Fails with [`LocateError::NoCandidates`] when none survive.
    pub(crate) fn existing(
        kind: LocationKind,
        platform: Platform,
        candidates: Vec<PathBuf>,
    ) -> Result<Self> {
        let paths: Vec<PathBuf> = candidates.iter().filter(|p| p.is_dir()).cloned().collect();

        if paths.is_empty() {
            return Err(LocateError::NoCandidates {
                kind,
                platform,
                candidates,
            });
        }

        tracing::debug!(%kind, %platform, found = ?paths, "resolved locations");
        Ok(Self { paths })
    }

    /// The most plausible location.
    pub fn first(&self) -> &Path {
        &self.paths[0]
    }

    /// Number of locations (always at least one).
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Always false; present for API symmetry with collections.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Iterate in plausibility order.
    pub fn iter(&self) -> std::slice::Iter<'_, PathBuf> {
        self.paths.iter()
    }

    /// Borrow as a slice.
    pub fn as_slice(&self) -> &[PathBuf] {
        &self.paths
    }

    /// Unwrap into the inner vector.
    pub fn into_vec(self) -> Vec<PathBuf> {
        self.paths
    }
}

impl IntoIterator for Locations {
    type Item = PathBuf;
    type IntoIter = std::vec::IntoIter<PathBuf>;

    fn into_iter(self) -> Self::IntoIter {
        self.paths.into_iter()
    }
}

impl<'a> IntoIterator for &'a Locations {
    type Item = &'a PathBuf;
    type IntoIter = std::slice::Iter<'a, PathBuf>;

    fn into_iter(self) -> Self::IntoIter {
        self.paths.iter()
    }
}
