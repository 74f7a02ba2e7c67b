use crate::platform::Platform;
use std::path::PathBuf;
use std::time::Duration;

/// Result alias for this crate.
pub type Result<T> = std::result::Result<T, LocateError>;

/// Which kind of location a resolver was asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationKind {
    /// Save data (`com.mojang`).
    Data,
    /// Render/asset content.
    Assets,
}

impl std::fmt::Display for LocationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LocationKind::Data => f.write_str("data"),
            LocationKind::Assets => f.write_str("asset"),
        }
    }
}

/// Error type for `bedrock-locate`.
#[derive(thiserror::Error, Debug)]
pub enum LocateError {
    /// The platform is not one this crate knows how to search.
    #[error("unsupported platform '{platform}' (supported: {})", join_platforms(.supported))]
    UnsupportedPlatform {
        /// Identifier that was rejected.
        platform: String,
        /// Platforms that would have been accepted.
        supported: Vec<Platform>,
    },

    /// A required environment value is absent.
    #[error("required environment variable {var} is not set")]
    MissingEnv {
        /// Variable name (or `HOME` when the home directory is unknown).
        var: &'static str,
    },

    /// Every candidate was probed and none exists.
    #[error("no {kind} location found on {platform}; tried: {}", join_paths(.candidates))]
    NoCandidates {
        /// What was being resolved.
        kind: LocationKind,
        /// Platform the candidates belong to.
        platform: Platform,
        /// Every probed path, in probe order.
        candidates: Vec<PathBuf>,
    },

    /// The store package query failed.
    #[error("package query for {package} failed")]
    ExternalQuery {
        /// Package name that was queried.
        package: String,
        /// Underlying failure.
        #[source]
        source: QueryError,
    },

    /// The launcher's version metadata could not be read.
    #[error("cannot read version metadata {path}")]
    MetadataUnreadable {
        /// Metadata file path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The launcher's version metadata has no usable entry.
    #[error("no valid version found in {path}")]
    MetadataInvalid {
        /// Metadata file path.
        path: PathBuf,
    },
}

/// Failure modes of a package query.
#[derive(thiserror::Error, Debug)]
pub enum QueryError {
    /// The query process could not be started.
    #[error("failed to launch {program}: {source}")]
    Launch {
        /// Program that was spawned.
        program: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The query process did not finish in time and was killed.
    #[error("query timed out after {}ms", .0.as_millis())]
    Timeout(Duration),

    /// The query process exited unsuccessfully.
    #[error("query exited with {status}: {stderr}")]
    Exit {
        /// Exit status description.
        status: String,
        /// Diagnostics the process wrote before exiting.
        stderr: String,
    },

    /// The query output could not be read in full.
    #[error("failed to read query {stream}: {source}")]
    Read {
        /// `stdout` or `stderr`.
        stream: &'static str,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The query process wrote diagnostics.
    #[error("query reported an error: {0}")]
    Stderr(String),

    /// The query output does not match the package descriptor schema.
    #[error("unexpected query output: {0}")]
    Parse(#[from] serde_json::Error),
}

fn join_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn join_platforms(platforms: &[Platform]) -> String {
    platforms
        .iter()
        .map(|p| p.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
