use crate::command::{CommandOutput, CommandSpec};
use crate::error::QueryError;
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

/// Default bound on the package query.
pub const DEFAULT_QUERY_TIMEOUT: Duration = Duration::from_millis(500);

/// An installed store package as reported by `Get-AppxPackage`.
///
/// Only `InstallLocation` is consumed; the rest is kept for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PackageDescriptor {
    /// Package name, e.g. `Microsoft.MinecraftUWP`.
    pub name: String,
    /// Directory the package is installed in.
    pub install_location: PathBuf,
    /// Full package name including version and architecture.
    #[serde(default)]
    pub package_full_name: Option<String>,
    /// Package family name.
    #[serde(default)]
    pub package_family_name: Option<String>,
    /// Package version string.
    #[serde(default)]
    pub version: Option<String>,
    /// Publisher distinguished name.
    #[serde(default)]
    pub publisher: Option<String>,
}

/// Looks up an installed store package by name.
pub trait PackageQuery: Send + Sync {
    /// Return the descriptor of the package called `package_name`.
    fn query(&self, package_name: &str) -> Result<PackageDescriptor, QueryError>;
}

/// Queries packages through PowerShell's `Get-AppxPackage`.
#[derive(Debug, Clone)]
pub struct PowerShellQuery {
    program: PathBuf,
    timeout: Duration,
}

impl Default for PowerShellQuery {
    fn default() -> Self {
        Self {
            program: PathBuf::from("powershell"),
            timeout: DEFAULT_QUERY_TIMEOUT,
        }
    }
}

impl PowerShellQuery {
    /// Query with the default program and timeout.
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Override the PowerShell executable (e.g. `pwsh`).
    pub fn program(mut self, program: impl Into<PathBuf>) -> Self {
        self.program = program.into();
        self
    }

    pub(crate) fn command(&self, package_name: &str) -> CommandSpec {
        let script = format!(
            "Get-AppxPackage -Name '{}' | ConvertTo-Json -Compress",
            package_name.replace('\'', "''")
        );
        CommandSpec::new(&self.program)
            .arg("-NoProfile")
            .arg("-NonInteractive")
            .arg("-Command")
            .arg(script)
    }
}

impl PackageQuery for PowerShellQuery {
    fn query(&self, package_name: &str) -> Result<PackageDescriptor, QueryError> {
        tracing::debug!(package = package_name, timeout = ?self.timeout, "querying store package");
        let output = self.command(package_name).output_with_timeout(self.timeout)?;
        parse_query_output(&output)
    }
}

/// Interpret a finished query: non-zero exit, any stderr, or schema mismatch is an error.
pub(crate) fn parse_query_output(output: &CommandOutput) -> Result<PackageDescriptor, QueryError> {
    let stderr = output.stderr.trim();
    if !output.status.success() {
        return Err(QueryError::Exit {
            status: output.status.to_string(),
            stderr: stderr.to_string(),
        });
    }
    if !stderr.is_empty() {
        return Err(QueryError::Stderr(stderr.to_string()));
    }
    parse_descriptor(&output.stdout)
}

pub(crate) fn parse_descriptor(stdout: &str) -> Result<PackageDescriptor, QueryError> {
    Ok(serde_json::from_str(stdout.trim())?)
}
