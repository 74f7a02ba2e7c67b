use crate::error::{LocateError, Result};
use std::str::FromStr;

/// Host platforms the resolvers know about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    /// Windows, official store package.
    Windows,
    /// Linux, community launcher (native or Flatpak).
    Linux,
    /// macOS, community launcher.
    MacOs,
    /// FreeBSD, community launcher.
    FreeBsd,
    /// Android, official app storage.
    Android,
}

impl Platform {
    /// Every platform with data resolution support.
    pub const ALL: [Platform; 5] = [
        Platform::Windows,
        Platform::Linux,
        Platform::MacOs,
        Platform::FreeBsd,
        Platform::Android,
    ];

    /// Platforms with asset resolution support.
    pub const WITH_ASSETS: [Platform; 4] = [
        Platform::Windows,
        Platform::Linux,
        Platform::MacOs,
        Platform::FreeBsd,
    ];

    /// The platform this binary runs on.
    pub fn current() -> Result<Self> {
        std::env::consts::OS.parse()
    }

    /// Identifier as reported by `std::env::consts::OS`.
    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Windows => "windows",
            Platform::Linux => "linux",
            Platform::MacOs => "macos",
            Platform::FreeBsd => "freebsd",
            Platform::Android => "android",
        }
    }
}

impl FromStr for Platform {
    type Err = LocateError;

    fn from_str(s: &str) -> Result<Self> {
        Platform::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| LocateError::UnsupportedPlatform {
                platform: s.to_string(),
                supported: Platform::ALL.to_vec(),
            })
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_identifiers() {
        assert_eq!("linux".parse::<Platform>().unwrap(), Platform::Linux);
        assert_eq!("MacOS".parse::<Platform>().unwrap(), Platform::MacOs);
        for p in Platform::ALL {
            assert_eq!(p.as_str().parse::<Platform>().unwrap(), p);
        }
    }

    #[test]
    fn rejects_unknown_identifier() {
        let err = "haiku".parse::<Platform>().unwrap_err();
        match &err {
            LocateError::UnsupportedPlatform { platform, supported } => {
                assert_eq!(platform, "haiku");
                assert_eq!(supported.len(), Platform::ALL.len());
            }
            other => panic!("unexpected error: {other:?}"),
        }
        let msg = err.to_string();
        assert!(msg.contains("haiku"));
        assert!(msg.contains("windows"));
    }
}
