#![doc = r#"
`bedrock-locate` finds where Minecraft: Bedrock Edition keeps its files.

Core capabilities:
- Resolve save-data (`com.mojang`) directories
- Resolve render/asset directories, following the newest installed launcher version
- Query the Windows store package for its install location

Supported platforms:
- Windows (store package)
- Linux, macOS, FreeBSD (community launcher)
- Android (save data only)

Every successful resolution returns a non-empty [`Locations`] of directories that
existed when probed; anything else is a [`LocateError`].
"#]

mod candidates;
mod command;
mod consts;
mod error;
mod host;
mod ini;
mod locations;
mod locator;
mod package;
mod platform;
mod version;

pub use crate::error::{LocateError, LocationKind, QueryError, Result};
pub use crate::host::HostEnv;
pub use crate::ini::{Ini, IniSection};
pub use crate::locations::Locations;
pub use crate::locator::Locator;
pub use crate::package::{
    PackageDescriptor, PackageQuery, PowerShellQuery, DEFAULT_QUERY_TIMEOUT,
};
pub use crate::platform::Platform;
pub use crate::version::{
    current_version_assets, install_records, newest_record, versions_ini_path, InstallRecord,
};

/// Save-data directories on this host.
pub fn resolve_data_locations() -> Result<Locations> {
    Locator::for_host()?.data_locations()
}

/// Asset directories on this host.
pub fn resolve_asset_locations() -> Result<Locations> {
    Locator::for_host()?.asset_locations()
}
