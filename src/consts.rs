pub(crate) const LOCAL_APP_DATA_VAR: &str = "LOCALAPPDATA";

pub(crate) const STORE_PACKAGE_NAME: &str = "Microsoft.MinecraftUWP";
pub(crate) const STORE_PACKAGE_FAMILY: &str = "Microsoft.MinecraftUWP_8wekyb3d8bbwe";

/// Asset subdirectory of the store package's install location.
pub(crate) const STORE_ASSETS_REL: &str = "data";

/// Save data relative to a launcher root or app storage root.
pub(crate) const COM_MOJANG_REL: &str = "games/com.mojang";

pub(crate) const LAUNCHER_ROOT_XDG_REL: &str = ".local/share/mcpelauncher";
pub(crate) const LAUNCHER_ROOT_FLATPAK_REL: &str = ".var/app/io.mrarm.mcpelauncher/data/mcpelauncher";
pub(crate) const LAUNCHER_ROOT_MACOS_REL: &str = "Library/Application Support/mcpelauncher";

pub(crate) const ANDROID_STORAGE_ROOTS: [&str; 2] = ["/sdcard", "/storage/emulated/0"];

pub(crate) const VERSIONS_DIR: &str = "versions";
pub(crate) const VERSIONS_INI: &str = "versions.ini";
pub(crate) const VERSION_ASSETS_DIR: &str = "assets";
