//! Integration tests for asset resolution.
use bedrock_locate::{
    HostEnv, LocateError, LocationKind, Locator, PackageDescriptor, PackageQuery, Platform,
    PowerShellQuery, QueryError,
};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tempfile::tempdir;

const XDG_ROOT: &str = ".local/share/mcpelauncher";
const FLATPAK_ROOT: &str = ".var/app/io.mrarm.mcpelauncher/data/mcpelauncher";

fn write_versions(root: &Path, ini: &str) {
    let versions = root.join("versions");
    fs::create_dir_all(&versions).unwrap();
    fs::write(versions.join("versions.ini"), ini).unwrap();
}

fn install_version(root: &Path, name: &str) -> PathBuf {
    let assets = root.join("versions").join(name).join("assets");
    fs::create_dir_all(&assets).unwrap();
    assets
}

struct FixedPackage(PathBuf);

impl PackageQuery for FixedPackage {
    fn query(&self, package_name: &str) -> Result<PackageDescriptor, QueryError> {
        Ok(PackageDescriptor {
            name: package_name.to_string(),
            install_location: self.0.clone(),
            package_full_name: None,
            package_family_name: None,
            version: None,
            publisher: None,
        })
    }
}

struct TimedOut;

impl PackageQuery for TimedOut {
    fn query(&self, _package_name: &str) -> Result<PackageDescriptor, QueryError> {
        Err(QueryError::Timeout(Duration::from_millis(500)))
    }
}

#[test]
fn selects_newest_launcher_version() {
    let home = tempdir().unwrap();
    let root = home.path().join(XDG_ROOT);
    write_versions(
        &root,
        "[1.20.0]\nversionCode=1\nversionName=x\n\n[1.21.0]\nversionCode=2\nversionName=y\n",
    );
    install_version(&root, "x");
    let newest = install_version(&root, "y");

    let locs = Locator::new(Platform::Linux)
        .env(HostEnv::empty().home(home.path()))
        .asset_locations()
        .unwrap();
    assert_eq!(locs.as_slice(), &[newest.clone()]);
    assert!(newest.ends_with("y/assets"));
}

#[test]
fn concatenates_roots_in_order() {
    let home = tempdir().unwrap();
    let xdg = home.path().join(XDG_ROOT);
    let flatpak = home.path().join(FLATPAK_ROOT);
    write_versions(&xdg, "[a]\nversionCode=10\nversionName=a\n");
    write_versions(&flatpak, "[b]\nversionCode=20\nversionName=b\n");
    let a = install_version(&xdg, "a");
    let b = install_version(&flatpak, "b");

    let locs = Locator::new(Platform::Linux)
        .env(HostEnv::empty().home(home.path()))
        .asset_locations()
        .unwrap();
    assert_eq!(locs.into_vec(), vec![a, b]);
}

#[test]
fn broken_root_fails_whole_call() {
    let home = tempdir().unwrap();
    let xdg = home.path().join(XDG_ROOT);
    let flatpak = home.path().join(FLATPAK_ROOT);
    write_versions(&xdg, "[a]\nversionCode=oops\nversionName=a\n");
    write_versions(&flatpak, "[b]\nversionCode=20\nversionName=b\n");
    install_version(&flatpak, "b");

    let err = Locator::new(Platform::Linux)
        .env(HostEnv::empty().home(home.path()))
        .asset_locations()
        .unwrap_err();
    match err {
        LocateError::MetadataInvalid { path } => {
            assert_eq!(path, xdg.join("versions").join("versions.ini"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn root_without_versions_ini_is_unreadable() {
    let home = tempdir().unwrap();
    let root = home.path().join("Library/Application Support/mcpelauncher");
    fs::create_dir_all(&root).unwrap();

    let err = Locator::new(Platform::MacOs)
        .env(HostEnv::empty().home(home.path()))
        .asset_locations()
        .unwrap_err();
    match err {
        LocateError::MetadataUnreadable { path, source } => {
            assert!(path.ends_with("versions/versions.ini"));
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn all_entries_invalid_fails() {
    let home = tempdir().unwrap();
    let root = home.path().join(XDG_ROOT);
    write_versions(
        &root,
        "[a]\nversionName=a\n[b]\nversionCode=5\nversionName=\n[c]\nversionCode=x\nversionName=c\n",
    );

    let err = Locator::new(Platform::FreeBsd)
        .env(HostEnv::empty().home(home.path()))
        .asset_locations()
        .unwrap_err();
    assert!(matches!(err, LocateError::MetadataInvalid { .. }));
}

#[test]
fn selected_version_dir_must_exist() {
    let home = tempdir().unwrap();
    let root = home.path().join(XDG_ROOT);
    write_versions(&root, "[a]\nversionCode=1\nversionName=a\n");

    let err = Locator::new(Platform::Linux)
        .env(HostEnv::empty().home(home.path()))
        .asset_locations()
        .unwrap_err();
    match err {
        LocateError::NoCandidates {
            kind, candidates, ..
        } => {
            assert_eq!(kind, LocationKind::Assets);
            assert_eq!(candidates, vec![root.join("versions/a/assets")]);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn no_launcher_root_fails() {
    let home = tempdir().unwrap();
    for platform in [Platform::Linux, Platform::MacOs, Platform::FreeBsd] {
        let err = Locator::new(platform)
            .env(HostEnv::empty().home(home.path()))
            .asset_locations()
            .unwrap_err();
        assert!(
            matches!(err, LocateError::NoCandidates { kind: LocationKind::Assets, .. }),
            "{platform}: {err:?}"
        );
    }
}

#[test]
fn store_package_assets_come_from_install_location() {
    let install = tempdir().unwrap();
    let data = install.path().join("data");
    fs::create_dir_all(&data).unwrap();

    let locs = Locator::new(Platform::Windows)
        .env(HostEnv::empty())
        .package_query(FixedPackage(install.path().to_path_buf()))
        .asset_locations()
        .unwrap();
    assert_eq!(locs.as_slice(), &[data]);
}

#[test]
fn store_package_without_data_dir_fails() {
    let install = tempdir().unwrap();
    let err = Locator::new(Platform::Windows)
        .package_query(FixedPackage(install.path().to_path_buf()))
        .asset_locations()
        .unwrap_err();
    assert!(matches!(err, LocateError::NoCandidates { .. }));
}

#[test]
fn query_timeout_is_wrapped() {
    let err = Locator::new(Platform::Windows)
        .package_query(TimedOut)
        .asset_locations()
        .unwrap_err();
    match err {
        LocateError::ExternalQuery { package, source } => {
            assert_eq!(package, "Microsoft.MinecraftUWP");
            assert!(matches!(source, QueryError::Timeout(_)));
            assert!(source.to_string().contains("500ms"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[cfg(unix)]
#[test]
fn query_parse_failure_keeps_message() {
    // `echo` stands in for PowerShell: exits 0 and prints its arguments, which are not JSON.
    let err = Locator::new(Platform::Windows)
        .package_name("Microsoft.MinecraftWindowsBeta")
        .package_query(PowerShellQuery::new().program("echo").timeout(Duration::from_secs(5)))
        .asset_locations()
        .unwrap_err();
    match &err {
        LocateError::ExternalQuery { source, .. } => {
            assert!(matches!(source, QueryError::Parse(_)), "{source:?}")
        }
        other => panic!("unexpected error: {other:?}"),
    }
    let chain = std::error::Error::source(&err).unwrap().to_string();
    assert!(chain.starts_with("unexpected query output"));
    assert!(err.to_string().contains("Microsoft.MinecraftWindowsBeta"));
}

#[test]
fn android_has_no_asset_resolution() {
    let err = Locator::new(Platform::Android)
        .asset_locations()
        .unwrap_err();
    match err {
        LocateError::UnsupportedPlatform { platform, supported } => {
            assert_eq!(platform, "android");
            assert!(!supported.contains(&Platform::Android));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}
