// tests/packaging.rs

//! End-to-end runs of the repository packager.

mod common;

use common::{root_children, zip_entries};
use kodi_repo::hash::hash_bytes;
use kodi_repo::{Error, Packager};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_full_layout_written() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    Packager::new(root).run().unwrap();

    for path in [
        "repository.weebaymodz/addon.xml",
        "plugin.video.weebaymodz/addon.xml",
        "plugin.video.weebaymodz/addon.py",
        "addons.xml",
        "addons.xml.md5",
        "zip/repository.weebaymodz-1.0.0.zip",
        "zip/plugin.video.weebaymodz-1.0.0.zip",
        "README.md",
        "index.html",
    ] {
        assert!(root.join(path).is_file(), "missing {path}");
    }
    assert!(root.join("plugin.video.weebaymodz/resources").is_dir());
}

#[test]
fn test_checksum_matches_manifest_bytes() {
    let temp_dir = TempDir::new().unwrap();
    let report = Packager::new(temp_dir.path()).run().unwrap();

    let manifest = fs::read(&report.combined_manifest).unwrap();
    let sidecar = fs::read_to_string(&report.checksum_file).unwrap();

    assert_eq!(sidecar, hash_bytes(&manifest));
    assert_eq!(sidecar, report.checksum);
    assert_eq!(sidecar.len(), 32);
    assert!(!sidecar.ends_with('\n'));
}

#[test]
fn test_combined_manifest_order() {
    let temp_dir = TempDir::new().unwrap();
    let report = Packager::new(temp_dir.path()).run().unwrap();

    let xml = fs::read_to_string(&report.combined_manifest).unwrap();
    assert!(xml.starts_with("<?xml"));

    let children = root_children(&xml);
    assert_eq!(
        children,
        vec![
            (
                "addon".to_string(),
                Some("repository.weebaymodz".to_string())
            ),
            (
                "addon".to_string(),
                Some("plugin.video.weebaymodz".to_string())
            ),
        ]
    );
}

#[test]
fn test_addon_archive_rooted_at_id_despite_staging_folder() {
    let temp_dir = TempDir::new().unwrap();
    let packager = Packager::new(temp_dir.path()).with_addon_folder("weebay-staging");
    let report = packager.run().unwrap();

    assert!(temp_dir.path().join("weebay-staging/addon.xml").is_file());

    let entries = zip_entries(&report.addon_archive);
    assert!(!entries.is_empty());
    for entry in &entries {
        assert!(
            entry.starts_with("plugin.video.weebaymodz/"),
            "unexpected entry {entry}"
        );
    }
    assert!(entries.contains(&"plugin.video.weebaymodz/addon.xml".to_string()));
    assert!(entries.contains(&"plugin.video.weebaymodz/addon.py".to_string()));
}

#[test]
fn test_repository_archive_rooted_at_id() {
    let temp_dir = TempDir::new().unwrap();
    let report = Packager::new(temp_dir.path()).run().unwrap();

    let entries = zip_entries(&report.repository_archive);
    assert_eq!(entries, vec!["repository.weebaymodz/addon.xml".to_string()]);
}

#[test]
fn test_rerun_overwrites_outputs() {
    let temp_dir = TempDir::new().unwrap();
    let packager = Packager::new(temp_dir.path());
    let first = packager.run().unwrap();

    fs::write(&first.checksum_file, "stale").unwrap();
    fs::write(temp_dir.path().join("README.md"), "stale").unwrap();

    let second = packager.run().unwrap();
    assert_eq!(first.checksum, second.checksum);
    assert_eq!(
        fs::read_to_string(&second.checksum_file).unwrap(),
        second.checksum
    );
    assert_ne!(
        fs::read_to_string(temp_dir.path().join("README.md")).unwrap(),
        "stale"
    );
}

#[test]
fn test_failure_leaves_partial_output() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("zip"), "in the way").unwrap();

    let err = Packager::new(temp_dir.path()).run().unwrap_err();
    assert!(matches!(err, Error::CreateDir { .. }));

    // Created before the collision, never rolled back
    assert!(temp_dir.path().join("repository.weebaymodz").is_dir());
    assert!(!temp_dir.path().join("addons.xml").exists());
}
