// src/descriptor.rs

//! Addon and repository descriptors
//!
//! These are the fixed-shape configuration values the packager renders into
//! `addon.xml` documents. The WeebayModz values are baked in; there is no
//! config file or environment lookup.

/// Public hosting URL of the repository (GitHub Pages)
pub const PUBLIC_URL: &str = "https://pckodiaddon.github.io/Kodiaddon";

/// Version shared by the addon and the repository addon
pub const VERSION: &str = "1.0.0";

/// Extension point for Python video/music/program plugins
pub const POINT_PLUGIN_SOURCE: &str = "xbmc.python.pluginsource";

/// Extension point carrying summary/description/platform metadata
pub const POINT_METADATA: &str = "xbmc.addon.metadata";

/// Extension point describing an addon repository
pub const POINT_REPOSITORY: &str = "xbmc.addon.repository";

/// A declared dependency: addon id plus minimum version
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dependency {
    pub addon: String,
    pub version: String,
}

impl Dependency {
    pub fn new(addon: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            addon: addon.into(),
            version: version.into(),
        }
    }
}

/// The addon's entry point extension
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryPoint {
    /// Extension point id, e.g. `xbmc.python.pluginsource`
    pub point: String,
    /// Script file Kodi executes, relative to the addon folder
    pub library: String,
    /// Content category the plugin provides (`video`, `audio`, ...)
    pub provides: String,
}

/// Optional `xbmc.addon.metadata` fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddonMetadata {
    pub summary: Option<String>,
    pub description: Option<String>,
    pub platform: Option<String>,
}

impl AddonMetadata {
    pub fn is_empty(&self) -> bool {
        self.summary.is_none() && self.description.is_none() && self.platform.is_none()
    }
}

/// A single installable addon
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddonDescriptor {
    pub id: String,
    pub name: String,
    pub version: String,
    pub requires: Vec<Dependency>,
    pub entry_point: EntryPoint,
    pub metadata: AddonMetadata,
}

impl AddonDescriptor {
    /// File name of the packaged addon, `<id>-<version>.zip`
    pub fn archive_name(&self) -> String {
        archive_name(&self.id, &self.version)
    }
}

/// The repository addon that points Kodi at the combined manifest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryDescriptor {
    pub id: String,
    pub name: String,
    pub version: String,
    /// Where `addons.xml` is published
    pub info_url: String,
    /// Where `addons.xml.md5` is published
    pub checksum_url: String,
    /// Directory holding the packaged zips
    pub datadir_url: String,
}

impl RepositoryDescriptor {
    /// File name of the packaged repository addon, `<id>-<version>.zip`
    pub fn archive_name(&self) -> String {
        archive_name(&self.id, &self.version)
    }
}

fn archive_name(id: &str, version: &str) -> String {
    format!("{id}-{version}.zip")
}

/// The WeebayModz video plugin
pub fn weebaymodz_addon() -> AddonDescriptor {
    AddonDescriptor {
        id: "plugin.video.weebaymodz".to_string(),
        name: "WeebayModz".to_string(),
        version: VERSION.to_string(),
        requires: vec![Dependency::new("xbmc.python", "3.0.0")],
        entry_point: EntryPoint {
            point: POINT_PLUGIN_SOURCE.to_string(),
            library: "addon.py".to_string(),
            provides: "video".to_string(),
        },
        metadata: AddonMetadata {
            summary: Some("WeebayModz Addon".to_string()),
            description: Some("WeebayModz Kodi Video Addon".to_string()),
            platform: Some("all".to_string()),
        },
    }
}

/// The WeebayModz repository addon
pub fn weebaymodz_repository() -> RepositoryDescriptor {
    RepositoryDescriptor {
        id: "repository.weebaymodz".to_string(),
        name: "WeebayModz Repository".to_string(),
        version: VERSION.to_string(),
        info_url: format!("{PUBLIC_URL}/addons.xml"),
        checksum_url: format!("{PUBLIC_URL}/addons.xml.md5"),
        datadir_url: format!("{PUBLIC_URL}/zip"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repository_urls() {
        let repo = weebaymodz_repository();
        assert_eq!(
            repo.info_url,
            "https://pckodiaddon.github.io/Kodiaddon/addons.xml"
        );
        assert_eq!(
            repo.checksum_url,
            "https://pckodiaddon.github.io/Kodiaddon/addons.xml.md5"
        );
        assert_eq!(
            repo.datadir_url,
            "https://pckodiaddon.github.io/Kodiaddon/zip"
        );
    }

    #[test]
    fn test_archive_names() {
        assert_eq!(
            weebaymodz_addon().archive_name(),
            "plugin.video.weebaymodz-1.0.0.zip"
        );
        assert_eq!(
            weebaymodz_repository().archive_name(),
            "repository.weebaymodz-1.0.0.zip"
        );
    }

    #[test]
    fn test_metadata_is_empty() {
        assert!(AddonMetadata::default().is_empty());
        assert!(!weebaymodz_addon().metadata.is_empty());
    }
}
