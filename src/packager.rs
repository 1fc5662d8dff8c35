// src/packager.rs

//! Repository packaging pipeline
//!
//! Materializes a Kodi addon repository from fixed descriptors. Steps run in
//! a strict order because each one reads what the previous one left on disk:
//!
//! 1. Create the directory layout
//! 2. Write the addon entry point, README and index.html
//! 3. Write both `addon.xml` files and the combined `addons.xml`
//! 4. Hash `addons.xml` into `addons.xml.md5`
//! 5. Zip the addon and repository folders
//!
//! Any failure aborts the run. Output already written stays on disk.

use crate::archive::archive_directory;
use crate::descriptor::{self, AddonDescriptor, PUBLIC_URL, RepositoryDescriptor};
use crate::docs;
use crate::error::{Error, Result};
use crate::hash;
use crate::manifest::{self, Document};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Name of the combined manifest at the repository root
pub const COMBINED_MANIFEST: &str = "addons.xml";

/// Name of the checksum sidecar next to the combined manifest
pub const CHECKSUM_FILE: &str = "addons.xml.md5";

/// Folder holding the packaged zips (the repository `datadir`)
pub const ZIP_DIR: &str = "zip";

/// Per-addon manifest file name
pub const ADDON_MANIFEST: &str = "addon.xml";

/// On-disk locations of everything the packager produces
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub root: PathBuf,
    pub repository_dir: PathBuf,
    pub addon_dir: PathBuf,
    pub zip_dir: PathBuf,
}

impl Layout {
    /// Layout under `root` with staging folders named `repository_folder` and `addon_folder`
    pub fn new(root: impl Into<PathBuf>, repository_folder: &str, addon_folder: &str) -> Self {
        let root = root.into();
        Self {
            repository_dir: root.join(repository_folder),
            addon_dir: root.join(addon_folder),
            zip_dir: root.join(ZIP_DIR),
            root,
        }
    }

    pub fn resources_dir(&self) -> PathBuf {
        self.addon_dir.join("resources")
    }

    pub fn combined_manifest(&self) -> PathBuf {
        self.root.join(COMBINED_MANIFEST)
    }

    pub fn checksum_file(&self) -> PathBuf {
        self.root.join(CHECKSUM_FILE)
    }

    pub fn readme(&self) -> PathBuf {
        self.root.join("README.md")
    }

    pub fn index_html(&self) -> PathBuf {
        self.root.join("index.html")
    }
}

/// What a successful run produced
#[derive(Debug, Clone)]
pub struct PackageReport {
    pub combined_manifest: PathBuf,
    pub checksum_file: PathBuf,
    /// Hex MD5 of `addons.xml` as written in this run
    pub checksum: String,
    pub addon_archive: PathBuf,
    pub repository_archive: PathBuf,
    /// Files packed into the addon zip
    pub addon_entries: usize,
    /// Files packed into the repository zip
    pub repository_entries: usize,
    /// URL users install the repository zip from
    pub install_url: String,
}

/// Builds the repository layout for one addon and its repository addon
#[derive(Debug, Clone)]
pub struct Packager {
    addon: AddonDescriptor,
    repository: RepositoryDescriptor,
    public_url: String,
    layout: Layout,
}

impl Packager {
    /// Packager for the WeebayModz addon and repository, writing under `output_dir`
    ///
    /// Staging folders are named after the ids.
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        let addon = descriptor::weebaymodz_addon();
        let repository = descriptor::weebaymodz_repository();
        let layout = Layout::new(output_dir, &repository.id, &addon.id);
        Self {
            addon,
            repository,
            public_url: PUBLIC_URL.to_string(),
            layout,
        }
    }

    /// Stage the addon sources in a folder other than its id
    ///
    /// The addon zip is still rooted at the addon id.
    pub fn with_addon_folder(mut self, folder: &str) -> Self {
        self.layout.addon_dir = self.layout.root.join(folder);
        self
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Create the repository, zip, addon and addon resources folders
    ///
    /// Existing directories are left alone.
    pub fn prepare_directories(&self) -> Result<()> {
        let dirs = [
            self.layout.repository_dir.clone(),
            self.layout.zip_dir.clone(),
            self.layout.addon_dir.clone(),
            self.layout.resources_dir(),
        ];
        for dir in &dirs {
            fs::create_dir_all(dir).map_err(|source| Error::CreateDir {
                path: dir.clone(),
                source,
            })?;
        }
        info!(
            "Prepared directories under {}",
            self.layout.root.display()
        );
        Ok(())
    }

    /// Write the Python entry point into the addon folder
    pub fn write_addon_entry_point(&self) -> Result<()> {
        let path = self.layout.addon_dir.join(&self.addon.entry_point.library);
        write_file(&path, &docs::addon_entry_point(&self.addon))
    }

    /// Write README.md and index.html at the repository root
    pub fn write_static_docs(&self) -> Result<()> {
        write_file(
            &self.layout.readme(),
            &docs::readme(&self.repository, &self.addon, &self.public_url),
        )?;
        write_file(
            &self.layout.index_html(),
            &docs::index_html(&self.repository, &self.public_url),
        )
    }

    pub fn build_addon_manifest(&self) -> Document {
        manifest::addon_manifest(&self.addon)
    }

    pub fn build_repository_manifest(&self) -> Document {
        manifest::repository_manifest(&self.repository)
    }

    /// Run the whole pipeline
    pub fn run(&self) -> Result<PackageReport> {
        info!(
            "Building repository {} with addon {} in {}",
            self.repository.id,
            self.addon.id,
            self.layout.root.display()
        );

        self.prepare_directories()?;
        self.write_addon_entry_point()?;
        self.write_static_docs()?;

        let repository_manifest = self.build_repository_manifest();
        manifest::serialize(
            &repository_manifest,
            &self.layout.repository_dir.join(ADDON_MANIFEST),
        )?;

        let addon_manifest = self.build_addon_manifest();
        manifest::serialize(&addon_manifest, &self.layout.addon_dir.join(ADDON_MANIFEST))?;

        let combined_path = self.layout.combined_manifest();
        let combined = manifest::combined_manifest(&repository_manifest, &addon_manifest);
        manifest::serialize(&combined, &combined_path)?;

        // addons.xml is final on disk; hash what was actually written
        let checksum = hash::hash_file(&combined_path)?;
        let checksum_path = self.layout.checksum_file();
        write_file(&checksum_path, &checksum)?;
        info!(
            "Checksum {} written to {}",
            checksum,
            checksum_path.display()
        );

        let addon_archive = self.layout.zip_dir.join(self.addon.archive_name());
        let addon_entries =
            archive_directory(&self.layout.addon_dir, &addon_archive, &self.addon.id)?;

        let repository_archive = self.layout.zip_dir.join(self.repository.archive_name());
        let repository_entries = archive_directory(
            &self.layout.repository_dir,
            &repository_archive,
            &self.repository.id,
        )?;

        Ok(PackageReport {
            combined_manifest: combined_path,
            checksum_file: checksum_path,
            checksum,
            addon_archive,
            repository_archive,
            addon_entries,
            repository_entries,
            install_url: format!(
                "{}/{}/{}",
                self.public_url.trim_end_matches('/'),
                ZIP_DIR,
                self.repository.archive_name()
            ),
        })
    }
}

/// Write `contents` to `path`, replacing any existing file
fn write_file(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })
}
