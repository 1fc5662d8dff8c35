// src/lib.rs

//! Kodi addon repository builder
//!
//! Produces everything a static host (GitHub Pages) needs to serve a Kodi
//! addon repository:
//!
//! - `repository.<id>/addon.xml` and `plugin.video.<id>/addon.xml` manifests
//! - `addons.xml`, the combined index Kodi polls, plus `addons.xml.md5`
//! - `zip/<id>-<version>.zip` archives rooted at each addon id
//! - `README.md` and `index.html` for humans
//!
//! The whole build is one ordered pipeline, see [`Packager::run`].

pub mod archive;
pub mod descriptor;
pub mod docs;
mod error;
pub mod hash;
pub mod manifest;
pub mod packager;

pub use descriptor::{
    AddonDescriptor, AddonMetadata, Dependency, EntryPoint, PUBLIC_URL, RepositoryDescriptor,
};
pub use error::{Error, Result};
pub use manifest::{Document, Element};
pub use packager::{Layout, PackageReport, Packager};
