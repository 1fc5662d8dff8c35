// src/archive.rs
//! Zip packaging of addon folders
//!
//! Kodi installs an addon zip by extracting it and expects exactly one
//! top-level folder named after the addon id. The local staging folder name
//! is irrelevant, so every entry is rewritten to `<root>/<relative path>`.

use crate::error::{Error, Result};
use std::fs::File;
use std::io;
use std::path::{Component, Path};
use tracing::{debug, info};
use walkdir::WalkDir;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Archive every file under `source_dir` into `dest`, rooted at `root_folder`
///
/// Files are visited in file-name order so repeated runs write entries in
/// the same order. Directories are not recorded; empty ones are dropped.
/// Returns the number of files written.
pub fn archive_directory(source_dir: &Path, dest: &Path, root_folder: &str) -> Result<usize> {
    let archive_err = |source: zip::result::ZipError| Error::Archive {
        path: dest.to_path_buf(),
        source,
    };

    let file = File::create(dest).map_err(|source| Error::Write {
        path: dest.to_path_buf(),
        source,
    })?;
    let mut writer = ZipWriter::new(file);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    let mut count = 0usize;
    for entry in WalkDir::new(source_dir).sort_by_file_name() {
        let entry = entry.map_err(|source| Error::Walk {
            path: source_dir.to_path_buf(),
            source,
        })?;
        if !entry.file_type().is_file() || entry.path() == dest {
            continue;
        }

        let path = entry.path();
        let relative = path.strip_prefix(source_dir).unwrap_or(path);
        let name = entry_name(root_folder, relative);

        let mut input = File::open(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;
        writer
            .start_file(name.as_str(), options)
            .map_err(archive_err)?;
        io::copy(&mut input, &mut writer).map_err(|e| archive_err(e.into()))?;

        debug!("Added {} as {}", path.display(), name);
        count += 1;
    }

    writer.finish().map_err(archive_err)?;
    info!("Packaged {} files into {}", count, dest.display());
    Ok(count)
}

/// Archive-internal name: `root` joined with the relative path using `/`
fn entry_name(root_folder: &str, relative: &Path) -> String {
    let mut name = root_folder.trim_end_matches('/').to_string();
    for component in relative.components() {
        if let Component::Normal(part) = component {
            name.push('/');
            name.push_str(&part.to_string_lossy());
        }
    }
    name
}
