// src/docs.rs
//! Fixed text written alongside the manifests
//!
//! The addon entry point script, the README shown on the hosting page and a
//! minimal index.html. Templates only interpolate names, the public URL and
//! the repository archive name.

use crate::descriptor::{AddonDescriptor, RepositoryDescriptor};

/// Python entry point Kodi runs when the plugin is opened
pub fn addon_entry_point(addon: &AddonDescriptor) -> String {
    format!(
        r#"import xbmcaddon
import xbmcgui

addon = xbmcaddon.Addon()
addonname = addon.getAddonInfo('name')

xbmcgui.Dialog().ok(addonname, "Hello from {name}!")
"#,
        name = addon.name
    )
}

/// Repository README with install instructions
pub fn readme(repo: &RepositoryDescriptor, addon: &AddonDescriptor, public_url: &str) -> String {
    let archive = repo.archive_name();
    let display = repo.name.trim_end_matches(" Repository");
    format!(
        r#"# {display} Kodi Repository

This repository contains the {addon_name} Kodi addon.

## Installation

1. Download the repository zip: [{archive}](zip/{archive})
2. In Kodi, go to Settings > File Manager > Add source
3. Enter: `{public_url}`
4. Install from zip file
5. Install the addon from the repository

## Available Addons

- {addon_name} Video Addon
"#,
        addon_name = addon.name,
    )
}

/// Landing page served at the public URL
pub fn index_html(repo: &RepositoryDescriptor, public_url: &str) -> String {
    let archive = repo.archive_name();
    let title = format!(
        "{} Kodi Repository",
        repo.name.trim_end_matches(" Repository")
    );
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <title>{title}</title>
</head>
<body>
    <h1>{title}</h1>
    <p>To install this repository, download <a href="zip/{archive}">{archive}</a> and install it in Kodi.</p>
    <p>Repository URL: {public_url}</p>
</body>
</html>"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::{PUBLIC_URL, weebaymodz_addon, weebaymodz_repository};

    #[test]
    fn test_entry_point_greets_addon() {
        let script = addon_entry_point(&weebaymodz_addon());
        assert!(script.starts_with("import xbmcaddon\n"));
        assert!(script.contains(r#"xbmcgui.Dialog().ok(addonname, "Hello from WeebayModz!")"#));
    }

    #[test]
    fn test_readme_links_repository_zip() {
        let text = readme(&weebaymodz_repository(), &weebaymodz_addon(), PUBLIC_URL);
        assert!(text.starts_with("# WeebayModz Kodi Repository\n"));
        assert!(
            text.contains("[repository.weebaymodz-1.0.0.zip](zip/repository.weebaymodz-1.0.0.zip)")
        );
        assert!(text.contains("`https://pckodiaddon.github.io/Kodiaddon`"));
    }

    #[test]
    fn test_index_html() {
        let html = index_html(&weebaymodz_repository(), PUBLIC_URL);
        assert!(html.contains("<title>WeebayModz Kodi Repository</title>"));
        assert!(html.contains(r#"<a href="zip/repository.weebaymodz-1.0.0.zip">"#));
        assert!(html.contains("Repository URL: https://pckodiaddon.github.io/Kodiaddon"));
        assert!(html.ends_with("</html>"));
    }
}
