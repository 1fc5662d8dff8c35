// src/manifest.rs
//! Kodi addon manifests (addon.xml / addons.xml)
//!
//! Manifests are built as an in-memory element tree first and only written
//! to disk by [`serialize`]. Building never touches the filesystem, so the
//! combined manifest can reuse the exact trees that were written for the
//! individual addons.

use crate::descriptor::{AddonDescriptor, POINT_METADATA, POINT_REPOSITORY, RepositoryDescriptor};
use crate::error::{Error, Result};
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Root element of the combined manifest
pub const COMBINED_ROOT: &str = "addons";

/// An XML element with ordered attributes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub text: Option<String>,
    pub children: Vec<Element>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            text: None,
            children: Vec::new(),
        }
    }

    /// Add an attribute (builder style)
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    /// Set the text content (builder style)
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Append a child (builder style)
    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    /// Look up an attribute value
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// First direct child with the given name
    pub fn find(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|c| c.name == name)
    }

    fn write_to(&self, writer: &mut Writer<Vec<u8>>) -> std::result::Result<(), String> {
        let mut start = BytesStart::new(self.name.as_str());
        for (key, value) in &self.attributes {
            start.push_attribute((key.as_str(), value.as_str()));
        }

        if self.text.is_none() && self.children.is_empty() {
            return emit(writer, Event::Empty(start));
        }

        emit(writer, Event::Start(start))?;
        if let Some(text) = &self.text {
            emit(writer, Event::Text(BytesText::new(text)))?;
        }
        for child in &self.children {
            child.write_to(writer)?;
        }
        emit(writer, Event::End(BytesEnd::new(self.name.as_str())))
    }
}

fn emit(writer: &mut Writer<Vec<u8>>, event: Event<'_>) -> std::result::Result<(), String> {
    writer.write_event(event).map_err(|e| e.to_string())
}

/// A manifest document: one root element, rendered with an XML declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub root: Element,
}

impl Document {
    pub fn new(root: Element) -> Self {
        Self { root }
    }

    /// Render to UTF-8 bytes with a leading `<?xml ... encoding="UTF-8"?>`
    pub fn to_bytes(&self) -> std::result::Result<Vec<u8>, String> {
        let mut writer = Writer::new_with_indent(Vec::new(), b' ', 4);
        emit(
            &mut writer,
            Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)),
        )?;
        self.root.write_to(&mut writer)?;
        Ok(writer.into_inner())
    }
}

/// Build the `addon.xml` tree for a plugin addon
pub fn addon_manifest(addon: &AddonDescriptor) -> Document {
    let mut requires = Element::new("requires");
    for dep in &addon.requires {
        requires = requires.child(
            Element::new("import")
                .attr("addon", &dep.addon)
                .attr("version", &dep.version),
        );
    }

    let entry = &addon.entry_point;
    let plugin = Element::new("extension")
        .attr("point", &entry.point)
        .attr("library", &entry.library)
        .child(Element::new("provides").text(&entry.provides));

    let mut root = Element::new("addon")
        .attr("id", &addon.id)
        .attr("name", &addon.name)
        .attr("version", &addon.version)
        .child(requires)
        .child(plugin);

    let meta = &addon.metadata;
    if !meta.is_empty() {
        let mut metadata = Element::new("extension").attr("point", POINT_METADATA);
        let fields = [
            ("summary", &meta.summary),
            ("description", &meta.description),
            ("platform", &meta.platform),
        ];
        for (name, value) in fields {
            if let Some(value) = value {
                metadata = metadata.child(Element::new(name).text(value));
            }
        }
        root = root.child(metadata);
    }

    Document::new(root)
}

/// Build the `addon.xml` tree for the repository addon
pub fn repository_manifest(repo: &RepositoryDescriptor) -> Document {
    let extension = Element::new("extension")
        .attr("point", POINT_REPOSITORY)
        .attr("name", &repo.name)
        .child(Element::new("info").text(&repo.info_url))
        .child(Element::new("checksum").text(&repo.checksum_url))
        .child(Element::new("datadir").text(&repo.datadir_url));

    Document::new(
        Element::new("addon")
            .attr("id", &repo.id)
            .attr("name", &repo.name)
            .attr("version", &repo.version)
            .child(extension),
    )
}

/// Wrap the repository and addon trees in a single `<addons>` document
///
/// Kodi reads repository identity first, so the repository entry always
/// precedes the addon entry.
pub fn combined_manifest(repository: &Document, addon: &Document) -> Document {
    Document::new(
        Element::new(COMBINED_ROOT)
            .child(repository.root.clone())
            .child(addon.root.clone()),
    )
}

/// Write a document to `path`, replacing any existing file
pub fn serialize(doc: &Document, path: &Path) -> Result<()> {
    let bytes = doc.to_bytes().map_err(|message| Error::Xml {
        path: path.to_path_buf(),
        message,
    })?;

    fs::write(path, &bytes).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })?;

    debug!("Wrote {} bytes to {}", bytes.len(), path.display());
    info!("Wrote manifest {}", path.display());
    Ok(())
}
