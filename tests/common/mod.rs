// tests/common/mod.rs

//! Shared helpers for inspecting packager output.

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use std::fs::File;
use std::path::Path;
use zip::ZipArchive;

/// Names of every entry in a zip archive
pub fn zip_entries(path: &Path) -> Vec<String> {
    let archive = ZipArchive::new(File::open(path).unwrap()).unwrap();
    archive.file_names().map(str::to_string).collect()
}

fn element_summary(e: &BytesStart<'_>) -> (String, Option<String>) {
    let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
    let id = e
        .try_get_attribute("id")
        .unwrap()
        .map(|a| String::from_utf8_lossy(&a.value).into_owned());
    (name, id)
}

/// (element name, `id` attribute) of each direct child of the document root
pub fn root_children(xml: &str) -> Vec<(String, Option<String>)> {
    let mut reader = Reader::from_str(xml);
    let mut depth = 0usize;
    let mut children = Vec::new();

    loop {
        match reader.read_event().unwrap() {
            Event::Start(e) => {
                if depth == 1 {
                    children.push(element_summary(&e));
                }
                depth += 1;
            }
            Event::Empty(e) => {
                if depth == 1 {
                    children.push(element_summary(&e));
                }
            }
            Event::End(_) => depth -= 1,
            Event::Eof => break,
            _ => {}
        }
    }

    children
}
