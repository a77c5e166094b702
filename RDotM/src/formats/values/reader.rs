//! Values file reading

use super::document::{ResourceEntry, ResourceKind, Resources};
use crate::error::{Error, Result};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use std::fs;
use std::path::Path;

/// Outcome of tolerantly parsing one values file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FragmentStatus {
    /// The file was read and parsed; it may still have declared nothing.
    Parsed,
    /// The file could not be opened, read or parsed.
    Failed(String),
}

/// What one values file contributes to the merged resource set.
///
/// A failed file contributes nothing, exactly like a file with no
/// recognized elements. `status` is the only way to tell them apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValuesFragment {
    pub status: FragmentStatus,
    pub resources: Resources,
}

impl ValuesFragment {
    #[must_use]
    pub fn is_failed(&self) -> bool {
        matches!(self.status, FragmentStatus::Failed(_))
    }

    #[must_use]
    pub fn into_resources(self) -> Resources {
        self.resources
    }
}

/// Parse a values file, degrading any failure to an empty fragment.
///
/// Failures are logged at `warn` and reported through
/// [`ValuesFragment::status`]; they never abort the caller.
pub fn parse_values_file<P: AsRef<Path>>(path: P) -> ValuesFragment {
    let path = path.as_ref();
    match read_values_file(path) {
        Ok(resources) => {
            tracing::debug!(
                "Parsed {}: {} strings, {} colors, {} integers",
                path.display(),
                resources.strings.len(),
                resources.colors.len(),
                resources.integers.len()
            );
            ValuesFragment {
                status: FragmentStatus::Parsed,
                resources,
            }
        }
        Err(e) => {
            tracing::warn!("Skipping {}: {}", path.display(), e);
            ValuesFragment {
                status: FragmentStatus::Failed(e.to_string()),
                resources: Resources::new(),
            }
        }
    }
}

/// Read and parse a values file from disk
///
/// # Errors
/// Returns an error if the file cannot be read or has invalid XML.
pub fn read_values_file<P: AsRef<Path>>(path: P) -> Result<Resources> {
    let content = fs::read_to_string(path)?;
    parse_values(&content)
}

/// The element currently collecting text.
struct Pending {
    kind: ResourceKind,
    name: Option<String>,
    text: String,
}

/// Parse values XML from a string
///
/// Only direct children of the root element are considered. Text inside
/// nested markup (e.g. `<xliff:g>`) is not part of the value.
///
/// # Errors
/// Returns an error if the XML is malformed. Entries parsed before the
/// error are discarded.
pub fn parse_values(content: &str) -> Result<Resources> {
    let mut reader = Reader::from_str(content);
    // Leading/trailing whitespace is part of a string value
    reader.trim_text(false);

    let mut resources = Resources::new();
    let mut buf = Vec::new();
    let mut depth: usize = 0;
    let mut seen_root = false;
    let mut pending: Option<Pending> = None;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => {
                depth += 1;
                seen_root = true;
                if depth == 2
                    && let Some(kind) = ResourceKind::from_element(e.name().as_ref())
                {
                    pending = Some(Pending {
                        kind,
                        name: name_attribute(&e)?,
                        text: String::new(),
                    });
                }
            }
            Ok(Event::Empty(e)) => {
                if depth == 0 {
                    // Self-closing root: a document with nothing in it
                    seen_root = true;
                } else if depth == 1
                    && let Some(kind) = ResourceKind::from_element(e.name().as_ref())
                {
                    push_entry(&mut resources, kind, name_attribute(&e)?, String::new());
                }
            }
            Ok(Event::Text(e)) => {
                if depth == 2
                    && let Some(p) = pending.as_mut()
                {
                    p.text.push_str(&e.unescape()?);
                }
            }
            Ok(Event::CData(e)) => {
                if depth == 2
                    && let Some(p) = pending.as_mut()
                {
                    p.text.push_str(&String::from_utf8_lossy(&e));
                }
            }
            Ok(Event::End(_)) => {
                if depth == 2
                    && let Some(p) = pending.take()
                {
                    push_entry(&mut resources, p.kind, p.name, p.text);
                }
                depth = depth.saturating_sub(1);
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(Error::XmlError(e)),
            _ => {}
        }
        buf.clear();
    }

    if !seen_root {
        return Err(Error::MalformedXml("no root element".to_string()));
    }
    if depth != 0 {
        return Err(Error::MalformedXml(format!(
            "{depth} element(s) left open at end of input"
        )));
    }

    Ok(resources)
}

fn name_attribute(e: &BytesStart<'_>) -> Result<Option<String>> {
    for attr in e.attributes() {
        let attr = attr?;
        if attr.key.as_ref() == b"name" {
            return Ok(Some(attr.unescape_value()?.into_owned()));
        }
    }
    Ok(None)
}

fn push_entry(resources: &mut Resources, kind: ResourceKind, name: Option<String>, text: String) {
    match name {
        Some(name) if !name.is_empty() => {
            resources.push(ResourceEntry::new(kind, name, text));
        }
        _ => tracing::warn!("Ignoring <{kind}> without a name attribute"),
    }
}
