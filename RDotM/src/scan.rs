//! Resource directory scanning
//!
//! Finds the value files under `res/values/` and merges what they declare
//! into one [`Resources`] set. Optionally collects images from
//! `res/drawable*/` as drawable resources.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use crate::formats::values::{ResourceEntry, ResourceKind, Resources, parse_values_file};

/// Name of the directory holding value files.
pub const VALUES_DIR: &str = "values";

/// Extension of value files.
pub const VALUES_EXTENSION: &str = "xml";

/// Image extensions picked up from drawable directories.
pub const DRAWABLE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif"];

/// Merged resources and what it took to collect them.
#[derive(Debug, Clone, Default)]
pub struct ScanResult {
    /// Every entry found, in file-then-document order.
    pub resources: Resources,
    /// Value files that were read, in processing order.
    pub files: Vec<PathBuf>,
    /// Value files that could not be read or parsed.
    pub failed: Vec<PathBuf>,
}

/// Find the value files directly inside `<res_dir>/values`, sorted by name.
///
/// Symlinks are followed. Listing errors, including dangling links, are
/// logged and skipped.
pub fn find_values_files<P: AsRef<Path>>(res_dir: P) -> Vec<PathBuf> {
    let values_dir = res_dir.as_ref().join(VALUES_DIR);
    if !values_dir.is_dir() {
        tracing::warn!("No values directory at {}", values_dir.display());
        return Vec::new();
    }

    WalkDir::new(&values_dir)
        .follow_links(true)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                tracing::warn!("Error listing {}: {}", values_dir.display(), e);
                None
            }
        })
        .filter(|e| e.file_type().is_file() && has_extension(e.path(), &[VALUES_EXTENSION]))
        .map(DirEntry::into_path)
        .collect()
}

/// Parse every value file under `<res_dir>/values` and merge the results.
///
/// Files are processed in name order; within a file, declaration order is
/// kept. Same-named entries from different files are all retained.
pub fn collect_values<P: AsRef<Path>>(res_dir: P) -> ScanResult {
    let mut result = ScanResult::default();

    for path in find_values_files(res_dir) {
        let fragment = parse_values_file(&path);
        if fragment.is_failed() {
            result.failed.push(path.clone());
        }
        result.resources.append(fragment.into_resources());
        result.files.push(path);
    }

    tracing::info!(
        "Collected {} strings, {} colors, {} integers from {} files",
        result.resources.strings.len(),
        result.resources.colors.len(),
        result.resources.integers.len(),
        result.files.len()
    );
    result
}

/// Collect value resources and, if asked, drawables.
pub fn collect_resources<P: AsRef<Path>>(res_dir: P, include_drawables: bool) -> ScanResult {
    let res_dir = res_dir.as_ref();
    let mut result = collect_values(res_dir);
    if include_drawables {
        result.resources.drawables = find_drawables(res_dir);
    }
    result
}

/// Find images in `res/drawable` and `res/drawable-*` directories.
///
/// The same image shipped for several densities is one resource. Names
/// drop the `.9` nine-patch marker and `@2x`/`@3x` scale suffixes. The
/// result is sorted by name; `raw_value` is the first file name seen.
pub fn find_drawables<P: AsRef<Path>>(res_dir: P) -> Vec<ResourceEntry> {
    let res_dir = res_dir.as_ref();
    let mut by_name: BTreeMap<String, String> = BTreeMap::new();

    let dirs = WalkDir::new(res_dir)
        .follow_links(true)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(std::result::Result::ok)
        .filter(|e| e.file_type().is_dir() && is_drawable_dir(e));

    for dir in dirs {
        let images = WalkDir::new(dir.path())
            .follow_links(true)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
            .into_iter()
            .filter_map(std::result::Result::ok)
            .filter(|e| e.file_type().is_file() && has_extension(e.path(), DRAWABLE_EXTENSIONS));

        for image in images {
            let Some(name) = drawable_name(image.path()) else {
                continue;
            };
            let file_name = image.file_name().to_string_lossy().into_owned();
            by_name.entry(name).or_insert(file_name);
        }
    }

    tracing::debug!("Found {} drawables", by_name.len());
    by_name
        .into_iter()
        .map(|(name, file)| ResourceEntry::new(ResourceKind::Drawable, name, file))
        .collect()
}

fn is_drawable_dir(entry: &DirEntry) -> bool {
    let name = entry.file_name().to_string_lossy();
    name == "drawable" || name.starts_with("drawable-")
}

fn has_extension(path: &Path, extensions: &[&str]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| extensions.iter().any(|e| ext.eq_ignore_ascii_case(e)))
}

/// `ic_button.9.png` -> `ic_button`, `logo@2x.png` -> `logo`
fn drawable_name(path: &Path) -> Option<String> {
    let stem = path.file_stem()?.to_str()?;
    let stem = stem.strip_suffix(".9").unwrap_or(stem);
    let stem = stem
        .strip_suffix("@2x")
        .or_else(|| stem.strip_suffix("@3x"))
        .unwrap_or(stem);
    (!stem.is_empty()).then(|| stem.to_string())
}
