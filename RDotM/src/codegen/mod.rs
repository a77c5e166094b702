//! Source generation
//!
//! Turns a merged [`Resources`] set into an Objective-C class:
//! - `<class>.h` - `@interface` with one class method per resource
//! - `<class>.m` - `@implementation` returning each value

mod objc;
mod options;
mod types;

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::formats::values::{ResourceKind, Resources};
use crate::scan::collect_resources;

pub use objc::{
    Accessor, AccessorPlan, OUTPUT_HEADER, escape_objc_string, plan_accessors, render_header,
    render_implementation,
};
pub use options::{DEFAULT_CLASS_NAME, GenerateConfig, GenerateOptions, is_identifier};
pub use types::{
    GeneratePhase, GenerateProgress, GenerateProgressCallback, GenerateSummary, SkippedEntry,
};

/// Scan `options.res_dir` and write the generated class to `options.out_dir`.
///
/// # Errors
/// Returns an error if the class name is invalid or the output files cannot
/// be written. Unreadable input files and unrenderable entries are not
/// errors; they are logged and reported in the summary.
pub fn generate(options: &GenerateOptions) -> Result<GenerateSummary> {
    generate_with_progress(options, &|_| {})
}

/// Scan and generate with progress callback
///
/// # Errors
/// Returns an error if the class name is invalid or the output files cannot
/// be written.
pub fn generate_with_progress(
    options: &GenerateOptions,
    progress: GenerateProgressCallback,
) -> Result<GenerateSummary> {
    options.validate()?;

    tracing::info!(
        "Generating {}: {} → {}",
        options.class_name,
        options.res_dir.display(),
        options.out_dir.display()
    );

    progress(&GenerateProgress::with_file(
        GeneratePhase::Scanning,
        1,
        3,
        options.res_dir.display().to_string(),
    ));
    let scan = collect_resources(&options.res_dir, options.emit_drawables);

    let mut summary = emit(&scan.resources, options, progress)?;
    summary.files_scanned = scan.files.len();
    summary.files_failed = scan.failed.len();

    progress(&GenerateProgress::new(GeneratePhase::Complete, 3, 3));
    tracing::info!("Generation complete");
    Ok(summary)
}

/// Render `resources` and write both files.
///
/// If `options.clean` is set the output directory is removed first.
///
/// # Errors
/// Returns an error if the output directory or files cannot be written.
pub fn write_sources(resources: &Resources, options: &GenerateOptions) -> Result<GenerateSummary> {
    options.validate()?;
    emit(resources, options, &|_| {})
}

fn emit(
    resources: &Resources,
    options: &GenerateOptions,
    progress: GenerateProgressCallback,
) -> Result<GenerateSummary> {
    progress(&GenerateProgress::new(GeneratePhase::Rendering, 2, 3));
    let plan = plan_accessors(resources, options);
    let header = objc::render_header_from(&plan, options);
    let implementation = objc::render_implementation_from(&plan, options);

    let header_path = options.header_path();
    let implementation_path = options.implementation_path();

    progress(&GenerateProgress::with_file(
        GeneratePhase::Writing,
        3,
        3,
        header_path.display().to_string(),
    ));
    prepare_output_dir(&options.out_dir, options.clean)?;
    write_file(&header_path, &header)?;
    write_file(&implementation_path, &implementation)?;

    Ok(GenerateSummary {
        strings: plan.count(ResourceKind::String),
        colors: plan.count(ResourceKind::Color),
        integers: plan.count(ResourceKind::Integer),
        drawables: plan.count(ResourceKind::Drawable),
        skipped: plan.skipped,
        header_path,
        implementation_path,
        ..GenerateSummary::default()
    })
}

fn prepare_output_dir(out_dir: &Path, clean: bool) -> Result<()> {
    if clean {
        match fs::remove_dir_all(out_dir) {
            Ok(()) => tracing::debug!("Removed {}", out_dir.display()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(source) => {
                return Err(Error::Output {
                    path: out_dir.to_path_buf(),
                    source,
                });
            }
        }
    }

    fs::create_dir_all(out_dir).map_err(|source| Error::Output {
        path: out_dir.to_path_buf(),
        source,
    })
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    tracing::debug!("Writing {} ({} bytes)", path.display(), content.len());
    fs::write(path, content).map_err(|source| Error::Output {
        path: path.to_path_buf(),
        source,
    })
}
