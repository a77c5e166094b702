//! # rdotm
//!
//! Generate Objective-C resource accessors from Android-style `res/values`
//! XML files.
//!
//! Every `<string>` and `<color>` declared in `res/values/*.xml` becomes a
//! class method on a generated `R` class, so an iOS port of an Android app
//! can share one set of resource definitions.
//!
//! ## Quick Start
//!
//! ```no_run
//! use rdotm::codegen::{GenerateOptions, generate};
//!
//! let options = GenerateOptions::new("app/src/main/res", "ios/Generated")
//!     .with_class_name("R")
//!     .with_clean(true);
//!
//! let summary = generate(&options)?;
//! println!("{} accessors written", summary.accessor_count());
//! # Ok::<(), rdotm::Error>(())
//! ```
//!
//! ### Working with the pieces
//!
//! ```
//! use rdotm::formats::color::parse_hex_color;
//! use rdotm::formats::values::parse_values;
//!
//! let resources = parse_values(r##"<resources>
//!     <string name="title_main">Main</string>
//!     <color name="accent">#80FF0000</color>
//! </resources>"##)?;
//! assert_eq!(resources.strings[0].raw_value, "Main");
//!
//! let argb = parse_hex_color(&resources.colors[0].raw_value)?;
//! assert_eq!((argb.alpha, argb.red, argb.green, argb.blue), (128, 255, 0, 0));
//! # Ok::<(), rdotm::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `cli` - Enables the `rdotm` command-line binary

pub mod codegen;
pub mod error;
pub mod formats;
pub mod scan;

// Re-exports for convenience
pub use error::{Error, Result};

/// Prelude module for common imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::formats::color::{Argb, parse_hex_color};
    pub use crate::formats::values::{
        FragmentStatus, ResourceEntry, ResourceKind, Resources, ValuesFragment,
        parse_values, parse_values_file, read_values_file,
    };
    pub use crate::scan::{ScanResult, collect_resources, collect_values, find_drawables};
    pub use crate::codegen::{
        GenerateConfig, GenerateOptions, GeneratePhase, GenerateProgress, GenerateSummary,
        SkippedEntry, generate, generate_with_progress, render_header, render_implementation,
        write_sources,
    };
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// CLI module (feature-gated)
#[cfg(feature = "cli")]
pub mod cli;
