//! Types for generation progress and results

use std::path::PathBuf;

use crate::formats::values::ResourceKind;

/// Progress callback type for generation
pub type GenerateProgressCallback<'a> = &'a (dyn Fn(&GenerateProgress) + Sync + Send);

/// Progress information during generation
#[derive(Debug, Clone)]
pub struct GenerateProgress {
    /// Current operation phase
    pub phase: GeneratePhase,
    /// Current step number (1-indexed)
    pub current: usize,
    /// Total number of steps
    pub total: usize,
    /// Current file being processed (if applicable)
    pub current_file: Option<String>,
}

impl GenerateProgress {
    /// Create a new progress update
    #[must_use]
    pub fn new(phase: GeneratePhase, current: usize, total: usize) -> Self {
        Self {
            phase,
            current,
            total,
            current_file: None,
        }
    }

    /// Create a progress update with a file name
    #[must_use]
    pub fn with_file(
        phase: GeneratePhase,
        current: usize,
        total: usize,
        file: impl Into<String>,
    ) -> Self {
        Self {
            phase,
            current,
            total,
            current_file: Some(file.into()),
        }
    }
}

/// Phase of a generation run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeneratePhase {
    /// Reading `res/values` (and drawables)
    Scanning,
    /// Building accessor source text
    Rendering,
    /// Writing the header and implementation files
    Writing,
    /// Run complete
    Complete,
}

impl GeneratePhase {
    /// Get a human-readable description of this phase
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Scanning => "Scanning resources",
            Self::Rendering => "Rendering accessors",
            Self::Writing => "Writing sources",
            Self::Complete => "Complete",
        }
    }
}

/// An entry left out of the generated class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedEntry {
    pub kind: ResourceKind,
    pub name: String,
    pub reason: String,
}

/// What a generation run produced.
#[derive(Debug, Clone, Default)]
pub struct GenerateSummary {
    /// Path of the generated `.h` file
    pub header_path: PathBuf,
    /// Path of the generated `.m` file
    pub implementation_path: PathBuf,
    /// Value files read
    pub files_scanned: usize,
    /// Value files that could not be parsed (contributed nothing)
    pub files_failed: usize,
    /// Accessors emitted, per kind
    pub strings: usize,
    pub colors: usize,
    pub integers: usize,
    pub drawables: usize,
    /// Entries dropped from both files
    pub skipped: Vec<SkippedEntry>,
}

impl GenerateSummary {
    /// Total accessors emitted
    #[must_use]
    pub fn accessor_count(&self) -> usize {
        self.strings + self.colors + self.integers + self.drawables
    }
}
