//! Error types for `rdotm`

use std::path::PathBuf;

use thiserror::Error;

/// The error type for `rdotm` operations.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    // ==================== IO Errors ====================
    /// IO error from file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Writing a generated artifact (or preparing its directory) failed.
    #[error("failed to write {path}: {source}")]
    Output {
        /// The file or directory being written.
        path: PathBuf,
        /// The underlying IO error.
        source: std::io::Error,
    },

    // ==================== Parsing Errors ====================
    /// XML parsing error.
    #[error("XML parse error: {0}")]
    XmlError(#[from] quick_xml::Error),

    /// XML attribute error.
    #[error("XML attribute error: {0}")]
    XmlAttrError(String),

    /// Well-formedness problem the XML reader does not report itself
    /// (missing root element, unclosed elements at end of input).
    #[error("malformed XML: {0}")]
    MalformedXml(String),

    /// UTF-8 conversion error.
    #[error("UTF-8 conversion error: {0}")]
    Utf8Error(#[from] std::string::FromUtf8Error),

    // ==================== Resource Errors ====================
    /// A color literal is not one of the accepted hex shapes.
    #[error("invalid color '{value}': {reason}")]
    InvalidColor {
        /// The literal as written in the values file.
        value: String,
        /// Why it was rejected.
        reason: String,
    },

    /// The generated class name is not a valid Objective-C identifier.
    #[error("invalid class name '{0}': must match [A-Za-z_][A-Za-z0-9_]*")]
    InvalidClassName(String),

    // ==================== File System Errors ====================
    /// Directory traversal error.
    #[error("directory walk error: {0}")]
    WalkDirError(String),

    // ==================== Configuration Errors ====================
    /// A config file could not be parsed.
    #[error("config error in {path}: {message}")]
    Config {
        /// The config file path.
        path: PathBuf,
        /// The parser message.
        message: String,
    },
}

impl From<quick_xml::events::attributes::AttrError> for Error {
    fn from(err: quick_xml::events::attributes::AttrError) -> Self {
        Error::XmlAttrError(err.to_string())
    }
}

impl From<walkdir::Error> for Error {
    fn from(err: walkdir::Error) -> Self {
        Error::WalkDirError(err.to_string())
    }
}

/// A specialized Result type for `rdotm` operations.
pub type Result<T> = std::result::Result<T, Error>;
