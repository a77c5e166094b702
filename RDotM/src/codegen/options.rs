//! Generation options and the optional TOML config file

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};

/// Default generated class name.
pub const DEFAULT_CLASS_NAME: &str = "R";

/// Settings for one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Android `res` directory (the one containing `values/`)
    pub res_dir: PathBuf,
    /// Directory receiving `<class>.h` and `<class>.m`
    pub out_dir: PathBuf,
    /// Generated class name
    pub class_name: String,
    /// Remove `out_dir` before writing
    pub clean: bool,
    /// Emit `+ (NSInteger)integer_*` accessors
    pub emit_integers: bool,
    /// Emit `+ (UIImage *)drawable_*` accessors
    pub emit_drawables: bool,
}

impl GenerateOptions {
    pub fn new(res_dir: impl Into<PathBuf>, out_dir: impl Into<PathBuf>) -> Self {
        Self {
            res_dir: res_dir.into(),
            out_dir: out_dir.into(),
            class_name: DEFAULT_CLASS_NAME.to_string(),
            clean: false,
            emit_integers: false,
            emit_drawables: false,
        }
    }

    #[must_use]
    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = class_name.into();
        self
    }

    #[must_use]
    pub fn with_clean(mut self, clean: bool) -> Self {
        self.clean = clean;
        self
    }

    #[must_use]
    pub fn with_integers(mut self, emit: bool) -> Self {
        self.emit_integers = emit;
        self
    }

    #[must_use]
    pub fn with_drawables(mut self, emit: bool) -> Self {
        self.emit_drawables = emit;
        self
    }

    /// Check the class name is usable as an Objective-C identifier.
    pub fn validate(&self) -> Result<()> {
        if is_identifier(&self.class_name) {
            Ok(())
        } else {
            Err(Error::InvalidClassName(self.class_name.clone()))
        }
    }

    /// `<out_dir>/<class>.h`
    #[must_use]
    pub fn header_path(&self) -> PathBuf {
        self.out_dir.join(format!("{}.h", self.class_name))
    }

    /// `<out_dir>/<class>.m`
    #[must_use]
    pub fn implementation_path(&self) -> PathBuf {
        self.out_dir.join(format!("{}.m", self.class_name))
    }
}

/// `[A-Za-z_][A-Za-z0-9_]*`
#[must_use]
pub fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Settings read from a TOML file, e.g. `rdotm.toml`:
///
/// ```toml
/// res = "app/src/main/res"
/// out = "ios/Generated"
/// class = "R"
/// clean = true
/// ```
///
/// Every key is optional; command-line flags take precedence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GenerateConfig {
    pub res: Option<PathBuf>,
    pub out: Option<PathBuf>,
    pub class: Option<String>,
    pub clean: Option<bool>,
    pub integers: Option<bool>,
    pub drawables: Option<bool>,
}

impl GenerateConfig {
    /// Load a config file.
    ///
    /// Relative `res`/`out` paths are resolved against the file's directory.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let mut config = Self::parse(&content).map_err(|message| Error::Config {
            path: path.to_path_buf(),
            message,
        })?;

        if let Some(base) = path.parent() {
            config.res = config.res.map(|p| base.join(p));
            config.out = config.out.map(|p| base.join(p));
        }
        Ok(config)
    }

    /// Parse config TOML.
    pub fn parse(content: &str) -> std::result::Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = GenerateOptions::new("res", "out");
        assert_eq!(options.class_name, "R");
        assert!(!options.clean);
        assert!(!options.emit_integers);
        assert_eq!(options.header_path(), Path::new("out").join("R.h"));
        assert_eq!(options.implementation_path(), Path::new("out").join("R.m"));
    }

    #[test]
    fn test_validate_class_name() {
        assert!(GenerateOptions::new("r", "o").with_class_name("AppResources").validate().is_ok());
        assert!(GenerateOptions::new("r", "o").with_class_name("_R2").validate().is_ok());
        for bad in ["", "2R", "My-R", "R.h", "R S"] {
            let err = GenerateOptions::new("r", "o").with_class_name(bad).validate();
            assert!(matches!(err, Err(Error::InvalidClassName(_))), "{bad:?}");
        }
    }

    #[test]
    fn test_parse_config() {
        let config = GenerateConfig::parse("res = \"res\"\nclass = \"Res\"\nclean = true\n").unwrap();
        assert_eq!(config.res.as_deref(), Some(Path::new("res")));
        assert_eq!(config.class.as_deref(), Some("Res"));
        assert_eq!(config.clean, Some(true));
        assert_eq!(config.out, None);
    }

    #[test]
    fn test_config_rejects_unknown_keys() {
        assert!(GenerateConfig::parse("output = \"x\"").is_err());
    }
}
