//! TOML configuration for the commented-package-visibility check.
//!
//! Configuration lives in `pkgvis.toml` with an `[analyzer]` section for
//! file discovery and a `[check]` section for the check itself.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use pkgvis_core::Severity;

use crate::matcher::{MarkerPattern, DEFAULT_PATTERN};

/// Top-level pkgvis configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct CheckConfig {
    /// Project root directory to scan.
    #[serde(default = "default_root")]
    pub root: PathBuf,

    /// Glob patterns to exclude.
    #[serde(default)]
    pub exclude: Vec<String>,

    /// Marker comment pattern (regular expression).
    #[serde(default = "default_pattern")]
    pub pattern: String,

    /// Whether the marker must be followed by whitespace.
    #[serde(default = "default_true")]
    pub require_trailing_whitespace: bool,

    /// Severity assigned to findings.
    #[serde(default = "default_severity")]
    pub severity: Severity,
}

fn default_root() -> PathBuf {
    PathBuf::from(".")
}

fn default_pattern() -> String {
    DEFAULT_PATTERN.to_owned()
}

fn default_true() -> bool {
    true
}

fn default_severity() -> Severity {
    Severity::Error
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            exclude: Vec::new(),
            pattern: default_pattern(),
            require_trailing_whitespace: true,
            severity: default_severity(),
        }
    }
}

/// Errors when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read config file.
    #[error("failed to read {path}: {source}")]
    Io {
        /// Path that failed.
        path: PathBuf,
        /// IO error.
        source: std::io::Error,
    },
    /// Failed to parse TOML.
    #[error("invalid config: {message}")]
    Parse {
        /// Parse error detail.
        message: String,
    },
    /// The marker pattern is not a valid regular expression.
    #[error("invalid marker pattern '{pattern}': {source}")]
    Pattern {
        /// The offending pattern.
        pattern: String,
        /// Regex compile error.
        source: regex::Error,
    },
}

impl CheckConfig {
    /// Load from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content)
    }

    /// Parse from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns error if TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        /// Wrapper to handle the `[analyzer]` and `[check]` sections.
        #[derive(Deserialize)]
        struct RawConfig {
            #[serde(default)]
            analyzer: AnalyzerSection,
            #[serde(default)]
            check: CheckSection,
        }

        #[derive(Deserialize)]
        struct AnalyzerSection {
            #[serde(default = "default_root")]
            root: PathBuf,
            #[serde(default)]
            exclude: Vec<String>,
        }

        impl Default for AnalyzerSection {
            fn default() -> Self {
                Self {
                    root: default_root(),
                    exclude: Vec::new(),
                }
            }
        }

        #[derive(Deserialize)]
        struct CheckSection {
            #[serde(default = "default_pattern")]
            pattern: String,
            #[serde(default = "default_true")]
            require_trailing_whitespace: bool,
            #[serde(default = "default_severity")]
            severity: Severity,
        }

        impl Default for CheckSection {
            fn default() -> Self {
                Self {
                    pattern: default_pattern(),
                    require_trailing_whitespace: true,
                    severity: default_severity(),
                }
            }
        }

        let raw: RawConfig = toml::from_str(content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })?;

        Ok(Self {
            root: raw.analyzer.root,
            exclude: raw.analyzer.exclude,
            pattern: raw.check.pattern,
            require_trailing_whitespace: raw.check.require_trailing_whitespace,
            severity: raw.check.severity,
        })
    }

    /// Validate the configuration.
    ///
    /// Compiles the marker pattern so a bad regex fails here, before any
    /// file is processed.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Pattern`] when the pattern does not compile.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.compile_pattern().map(|_| ())
    }

    /// Compiles the configured marker pattern pair.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Pattern`] when the pattern does not compile.
    pub fn compile_pattern(&self) -> Result<MarkerPattern, ConfigError> {
        MarkerPattern::compile(&self.pattern).map_err(|source| ConfigError::Pattern {
            pattern: self.pattern.clone(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_any_sections() {
        let config = CheckConfig::parse("").expect("parse failed");
        assert_eq!(config.pattern, DEFAULT_PATTERN);
        assert!(config.require_trailing_whitespace);
        assert_eq!(config.severity, Severity::Error);
        assert_eq!(config.root, PathBuf::from("."));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn parse_full_config() {
        let toml = r#"
[analyzer]
root = "./src"
exclude = ["**/generated/**"]

[check]
pattern = "// package\n"
require_trailing_whitespace = false
severity = "warning"
"#;
        let config = CheckConfig::parse(toml).expect("parse failed");
        assert_eq!(config.root, PathBuf::from("./src"));
        assert_eq!(config.exclude, vec!["**/generated/**".to_owned()]);
        assert_eq!(config.pattern, "// package\n");
        assert!(!config.require_trailing_whitespace);
        assert_eq!(config.severity, Severity::Warning);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn missing_analyzer_section_keeps_default_root() {
        let toml = r#"
[check]
severity = "warning"
"#;
        let config = CheckConfig::parse(toml).expect("parse failed");
        assert_eq!(config.root, PathBuf::from("."));
        assert!(config.exclude.is_empty());
        assert_eq!(config.severity, Severity::Warning);
    }

    #[test]
    fn validate_rejects_invalid_pattern() {
        let toml = r#"
[check]
pattern = "(unclosed"
"#;
        let config = CheckConfig::parse(toml).expect("parse failed");
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::Pattern { .. }));
        assert!(err.to_string().contains("(unclosed"));
    }

    #[test]
    fn parse_rejects_invalid_toml() {
        assert!(matches!(
            CheckConfig::parse("[check\npattern = 1"),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn default_matches_empty_parse() {
        let parsed = CheckConfig::parse("").expect("parse failed");
        let defaulted = CheckConfig::default();
        assert_eq!(parsed.pattern, defaulted.pattern);
        assert_eq!(
            parsed.require_trailing_whitespace,
            defaulted.require_trailing_whitespace
        );
        assert_eq!(parsed.severity, defaulted.severity);
    }
}
