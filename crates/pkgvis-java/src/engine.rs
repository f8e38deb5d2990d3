//! The visibility verifier.
//!
//! Evaluates every checked declaration in a file against the marker
//! pattern, producing [`Violation`]s from pkgvis-core. One evaluation per
//! declaration, terminal after at most one finding.

use std::path::Path;

use pkgvis_core::{Location, Severity, Suggestion, Violation};

use crate::config::{CheckConfig, ConfigError};
use crate::decl::{Declaration, JavaFile, Visibility};
use crate::error::CheckError;
use crate::matcher::MarkerPattern;
use crate::source::SearchWindow;

/// The three finding kinds the verifier can emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    /// Package-private declaration without a marker comment.
    MissingMarker,
    /// Marker present but not followed by whitespace.
    MissingTrailingWhitespace,
    /// Marker present although an explicit modifier exists.
    UnexpectedMarker,
}

impl MessageKind {
    /// Stable rule code.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::MissingMarker => "PKG001",
            Self::MissingTrailingWhitespace => "PKG002",
            Self::UnexpectedMarker => "PKG003",
        }
    }

    /// Rule name.
    #[must_use]
    pub fn rule(self) -> &'static str {
        match self {
            Self::MissingMarker => "missing-marker",
            Self::MissingTrailingWhitespace => "marker-trailing-whitespace",
            Self::UnexpectedMarker => "unexpected-marker",
        }
    }

    /// User-facing message for a declaration name.
    #[must_use]
    pub fn message(self, name: &str) -> String {
        match self {
            Self::MissingMarker => {
                format!("'{name}' should be commented for package visibility.")
            }
            Self::MissingTrailingWhitespace => format!(
                "Comment of '{name}' for package visibility should add trailing whitespace."
            ),
            Self::UnexpectedMarker => format!("Is visibility of '{name}' package?"),
        }
    }

    fn suggestion(self) -> Suggestion {
        match self {
            Self::MissingMarker => {
                Suggestion::new("Add a marker comment before the name, or an explicit modifier")
            }
            Self::MissingTrailingWhitespace => {
                Suggestion::new("Add whitespace after the marker comment")
            }
            Self::UnexpectedMarker => {
                Suggestion::new("Remove the marker comment or the explicit modifier")
            }
        }
    }
}

/// Checks commented package visibility for one file at a time.
///
/// Holds the compiled pattern pair and nothing else; safe to reuse across
/// files and to share across threads if a caller parallelizes per file.
pub struct CheckEngine {
    pattern: MarkerPattern,
    require_trailing_whitespace: bool,
    severity: Severity,
}

impl CheckEngine {
    /// Builds an engine from configuration, compiling the pattern once.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Pattern`] when the configured pattern is not
    /// a valid regular expression.
    pub fn new(config: &CheckConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            pattern: config.compile_pattern()?,
            require_trailing_whitespace: config.require_trailing_whitespace,
            severity: config.severity,
        })
    }

    /// Parses and checks one Java source file.
    ///
    /// # Errors
    ///
    /// Returns a [`CheckError`] for unparseable input or violated tree
    /// invariants; marker findings are violations, not errors.
    pub fn check_source(&self, path: &Path, source: &str) -> Result<Vec<Violation>, CheckError> {
        let file = JavaFile::parse(source)?;
        let mut violations = Vec::new();
        for decl in file.declarations() {
            if let Some(violation) = self.evaluate(path, &decl)? {
                violations.push(violation);
            }
        }
        Ok(violations)
    }

    /// Evaluates a single declaration.
    ///
    /// # Errors
    ///
    /// Returns a [`CheckError`] when the tree or positions violate an
    /// invariant (missing name, inverted window, out-of-bounds slice).
    pub fn evaluate(
        &self,
        path: &Path,
        decl: &Declaration<'_>,
    ) -> Result<Option<Violation>, CheckError> {
        if decl.is_local() {
            return Ok(None);
        }
        // Interface and annotation members are implicitly public; a marker
        // is never expected nor flagged there.
        if decl.in_interface_or_annotation() {
            return Ok(None);
        }

        let window = SearchWindow::new(decl.start_bound(), decl.name_position()?)?;
        let target = decl.source_text().slice(&window)?;

        let kind = match decl.visibility() {
            Visibility::Package => {
                if self
                    .pattern
                    .is_match(&target, self.require_trailing_whitespace)
                {
                    return Ok(None);
                }
                if self.require_trailing_whitespace && self.pattern.is_match_base(&target) {
                    MessageKind::MissingTrailingWhitespace
                } else {
                    MessageKind::MissingMarker
                }
            }
            _ => {
                if !self.pattern.is_match_base(&target) {
                    return Ok(None);
                }
                MessageKind::UnexpectedMarker
            }
        };

        Ok(Some(self.violation(path, decl, kind)?))
    }

    fn violation(
        &self,
        path: &Path,
        decl: &Declaration<'_>,
        kind: MessageKind,
    ) -> Result<Violation, CheckError> {
        let name = decl.name()?;
        let (offset, length) = decl.name_span()?;
        let location =
            Location::new(path.to_path_buf(), decl.line(), decl.column()).with_span(offset, length);
        Ok(
            Violation::new(kind.code(), kind.rule(), self.severity, location, kind.message(name))
                .with_suggestion(kind.suggestion()),
        )
    }
}
