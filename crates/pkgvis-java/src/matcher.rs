//! Marker comment pattern compilation and matching.

use regex::Regex;

/// Default marker pattern, matching the literal comment `/* package */`.
pub const DEFAULT_PATTERN: &str = r"/\* package \*/";

/// The compiled marker pattern pair.
///
/// Both variants are built once at configuration time and never mutated:
/// the base pattern as configured, and a derived pattern that additionally
/// requires one or more whitespace characters after the base match.
#[derive(Debug, Clone)]
pub struct MarkerPattern {
    base: Regex,
    with_trailing: Regex,
}

impl MarkerPattern {
    /// Compiles both pattern variants.
    ///
    /// # Errors
    ///
    /// Returns the regex error when the configured pattern does not compile.
    pub fn compile(pattern: &str) -> Result<Self, regex::Error> {
        let base = Regex::new(pattern)?;
        let with_trailing = Regex::new(&format!(r"(?:{pattern})\s+"))?;
        Ok(Self {
            base,
            with_trailing,
        })
    }

    /// Tests the active variant anywhere within `text` (unanchored).
    #[must_use]
    pub fn is_match(&self, text: &str, require_trailing_whitespace: bool) -> bool {
        if require_trailing_whitespace {
            self.with_trailing.is_match(text)
        } else {
            self.base.is_match(text)
        }
    }

    /// Tests the base variant only.
    #[must_use]
    pub fn is_match_base(&self, text: &str) -> bool {
        self.base.is_match(text)
    }
}
