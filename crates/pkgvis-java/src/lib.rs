//! # pkgvis-java
//!
//! Tree-sitter based commented-package-visibility check for Java.
//!
//! Java makes package-private visibility the silent default: omit a
//! modifier and the declaration is package-visible, intentionally or not.
//! This crate verifies that package-private declarations carry a marker
//! comment (default `/* package */`) immediately before their name, and
//! flags the marker when an explicit modifier makes it redundant:
//!
//! ```java
//! /* package */ class PackageVisibleWidget {
//!     /* package */ int count;       // ok: documented intent
//!     int total;                     // finding: missing marker
//!     /* package */ public void run() {}  // finding: modifier exists
//! }
//! ```
//!
//! Building blocks, leaf first:
//!
//! - [`SourceText`] / [`SearchWindow`] for line access and window slicing
//! - [`JavaFile`] / [`Declaration`] for tree navigation and bounds
//! - [`MarkerPattern`] for the compiled pattern pair
//! - [`CheckEngine`] for the per-declaration verification
//! - [`CheckConfig`] for the TOML configuration surface

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod decl;
pub mod engine;
pub mod error;
pub mod matcher;
pub mod source;

pub use config::{CheckConfig, ConfigError};
pub use decl::{DeclKind, Declaration, JavaFile, Visibility};
pub use engine::{CheckEngine, MessageKind};
pub use error::CheckError;
pub use matcher::{MarkerPattern, DEFAULT_PATTERN};
pub use source::{Position, SearchWindow, SourceText};
