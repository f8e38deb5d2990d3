//! # pkgvis-core
//!
//! Core types shared by the pkgvis engine and CLI.
//!
//! This crate holds the diagnostic model for the commented-package-visibility
//! linter:
//!
//! - [`Violation`] for a single lint finding
//! - [`Location`] for source positions with byte spans
//! - [`Severity`] levels and [`LintResult`] aggregation
//! - [`ViolationDiagnostic`] for rich miette rendering

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod types;

pub use types::{LintResult, Location, Severity, Suggestion, Violation, ViolationDiagnostic};
