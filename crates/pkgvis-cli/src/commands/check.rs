//! Check command implementation.
//!
//! Walks the tree for Java sources and runs the commented-package-visibility
//! check over each file.

use anyhow::{Context, Result};
use pkgvis_core::LintResult;
use pkgvis_java::{CheckConfig, CheckEngine};
use std::path::{Path, PathBuf};

use crate::config_resolver::{self, ConfigSource};
use crate::OutputFormat;

/// File extension the check applies to.
const JAVA_EXT: &str = ".java";

/// Runs the check command.
pub fn run(
    path: &Path,
    format: OutputFormat,
    cli_exclude: Vec<String>,
    explicit_config: Option<&Path>,
) -> Result<()> {
    let source = config_resolver::resolve(path, explicit_config);
    let mut config = load_config(&source)?;
    config.exclude.extend(cli_exclude);
    config.validate().context("Config validation failed")?;

    let engine = CheckEngine::new(&config).context("Failed to build check engine")?;

    let root = if config.root.is_absolute() {
        config.root.clone()
    } else {
        path.join(&config.root)
    };

    let files = discover_files(&root, &config.exclude)?;

    tracing::info!("Checking {} Java files", files.len());

    let mut result = LintResult::new();

    for file_path in &files {
        let source = std::fs::read_to_string(file_path)
            .with_context(|| format!("Failed to read {}", file_path.display()))?;

        let rel = file_path
            .strip_prefix(&root)
            .unwrap_or(file_path)
            .to_path_buf();

        let violations = engine
            .check_source(&rel, &source)
            .with_context(|| format!("Failed to check {}", file_path.display()))?;
        result.violations.extend(violations);
        result.files_checked += 1;
    }

    // Sort by file, then line
    result.violations.sort_by(|a, b| {
        a.location
            .file
            .cmp(&b.location.file)
            .then(a.location.line.cmp(&b.location.line))
    });

    super::output::print(&result, format, &root)?;

    if result.has_errors() {
        std::process::exit(1);
    }

    Ok(())
}

fn load_config(source: &ConfigSource) -> Result<CheckConfig> {
    match source {
        ConfigSource::Default => {
            tracing::debug!("No pkgvis.toml found, using defaults");
            Ok(CheckConfig::default())
        }
        other => {
            let p = other.path().context("resolved config has no path")?;
            if source.is_global() {
                tracing::info!("Using global config: {}", p.display());
            }
            CheckConfig::from_file(p).with_context(|| format!("Failed to load {}", p.display()))
        }
    }
}

fn discover_files(root: &Path, exclude: &[String]) -> Result<Vec<PathBuf>> {
    let mut builder = ignore::WalkBuilder::new(root);
    builder.hidden(false).git_ignore(true);

    let mut files = Vec::new();
    for entry in builder.build() {
        let entry = entry?;
        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| format!(".{e}"))
            .unwrap_or_default();

        if ext != JAVA_EXT {
            continue;
        }

        let rel_str = path.strip_prefix(root).unwrap_or(path).to_string_lossy();

        let excluded = exclude.iter().any(|pattern| {
            let clean = pattern.replace("**/", "").replace("/**", "");
            !clean.is_empty() && rel_str.contains(&clean)
        });

        if !excluded {
            files.push(path.to_path_buf());
        }
    }

    files.sort();
    Ok(files)
}
