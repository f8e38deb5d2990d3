//! Init command implementation.

use anyhow::{bail, Result};
use std::path::Path;

const CONFIG_TEMPLATE: &str = r#"# pkgvis configuration
# Verifies that package-private Java declarations carry a marker comment.

[analyzer]
root = "."
exclude = ["**/test/**", "**/build/**", "**/generated/**"]

[check]
# Regex the marker comment must match, searched between the previous
# sibling (or enclosing container) and the declaration's name.
pattern = '/\* package \*/'

# Require whitespace after the marker, so `/* package */int x;` is
# still flagged.
require_trailing_whitespace = true

# Severity of findings: "info", "warning", or "error".
severity = "error"
"#;

/// Runs the init command.
pub fn run(force: bool) -> Result<()> {
    let config_path = Path::new("pkgvis.toml");

    if config_path.exists() && !force {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(config_path, CONFIG_TEMPLATE)?;

    println!("Created pkgvis.toml");
    println!();
    println!("Next steps:");
    println!("  1. Adjust [analyzer] root and exclude for your project");
    println!("  2. Run: pkgvis check");

    Ok(())
}
