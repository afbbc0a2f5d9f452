//! Init command implementation.

use anyhow::{bail, Result};
use std::path::Path;

const DEFAULT_CONFIG: &str = r#"# stylecheck configuration
# Run `stylecheck list-rules` for the full catalog.

# Treat unknown rule ids in this file as fatal
# strict = true

[engine]
# Maximum tree depth before a unit is rejected
# max_depth = 128

# Worker count (default: available parallelism)
# jobs = 4

# Glob patterns to exclude
exclude = [
    "**/node_modules/**",
    "**/dist/**",
    "**/generated/**",
]

# Rule severities: "off" | "warn" | "error"

[rules]
# no-default-export = "error"
# no-literal-color = "warn"

[rules.component-size]
severity = "warn"
max_statements = 50

# [rules.import-order]
# internal_prefixes = ["@/", "~/"]
"#;

/// Runs the init command.
pub fn run(force: bool) -> Result<()> {
    let config_path = Path::new("stylecheck.toml");

    if config_path.exists() && !force {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(config_path, DEFAULT_CONFIG)?;

    println!("Created stylecheck.toml");
    println!("\nNext steps:");
    println!("  1. Edit stylecheck.toml to configure rules");
    println!("  2. Run: stylecheck check");

    Ok(())
}
