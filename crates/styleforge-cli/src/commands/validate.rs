//! `styleforge validate` - schema-level validation of a config file.

use std::path::Path;

use anyhow::{Context, Result};
use styleforge_core::DesignSystemConfig;
use styleforge_validate::validate_schema;

/// Validate a config file and report every finding. Returns whether the
/// config is valid (warnings do not block validity).
pub fn run(config_path: &Path) -> Result<bool> {
    let config = DesignSystemConfig::load(config_path)
        .with_context(|| format!("loading {}", config_path.display()))?;

    let result = validate_schema(&config);
    for issue in &result.issues {
        println!("{issue}");
        if let Some(suggestion) = &issue.suggestion {
            println!("    hint: {suggestion}");
        }
    }

    if result.valid {
        println!(
            "✓ {} is valid ({} components, {} tokens)",
            config.name,
            config.components.len(),
            config.tokens.len()
        );
    } else {
        let errors = result.issues.iter().filter(|i| i.is_error()).count();
        println!("✗ {} has {errors} error(s)", config.name);
    }
    Ok(result.valid)
}
