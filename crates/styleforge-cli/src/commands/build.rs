//! `styleforge build` - compile a config into concrete artifacts.

use std::path::Path;

use anyhow::{Context, Result};
use styleforge_compile::{build_manifest, emit_definitions, emit_stylesheet};
use styleforge_core::DesignSystemConfig;
use styleforge_validate::validate_schema;
use tracing::info;

/// Stylesheet artifact name.
pub const CSS_FILENAME: &str = "styleforge.css";
/// TypeScript definitions artifact name.
pub const TYPES_FILENAME: &str = "styleforge.d.ts";
/// Manifest artifact name.
pub const MANIFEST_FILENAME: &str = "manifest.json";

/// Validate a config and, if valid, write the compiled artifacts into
/// `out_dir`. Returns whether the build succeeded.
pub fn run(config_path: &Path, out_dir: &Path) -> Result<bool> {
    let config = DesignSystemConfig::load(config_path)
        .with_context(|| format!("loading {}", config_path.display()))?;

    let result = validate_schema(&config);
    for issue in &result.issues {
        println!("{issue}");
    }
    if !result.valid {
        println!("✗ build aborted: {} is not valid", config.name);
        return Ok(false);
    }

    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("creating {}", out_dir.display()))?;

    let css = emit_stylesheet(&config);
    std::fs::write(out_dir.join(CSS_FILENAME), &css)?;

    let types = emit_definitions(&config);
    std::fs::write(out_dir.join(TYPES_FILENAME), &types)?;

    let manifest = build_manifest(&config).to_json_pretty()?;
    std::fs::write(out_dir.join(MANIFEST_FILENAME), &manifest)?;

    info!(
        design_system = %config.name,
        out = %out_dir.display(),
        css_bytes = css.len(),
        "build complete"
    );
    println!(
        "✓ built {} into {} ({CSS_FILENAME}, {TYPES_FILENAME}, {MANIFEST_FILENAME})",
        config.name,
        out_dir.display()
    );
    Ok(true)
}
