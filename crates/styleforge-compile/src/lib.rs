//! Build-time compilation of validated design systems into artifacts.
//!
//! The pipeline expands each component schema into the set of all
//! constraint-valid enum combinations, then emits exactly the CSS rules,
//! TypeScript types, and manifest entries that are reachable - no more, no
//! less. Everything here runs at build time, never per-request.

pub mod combinations;
pub mod css;
pub mod manifest;
pub mod suggest;
pub mod typescript;

pub use combinations::valid_combinations;
pub use css::emit_stylesheet;
pub use manifest::{build_manifest, ComponentManifest, Manifest};
pub use suggest::{suggest_alternatives, MAX_SUGGESTIONS};
pub use typescript::{emit_definitions, MAX_UNION_COMBINATIONS};
