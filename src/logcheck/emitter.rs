//! A second module that logs through whatever sink is installed.
//!
//! Exists so the record stream provably carries per-module targets;
//! nothing here knows how logging was configured.

use tracing::debug;

/// Emit one fixed debug-level record tagged with this module's target.
pub fn emit_debug() {
    debug!("debug record emitted from the emitter module");
}
