//! Dashboard bootstrap script
//!
//! Loads the wasm-bindgen output. Everything else runs in Rust.

/// Module script importing the generated bindings from `pkg/`
pub const SCRIPT: &str = r"
import init from './pkg/asx_dashboard.js';
init().catch((e) => console.error('Failed to start dashboard:', e));
";
