//! Compile-time embedded preamble scaffolds.
//!
//! Each constant loads a scaffold file from `templates/` via
//! [`include_str!`]. The paths are relative to this source file
//! (`crates/errforge-core/src/templates/embedded.rs`).
//!
//! Scaffold files and constants must stay in sync; a wrong path fails at
//! compile time.

/// Generated-file banner, lint allows, and the import block.
pub const HEADER: &str = include_str!("../../templates/header.rs.tmpl");

/// The shared cause-holder unit embedded by every wrapping error type.
pub const ERR_WRAP: &str = include_str!("../../templates/err_wrap.rs.tmpl");

/// Capability trait, chain-search operation, and capability probe
/// (compatibility switch off).
pub const IS_IN: &str = include_str!("../../templates/is_in.rs.tmpl");

/// Defensive sentinel stub (compatibility switch on): the host ecosystem
/// owns chain search, the sentinel only has to satisfy the failure-value
/// contract.
pub const COMPAT_STUB: &str = include_str!("../../templates/compat_stub.rs.tmpl");
