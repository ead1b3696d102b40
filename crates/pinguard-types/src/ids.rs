//! Stable identifiers for checks and finding codes.
//!
//! `check_id` is a dotted namespace. `code` is a short snake_case discriminator.

// Checks
pub const CHECK_DEPS_CONCRETE_VERSION: &str = "deps.concrete_version";

// Codes: deps.concrete_version
pub const CODE_CONCRETE_VERSION: &str = "concrete_version";

// Tool-level
pub const CHECK_TOOL_RUNTIME: &str = "tool.runtime";
pub const CODE_RUNTIME_ERROR: &str = "runtime_error";
pub const CODE_CONTEXT_RESOLUTION: &str = "context_resolution";
