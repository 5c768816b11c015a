//! Boundary normalization for values typed or pasted on the command line.
//!
//! Shells and copy/paste often leave surrounding double quotes on values.
//! They are stripped here, before anything reaches the verification core,
//! which itself never rewrites its inputs.

/// Strips leading and trailing `"` characters.
pub fn strip_quotes(value: &str) -> &str {
    value.trim_matches('"')
}
