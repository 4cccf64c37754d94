/// Current crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Capacity of a service base URL (`scheme://host`)
pub const URL_MAX_LEN: usize = 128;

/// Placeholder printed in place of a non-empty secret
pub const REDACTED: &str = "<redacted>";
