//! Version of this crate, split into its components.

/// Major version.
pub const MAJOR: &str = env!("CARGO_PKG_VERSION_MAJOR");
/// Minor version.
pub const MINOR: &str = env!("CARGO_PKG_VERSION_MINOR");
/// Patch version.
pub const PATCH: &str = env!("CARGO_PKG_VERSION_PATCH");
/// `MAJOR.MINOR.PATCH`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
