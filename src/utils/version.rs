//! Crate version information

/// Version of this crate, from Cargo metadata
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get the crate version
pub fn get_version() -> &'static str {
    VERSION
}
