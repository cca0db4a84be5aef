//! Items referenced by the output of `#[derive(Record)]`.
//!
//! Not public API; nothing here is subject to semver.

pub use std::sync::OnceLock;

#[cfg(feature = "auto_register")]
pub use inventory;
