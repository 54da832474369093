//! # ViTrans Common
//!
//! Shared types, utilities, and the persistent storage collaborator for
//! the ViTrans site.
//!
//! This crate provides the foundational pieces used across the other
//! crates in the workspace: the key-value storage trait and its
//! file-backed implementation, newtype identifiers, structured logging
//! setup, and shared test utilities.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod logging;
pub mod storage;
pub mod types;
pub mod utils;

#[cfg(any(test, feature = "testing"))]
pub mod test_utils;

pub use storage::{JsonFileStore, KeyValueStore, MemoryStore};
pub use types::*;
pub use utils::*;
