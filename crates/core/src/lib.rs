//! LearnHub core types and utilities
//!
//! Storage, credential sessions, preferences and configuration shared by the
//! HTTP client and any host application embedding it.

pub mod config;
pub mod error;
pub mod session;
pub mod storage;
pub mod theme;

#[cfg(feature = "tracing")]
pub mod tracing;

pub use config::ClientConfig;
pub use error::{CoreError, CoreResult};
pub use session::{Namespace, SessionStore, StorageKeys};
pub use storage::{KeyValueStore, MemoryStore};
pub use theme::{Theme, ThemePreference};
