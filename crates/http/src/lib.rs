//! LearnHub HTTP client
//!
//! Authenticated access to the LearnHub API for the admin console and the
//! student site. Credentials are kept in an injected key-value store and are
//! selected per request by path namespace; see [`client::ApiClient`].

pub mod client;
pub mod types;

pub use client::ApiClient;
pub use client::admin::AdminResource;
pub use client::error::ClientError;
pub use client::events::{NoopListener, RecordingListener, SessionInvalidated, SessionListener};
pub use client::request::{ApiRequest, Attempt, RequestContext};
pub use learnhub_core::{Namespace, SessionStore};

#[cfg(target_arch = "wasm32")]
pub use client::events::BrowserRedirect;
