//! Session invalidation events
//!
//! The client never navigates on its own. When a session cannot be recovered
//! it clears the stored credentials and notifies a [`SessionListener`]; the
//! host decides what to do (the browser build redirects to the login screen).

use learnhub_core::Namespace;
use std::sync::{Arc, Mutex};

/// Emitted once a namespace's credentials have been cleared
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionInvalidated {
    pub namespace: Namespace,
}

impl SessionInvalidated {
    pub fn new(namespace: Namespace) -> Self {
        Self { namespace }
    }

    /// Login screen for the invalidated namespace
    pub fn login_path(&self) -> &'static str {
        self.namespace.login_path()
    }
}

/// Subscriber for [`SessionInvalidated`] events
pub trait SessionListener: Send + Sync {
    fn session_invalidated(&self, event: &SessionInvalidated);
}

impl<F> SessionListener for F
where
    F: Fn(&SessionInvalidated) + Send + Sync,
{
    fn session_invalidated(&self, event: &SessionInvalidated) {
        self(event)
    }
}

/// Listener that ignores every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopListener;

impl SessionListener for NoopListener {
    fn session_invalidated(&self, _event: &SessionInvalidated) {}
}

/// Listener that keeps every event, for headless hosts and tests
#[derive(Debug, Clone, Default)]
pub struct RecordingListener {
    events: Arc<Mutex<Vec<SessionInvalidated>>>,
}

impl RecordingListener {
    pub fn new() -> Self {
        Self::default()
    }

    /// Events received so far, oldest first
    pub fn events(&self) -> Vec<SessionInvalidated> {
        self.events
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }
}

impl SessionListener for RecordingListener {
    fn session_invalidated(&self, event: &SessionInvalidated) {
        if let Ok(mut events) = self.events.lock() {
            events.push(*event);
        }
    }
}

/// Full-page navigation to the namespace's login screen
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserRedirect;

#[cfg(target_arch = "wasm32")]
impl SessionListener for BrowserRedirect {
    fn session_invalidated(&self, event: &SessionInvalidated) {
        let Some(window) = web_sys::window() else {
            tracing::warn!("no window available for login redirect");
            return;
        };
        if let Err(err) = window.location().set_href(event.login_path()) {
            tracing::error!(?err, path = event.login_path(), "login redirect failed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_closure_listener() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let listener = move |event: &SessionInvalidated| {
            assert_eq!(event.login_path(), "/login");
            counter.fetch_add(1, Ordering::SeqCst);
        };

        listener.session_invalidated(&SessionInvalidated::new(Namespace::User));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_recording_listener_shares_events() {
        let listener = RecordingListener::new();
        let handle = listener.clone();

        listener.session_invalidated(&SessionInvalidated::new(Namespace::Admin));

        let events = handle.events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].login_path(), "/admin/login");
    }
}
