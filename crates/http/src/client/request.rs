//! Request descriptors and per-dispatch context

use super::error::ClientError;
use learnhub_core::Namespace;
use reqwest::Method;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde::Serialize;

/// Description of a single API call, independent of credentials
///
/// The descriptor is never mutated by the client. Credentials and the retry
/// state live in [`RequestContext`], so the same descriptor can be dispatched
/// a second time after a token refresh.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    method: Method,
    path: String,
    headers: HeaderMap,
    query: Vec<(String, String)>,
    body: Option<serde_json::Value>,
    public: bool,
}

impl ApiRequest {
    /// Create a request for `path`, relative to the client's base URL
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            headers: HeaderMap::new(),
            query: Vec::new(),
            body: None,
            public: false,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    pub fn patch(path: impl Into<String>) -> Self {
        Self::new(Method::PATCH, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Add a header. An `Authorization` header set here is replaced by the
    /// stored credential when one exists.
    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Append a query parameter
    pub fn query(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((key.into(), value.to_string()));
        self
    }

    /// Attach a JSON body
    pub fn json<T: Serialize + ?Sized>(mut self, body: &T) -> Result<Self, ClientError> {
        self.body = Some(serde_json::to_value(body)?);
        Ok(self)
    }

    /// Mark the request as credential-free
    ///
    /// Public requests carry no stored bearer token and a 401 on them is
    /// returned as-is, without refresh or session invalidation. Used for the
    /// login and registration endpoints.
    pub fn public(mut self) -> Self {
        self.public = true;
        self
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn query_pairs(&self) -> &[(String, String)] {
        &self.query
    }

    pub fn body(&self) -> Option<&serde_json::Value> {
        self.body.as_ref()
    }

    pub fn is_public(&self) -> bool {
        self.public
    }

    /// Namespace derived from the path prefix
    pub fn namespace(&self) -> Namespace {
        Namespace::from_path(&self.path)
    }
}

/// Which dispatch of a logical request this is
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Attempt {
    /// First dispatch with the stored credential
    Initial,
    /// The single replay after a successful token refresh
    Replay,
}

/// Per-dispatch state: namespace, attached credential and attempt number
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequestContext {
    namespace: Namespace,
    attempt: Attempt,
    bearer: Option<String>,
}

impl RequestContext {
    /// Context for the first dispatch
    pub fn initial(namespace: Namespace, bearer: Option<String>) -> Self {
        Self {
            namespace,
            attempt: Attempt::Initial,
            bearer,
        }
    }

    /// Context for the replay with a refreshed token
    pub fn replay(&self, bearer: String) -> Self {
        Self {
            namespace: self.namespace,
            attempt: Attempt::Replay,
            bearer: Some(bearer),
        }
    }

    pub fn namespace(&self) -> Namespace {
        self.namespace
    }

    pub fn attempt(&self) -> Attempt {
        self.attempt
    }

    pub fn is_replay(&self) -> bool {
        self.attempt == Attempt::Replay
    }

    /// Bearer token attached to this dispatch
    pub fn bearer(&self) -> Option<&str> {
        self.bearer.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_namespace_follows_path() {
        assert_eq!(ApiRequest::get("/admin/courses").namespace(), Namespace::Admin);
        assert_eq!(ApiRequest::get("/courses").namespace(), Namespace::User);
    }

    #[test]
    fn test_builder() {
        let request = ApiRequest::post("/lessons/7/notes")
            .query("page", 2)
            .json(&json!({ "content": "recap" }))
            .unwrap();

        assert_eq!(request.method(), &Method::POST);
        assert_eq!(request.query_pairs(), &[("page".to_string(), "2".to_string())]);
        assert_eq!(request.body(), Some(&json!({ "content": "recap" })));
        assert!(!request.is_public());
    }

    #[test]
    fn test_replay_context() {
        let ctx = RequestContext::initial(Namespace::Admin, Some("t1".into()));
        assert_eq!(ctx.attempt(), Attempt::Initial);

        let replay = ctx.replay("t2".into());
        assert!(replay.is_replay());
        assert_eq!(replay.bearer(), Some("t2"));
        assert_eq!(replay.namespace(), Namespace::Admin);
        // The original context is untouched
        assert_eq!(ctx.bearer(), Some("t1"));
    }
}
