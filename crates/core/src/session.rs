//! Credential storage split by route namespace
//!
//! Admin and user sessions live side by side in the same key-value store under
//! distinct keys. Every accessor takes or implies a [`Namespace`], so a caller
//! cannot read one namespace's token while asking for the other's.

use crate::storage::KeyValueStore;
use crate::CoreResult;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Storage keys used by the session layer
pub struct StorageKeys;

impl StorageKeys {
    pub const ADMIN_ACCESS_TOKEN: &'static str = "adminAccessToken";
    pub const ADMIN_REFRESH_TOKEN: &'static str = "adminRefreshToken";
    pub const USER_ACCESS_TOKEN: &'static str = "userAccessToken";
}

/// Request classification that selects credentials and failure handling
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Namespace {
    Admin,
    User,
}

impl Namespace {
    /// Path prefix that marks the admin namespace
    pub const ADMIN_PREFIX: &'static str = "/admin";

    /// Classify a request path. Anything starting with `/admin` is admin.
    pub fn from_path(path: &str) -> Self {
        if path.starts_with(Self::ADMIN_PREFIX) {
            Self::Admin
        } else {
            Self::User
        }
    }

    /// Login screen the host should navigate to once this session is gone
    pub fn login_path(self) -> &'static str {
        match self {
            Self::Admin => "/admin/login",
            Self::User => "/login",
        }
    }

    /// Key holding this namespace's access token
    pub fn access_token_key(self) -> &'static str {
        match self {
            Self::Admin => StorageKeys::ADMIN_ACCESS_TOKEN,
            Self::User => StorageKeys::USER_ACCESS_TOKEN,
        }
    }

    /// Key holding this namespace's refresh token, if it has one
    pub fn refresh_token_key(self) -> Option<&'static str> {
        match self {
            Self::Admin => Some(StorageKeys::ADMIN_REFRESH_TOKEN),
            Self::User => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::User => "user",
        }
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Typed view over the credential keys of a [`KeyValueStore`]
#[derive(Clone)]
pub struct SessionStore {
    store: Arc<dyn KeyValueStore>,
}

impl fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionStore").finish_non_exhaustive()
    }
}

impl SessionStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Underlying key-value store
    pub fn store(&self) -> &Arc<dyn KeyValueStore> {
        &self.store
    }

    /// Access token for `namespace`. Empty values count as absent.
    pub fn access_token(&self, namespace: Namespace) -> CoreResult<Option<String>> {
        self.read(namespace.access_token_key())
    }

    /// Refresh token for `namespace`. Always `None` for the user namespace.
    pub fn refresh_token(&self, namespace: Namespace) -> CoreResult<Option<String>> {
        match namespace.refresh_token_key() {
            Some(key) => self.read(key),
            None => Ok(None),
        }
    }

    pub fn admin_access_token(&self) -> CoreResult<Option<String>> {
        self.access_token(Namespace::Admin)
    }

    pub fn admin_refresh_token(&self) -> CoreResult<Option<String>> {
        self.refresh_token(Namespace::Admin)
    }

    pub fn user_access_token(&self) -> CoreResult<Option<String>> {
        self.access_token(Namespace::User)
    }

    /// Persist a fresh admin credential pair after login
    pub fn set_admin_tokens(&self, access_token: &str, refresh_token: &str) -> CoreResult<()> {
        self.store.set(StorageKeys::ADMIN_ACCESS_TOKEN, access_token)?;
        self.store.set(StorageKeys::ADMIN_REFRESH_TOKEN, refresh_token)
    }

    /// Replace the admin access token after a refresh exchange
    pub fn set_admin_access_token(&self, access_token: &str) -> CoreResult<()> {
        self.store.set(StorageKeys::ADMIN_ACCESS_TOKEN, access_token)
    }

    pub fn set_user_access_token(&self, access_token: &str) -> CoreResult<()> {
        self.store.set(StorageKeys::USER_ACCESS_TOKEN, access_token)
    }

    /// Remove every credential belonging to `namespace`
    pub fn clear(&self, namespace: Namespace) -> CoreResult<()> {
        self.store.remove(namespace.access_token_key())?;
        if let Some(key) = namespace.refresh_token_key() {
            self.store.remove(key)?;
        }
        Ok(())
    }

    pub fn clear_admin(&self) -> CoreResult<()> {
        self.clear(Namespace::Admin)
    }

    pub fn clear_user(&self) -> CoreResult<()> {
        self.clear(Namespace::User)
    }

    pub fn clear_all(&self) -> CoreResult<()> {
        self.clear_admin()?;
        self.clear_user()
    }

    /// Whether an access token is stored for `namespace`
    pub fn is_authenticated(&self, namespace: Namespace) -> CoreResult<bool> {
        Ok(self.access_token(namespace)?.is_some())
    }

    pub fn is_admin_authenticated(&self) -> CoreResult<bool> {
        self.is_authenticated(Namespace::Admin)
    }

    pub fn is_user_authenticated(&self) -> CoreResult<bool> {
        self.is_authenticated(Namespace::User)
    }

    fn read(&self, key: &str) -> CoreResult<Option<String>> {
        Ok(self.store.get(key)?.filter(|value| !value.is_empty()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn session() -> (Arc<MemoryStore>, SessionStore) {
        let store = Arc::new(MemoryStore::new());
        let session = SessionStore::new(store.clone());
        (store, session)
    }

    #[test]
    fn test_namespace_from_path() {
        assert_eq!(Namespace::from_path("/admin/users"), Namespace::Admin);
        assert_eq!(Namespace::from_path("/admin"), Namespace::Admin);
        assert_eq!(Namespace::from_path("/courses/1"), Namespace::User);
        assert_eq!(Namespace::from_path("/users/admin"), Namespace::User);
        assert_eq!(Namespace::from_path(""), Namespace::User);
    }

    #[test]
    fn test_login_paths() {
        assert_eq!(Namespace::Admin.login_path(), "/admin/login");
        assert_eq!(Namespace::User.login_path(), "/login");
    }

    #[test]
    fn test_tokens_are_namespaced() {
        let (_, session) = session();
        session.set_admin_tokens("admin-a", "admin-r").unwrap();
        session.set_user_access_token("user-a").unwrap();

        assert_eq!(session.admin_access_token().unwrap().as_deref(), Some("admin-a"));
        assert_eq!(session.admin_refresh_token().unwrap().as_deref(), Some("admin-r"));
        assert_eq!(session.user_access_token().unwrap().as_deref(), Some("user-a"));
        assert_eq!(session.refresh_token(Namespace::User).unwrap(), None);
    }

    #[test]
    fn test_clear_admin_leaves_user() {
        let (store, session) = session();
        session.set_admin_tokens("a", "r").unwrap();
        session.set_user_access_token("u").unwrap();

        session.clear_admin().unwrap();

        assert_eq!(store.get(StorageKeys::ADMIN_ACCESS_TOKEN).unwrap(), None);
        assert_eq!(store.get(StorageKeys::ADMIN_REFRESH_TOKEN).unwrap(), None);
        assert!(session.is_user_authenticated().unwrap());
    }

    #[test]
    fn test_clear_all() {
        let (store, session) = session();
        session.set_admin_tokens("a", "r").unwrap();
        session.set_user_access_token("u").unwrap();
        store.set("theme", "\"Dark\"").unwrap();

        session.clear_all().unwrap();

        assert_eq!(store.len(), 1);
        assert!(!session.is_admin_authenticated().unwrap());
    }

    #[test]
    fn test_empty_token_is_absent() {
        let (store, session) = session();
        store.set(StorageKeys::USER_ACCESS_TOKEN, "").unwrap();
        assert_eq!(session.user_access_token().unwrap(), None);
    }
}
