//! Auth Session
//!
//! The bearer token lives in an explicit session object created at login
//! and destroyed at logout. It is persisted in `localStorage` so a reload
//! keeps the user signed in.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use leptos::prelude::*;
use serde::Deserialize;

pub const TOKEN_STORAGE_KEY: &str = "authToken";

/// Where the token is persisted between page loads
pub trait TokenStorage {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str);
    fn clear(&self);
}

/// `window.localStorage`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn local() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl TokenStorage for BrowserStorage {
    fn load(&self) -> Option<String> {
        Self::local()?.get_item(TOKEN_STORAGE_KEY).ok().flatten()
    }

    fn save(&self, token: &str) {
        let saved = Self::local().map(|storage| storage.set_item(TOKEN_STORAGE_KEY, token).is_ok());
        if saved != Some(true) {
            log::warn!("[SESSION] could not persist token; session lasts until reload");
        }
    }

    fn clear(&self) {
        if let Some(storage) = Self::local() {
            let _ = storage.remove_item(TOKEN_STORAGE_KEY);
        }
    }
}

/// Claims read from the JWT payload. The signature is not checked here.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TokenClaims {
    #[serde(default)]
    pub exp: Option<i64>,
    #[serde(default, alias = "http://schemas.microsoft.com/ws/2008/06/identity/claims/role")]
    pub role: Option<String>,
}

impl TokenClaims {
    pub fn decode(token: &str) -> Option<Self> {
        let payload = token.split('.').nth(1)?;
        let bytes = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('=')).ok()?;
        serde_json::from_slice(&bytes).ok()
    }

    pub fn is_expired(&self, now_secs: i64) -> bool {
        self.exp.is_some_and(|exp| exp <= now_secs)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    token: String,
}

impl Session {
    pub fn new(token: impl Into<String>) -> Self {
        Self { token: token.into() }
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn claims(&self) -> Option<TokenClaims> {
        TokenClaims::decode(&self.token)
    }
}

/// Session lifecycle over a storage backend
pub struct SessionManager<S: TokenStorage> {
    storage: S,
}

impl<S: TokenStorage> SessionManager<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn restore(&self) -> Option<Session> {
        self.storage
            .load()
            .filter(|token| !token.trim().is_empty())
            .map(Session::new)
    }

    pub fn start(&self, token: impl Into<String>) -> Session {
        let session = Session::new(token);
        self.storage.save(session.token());
        session
    }

    pub fn end(&self) {
        self.storage.clear();
    }
}

/// Session signals provided via context
#[derive(Clone, Copy)]
pub struct SessionContext {
    pub session: ReadSignal<Option<Session>>,
    set_session: WriteSignal<Option<Session>>,
}

impl SessionContext {
    /// Create the context, picking up a token persisted by an earlier visit
    pub fn restore() -> Self {
        let restored = SessionManager::new(BrowserStorage).restore();
        if restored.is_some() {
            log::info!("[SESSION] restored stored session");
        }
        let (session, set_session) = signal(restored);
        Self { session, set_session }
    }

    pub fn sign_in(&self, token: String) {
        let session = SessionManager::new(BrowserStorage).start(token);
        log::info!("[SESSION] signed in");
        self.set_session.set(Some(session));
    }

    pub fn sign_out(&self) {
        SessionManager::new(BrowserStorage).end();
        log::info!("[SESSION] signed out");
        self.set_session.set(None);
    }

    /// Current token, read without tracking
    pub fn token(&self) -> Option<String> {
        self.session.with_untracked(|s| s.as_ref().map(|s| s.token().to_string()))
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.with(Option::is_some)
    }
}

pub fn use_session() -> SessionContext {
    expect_context::<SessionContext>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    const ROLE_CLAIM_URI: &str = "http://schemas.microsoft.com/ws/2008/06/identity/claims/role";

    #[derive(Default)]
    struct MemoryStorage {
        value: RefCell<Option<String>>,
    }

    impl TokenStorage for &MemoryStorage {
        fn load(&self) -> Option<String> {
            self.value.borrow().clone()
        }

        fn save(&self, token: &str) {
            *self.value.borrow_mut() = Some(token.to_string());
        }

        fn clear(&self) {
            *self.value.borrow_mut() = None;
        }
    }

    fn jwt(payload: &str) -> String {
        format!("eyJhbGciOiJIUzI1NiJ9.{}.sig", URL_SAFE_NO_PAD.encode(payload))
    }

    #[test]
    fn test_session_lifecycle() {
        let storage = MemoryStorage::default();
        let manager = SessionManager::new(&storage);
        assert_eq!(manager.restore(), None);

        let session = manager.start("tok-1");
        assert_eq!(session.token(), "tok-1");
        assert_eq!(storage.value.borrow().as_deref(), Some("tok-1"));
        assert_eq!(manager.restore(), Some(Session::new("tok-1")));

        manager.end();
        assert_eq!(manager.restore(), None);
    }

    #[test]
    fn test_blank_stored_token_is_no_session() {
        let storage = MemoryStorage::default();
        *storage.value.borrow_mut() = Some("  ".into());
        assert_eq!(SessionManager::new(&storage).restore(), None);
    }

    #[test]
    fn test_claims_decode() {
        let claims = TokenClaims::decode(&jwt(r#"{"exp": 1700000000, "role": "Admin"}"#)).unwrap();
        assert_eq!(claims.exp, Some(1_700_000_000));
        assert_eq!(claims.role.as_deref(), Some("Admin"));
        assert!(claims.is_expired(1_700_000_000));
        assert!(!claims.is_expired(1_699_999_999));
    }

    #[test]
    fn test_claims_decode_uri_role() {
        let payload = format!(r#"{{"{}": "Storekeeper"}}"#, ROLE_CLAIM_URI);
        let claims = Session::new(jwt(&payload)).claims().unwrap();
        assert_eq!(claims.role.as_deref(), Some("Storekeeper"));
        assert!(!claims.is_expired(i64::MAX));
    }

    #[test]
    fn test_opaque_token_has_no_claims() {
        assert_eq!(TokenClaims::decode("not-a-jwt"), None);
        assert_eq!(TokenClaims::decode("a.!!!.c"), None);
    }
}
