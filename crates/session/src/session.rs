use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use shopfront_core::{StoreError, StoreResult};

use crate::store::SessionStore;

/// Storage keys for the mirrored session fields.
mod keys {
    pub const TOKEN: &str = "session.token";
    pub const USERNAME: &str = "session.username";
    pub const BALANCE: &str = "session.balance";
    pub const LOGGED_IN_AT: &str = "session.logged_in_at";
}

/// The authenticated session as the client sees it.
///
/// # Invariants
/// - `token` and `username` are non-blank (a blank token is "not logged in",
///   which is represented by the absence of a context, never by an empty one).
/// - `balance` is finite and non-negative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionContext {
    pub token: String,
    pub username: String,
    /// Wallet balance as reported by the backend at login.
    pub balance: f64,
    pub logged_in_at: DateTime<Utc>,
}

impl SessionContext {
    /// Build a validated session context.
    pub fn new(
        token: impl Into<String>,
        username: impl Into<String>,
        balance: f64,
        logged_in_at: DateTime<Utc>,
    ) -> StoreResult<Self> {
        let token = token.into();
        let username = username.into();
        if token.trim().is_empty() {
            return Err(StoreError::validation("session token cannot be blank"));
        }
        if username.trim().is_empty() {
            return Err(StoreError::validation("username cannot be blank"));
        }
        if !balance.is_finite() || balance < 0.0 {
            return Err(StoreError::validation(format!(
                "balance must be a finite non-negative number, got {balance}"
            )));
        }
        Ok(Self {
            token,
            username,
            balance,
            logged_in_at,
        })
    }

    /// Mirror this context into the store, field by field.
    pub fn persist(&self, store: &mut dyn SessionStore) {
        store.set(keys::TOKEN, &self.token);
        store.set(keys::USERNAME, &self.username);
        store.set(keys::BALANCE, &self.balance.to_string());
        store.set(keys::LOGGED_IN_AT, &self.logged_in_at.to_rfc3339());
    }

    /// Rebuild the context from the store, if one was persisted.
    ///
    /// An absent token means no session: `Ok(None)`. A present token with
    /// missing or malformed companion fields is corrupt storage and surfaces
    /// as a validation error rather than a context with NaN in it.
    pub fn load(store: &dyn SessionStore) -> StoreResult<Option<Self>> {
        let Some(token) = store.get(keys::TOKEN) else {
            return Ok(None);
        };
        let username = store
            .get(keys::USERNAME)
            .ok_or_else(|| StoreError::validation("stored session is missing username"))?;
        let balance = store
            .get(keys::BALANCE)
            .ok_or_else(|| StoreError::validation("stored session is missing balance"))?
            .parse::<f64>()
            .map_err(|e| StoreError::validation(format!("stored balance is malformed: {e}")))?;
        let logged_in_at = store
            .get(keys::LOGGED_IN_AT)
            .ok_or_else(|| StoreError::validation("stored session is missing login timestamp"))?;
        let logged_in_at = DateTime::parse_from_rfc3339(&logged_in_at)
            .map_err(|e| StoreError::validation(format!("stored login timestamp is malformed: {e}")))?
            .with_timezone(&Utc);

        Self::new(token, username, balance, logged_in_at).map(Some)
    }
}

/// Initialize the session on login or registration: validate the fields the
/// backend returned and mirror them into the store.
pub fn login(
    store: &mut dyn SessionStore,
    token: impl Into<String>,
    username: impl Into<String>,
    balance: f64,
    now: DateTime<Utc>,
) -> StoreResult<SessionContext> {
    let ctx = SessionContext::new(token, username, balance, now)?;
    ctx.persist(store);
    tracing::info!(username = %ctx.username, "session initialized");
    Ok(ctx)
}

/// Tear down the session: drop every mirrored field.
pub fn logout(store: &mut dyn SessionStore) {
    store.clear();
    tracing::info!("session cleared");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn now() -> DateTime<Utc> {
        "2026-08-28T10:00:00Z".parse().unwrap()
    }

    #[test]
    fn login_persists_and_load_round_trips() {
        let mut store = MemoryStore::new();
        let ctx = login(&mut store, "tok-123", "alice", 420.5, now()).unwrap();

        let loaded = SessionContext::load(&store).unwrap().unwrap();
        assert_eq!(loaded, ctx);
        assert_eq!(loaded.username, "alice");
        assert_eq!(loaded.balance, 420.5);
    }

    #[test]
    fn load_without_token_is_none() {
        let store = MemoryStore::new();
        assert_eq!(SessionContext::load(&store).unwrap(), None);
    }

    #[test]
    fn logout_clears_the_session() {
        let mut store = MemoryStore::new();
        login(&mut store, "tok-123", "alice", 0.0, now()).unwrap();
        logout(&mut store);
        assert_eq!(SessionContext::load(&store).unwrap(), None);
    }

    #[test]
    fn login_rejects_blank_token_and_username() {
        let mut store = MemoryStore::new();
        assert!(login(&mut store, "  ", "alice", 1.0, now()).is_err());
        assert!(login(&mut store, "tok", "", 1.0, now()).is_err());
        // Nothing may be half-persisted after a rejected login.
        assert_eq!(SessionContext::load(&store).unwrap(), None);
    }

    #[test]
    fn login_rejects_malformed_balance() {
        let mut store = MemoryStore::new();
        assert!(login(&mut store, "tok", "alice", f64::NAN, now()).is_err());
        assert!(login(&mut store, "tok", "alice", -1.0, now()).is_err());
    }

    #[test]
    fn corrupt_stored_balance_surfaces_as_validation_error() {
        let mut store = MemoryStore::new();
        login(&mut store, "tok-123", "alice", 10.0, now()).unwrap();
        store.set("session.balance", "not-a-number");

        let err = SessionContext::load(&store).unwrap_err();
        match err {
            StoreError::Validation(msg) => assert!(msg.contains("balance")),
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[test]
    fn missing_companion_field_surfaces_as_validation_error() {
        let mut store = MemoryStore::new();
        login(&mut store, "tok-123", "alice", 10.0, now()).unwrap();
        store.remove("session.username");

        assert!(SessionContext::load(&store).is_err());
    }

    #[test]
    fn context_serializes_to_the_wire_shape() {
        let ctx = SessionContext::new("tok-123", "alice", 42.0, now()).unwrap();
        let json = serde_json::to_value(&ctx).unwrap();
        assert_eq!(json["token"], "tok-123");
        assert_eq!(json["username"], "alice");
        assert_eq!(json["balance"], 42.0);
    }
}
