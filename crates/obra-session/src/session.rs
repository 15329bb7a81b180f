//! Session: explicit login state, hydrated from and persisted to a
//! [`KeyValueStore`].
//!
//! There is no credential check and no server: logging in stores the user
//! record and a locally generated token, logging out deletes them.

use chrono::Utc;
use obra_core::constants::{AUTH_TOKEN_KEY, ESTIMATION_RESULT_KEY, USER_KEY};
use obra_core::errors::{ObraResult, SessionError, StorageError};
use obra_core::models::{User, UserPatch};
use obra_core::traits::KeyValueStore;
use tracing::{info, warn};

/// Login state bound to one store.
pub struct Session<S: KeyValueStore> {
    store: S,
    user: Option<User>,
    token: Option<String>,
}

impl<S: KeyValueStore> Session<S> {
    /// Restore the session persisted in `store`.
    ///
    /// Both the user record and the token must be present to count as
    /// logged in. A user record that fails to parse is treated as
    /// corruption: both keys are removed and the session starts logged out.
    pub fn hydrate(store: S) -> ObraResult<Self> {
        let stored_user = store.get(USER_KEY)?;
        let stored_token = store.get(AUTH_TOKEN_KEY)?;

        let (user, token) = match (stored_user, stored_token) {
            (Some(raw_user), Some(token)) => match serde_json::from_str::<User>(&raw_user) {
                Ok(user) => (Some(user), Some(token)),
                Err(e) => {
                    warn!(error = %e, "stored session is corrupt, clearing it");
                    store.remove(USER_KEY)?;
                    store.remove(AUTH_TOKEN_KEY)?;
                    (None, None)
                }
            },
            _ => (None, None),
        };

        Ok(Self { store, user, token })
    }

    /// Log `user` in, persisting the record and a fresh token.
    pub fn login(&mut self, user: User) -> ObraResult<&str> {
        let token = generate_token();
        self.store.set(USER_KEY, &serialize_user(&user)?)?;
        self.store.set(AUTH_TOKEN_KEY, &token)?;
        info!(user_id = %user.id, "user logged in");
        self.user = Some(user);
        Ok(self.token.insert(token).as_str())
    }

    /// Log out, removing the user, token, and last estimation result.
    pub fn logout(&mut self) -> ObraResult<()> {
        self.store.remove(USER_KEY)?;
        self.store.remove(AUTH_TOKEN_KEY)?;
        self.store.remove(ESTIMATION_RESULT_KEY)?;
        if let Some(user) = self.user.take() {
            info!(user_id = %user.id, "user logged out");
        }
        self.token = None;
        Ok(())
    }

    /// Apply a partial update to the logged-in user.
    ///
    /// # Errors
    /// `SessionError::NotLoggedIn` when nobody is logged in.
    pub fn update_user(&mut self, patch: &UserPatch) -> ObraResult<&User> {
        let current = self.user.as_ref().ok_or(SessionError::NotLoggedIn)?;
        let updated = current.merged(patch);
        self.store.set(USER_KEY, &serialize_user(&updated)?)?;
        Ok(self.user.insert(updated))
    }

    pub fn current_user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some() && self.token.is_some()
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

fn serialize_user(user: &User) -> ObraResult<String> {
    serde_json::to_string(user).map_err(|e| {
        StorageError::Serialization {
            key: USER_KEY.to_string(),
            message: e.to_string(),
        }
        .into()
    })
}

/// `token_<unix millis>_<9 random base-36 chars>`.
fn generate_token() -> String {
    let suffix: String = uuid::Uuid::new_v4().simple().to_string().chars().take(9).collect();
    format!("token_{}_{suffix}", Utc::now().timestamp_millis())
}
