use crate::models::null_as_default;
use crate::storage::{KeyValueStore, StorageError, StorageHandle};
use leptos::logging::{error, log};
use leptos::*;
use serde::{Deserialize, Serialize};

/// The signed-in account as the login flow stores it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct SessionUser {
    #[serde(deserialize_with = "null_as_default")]
    pub full_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub username: String,
    #[serde(deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(deserialize_with = "null_as_default")]
    pub is_admin: bool,
}

/// Authentication state shared with every page through context.
#[derive(Clone, Copy)]
pub struct AuthContext {
    pub user: RwSignal<Option<SessionUser>>,
    pub logout: Callback<()>,
}

impl AuthContext {
    pub fn is_admin(&self) -> bool {
        self.user
            .with(|user| user.as_ref().is_some_and(|user| user.is_admin))
    }

    pub fn display_name(&self) -> String {
        self.user
            .with(|user| user.as_ref().map(|user| user.full_name.clone()))
            .unwrap_or_default()
    }
}

pub fn read_session(
    store: &dyn KeyValueStore,
    key: &str,
) -> Result<Option<SessionUser>, StorageError> {
    match store.get(key)? {
        Some(raw) => serde_json::from_str(&raw)
            .map(Some)
            .map_err(|source| StorageError::Malformed {
                key: key.to_string(),
                source,
            }),
        None => Ok(None),
    }
}

/// Restores the session from storage and provides an [`AuthContext`].
/// An unreadable session is treated as signed out.
pub fn provide_auth(storage: StorageHandle, key: String) -> AuthContext {
    let initial = match read_session(storage.store(), &key) {
        Ok(user) => user,
        Err(err) => {
            error!("[AUTH] Ignoring stored session: {}", err);
            None
        }
    };
    let user = create_rw_signal(initial);

    let logout = Callback::new(move |_: ()| {
        if let Err(err) = storage.store().remove(&key) {
            error!("[AUTH] Failed to clear stored session: {}", err);
        }
        log!("[AUTH] Signed out");
        user.set(None);
    });

    let auth = AuthContext { user, logout };
    provide_context(auth);
    auth
}

pub fn use_auth() -> AuthContext {
    expect_context::<AuthContext>()
}
