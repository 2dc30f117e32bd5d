use client::session::{clear_user, stored_user};
use client::{ClientError, SessionStore};
use dioxus::prelude::*;
use shared_types::{AppConfig, SessionUser};

/// Signed-in user shared across routes.
///
/// `restored` flips once the stored session has been read at startup.
/// Until then a missing `current_user` means "not known yet", not
/// "signed out".
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AuthState {
    pub current_user: Signal<Option<SessionUser>>,
    pub restored: Signal<bool>,
}

impl AuthState {
    pub fn new() -> Self {
        Self {
            current_user: Signal::new(None),
            restored: Signal::new(false),
        }
    }

    pub fn set_user(&mut self, user: SessionUser) {
        self.current_user.set(Some(user));
    }

    pub fn clear_auth(&mut self) {
        self.current_user.set(None);
    }

    pub fn mark_restored(&mut self) {
        self.restored.set(true);
    }
}

/// Hook to access auth state.
pub fn use_auth() -> AuthState {
    use_context::<AuthState>()
}

/// A browser storage change waiting to be applied.
#[derive(Debug, Clone, PartialEq)]
pub enum StorageWrite {
    Set { key: String, value: String },
    Remove { key: String },
}

impl StorageWrite {
    /// JavaScript applying this change to `localStorage`.
    #[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
    pub fn script(&self) -> Result<String, ClientError> {
        Ok(match self {
            StorageWrite::Set { key, value } => format!(
                "localStorage.setItem({}, {});",
                serde_json::to_string(key)?,
                serde_json::to_string(value)?
            ),
            StorageWrite::Remove { key } => {
                format!("localStorage.removeItem({});", serde_json::to_string(key)?)
            }
        })
    }
}

/// Session storage for this platform, shared through context.
///
/// On web the store updates an in-memory cache synchronously and queues
/// the `localStorage` change in `pending`; [`SessionContext::flush`]
/// applies the queue and reports whether the browser accepted it.
#[derive(Clone, Copy)]
pub struct SessionContext {
    pub store: Signal<Box<dyn SessionStore>>,
    pub pending: Signal<Vec<StorageWrite>>,
}

impl SessionContext {
    pub fn open(config: &AppConfig) -> Self {
        let pending = Signal::new(Vec::new());
        Self {
            store: Signal::new(platform::open_store(config, pending)),
            pending,
        }
    }

    pub fn current_user(&self) -> Option<SessionUser> {
        stored_user(&**self.store.read())
    }

    /// Remove the stored user. Failures are logged; the in-memory auth
    /// state is cleared by the caller either way.
    pub fn sign_out(&mut self) {
        if let Err(e) = clear_user(&mut **self.store.write()) {
            tracing::error!(error = %e, "failed to clear stored session");
        }
    }

    /// Apply queued browser storage changes. A no-op on desktop, where the
    /// file store writes through.
    pub async fn flush(self) -> Result<(), ClientError> {
        let mut pending = self.pending;
        let writes = std::mem::take(&mut *pending.write());
        platform::flush(writes).await
    }
}

pub fn use_session() -> SessionContext {
    use_context::<SessionContext>()
}

/// Seed `auth` from whatever the session store holds at startup, then mark
/// it restored. A sign-in that finished first is kept.
pub fn restore_session(session: SessionContext, mut auth: AuthState) {
    platform::restore(session, move |user| {
        if let Some(user) = user {
            if auth.current_user.peek().is_none() {
                tracing::info!(role = %user.role, "restored stored session");
                auth.set_user(user);
            }
        }
        auth.mark_restored();
    });
}

/// Bridges the sign-in flow to the Dioxus router.
pub struct RouterNavigator;

impl client::Navigator for RouterNavigator {
    fn navigate(&mut self, path: &str) {
        tracing::debug!(path, "navigating");
        navigator().push(path.to_string());
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod platform {
    use client::{ClientError, FileSessionStore, MemorySessionStore, SessionStore};
    use dioxus::prelude::*;
    use shared_types::{AppConfig, SessionUser};

    use super::{SessionContext, StorageWrite};

    pub const DEFAULT_SESSION_FILE: &str = ".talent-portal/session.json";

    pub fn open_store(
        config: &AppConfig,
        _pending: Signal<Vec<StorageWrite>>,
    ) -> Box<dyn SessionStore> {
        let path = config
            .auth
            .session_file
            .as_deref()
            .unwrap_or(DEFAULT_SESSION_FILE);
        match FileSessionStore::open(path) {
            Ok(store) => Box::new(store),
            Err(e) => {
                tracing::error!(error = %e, path, "session file unreadable; keeping sessions in memory");
                Box::new(MemorySessionStore::new())
            }
        }
    }

    pub fn restore(session: SessionContext, on_done: impl FnOnce(Option<SessionUser>)) {
        on_done(session.current_user());
    }

    pub async fn flush(writes: Vec<StorageWrite>) -> Result<(), ClientError> {
        if !writes.is_empty() {
            tracing::debug!(count = writes.len(), "dropping browser storage writes on desktop");
        }
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
mod platform {
    use client::session::stored_user;
    use client::{ClientError, MemorySessionStore, SessionStore};
    use dioxus::prelude::*;
    use shared_types::{AppConfig, SessionUser, SESSION_USER_KEY};

    use super::{SessionContext, StorageWrite};

    /// `localStorage`-backed store. Reads are served from a cache filled at
    /// startup. Writes land in the cache and are queued for
    /// [`SessionContext::flush`].
    pub struct BrowserSessionStore {
        cache: MemorySessionStore,
        pending: Signal<Vec<StorageWrite>>,
    }

    impl SessionStore for BrowserSessionStore {
        fn get(&self, key: &str) -> Option<String> {
            self.cache.get(key)
        }

        fn set(&mut self, key: &str, value: String) -> Result<(), ClientError> {
            self.cache.set(key, value.clone())?;
            self.pending.write().push(StorageWrite::Set {
                key: key.to_string(),
                value,
            });
            Ok(())
        }

        fn remove(&mut self, key: &str) -> Result<(), ClientError> {
            self.cache.remove(key)?;
            self.pending.write().push(StorageWrite::Remove {
                key: key.to_string(),
            });
            Ok(())
        }
    }

    pub fn open_store(
        _config: &AppConfig,
        pending: Signal<Vec<StorageWrite>>,
    ) -> Box<dyn SessionStore> {
        Box::new(BrowserSessionStore {
            cache: MemorySessionStore::new(),
            pending,
        })
    }

    pub fn restore(session: SessionContext, on_done: impl FnOnce(Option<SessionUser>) + 'static) {
        let mut store = session.store;
        spawn(async move {
            let script = format!("return localStorage.getItem({SESSION_USER_KEY:?});");
            let raw = match document::eval(&script).join::<Option<String>>().await {
                Ok(raw) => raw,
                Err(e) => {
                    tracing::warn!(error = ?e, "localStorage unavailable");
                    None
                }
            };
            let Some(raw) = raw else {
                on_done(None);
                return;
            };

            let seeded = BrowserSessionStore {
                cache: [(SESSION_USER_KEY.to_string(), raw)].into_iter().collect(),
                pending: session.pending,
            };
            let user = stored_user(&seeded);
            if user.is_some() && session.current_user().is_none() {
                store.set(Box::new(seeded));
            }
            on_done(user);
        });
    }

    pub async fn flush(writes: Vec<StorageWrite>) -> Result<(), ClientError> {
        for write in writes {
            let script = format!("{} return true;", write.script()?);
            document::eval(&script)
                .join::<bool>()
                .await
                .map_err(|e| ClientError::StoreUnavailable(format!("{e:?}")))?;
        }
        Ok(())
    }
}
