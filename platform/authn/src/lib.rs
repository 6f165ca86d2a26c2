//! Dashboard sign-in.
//!
//! Two fixed accounts, a cosmetic login delay, and a session that lives in a
//! [`SessionStore`] under [`SESSION_KEY`] until logout. There is no expiry
//! and no revalidation: a stored user is a signed-in user.

use std::{
    collections::HashMap,
    fs, io,
    path::{Path, PathBuf},
    sync::Mutex,
    time::Duration,
};

use entity::{Department, User, UserRole};
use platform_api::{ApiError, ValidationError};
use thiserror::Error;

pub const SESSION_KEY: &str = "hrUser";
pub const DEFAULT_LOGIN_LATENCY: Duration = Duration::from_secs(1);

#[derive(Debug, Error)]
pub enum AuthnError {
    #[error("invalid email or password")]
    InvalidCredentials,
    #[error("session storage failed: {0}")]
    Storage(#[from] io::Error),
    #[error("stored session is unreadable: {0}")]
    Corrupt(#[from] serde_json::Error),
}

impl From<AuthnError> for ApiError {
    fn from(value: AuthnError) -> Self {
        match value {
            AuthnError::InvalidCredentials => ValidationError::InvalidCredentials.into(),
            other => ApiError::internal(other.into()),
        }
    }
}

/// Key/value storage for the signed-in user.
pub trait SessionStore: Send + Sync {
    fn load(&self, key: &str) -> Result<Option<String>, AuthnError>;
    fn save(&self, key: &str, value: &str) -> Result<(), AuthnError>;
    fn remove(&self, key: &str) -> Result<(), AuthnError>;
}

/// One JSON file per key inside `dir`.
#[derive(Clone, Debug)]
pub struct FileSessionStore {
    dir: PathBuf,
}

impl FileSessionStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self, key: &str) -> Result<Option<String>, AuthnError> {
        match fs::read_to_string(self.path(key)) {
            Ok(raw) => Ok(Some(raw)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn save(&self, key: &str, value: &str) -> Result<(), AuthnError> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.path(key), value)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), AuthnError> {
        match fs::remove_file(self.path(key)) {
            Err(err) if err.kind() != io::ErrorKind::NotFound => Err(err.into()),
            _ => Ok(()),
        }
    }
}

#[derive(Debug, Default)]
pub struct MemorySessionStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemorySessionStore {
    fn entries(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        self.entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self, key: &str) -> Result<Option<String>, AuthnError> {
        Ok(self.entries().get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> Result<(), AuthnError> {
        self.entries().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), AuthnError> {
        self.entries().remove(key);
        Ok(())
    }
}

struct Account {
    email: &'static str,
    password: &'static str,
    role: UserRole,
}

const ACCOUNTS: [Account; 2] = [
    Account {
        email: "admin@company.com",
        password: "admin123",
        role: UserRole::Admin,
    },
    Account {
        email: "hr@company.com",
        password: "hr123",
        role: UserRole::Hr,
    },
];

/// The HR profile both accounts sign in as. The admin account keeps its own
/// email and role.
fn hr_profile() -> User {
    User {
        id: "1".into(),
        email: "sarah.johnson@company.com".into(),
        first_name: "Sarah".into(),
        last_name: "Johnson".into(),
        role: UserRole::Hr,
        department: Department::Hr,
        avatar: Some(
            "https://ui-avatars.com/api/?name=Sarah+Johnson&background=3B82F6&color=fff".into(),
        ),
    }
}

pub struct AuthService<S> {
    store: S,
    latency: Duration,
}

impl<S: SessionStore> AuthService<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            latency: DEFAULT_LOGIN_LATENCY,
        }
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<User, AuthnError> {
        tokio::time::sleep(self.latency).await;

        let Some(account) = ACCOUNTS
            .iter()
            .find(|acct| acct.email == email && acct.password == password)
        else {
            tracing::info!(%email, "login rejected");
            return Err(AuthnError::InvalidCredentials);
        };

        let mut user = hr_profile();
        if account.role == UserRole::Admin {
            user.email = account.email.to_string();
            user.role = UserRole::Admin;
        }
        self.store
            .save(SESSION_KEY, &serde_json::to_string(&user)?)?;
        tracing::info!(%email, role = %user.role, "login succeeded");
        Ok(user)
    }

    /// The stored user, if any.
    pub fn restore(&self) -> Result<Option<User>, AuthnError> {
        let Some(raw) = self.store.load(SESSION_KEY)? else {
            return Ok(None);
        };
        let user: User = serde_json::from_str(&raw)?;
        tracing::debug!(email = %user.email, "session restored");
        Ok(Some(user))
    }

    pub fn logout(&self) -> Result<(), AuthnError> {
        self.store.remove(SESSION_KEY)?;
        tracing::info!("session cleared");
        Ok(())
    }
}
