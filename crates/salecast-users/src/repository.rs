//! User storage.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use salecast_core::UserId;
use serde::{Deserialize, Serialize};

use crate::error::UserError;

/// A registered account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub email: String,
    /// Output of [`crate::password::hash_password`].
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Account lookup and creation.
///
/// Ids are assigned by the repository as sequential decimal strings
/// (`"1"`, `"2"`, ...). Implementations do not check e-mail uniqueness;
/// [`crate::signup`] does.
pub trait UserRepository {
    /// # Errors
    ///
    /// Returns `UserError::Io` if the backing store cannot be read.
    fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError>;

    /// # Errors
    ///
    /// Returns `UserError::Io` if the backing store cannot be read.
    fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError>;

    /// Store a new account under the next sequential id.
    ///
    /// # Errors
    ///
    /// Returns `UserError::Io` if the backing store cannot be written.
    fn create(&mut self, email: &str, password_hash: String) -> Result<User, UserError>;
}

fn next_id(existing: usize) -> Result<UserId, UserError> {
    Ok(UserId::new((existing + 1).to_string())?)
}

/// Process-local registry. Contents are lost on exit.
#[derive(Debug, Default)]
pub struct InMemoryUsers {
    users: BTreeMap<String, User>,
}

impl InMemoryUsers {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            users: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.users.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl UserRepository for InMemoryUsers {
    fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError> {
        Ok(self.users.values().find(|u| u.email == email).cloned())
    }

    fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError> {
        Ok(self.users.get(id.as_str()).cloned())
    }

    fn create(&mut self, email: &str, password_hash: String) -> Result<User, UserError> {
        let user = User {
            id: next_id(self.users.len())?,
            email: email.to_string(),
            password_hash,
            created_at: Utc::now(),
        };
        self.users.insert(user.id.to_string(), user.clone());
        Ok(user)
    }
}

/// Append-only JSONL registry, one account per line.
///
/// The file is re-read on every lookup; nothing is cached.
#[derive(Debug, Clone)]
pub struct JsonlUsers {
    path: PathBuf,
}

impl JsonlUsers {
    /// Use `path` as the registry file, creating its parent directory.
    ///
    /// # Errors
    ///
    /// Returns `UserError::Io` if the parent directory cannot be created.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, UserError> {
        let path = path.into();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| UserError::io(parent, e))?;
        }
        Ok(Self { path })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Every stored account, in creation order.
    ///
    /// # Errors
    ///
    /// Returns `UserError::Io` if the file cannot be read or a line does not
    /// decode.
    pub fn all(&self) -> Result<Vec<User>, UserError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        serde_jsonlines::json_lines::<User, _>(&self.path)
            .and_then(|lines| lines.collect::<std::io::Result<Vec<User>>>())
            .map_err(|e| UserError::io(&self.path, e))
    }
}

impl UserRepository for JsonlUsers {
    fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError> {
        Ok(self.all()?.into_iter().find(|u| u.email == email))
    }

    fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError> {
        Ok(self.all()?.into_iter().find(|u| &u.id == id))
    }

    fn create(&mut self, email: &str, password_hash: String) -> Result<User, UserError> {
        let user = User {
            id: next_id(self.all()?.len())?,
            email: email.to_string(),
            password_hash,
            created_at: Utc::now(),
        };
        serde_jsonlines::append_json_lines(&self.path, [&user])
            .map_err(|e| UserError::io(&self.path, e))?;
        tracing::debug!(user_id = %user.id, path = %self.path.display(), "appended user");
        Ok(user)
    }
}
