// Induction store
// Authoritative in-memory copy of users and sections, synchronized to a
// key-value persistence backend

pub mod errors;
pub mod seed;

pub use errors::{StoreError, StoreResult};

use chrono::Utc;
use serde::de::DeserializeOwned;
use uuid::Uuid;

use crate::domain::repositories::BlobStorage;
use crate::domain::section::{Category, InductionSection, MediaAttachment, NewSection};
use crate::domain::user::{NewUser, Role, User};

/// Storage key for the users collection
pub const USERS_KEY: &str = "users";
/// Storage key for the sections collection
pub const SECTIONS_KEY: &str = "sections";

/// Authoritative holder of the `users` and `sections` collections
///
/// All mutation goes through the store's methods; every successful mutation
/// is written back to the persistence backend. The two collections are
/// persisted as independent JSON blobs with no atomicity across the pair.
///
/// # Invariants
/// - At least one ADMIN account exists at all times: deleting the last
///   remaining administrator is rejected.
/// - A collection is only written back while non-empty, so the last
///   non-empty snapshot survives a delete-everything sequence.
pub struct Store {
    users: Vec<User>,
    sections: Vec<InductionSection>,
    storage: Box<dyn BlobStorage>,
}

impl Store {
    /// Loads the store from the persistence backend
    ///
    /// Each collection is read independently: a blob that is absent or
    /// fails to read or parse falls back to the seed dataset for that
    /// collection. Malformed-but-parseable records are accepted as-is; no
    /// schema validation happens at this boundary.
    pub async fn load(storage: impl BlobStorage + 'static) -> Self {
        let storage: Box<dyn BlobStorage> = Box::new(storage);

        let users = match read_collection::<User>(storage.as_ref(), USERS_KEY).await {
            Some(users) => users,
            None => seed::initial_users(),
        };
        let sections =
            match read_collection::<InductionSection>(storage.as_ref(), SECTIONS_KEY).await {
                Some(sections) => sections,
                None => seed::initial_sections(),
            };

        Self {
            users,
            sections,
            storage,
        }
    }

    /// Returns all user accounts
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Returns all induction sections
    pub fn sections(&self) -> &[InductionSection] {
        &self.sections
    }

    /// Looks up a single section by id
    pub fn section(&self, id: Uuid) -> Option<&InductionSection> {
        self.sections.iter().find(|s| s.id == id)
    }

    /// Checks credentials against the stored accounts
    ///
    /// Email comparison is case-insensitive; the password must match
    /// exactly. Returns `None` for any non-match without distinguishing an
    /// unknown email from a wrong password.
    pub fn authenticate(&self, email: &str, password: &str) -> Option<User> {
        self.users
            .iter()
            .find(|u| u.email_matches(email) && u.password == password)
            .cloned()
    }

    /// Creates a user account, filling unset fields with portal defaults
    pub async fn add_user(&mut self, partial: NewUser) -> StoreResult<User> {
        let user = User {
            id: Uuid::new_v4(),
            name: partial.name.unwrap_or_else(|| "Anonymous".to_string()),
            email: partial.email.unwrap_or_default(),
            password: partial
                .password
                .unwrap_or_else(|| "password123".to_string()),
            role: partial.role.unwrap_or(Role::User),
            department: partial
                .department
                .unwrap_or_else(|| "Operations".to_string()),
            join_date: Utc::now().date_naive(),
            progress: 0,
        };

        self.users.push(user.clone());
        self.persist().await?;
        Ok(user)
    }

    /// Deletes a user account by id
    ///
    /// Deleting the last remaining administrator is rejected with
    /// [`StoreError::LastAdmin`]; an unknown id is a silent no-op.
    pub async fn delete_user(&mut self, id: Uuid) -> StoreResult<()> {
        if !self.can_delete_user(id) {
            return Err(StoreError::LastAdmin);
        }

        let before = self.users.len();
        self.users.retain(|u| u.id != id);
        if self.users.len() != before {
            self.persist().await?;
        }
        Ok(())
    }

    /// Precondition check for [`Store::delete_user`]
    ///
    /// Lets the presentation layer disable the delete action up front; the
    /// store enforces the same rule regardless of caller.
    pub fn can_delete_user(&self, id: Uuid) -> bool {
        match self.users.iter().find(|u| u.id == id) {
            Some(user) if user.role == Role::Admin => {
                self.users.iter().filter(|u| u.role == Role::Admin).count() > 1
            }
            _ => true,
        }
    }

    /// Publishes a section, filling unset fields with portal defaults
    ///
    /// The display order is assigned as `current count + 1` regardless of
    /// the order values already present.
    pub async fn add_section(&mut self, partial: NewSection) -> StoreResult<InductionSection> {
        let attachments = partial
            .attachments
            .into_iter()
            .map(|a| MediaAttachment {
                id: Uuid::new_v4(),
                media_type: a.media_type,
                name: a.name,
                url: a.url,
            })
            .collect();

        let section = InductionSection {
            id: Uuid::new_v4(),
            title: partial.title.unwrap_or_else(|| "Untitled".to_string()),
            content: partial.content.unwrap_or_default(),
            category: partial.category.unwrap_or(Category::Company),
            last_updated: Utc::now(),
            order: self.sections.len() as u32 + 1,
            attachments,
        };

        self.sections.push(section.clone());
        self.persist().await?;
        Ok(section)
    }

    /// Deletes a section by id; an unknown id is a silent no-op
    pub async fn delete_section(&mut self, id: Uuid) -> StoreResult<()> {
        let before = self.sections.len();
        self.sections.retain(|s| s.id != id);
        if self.sections.len() != before {
            self.persist().await?;
        }
        Ok(())
    }

    /// Writes both collections back to the persistence backend
    ///
    /// A collection is only written while it has at least one element, so
    /// deleting the last remaining record leaves the previous non-empty
    /// snapshot on disk. Writes are sequential with no atomicity across the
    /// two blobs.
    async fn persist(&self) -> StoreResult<()> {
        if !self.users.is_empty() {
            let raw = serde_json::to_string(&self.users)?;
            if let Err(e) = self.storage.write(USERS_KEY, &raw).await {
                tracing::error!(error = %e, "failed to persist users collection");
                return Err(e.into());
            }
        }
        if !self.sections.is_empty() {
            let raw = serde_json::to_string(&self.sections)?;
            if let Err(e) = self.storage.write(SECTIONS_KEY, &raw).await {
                tracing::error!(error = %e, "failed to persist sections collection");
                return Err(e.into());
            }
        }
        Ok(())
    }
}

/// Reads one collection, returning `None` on any read or parse failure
async fn read_collection<T: DeserializeOwned>(
    storage: &dyn BlobStorage,
    key: &str,
) -> Option<Vec<T>> {
    match storage.read(key).await {
        Ok(Some(raw)) => match serde_json::from_str(&raw) {
            Ok(items) => Some(items),
            Err(e) => {
                tracing::warn!(key, error = %e, "persisted blob is unparseable, using seed data");
                None
            }
        },
        Ok(None) => None,
        Err(e) => {
            tracing::warn!(key, error = %e, "failed to read persisted blob, using seed data");
            None
        }
    }
}
