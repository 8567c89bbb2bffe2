//! Permission editing on top of a [`UserDirectory`].
//!
//! The editor owns the user store. It never talks to the network itself;
//! loads and saves go through the directory.

use coffeeshop_models::{User, UserId};
use tracing::{debug, warn};

use crate::modules::users::{LoadOutcome, PersistOutcome, UserDirectory, UserStore};
use crate::utils::errors::ClientError;

#[derive(Debug)]
pub struct PermissionEditor {
    directory: UserDirectory,
    store: UserStore,
}

impl PermissionEditor {
    /// Creates an editor and immediately loads the authorized collection.
    ///
    /// The editor is returned even when the load fails or is skipped; its store
    /// is then simply empty. The load result is handed back so the caller can
    /// decide whether to surface it.
    pub async fn open(directory: UserDirectory) -> (Self, Result<LoadOutcome, ClientError>) {
        let mut editor = Self {
            directory,
            store: UserStore::new(),
        };
        let loaded = editor.reload().await;
        if let Err(err) = &loaded {
            warn!(error = %err, "Initial user load failed");
        }
        (editor, loaded)
    }

    /// Loads the authorized collection again, upserting into the current store.
    ///
    /// Unsaved edits to users present in the response are overwritten.
    pub async fn reload(&mut self) -> Result<LoadOutcome, ClientError> {
        self.directory.load(&mut self.store).await
    }

    /// Sets the `valid` flag of one permission entry. Local only, no I/O.
    ///
    /// # Errors
    ///
    /// `ClientError::UserNotFound` if `user_id` is not loaded,
    /// `ClientError::PermissionNotFound` if the user has no entry at
    /// `permission_index`. Nothing is modified in either case.
    pub fn set_permission(
        &mut self,
        user_id: UserId,
        permission_index: usize,
        valid: bool,
    ) -> Result<(), ClientError> {
        let user = self
            .store
            .get_mut(user_id)
            .ok_or(ClientError::UserNotFound(user_id))?;
        let entry = user
            .permission_mut(permission_index)
            .ok_or(ClientError::PermissionNotFound {
                user_id,
                index: permission_index,
            })?;

        entry.valid = valid;
        debug!(user_id = %user_id, permission = %entry.name, valid, "Permission updated");

        Ok(())
    }

    /// Sends the user's current in-memory state to the backend.
    pub async fn save(&self, user_id: UserId) -> Result<PersistOutcome, ClientError> {
        let user = self
            .store
            .get(user_id)
            .ok_or(ClientError::UserNotFound(user_id))?;

        self.directory.persist(user).await
    }

    pub fn user(&self, user_id: UserId) -> Option<&User> {
        self.store.get(user_id)
    }

    /// Loaded users in ascending id order.
    pub fn users(&self) -> impl Iterator<Item = &User> {
        self.store.iter()
    }

    pub fn store(&self) -> &UserStore {
        &self.store
    }
}
