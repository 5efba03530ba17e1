use std::collections::{BTreeMap, HashMap};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use super::{StoreError, UserStore};
use crate::modules::users::model::{NewUser, ProfileChanges, User};

#[derive(Debug, Default)]
struct UserTable {
    last_id: i64,
    users: BTreeMap<i64, User>,
    by_username: HashMap<String, i64>,
    by_email: HashMap<String, i64>,
}

/// Process-local [`UserStore`]; contents are lost on restart.
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    table: RwLock<UserTable>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, StoreError> {
        let table = self.table.read().await;
        Ok(table.users.get(&id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
        let table = self.table.read().await;
        Ok(table
            .by_username
            .get(username)
            .and_then(|id| table.users.get(id))
            .cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let table = self.table.read().await;
        Ok(table
            .by_email
            .get(&normalize_email(email))
            .and_then(|id| table.users.get(id))
            .cloned())
    }

    async fn create(&self, new_user: NewUser) -> Result<User, StoreError> {
        let mut table = self.table.write().await;
        let email = normalize_email(&new_user.email);

        if table.by_username.contains_key(&new_user.username) {
            return Err(StoreError::Conflict("Username"));
        }
        if table.by_email.contains_key(&email) {
            return Err(StoreError::Conflict("Email"));
        }

        table.last_id += 1;
        let now = Utc::now();
        let user = User {
            id: table.last_id,
            username: new_user.username,
            email,
            password_hash: new_user.password_hash,
            full_name: new_user.full_name,
            created_at: now,
            updated_at: now,
        };

        table.by_username.insert(user.username.clone(), user.id);
        table.by_email.insert(user.email.clone(), user.id);
        table.users.insert(user.id, user.clone());

        Ok(user)
    }

    async fn update_profile(&self, id: i64, changes: ProfileChanges) -> Result<User, StoreError> {
        let mut table = self.table.write().await;

        let new_email = changes.email.as_deref().map(normalize_email);
        let email_taken = new_email
            .as_ref()
            .and_then(|email| table.by_email.get(email))
            .is_some_and(|owner| *owner != id);
        if email_taken {
            return Err(StoreError::Conflict("Email"));
        }

        let user = table.users.get_mut(&id).ok_or(StoreError::NotFound(id))?;
        let old_email = user.email.clone();

        if let Some(full_name) = changes.full_name {
            user.full_name = Some(full_name);
        }
        if let Some(email) = new_email {
            user.email = email;
        }
        user.updated_at = Utc::now();
        let updated = user.clone();

        if updated.email != old_email {
            table.by_email.remove(&old_email);
            table.by_email.insert(updated.email.clone(), id);
        }

        Ok(updated)
    }

    async fn update_password(&self, id: i64, password_hash: String) -> Result<User, StoreError> {
        let mut table = self.table.write().await;
        let user = table.users.get_mut(&id).ok_or(StoreError::NotFound(id))?;

        user.password_hash = password_hash;
        user.updated_at = Utc::now();

        Ok(user.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_user(username: &str, email: &str) -> NewUser {
        NewUser {
            username: username.to_string(),
            email: email.to_string(),
            password_hash: "hash".to_string(),
            full_name: None,
        }
    }

    #[tokio::test]
    async fn test_create_assigns_sequential_ids() {
        let store = InMemoryUserStore::new();

        let alice = store.create(new_user("alice", "alice@example.com")).await.unwrap();
        let bob = store.create(new_user("bob", "bob@example.com")).await.unwrap();

        assert_eq!(alice.id, 1);
        assert_eq!(bob.id, 2);
        assert_eq!(alice.created_at, alice.updated_at);
    }

    #[tokio::test]
    async fn test_lookup_by_username_email_and_id() {
        let store = InMemoryUserStore::new();
        let alice = store.create(new_user("alice", "Alice@Example.com")).await.unwrap();

        assert_eq!(alice.email, "alice@example.com");
        assert_eq!(store.find_by_id(alice.id).await.unwrap().unwrap().username, "alice");
        assert!(store.find_by_username("alice").await.unwrap().is_some());
        assert!(store.find_by_username("ALICE").await.unwrap().is_none());
        assert!(store.find_by_email("ALICE@example.COM").await.unwrap().is_some());
        assert!(store.find_by_id(99).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_username_and_email_rejected() {
        let store = InMemoryUserStore::new();
        store.create(new_user("alice", "alice@example.com")).await.unwrap();

        let err = store
            .create(new_user("alice", "other@example.com"))
            .await
            .unwrap_err();
        assert_eq!(err, StoreError::Conflict("Username"));

        let err = store
            .create(new_user("alice2", "ALICE@example.com"))
            .await
            .unwrap_err();
        assert_eq!(err, StoreError::Conflict("Email"));
    }

    #[tokio::test]
    async fn test_update_profile_moves_email_index() {
        let store = InMemoryUserStore::new();
        let alice = store.create(new_user("alice", "alice@example.com")).await.unwrap();

        let updated = store
            .update_profile(
                alice.id,
                ProfileChanges {
                    full_name: Some("Alice Liddell".to_string()),
                    email: Some("liddell@example.com".to_string()),
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.full_name.as_deref(), Some("Alice Liddell"));
        assert_eq!(updated.email, "liddell@example.com");
        assert!(store.find_by_email("alice@example.com").await.unwrap().is_none());
        assert_eq!(
            store.find_by_email("liddell@example.com").await.unwrap().unwrap().id,
            alice.id
        );

        // The freed address can be claimed again.
        store.create(new_user("alice2", "alice@example.com")).await.unwrap();
    }

    #[tokio::test]
    async fn test_update_profile_rejects_taken_email() {
        let store = InMemoryUserStore::new();
        let alice = store.create(new_user("alice", "alice@example.com")).await.unwrap();
        store.create(new_user("bob", "bob@example.com")).await.unwrap();

        let err = store
            .update_profile(
                alice.id,
                ProfileChanges {
                    full_name: None,
                    email: Some("bob@example.com".to_string()),
                },
            )
            .await
            .unwrap_err();
        assert_eq!(err, StoreError::Conflict("Email"));

        // Re-submitting your own address is fine.
        store
            .update_profile(
                alice.id,
                ProfileChanges {
                    full_name: None,
                    email: Some("alice@example.com".to_string()),
                },
            )
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_update_missing_user() {
        let store = InMemoryUserStore::new();

        let err = store
            .update_password(7, "new-hash".to_string())
            .await
            .unwrap_err();
        assert_eq!(err, StoreError::NotFound(7));
    }

    #[tokio::test]
    async fn test_update_password() {
        let store = InMemoryUserStore::new();
        let alice = store.create(new_user("alice", "alice@example.com")).await.unwrap();

        let updated = store
            .update_password(alice.id, "new-hash".to_string())
            .await
            .unwrap();
        assert_eq!(updated.password_hash, "new-hash");
        assert_eq!(
            store.find_by_id(alice.id).await.unwrap().unwrap().password_hash,
            "new-hash"
        );
    }
}
