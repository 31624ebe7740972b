//! In-memory storage for users and exercises
//!
//! Both collections and the id counter live behind a single lock, so a
//! reader never observes a half-appended record and two concurrent user
//! creations never share an id. Nothing survives a restart.

use exercise_log_shared::models::{ExerciseRecord, User};
use std::sync::Arc;
use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// First id handed out by a fresh store
const FIRST_USER_ID: u64 = 1;

/// The guarded collections
#[derive(Debug)]
pub struct Collections {
    pub(crate) users: Vec<User>,
    pub(crate) exercises: Vec<ExerciseRecord>,
    pub(crate) next_user_id: u64,
}

impl Default for Collections {
    fn default() -> Self {
        Self {
            users: Vec::new(),
            exercises: Vec::new(),
            next_user_id: FIRST_USER_ID,
        }
    }
}

impl Collections {
    /// Find a user by id
    pub(crate) fn user(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }
}

/// Record counts, used by readiness checks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreStats {
    pub users: usize,
    pub exercises: usize,
}

/// Handle to the shared collections; clones share the same data
#[derive(Debug, Clone, Default)]
pub struct Store {
    inner: Arc<RwLock<Collections>>,
}

impl Store {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) async fn read(&self) -> RwLockReadGuard<'_, Collections> {
        self.inner.read().await
    }

    pub(crate) async fn write(&self) -> RwLockWriteGuard<'_, Collections> {
        self.inner.write().await
    }

    /// Current record counts
    pub async fn stats(&self) -> StoreStats {
        let collections = self.read().await;
        StoreStats {
            users: collections.users.len(),
            exercises: collections.exercises.len(),
        }
    }
}
