//! User use-case service.
//!
//! # Responsibility
//! - Provide the stable lookup entry point for application callers.
//! - Delegate persistence to repository implementations.
//!
//! # Invariants
//! - Inputs, outputs and errors pass through unchanged.
//! - Service layer remains storage-agnostic.

use crate::model::user::UserId;
use crate::repo::user_repo::{RepoResult, UserRepository};

/// Use-case service wrapper for user lookups.
pub struct UserService<R: UserRepository> {
    repo: R,
}

impl<R: UserRepository> UserService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Gets the username for `id`.
    ///
    /// Returns repository-level not-found or query errors unchanged.
    pub fn get_user(&mut self, id: UserId) -> RepoResult<String> {
        self.repo.get_user_by_id(id)
    }

    /// Returns the wrapped repository.
    pub fn into_inner(self) -> R {
        self.repo
    }
}

#[cfg(test)]
mod tests {
    use super::UserService;
    use crate::model::user::UserId;
    use crate::repo::user_repo::{RepoError, RepoResult, UserRepository};
    use std::collections::HashMap;

    #[derive(Default)]
    struct FakeRepo {
        users: HashMap<UserId, String>,
        calls: Vec<UserId>,
    }

    impl UserRepository for FakeRepo {
        fn get_user_by_id(&mut self, id: UserId) -> RepoResult<String> {
            self.calls.push(id);
            self.users.get(&id).cloned().ok_or(RepoError::NotFound(id))
        }
    }

    #[test]
    fn get_user_delegates_each_call_once() {
        let mut repo = FakeRepo::default();
        repo.users.insert(1, "alice".to_string());
        let mut service = UserService::new(repo);

        assert_eq!(service.get_user(1).unwrap(), "alice");
        assert!(service.get_user(42).unwrap_err().is_not_found());

        let repo = service.into_inner();
        assert_eq!(repo.calls, vec![1, 42]);
    }

    #[test]
    fn service_accepts_borrowed_and_boxed_repositories() {
        let mut repo = FakeRepo::default();
        repo.users.insert(-5, "negative".to_string());

        {
            let mut service = UserService::new(&mut repo);
            assert_eq!(service.get_user(-5).unwrap(), "negative");
        }
        assert_eq!(repo.calls, vec![-5]);

        let boxed: Box<dyn UserRepository> = Box::new(repo);
        let mut service = UserService::new(boxed);
        assert!(service.get_user(0).unwrap_err().is_not_found());
    }
}
