//! User store operations.

use chrono::Utc;

use crate::error::{AppError, AppResult};
use crate::models::{CreateUserRequest, UpdateUserRequest, User};
use crate::services::generate_api_key;

use super::{Deleted, Registry, StoreKind};

impl Registry {
    /// All users in id order.
    pub fn list_users(&self) -> Vec<User> {
        self.users.to_vec()
    }

    /// Get a user by ID.
    pub fn get_user(&self, id: u64) -> AppResult<User> {
        self.users
            .get(id)
            .cloned()
            .ok_or_else(|| AppError::not_found(StoreKind::Users, id))
    }

    /// Register a user. Username and email must be unused by live users.
    ///
    /// Both are compared in normalized form: username trimmed, email
    /// trimmed with a lowercase domain.
    pub fn create_user(&mut self, req: CreateUserRequest) -> AppResult<User> {
        let req = req.normalized();
        self.ensure_unique(None, Some(&req.username), Some(&req.email))?;

        let user = self.users.insert_with(|id| User {
            id,
            username: req.username,
            email: req.email,
            role: req.role,
            registration_date: Utc::now(),
            api_key: generate_api_key(),
        });

        Ok(user.clone())
    }

    /// Merge the provided fields into a user.
    ///
    /// A new username or email is checked against the other live users.
    pub fn update_user(&mut self, id: u64, req: UpdateUserRequest) -> AppResult<User> {
        if !self.users.contains(id) {
            return Err(AppError::not_found(StoreKind::Users, id));
        }
        let req = req.normalized();
        self.ensure_unique(Some(id), req.username.as_deref(), req.email.as_deref())?;

        let user = self
            .users
            .get_mut(id)
            .ok_or_else(|| AppError::not_found(StoreKind::Users, id))?;
        req.apply(user);

        Ok(user.clone())
    }

    /// Delete a user with its images, their assessments and their metrics.
    pub fn delete_user(&mut self, id: u64) -> AppResult<Deleted<User>> {
        let record = self
            .users
            .remove(id)
            .ok_or_else(|| AppError::not_found(StoreKind::Users, id))?;
        let cascade = self.cascade_from_user(id);

        Ok(Deleted { record, cascade })
    }

    fn ensure_unique(
        &self,
        except: Option<u64>,
        username: Option<&str>,
        email: Option<&str>,
    ) -> AppResult<()> {
        for existing in self.users.iter().filter(|u| Some(u.id) != except) {
            if email.is_some_and(|e| e == existing.email) {
                return Err(AppError::DuplicateKey(format!(
                    "email '{}' is already registered",
                    existing.email
                )));
            }
            if username.is_some_and(|n| n == existing.username) {
                return Err(AppError::DuplicateKey(format!(
                    "username '{}' is already taken",
                    existing.username
                )));
            }
        }
        Ok(())
    }
}
