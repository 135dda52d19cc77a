use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use anyhow::anyhow;
use async_trait::async_trait;
use chrono::Utc;

use crate::user_repo::UserRepoError::{EmailNotFound, UserAlreadyExists, UserNotFound};
use crate::user_repo::{NewUser, User, UserRepo, UserRepoError};

struct State {
    users: Vec<User>,
    next_id: i64,
}

pub struct MemUserRepo {
    state: RwLock<State>,
}

impl MemUserRepo {
    pub fn new() -> MemUserRepo {
        let state = State {
            users: Vec::new(),
            next_id: 1,
        };
        MemUserRepo {
            state: RwLock::new(state),
        }
    }

    fn read_lock(&self) -> Result<RwLockReadGuard<State>, anyhow::Error> {
        self.state
            .read()
            .map_err(|_| anyhow!("Unable to acquire lock"))
    }

    fn write_lock(&self) -> Result<RwLockWriteGuard<State>, anyhow::Error> {
        self.state
            .write()
            .map_err(|_| anyhow!("Unable to acquire lock"))
    }
}

#[async_trait]
impl UserRepo for MemUserRepo {
    async fn create_user(&self, new_user: NewUser) -> Result<User, UserRepoError> {
        let mut write_guard = self.write_lock()?;

        let taken = write_guard
            .users
            .iter()
            .any(|u| u.username == new_user.username || u.email == new_user.email);
        if taken {
            return Err(UserAlreadyExists);
        }

        let id = write_guard.next_id;
        write_guard.next_id += 1;

        let user = User::new(
            id,
            new_user.username,
            new_user.email,
            new_user.password_hash,
            Utc::now(),
        );
        write_guard.users.push(user.clone());

        Ok(user)
    }

    async fn get_user(&self, user_id: i64) -> Result<User, UserRepoError> {
        let read_guard = self.read_lock()?;

        let Some(user) = read_guard.users.iter().find(|u| u.id == user_id) else {
            return Err(UserNotFound(user_id));
        };
        Ok(user.clone())
    }

    async fn get_user_by_email(&self, email: &str) -> Result<User, UserRepoError> {
        let read_guard = self.read_lock()?;

        let Some(user) = read_guard.users.iter().find(|u| u.email == email) else {
            return Err(EmailNotFound(email.to_owned()));
        };
        Ok(user.clone())
    }
}
