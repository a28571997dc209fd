// src/application/commands/users/login.rs
use super::UserCommandService;
use crate::{
    application::{
        dto::{AuthTokenDto, TokenSubject, UserDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::{User, Username},
};

pub struct LoginUserCommand {
    pub username: String,
    pub password: String,
}

pub struct LoginResult {
    pub token: AuthTokenDto,
    pub user: UserDto,
}

impl UserCommandService {
    pub async fn login(&self, command: LoginUserCommand) -> ApplicationResult<LoginResult> {
        // Malformed usernames get the same answer as wrong passwords.
        let username = Username::new(command.username)
            .map_err(|_| ApplicationError::unauthorized("invalid credentials"))?;
        let user = self.authenticate(&username, &command.password).await?;

        let token = self
            .token_manager
            .issue(TokenSubject {
                user_id: user.id,
                username: user.username.to_string(),
            })
            .await?;
        tracing::info!(user_id = %user.id, "user signed in");

        Ok(LoginResult {
            token,
            user: user.into(),
        })
    }

    async fn authenticate(&self, username: &Username, password: &str) -> ApplicationResult<User> {
        let user = self
            .user_repo
            .find_by_username(username)
            .await?
            .ok_or_else(|| ApplicationError::unauthorized("invalid credentials"))?;

        self.password_hasher
            .verify(password, user.password_hash.as_str())
            .await
            .map_err(|_| ApplicationError::unauthorized("invalid credentials"))?;

        Ok(user)
    }
}
