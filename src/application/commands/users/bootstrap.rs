// src/application/commands/users/bootstrap.rs
use super::{UserCommandService, password::validate_password};
use crate::{
    application::{dto::UserDto, error::ApplicationResult},
    domain::user::{NewUser, PasswordHash, Username},
};

pub struct BootstrapAdminCommand {
    pub username: String,
    pub password: String,
}

impl UserCommandService {
    /// Create the first account. Does nothing once any user exists.
    pub async fn bootstrap_admin(
        &self,
        command: BootstrapAdminCommand,
    ) -> ApplicationResult<Option<UserDto>> {
        if self.user_repo.count().await? > 0 {
            tracing::debug!("users already present; skipping admin bootstrap");
            return Ok(None);
        }

        let username = Username::new(command.username)?;
        validate_password(&command.password)?;
        let hash = self.password_hasher.hash(&command.password).await?;

        let user = self
            .user_repo
            .insert(NewUser {
                username,
                password_hash: PasswordHash::new(hash)?,
                created_at: self.clock.now(),
            })
            .await?;
        tracing::info!(user_id = %user.id, "bootstrapped admin account");
        Ok(Some(user.into()))
    }
}
