// src/application/queries/users/profile.rs
use super::UserQueryService;
use crate::application::{
    dto::{AuthenticatedUser, UserProfileDto},
    error::{ApplicationError, ApplicationResult},
};

impl UserQueryService {
    /// The signed-in actor, with the remaining lifetime of its token.
    pub async fn get_profile(&self, actor: &AuthenticatedUser) -> ApplicationResult<UserProfileDto> {
        let user = self
            .user_repo
            .find_by_id(actor.id)
            .await?
            .ok_or_else(|| ApplicationError::unauthorized("account no longer exists"))?;

        Ok(UserProfileDto::from_parts(user, actor, self.clock.now()))
    }
}
