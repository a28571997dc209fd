// src/application/queries/users/service.rs
use std::sync::Arc;

use crate::application::ports::time::Clock;
use crate::domain::user::UserRepository;

pub struct UserQueryService {
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) clock: Arc<dyn Clock>,
}

impl UserQueryService {
    pub fn new(user_repo: Arc<dyn UserRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { user_repo, clock }
    }
}
