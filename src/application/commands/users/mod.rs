// src/application/commands/users/mod.rs
mod bootstrap;
mod login;
mod password;
mod service;

pub use bootstrap::BootstrapAdminCommand;
pub use login::{LoginResult, LoginUserCommand};
pub use service::UserCommandService;
