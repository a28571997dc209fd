// src/application/queries/users/mod.rs
mod profile;
mod service;

pub use service::UserQueryService;
