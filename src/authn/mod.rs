//! Authentication

pub mod service;
pub mod tokens;
pub mod users;
