//! Device Gateway Library
//!
//! Core modules for the device catalog and command-dispatch gateway.

pub mod app;
pub mod authn;
pub mod catalog;
pub mod dispatch;
pub mod errors;
pub mod http;
pub mod logs;
pub mod models;
pub mod server;
pub mod utils;
