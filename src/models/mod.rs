//! Data models

pub mod device;
