//! Device catalog

pub mod seed;
pub mod store;
