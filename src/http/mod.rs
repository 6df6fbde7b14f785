//! Outbound HTTP communication with the execution agent

pub mod client;
