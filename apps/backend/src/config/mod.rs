//! Runtime configuration read from the environment.

pub mod server;
pub mod store;
