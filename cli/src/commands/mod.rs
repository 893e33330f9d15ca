//! Command implementations

pub mod config;
pub mod info;
pub mod new;
pub mod validate;
pub mod version;
