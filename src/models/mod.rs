//! Runtime configuration and request-scoped models.

pub mod config;
pub mod visitor;
