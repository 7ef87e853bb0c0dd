//! DTO modules that bridge services with templates.

pub mod bot;
pub mod quote;
