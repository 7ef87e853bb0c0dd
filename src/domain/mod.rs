//! Core trip-request and quote types.

pub mod query;
pub mod quote;
pub mod types;
