#[cfg(feature = "server")]
pub mod backend;
pub mod dialogue;
pub mod domain;
pub mod dto;
pub mod forms;
#[cfg(feature = "server")]
pub mod models;
pub mod pager;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "server")]
mod server;
#[cfg(feature = "server")]
pub mod services;
pub mod state;
#[cfg(feature = "server")]
pub mod store;

#[cfg(feature = "server")]
pub use server::{configure, run};
