#![forbid(unsafe_code)]
//! Client library for the Northbank membership backend.
//!
//! Every request the portal makes goes through [`http`]; the per-concern
//! modules (`auth`, `profile`, `news`, `football`, `events`) pin the paths
//! and parameter types. [`session`] layers the login bootstrap pipeline on
//! top. Nothing here touches UI state.

pub mod auth;
pub mod config;
pub mod error;
pub mod events;
pub mod football;
pub mod http;
pub mod models;
pub mod news;
pub mod profile;
pub mod session;
pub mod validate;

pub use error::ApiError;
pub use session::Session;
