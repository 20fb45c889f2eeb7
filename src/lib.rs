//! School Registry
//!
//! A REST JSON API over schools, their teachers and the pupils linked to
//! those teachers, backed by PostgreSQL.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod db;
pub mod dto;
pub mod error;
pub mod mapper;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub services: Arc<services::Services>,
}
