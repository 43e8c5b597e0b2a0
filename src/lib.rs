pub mod auth;
pub mod config;
pub mod error;
pub mod filter;
pub mod form;
pub mod models;
pub mod seed;
pub mod store;
pub mod ui;

pub use error::{AppError, Result};
