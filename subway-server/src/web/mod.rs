//! Web layer for the subway path finder.
//!
//! Provides HTTP endpoints for path queries and read-only network views.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
