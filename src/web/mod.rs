//! Web server module
//!
//! Provides the HTTP API surface for PricePeek.

mod error;
mod handlers;
mod routes;
mod state;

pub use error::ApiError;
pub use routes::create_router;
pub use state::AppState;
