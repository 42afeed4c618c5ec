//! Course API: REST access to the `courses` and `assignments` tables.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod response;
pub mod routes;
pub mod sql;
pub mod state;
pub mod store;

pub use config::{DbConfig, PoolSettings};
pub use error::{AppError, StorageError};
pub use routes::{app, PORT};
pub use state::AppState;
pub use store::create_pool;
