//! SQL for the API: fixed statements, values only as parameters.

pub mod params;
pub mod statements;
pub use params::*;
