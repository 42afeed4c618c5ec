//! Runtime configuration.

mod db;
pub use db::*;
