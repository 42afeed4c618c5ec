//! HTTP handlers: one statement per route.

pub mod assignment;
pub mod course;
pub use assignment::*;
pub use course::*;
