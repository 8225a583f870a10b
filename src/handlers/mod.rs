//! HTTP handlers for the students API.

pub mod students;
pub use students::*;
