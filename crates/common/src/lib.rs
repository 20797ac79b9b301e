//! Shared runtime helpers: logging setup and environment preparation.

pub mod utils;
pub mod env;
