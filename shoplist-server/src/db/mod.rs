//! Storage layer - in-memory store and repositories
//!
//! # Design Principles
//!
//! - One injected store per server, no global state
//! - A single lock guards every access
//! - Repositories borrow the caller's guard; they never lock on their own

pub mod store;
pub mod repos;

pub use store::{Items, Store};
pub use repos::*;
