//! Repository implementations over the in-memory store

pub mod items;

pub use items::{ItemRepo, RepoError, RepoResult};
