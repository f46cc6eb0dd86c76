//! Command implementations for the shoplist CLI

pub mod serve;

pub use serve::run_serve;
