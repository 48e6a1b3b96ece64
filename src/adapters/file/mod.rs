//! File-backed log store
//!
//! Useful for single-node deployments and local development.

pub mod store;

pub use store::FileLogStore;
