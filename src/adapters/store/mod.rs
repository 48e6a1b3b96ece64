//! Log store abstraction layer
//!
//! The audit logger depends only on the [`LogStore`] trait; concrete
//! adapters live in [`crate::adapters::postgresql`] and
//! [`crate::adapters::file`].

pub mod factory;
pub mod traits;

pub use factory::create_log_store;
pub use traits::LogStore;
