//! CLI command implementations
//!
//! Each command returns `anyhow::Result<i32>` where the integer is the
//! process exit code: 0 success, 2 configuration error, 3 invalid input,
//! 4 store or connection error, 5 fatal.

pub mod decrypt;
pub mod init;
pub mod keygen;
pub mod migrate;
pub mod record;
pub mod validate;
