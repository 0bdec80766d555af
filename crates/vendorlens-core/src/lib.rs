//! VendorLens Core: configuration and the shared error type.

pub mod config;
pub mod error;

pub use config::VendorLensConfig;
pub use error::{Error, Result};
