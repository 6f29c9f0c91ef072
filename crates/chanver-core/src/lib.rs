//! Release channel resolution and download integrity checks for chanver.

pub mod artifact;
pub mod checksum;
pub mod config;
pub mod error;
pub mod logging;
pub mod manifest;
pub mod messages;
pub mod paths;
pub mod release;
pub mod verify;

pub use error::{Error, Result};
