//! Utility modules
//!
//! Error handling and logging shared by the rest of the crate.

pub mod error;
pub mod logging;
