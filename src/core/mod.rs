//! Core data structures for permission checking
//!
//! This module contains the value types every check is written against.

pub mod models;
