//! Foundation types for keepsake.
//!
//! This crate contains the host-agnostic types shared by all keepsake
//! crates: lesson records, configuration, and error types.

pub mod config;
pub mod error;
pub mod lesson;
