//! Core types and shared functionality for jobpost.
//!
//! This crate provides:
//! - Platform detection for job-posting URLs
//! - In-memory description cache with TTL sweeping
//! - Unified error types
//! - Configuration structures

pub mod cache;
pub mod config;
pub mod error;
pub mod platform;

pub use cache::{CacheSweeper, DescriptionCache};
pub use config::{AppConfig, ConfigError};
pub use error::{Error, ErrorKind};
pub use platform::Platform;
