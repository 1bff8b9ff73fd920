//! # pspretty-common
//!
//! Shared types for pspretty.
//!
//! This crate provides:
//! - The container record model parsed from a runtime's listing output
//! - Common error types

#![warn(missing_docs)]

pub mod error;
pub mod record;

pub use error::{PsError, PsResult};
pub use record::{ContainerRecord, WELL_KNOWN_FIELDS};
