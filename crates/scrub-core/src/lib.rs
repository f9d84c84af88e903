//! Core types for scrub
//!
//! This crate contains:
//! - The error taxonomy shared by every stage of the pipeline
//! - Loading and atomically saving property-list documents

pub mod document;
pub mod error;

pub use document::{OutputFormat, load_document, save_document};
pub use error::{Result, ScrubError};
pub use plist::{Dictionary, Value};
