//! Common types for the fmigen workspace.
//!
//! This crate provides the data model, error type, generation configuration and
//! naming helpers shared by the extractors, the header synthesizer and the CLI.

mod config;
mod error;
mod model;
pub mod naming;

pub use crate::config::*;
pub use crate::error::*;
pub use crate::model::*;
