//! Model description loading and extraction.
//!
//! This crate turns a model description file into the [`ModelMetadata`] and
//! deduplicated [`VariableRecord`] list the header synthesizer consumes.
//!
//! [`ModelMetadata`]: fmigen_common::ModelMetadata
//! [`VariableRecord`]: fmigen_common::VariableRecord

pub mod document;
pub mod loader;
pub mod metadata;
pub mod variables;

pub use document::{ModelDocument, XmlElement};
pub use loader::{DocumentLoader, XmlDocumentLoader};
pub use metadata::MetadataExtractor;
pub use variables::{VariableSet, classify, extract_variables};
