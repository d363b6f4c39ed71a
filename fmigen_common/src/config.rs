//! Generation configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{FmiGenError, Result};

/// How tolerant extraction is of sections that older model descriptions lack.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SchemaCompat {
    /// Missing `numberOfEventIndicators` or `ModelStructure` count as zero.
    #[default]
    Lenient,
    /// Missing `numberOfEventIndicators` or `ModelStructure` is a schema error.
    Strict,
}

/// Everything one generation run needs besides the document contents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateConfig {
    /// Model description to read.
    pub input: PathBuf,
    /// Base-class template argument.
    pub numeric_type: String,
    /// Shared object location embedded in the constructor call.
    pub shared_object_location: String,
    /// Resource location embedded in the constructor call.
    pub resource_location: String,
    /// Output stem; `.h` is appended.
    pub output_stem: Option<String>,
    /// Tolerance for sections older documents omit.
    pub compat: SchemaCompat,
}

impl GenerateConfig {
    /// Configuration for `input` with every other setting empty.
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            ..Default::default()
        }
    }

    /// Set the numeric type.
    pub fn with_numeric_type(mut self, numeric_type: impl Into<String>) -> Self {
        self.numeric_type = numeric_type.into();
        self
    }

    /// Set the shared object location.
    pub fn with_shared_object_location(mut self, location: impl Into<String>) -> Self {
        self.shared_object_location = location.into();
        self
    }

    /// Set the resource location.
    pub fn with_resource_location(mut self, location: impl Into<String>) -> Self {
        self.resource_location = location.into();
        self
    }

    /// Set or clear the output stem.
    pub fn with_output_stem(mut self, stem: Option<String>) -> Self {
        self.output_stem = stem;
        self
    }

    /// Set the schema compatibility mode.
    pub fn with_compat(mut self, compat: SchemaCompat) -> Self {
        self.compat = compat;
        self
    }

    /// The model description path.
    pub fn input(&self) -> &Path {
        &self.input
    }

    /// Path of the header to write: `<stem>.h`.
    ///
    /// Without an explicit stem, the input path minus its last four characters
    /// (normally `.xml`) is used.
    pub fn output_path(&self) -> Result<PathBuf> {
        let stem = match &self.output_stem {
            Some(stem) => stem.clone(),
            None => {
                let input = self.input.to_string_lossy();
                let mut chars = input.chars();
                if input.chars().count() < 4 {
                    return Err(FmiGenError::output(format!(
                        "cannot derive an output name from '{input}'"
                    )));
                }
                for _ in 0..4 {
                    chars.next_back();
                }
                chars.as_str().to_string()
            },
        };
        if stem.is_empty() {
            return Err(FmiGenError::output("output name is empty"));
        }
        Ok(PathBuf::from(format!("{stem}.h")))
    }
}
