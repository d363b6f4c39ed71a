//! The load → extract → synthesize → write pipeline.

use std::path::{Path, PathBuf};

use fmigen_common::{FmiGenError, GenerateConfig, GenerationResult, ModelMetadata, Result};
use fmigen_model::{DocumentLoader, MetadataExtractor, VariableSet, XmlDocumentLoader, extract_variables};
use tracing::info;

use crate::builder::synthesize;

/// Everything produced by one run, before anything is written.
#[derive(Debug, Clone)]
pub struct Generation {
    /// Model-level facts.
    pub metadata: ModelMetadata,
    /// Extracted variables and diagnostics.
    pub variables: VariableSet,
    /// The synthesized header.
    pub header: GenerationResult,
}

/// Load the configured input with `loader` and synthesize its header.
pub fn build_header<L: DocumentLoader>(config: &GenerateConfig, loader: &L) -> Result<Generation> {
    let doc = loader.load(config.input())?;
    let metadata = MetadataExtractor::new(&doc, config.compat).extract(config)?;
    let variables = extract_variables(&doc)?;
    let header = synthesize(&metadata, &variables.variables)?;

    info!(
        "{}: {} variables ({} duplicates dropped, {} diagnostics), {} derivatives, {} event indicators",
        metadata.model_name,
        variables.len(),
        variables.dropped,
        variables.diagnostics.len(),
        metadata.derivative_count,
        metadata.event_indicator_count
    );

    Ok(Generation {
        metadata,
        variables,
        header,
    })
}

/// Write `header` to `path` in one pass.
pub fn write_header(path: &Path, header: &GenerationResult) -> Result<()> {
    std::fs::write(path, header.as_str()).map_err(|e| {
        FmiGenError::output(format!("failed to write '{}': {e}", path.display()))
    })
}

/// Run the whole pipeline with the XML loader and return the written path.
///
/// Nothing is written unless every stage succeeds.
pub fn generate(config: &GenerateConfig) -> Result<PathBuf> {
    let output = config.output_path()?;
    let generation = build_header(config, &XmlDocumentLoader::new())?;
    write_header(&output, &generation.header)?;
    info!("Wrote {}", output.display());
    Ok(output)
}
