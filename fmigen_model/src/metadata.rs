//! Model-level facts read from the document root and its named sections.

use fmigen_common::{FmiGenError, GenerateConfig, ModelMetadata, Result, SchemaCompat};
use tracing::{debug, warn};

use crate::document::{ModelDocument, XmlElement};

const ROOT_ELEMENT: &str = "fmiModelDescription";
const DERIVATIVES_PATH: &str = "ModelStructure/Derivatives/Unknown";

/// Read-only queries over a loaded model description.
#[derive(Debug, Clone, Copy)]
pub struct MetadataExtractor<'a> {
    doc: &'a ModelDocument,
    compat: SchemaCompat,
}

impl<'a> MetadataExtractor<'a> {
    /// Query `doc`, treating absent optional sections per `compat`.
    pub const fn new(doc: &'a ModelDocument, compat: SchemaCompat) -> Self {
        Self { doc, compat }
    }

    fn root(&self) -> Result<&'a XmlElement> {
        let root = self.doc.root();
        if root.name() != ROOT_ELEMENT {
            return Err(FmiGenError::schema(format!(
                "expected root element <{ROOT_ELEMENT}>, found <{}>",
                root.name()
            )));
        }
        Ok(root)
    }

    /// The root's `modelName`, dots kept.
    pub fn model_name(&self) -> Result<String> {
        self.root()?
            .attr("modelName")
            .map(str::to_string)
            .ok_or_else(|| FmiGenError::missing_attr(ROOT_ELEMENT, "modelName"))
    }

    /// The root's `guid`.
    pub fn guid(&self) -> Result<String> {
        self.root()?
            .attr("guid")
            .map(str::to_string)
            .ok_or_else(|| FmiGenError::missing_attr(ROOT_ELEMENT, "guid"))
    }

    /// The root's `numberOfEventIndicators`.
    pub fn event_indicator_count(&self) -> Result<u32> {
        match self.root()?.attr("numberOfEventIndicators") {
            Some(raw) => raw.trim().parse().map_err(|_| {
                FmiGenError::schema(format!("numberOfEventIndicators '{raw}' is not a count"))
            }),
            None if self.compat == SchemaCompat::Strict => Err(FmiGenError::missing_attr(
                ROOT_ELEMENT,
                "numberOfEventIndicators",
            )),
            None => {
                warn!("numberOfEventIndicators is absent; assuming 0");
                Ok(0)
            },
        }
    }

    /// Counts `ModelStructure/Derivatives/Unknown`, not derivative-named variables.
    pub fn derivative_count(&self) -> Result<u32> {
        let root = self.root()?;
        if !root.has("ModelStructure") {
            if self.compat == SchemaCompat::Strict {
                return Err(FmiGenError::schema("<ModelStructure> section is absent"));
            }
            warn!("ModelStructure is absent; assuming no state derivatives");
            return Ok(0);
        }
        let count = root.select(DERIVATIVES_PATH).len();
        u32::try_from(count)
            .map_err(|_| FmiGenError::schema(format!("{count} derivatives exceed the supported range")))
    }

    /// Whether any `<ModelExchange>` sets `providesDirectionalDerivative="true"`.
    pub fn provides_analytic_derivative(&self) -> Result<bool> {
        Ok(self
            .root()?
            .select("ModelExchange")
            .iter()
            .any(|me| me.attr("providesDirectionalDerivative") == Some("true")))
    }

    /// Combine the document facts with the caller-supplied locations and type.
    pub fn extract(&self, config: &GenerateConfig) -> Result<ModelMetadata> {
        let metadata = ModelMetadata {
            model_name: self.model_name()?,
            guid: self.guid()?,
            resource_location: config.resource_location.clone(),
            shared_object_location: config.shared_object_location.clone(),
            numeric_type: config.numeric_type.clone(),
            event_indicator_count: self.event_indicator_count()?,
            derivative_count: self.derivative_count()?,
            provides_analytic_derivative: self.provides_analytic_derivative()?,
        };
        debug!("Extracted metadata: {:?}", metadata);
        Ok(metadata)
    }
}
