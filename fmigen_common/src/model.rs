//! Data model shared by the extractors and the header synthesizer.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Primitive kind of a scalar variable, taken from its typed child element.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VariableKind {
    /// `<Real>`
    Real,
    /// `<Boolean>`
    Boolean,
    /// `<Integer>` or `<Enumeration>`
    Integer,
    /// `<String>`
    String,
    /// Any other child element. Holds the raw element name.
    Unknown(String),
}

impl VariableKind {
    /// Type used for the accessor's return value and parameter.
    pub fn cpp_type(&self) -> &str {
        match self {
            Self::Real => "double",
            Self::Boolean => "bool",
            Self::Integer => "int",
            Self::String => "std::string",
            Self::Unknown(raw) => raw,
        }
    }

    /// Suffix of the generic indexed accessor (`get_<suffix>` / `set_<suffix>`).
    pub fn accessor_suffix(&self) -> &str {
        match self {
            Self::Real => "real",
            Self::Boolean => "bool",
            Self::Integer => "int",
            Self::String => "string",
            Self::Unknown(raw) => raw,
        }
    }

    /// Whether this kind is one of the recognized primitive kinds.
    pub const fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown(_))
    }
}

impl Display for VariableKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Real => write!(f, "Real"),
            Self::Boolean => write!(f, "Boolean"),
            Self::Integer => write!(f, "Integer"),
            Self::String => write!(f, "String"),
            Self::Unknown(raw) => write!(f, "Unknown({raw})"),
        }
    }
}

/// One unique scalar variable declared by the model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariableRecord {
    /// Normalized name, unique within a run.
    pub name: String,
    /// The declaration's `valueReference`.
    pub index: u32,
    /// Primitive kind from the typed child element.
    pub kind: VariableKind,
    /// The declaration's `causality`, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub causality: Option<String>,
    /// The declaration's `variability`, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variability: Option<String>,
}

impl VariableRecord {
    /// Create a record without causality or variability.
    pub fn new(name: impl Into<String>, index: u32, kind: VariableKind) -> Self {
        Self {
            name: name.into(),
            index,
            kind,
            causality: None,
            variability: None,
        }
    }
}

/// Model-level facts forwarded to the generated constructor.
///
/// Built once per run from the document and the caller's flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelMetadata {
    /// `modelName` as declared in the document, dots included.
    pub model_name: String,
    /// The document's `guid`.
    pub guid: String,
    /// Resource location passed on the command line.
    pub resource_location: String,
    /// Shared object location passed on the command line.
    pub shared_object_location: String,
    /// Base-class template argument, e.g. `double`.
    pub numeric_type: String,
    /// `numberOfEventIndicators`, 0 when tolerated as absent.
    pub event_indicator_count: u32,
    /// Number of `ModelStructure/Derivatives/Unknown` entries.
    pub derivative_count: u32,
    /// Whether the model declares `providesDirectionalDerivative="true"`.
    pub provides_analytic_derivative: bool,
}

/// A non-fatal finding raised while extracting variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Normalized name of the variable the finding concerns.
    pub variable: String,
    /// What was wrong with it.
    pub message: String,
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.variable, self.message)
    }
}

/// The finished header text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationResult {
    text: String,
}

impl GenerationResult {
    /// Wrap finished header text.
    pub const fn new(text: String) -> Self {
        Self { text }
    }

    /// Borrow the header text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Take the header text.
    pub fn into_string(self) -> String {
        self.text
    }
}

impl Display for GenerationResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}
