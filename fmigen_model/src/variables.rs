//! Scalar variable extraction and deduplication.

use fmigen_common::naming::normalize_variable_name;
use fmigen_common::{Diagnostic, FmiGenError, Result, VariableKind, VariableRecord};
use indexmap::IndexMap;
use indexmap::map::Entry;
use tracing::{debug, warn};

use crate::document::{ModelDocument, XmlElement};

const SCALAR_VARIABLE_PATH: &str = "ModelVariables/ScalarVariable";

/// Typed child elements in classification priority order.
const KIND_ELEMENTS: [(&str, VariableKind); 5] = [
    ("Real", VariableKind::Real),
    ("Boolean", VariableKind::Boolean),
    ("Integer", VariableKind::Integer),
    ("String", VariableKind::String),
    ("Enumeration", VariableKind::Integer),
];

/// Output of one extraction: unique variables in first-declaration order plus
/// any non-fatal diagnostics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariableSet {
    /// Unique variables.
    pub variables: Vec<VariableRecord>,
    /// Unrecognized kinds and similar non-fatal findings.
    pub diagnostics: Vec<Diagnostic>,
    /// Declarations dropped because their normalized name was already taken.
    pub dropped: usize,
}

impl VariableSet {
    /// Number of unique variables.
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Whether no variables were found.
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Whether any variable has the String kind.
    pub fn uses_strings(&self) -> bool {
        self.variables.iter().any(|v| v.kind == VariableKind::String)
    }
}

/// Classify a `<ScalarVariable>` by its typed child.
///
/// Returns `Unknown` with the first child's name (empty if there is none)
/// when no recognized child is present.
pub fn classify(element: &XmlElement) -> VariableKind {
    for (tag, kind) in &KIND_ELEMENTS {
        if element.child(tag).is_some() {
            return kind.clone();
        }
    }
    let raw = element
        .children()
        .first()
        .map(|c| c.name().to_string())
        .unwrap_or_default();
    VariableKind::Unknown(raw)
}

fn read_record(element: &XmlElement) -> Result<VariableRecord> {
    let raw_name = element
        .attr("name")
        .ok_or_else(|| FmiGenError::missing_attr("ScalarVariable", "name"))?;
    let name = normalize_variable_name(raw_name);

    let raw_index = element.attr("valueReference").ok_or_else(|| {
        FmiGenError::schema(format!(
            "<ScalarVariable name=\"{raw_name}\"> is missing required attribute 'valueReference'"
        ))
    })?;
    let index = raw_index.trim().parse::<u32>().map_err(|_| {
        FmiGenError::schema(format!(
            "valueReference '{raw_index}' of '{raw_name}' is not an unsigned integer"
        ))
    })?;

    let mut record = VariableRecord::new(name, index, classify(element));
    record.causality = element.attr("causality").map(str::to_string);
    record.variability = element.attr("variability").map(str::to_string);
    Ok(record)
}

/// Collect every `ModelVariables/ScalarVariable` in document order.
///
/// The first declaration of each normalized name wins; later ones are dropped.
/// The seen-set lives only for the duration of this call.
pub fn extract_variables(doc: &ModelDocument) -> Result<VariableSet> {
    let mut seen: IndexMap<String, VariableRecord> = IndexMap::new();
    let mut diagnostics = Vec::new();
    let mut dropped = 0;

    for element in doc.root().select(SCALAR_VARIABLE_PATH) {
        let record = read_record(element)?;
        match seen.entry(record.name.clone()) {
            Entry::Occupied(_) => {
                debug!(
                    "Dropping '{}' (valueReference {}): name already declared",
                    record.name, record.index
                );
                dropped += 1;
            },
            Entry::Vacant(slot) => {
                if let VariableKind::Unknown(raw) = &record.kind {
                    let message = if raw.is_empty() {
                        "no type element; accessor uses an empty type".to_string()
                    } else {
                        format!("unrecognized type element <{raw}>; accessor uses '{raw}' verbatim")
                    };
                    warn!("{}: {}", record.name, message);
                    diagnostics.push(Diagnostic {
                        variable: record.name.clone(),
                        message,
                    });
                }
                debug!(
                    "Variable '{}' -> {} @ {}",
                    record.name, record.kind, record.index
                );
                slot.insert(record);
            },
        }
    }

    Ok(VariableSet {
        variables: seen.into_values().collect(),
        diagnostics,
        dropped,
    })
}
