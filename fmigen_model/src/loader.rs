//! Document loading.
//!
//! Extraction only ever sees a [`ModelDocument`]; how the text is parsed is
//! private to the loader implementation.

use std::path::Path;

use fmigen_common::{FmiGenError, Result};
use tracing::debug;

use crate::document::{ModelDocument, XmlElement};

/// Produces a [`ModelDocument`] from a file or from text.
pub trait DocumentLoader {
    /// Parse `text`. `origin` names the source in error messages.
    fn load_str(&self, text: &str, origin: &Path) -> Result<ModelDocument>;

    /// Read and parse the file at `path`.
    ///
    /// The file is fully read and closed before parsing starts.
    fn load(&self, path: &Path) -> Result<ModelDocument> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| FmiGenError::parse(path, format!("cannot read file: {e}")))?;
        self.load_str(&text, path)
    }
}

/// [`DocumentLoader`] backed by `roxmltree`.
#[derive(Debug, Clone, Copy, Default)]
pub struct XmlDocumentLoader;

impl XmlDocumentLoader {
    /// Create a loader.
    pub const fn new() -> Self {
        Self
    }

    fn convert(node: roxmltree::Node<'_, '_>) -> XmlElement {
        let mut element = XmlElement::new(node.tag_name().name());
        for attr in node.attributes() {
            element = element.with_attr(attr.name(), attr.value());
        }
        for child in node.children().filter(roxmltree::Node::is_element) {
            element = element.with_child(Self::convert(child));
        }
        element
    }
}

impl DocumentLoader for XmlDocumentLoader {
    fn load_str(&self, text: &str, origin: &Path) -> Result<ModelDocument> {
        let doc = roxmltree::Document::parse(text)
            .map_err(|e| FmiGenError::parse(origin, e.to_string()))?;
        let root = Self::convert(doc.root_element());
        debug!(
            "Loaded '{}' with root <{}>",
            origin.display(),
            root.name()
        );
        Ok(ModelDocument::new(root))
    }
}
