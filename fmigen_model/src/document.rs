//! Owned, navigable element tree produced by a [`DocumentLoader`](crate::DocumentLoader).

use indexmap::IndexMap;

/// One element of a model description. Text content and comments are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XmlElement {
    name: String,
    attributes: IndexMap<String, String>,
    children: Vec<XmlElement>,
}

impl XmlElement {
    /// Create an element with no attributes or children.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Add or replace an attribute.
    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Append a child element.
    pub fn with_child(mut self, child: Self) -> Self {
        self.children.push(child);
        self
    }

    /// Local element name, without namespace prefix.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Value of attribute `key`.
    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    /// Child elements in document order.
    pub fn children(&self) -> &[Self] {
        &self.children
    }

    /// First child element named `name`.
    pub fn child(&self, name: &str) -> Option<&Self> {
        self.children.iter().find(|c| c.name == name)
    }

    /// All descendants reached by following `path` (`/`-separated child
    /// names) from this element, in document order.
    pub fn select(&self, path: &str) -> Vec<&Self> {
        let mut current = vec![self];
        for step in path.split('/').filter(|s| !s.is_empty()) {
            current = current
                .into_iter()
                .flat_map(|e| e.children.iter().filter(move |c| c.name == step))
                .collect();
        }
        current
    }

    /// Whether at least one element matches `path`.
    pub fn has(&self, path: &str) -> bool {
        !self.select(path).is_empty()
    }
}

/// A loaded model description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelDocument {
    root: XmlElement,
}

impl ModelDocument {
    /// Wrap a root element.
    pub const fn new(root: XmlElement) -> Self {
        Self { root }
    }

    /// The document's root element.
    pub const fn root(&self) -> &XmlElement {
        &self.root
    }
}
