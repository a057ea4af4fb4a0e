//! Parsed Overpass-style export documents.
//!
//! A [`RawDocument`] is the generic JSON value handed over by the loader. It
//! enforces no schema: the extractor decides per element what it can use.

use serde_json::{Map, Value};

/// Key holding the element sequence in an Overpass export.
pub const ELEMENTS_KEY: &str = "elements";

/// A parsed JSON document awaiting extraction.
///
/// # Examples
/// ```
/// use amenity_core::RawDocument;
/// use serde_json::json;
///
/// let doc = RawDocument::from(json!({"elements": []}));
/// assert_eq!(doc.elements().map(<[_]>::len), Some(0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RawDocument {
    value: Value,
}

impl RawDocument {
    /// Wrap an already parsed JSON value.
    #[must_use]
    pub const fn new(value: Value) -> Self {
        Self { value }
    }

    /// Borrow the underlying JSON value.
    #[must_use]
    pub const fn as_value(&self) -> &Value {
        &self.value
    }

    /// Consume the document, returning the JSON value.
    #[must_use]
    pub fn into_value(self) -> Value {
        self.value
    }

    /// The `elements` sequence, when the document is an object carrying one.
    ///
    /// Returns `None` for non-object documents, a missing key, or an
    /// `elements` value that is not an array.
    #[must_use]
    pub fn elements(&self) -> Option<&[Value]> {
        self.value
            .as_object()
            .and_then(|root| root.get(ELEMENTS_KEY))
            .and_then(Value::as_array)
            .map(Vec::as_slice)
    }
}

impl From<Value> for RawDocument {
    fn from(value: Value) -> Self {
        Self::new(value)
    }
}

impl From<Map<String, Value>> for RawDocument {
    fn from(map: Map<String, Value>) -> Self {
        Self::new(Value::Object(map))
    }
}
