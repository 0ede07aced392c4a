//! Product and tag records
//!
//! Only `id` is required. Every other field is kept as raw JSON in `fields`
//! and read leniently, so a loosely typed record still loads and `--json`
//! output passes it through unmodified.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

/// Product identifier, either numeric (any JSON number) or textual
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProductId {
    Number(Number),
    Text(String),
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductId::Number(n) => write!(f, "{}", n),
            ProductId::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<u64> for ProductId {
    fn from(n: u64) -> Self {
        ProductId::Number(n.into())
    }
}

impl From<&str> for ProductId {
    fn from(s: &str) -> Self {
        ProductId::Text(s.to_string())
    }
}

/// A labeled category attached to a product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    /// Human-readable title, used for search matching
    #[serde(default)]
    pub title: String,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Tag {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            extra: Map::new(),
        }
    }
}

/// A single product card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,

    /// Every other field of the source record, as loaded
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Product {
    /// Field names read by the card renderers
    pub const KNOWN_FIELDS: [&'static str; 4] = ["title", "description", "price", "tags"];

    /// Create a bare product with only an id
    pub fn new(id: impl Into<ProductId>) -> Self {
        Self {
            id: id.into(),
            fields: Map::new(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.fields.insert("title".into(), Value::String(title.into()));
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.fields
            .insert("description".into(), Value::String(description.into()));
        self
    }

    pub fn with_price(mut self, price: f64) -> Self {
        if let Some(n) = Number::from_f64(price) {
            self.fields.insert("price".into(), Value::Number(n));
        }
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tags: Vec<Value> = tags
            .into_iter()
            .map(|t| serde_json::json!({ "title": t.into() }))
            .collect();
        self.fields.insert("tags".into(), Value::Array(tags));
        self
    }

    pub fn title(&self) -> Option<&str> {
        self.fields.get("title").and_then(Value::as_str)
    }

    pub fn description(&self) -> Option<&str> {
        self.fields.get("description").and_then(Value::as_str)
    }

    /// Price as a number, accepting numeric strings such as "9.99"
    pub fn price(&self) -> Option<f64> {
        match self.fields.get("price")? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// Tags in order, or `None` when the field is missing or not a list
    ///
    /// Entries that are not objects are skipped. A tag without a string
    /// title gets an empty one.
    pub fn tags(&self) -> Option<Vec<Tag>> {
        let tags = self.fields.get("tags")?.as_array()?;
        Some(
            tags.iter()
                .filter_map(|tag| Tag::deserialize(tag).ok().or_else(|| untitled_tag(tag)))
                .collect(),
        )
    }

    /// Title shown on the card, falling back to the id
    pub fn display_title(&self) -> String {
        match self.title() {
            Some(title) if !title.trim().is_empty() => title.to_string(),
            _ => format!("Product #{}", self.id),
        }
    }

    /// Tag titles in order, empty when the product has no usable tags
    pub fn tag_titles(&self) -> impl Iterator<Item = &str> {
        self.fields
            .get("tags")
            .and_then(Value::as_array)
            .into_iter()
            .flatten()
            .filter_map(|tag| tag.get("title").and_then(Value::as_str))
    }

    /// Fields other than the ones the card renders itself
    pub fn other_fields(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.fields
            .iter()
            .filter(|(key, _)| !Self::KNOWN_FIELDS.contains(&key.as_str()))
    }
}

/// Tag object whose title is present but not a string
fn untitled_tag(tag: &Value) -> Option<Tag> {
    let mut extra = tag.as_object()?.clone();
    extra.remove("title");
    Some(Tag {
        title: String::new(),
        extra,
    })
}
