//! In-memory JSON-LD tree
//!
//! Objects keep their keys in insertion order so `@context` always leads
//! and rows appear in the order they were written in the sheet.

use indexmap::IndexMap;
use serde::Serialize;

/// Ordered JSON object. Re-inserting a key keeps its first position.
pub type Object = IndexMap<String, Node>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Node {
    String(String),
    Array(Vec<Node>),
    Object(Object),
}

impl Node {
    pub fn string(value: impl Into<String>) -> Self {
        Self::String(value.into())
    }

    pub fn strings<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Array(values.into_iter().map(Node::string).collect())
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Self::Object(object) => Some(object),
            _ => None,
        }
    }
}

impl From<Object> for Node {
    fn from(object: Object) -> Self {
        Self::Object(object)
    }
}
