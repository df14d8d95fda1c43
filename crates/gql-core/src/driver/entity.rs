use super::Key;

use chrono::{DateTime, Utc};
use indexmap::IndexMap;

/// Properties of one entity, keyed by property name.
pub type PropertyBag = IndexMap<String, Property>;

/// An entity as the store sends and receives it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Entity {
    pub key: Option<Key>,
    pub properties: PropertyBag,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    pub value: PropertyValue,
    pub indexed: bool,
}

/// A wire-level property value.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    Null,
    Boolean(bool),
    Integer(i64),
    Double(f64),
    String(String),
    Timestamp(DateTime<Utc>),

    /// Base64-encoded bytes
    Blob(String),
    Key(Key),
    Entity(PropertyBag),
    List(Vec<Property>),
}

impl Entity {
    pub fn new(key: Option<Key>) -> Self {
        Self {
            key,
            properties: PropertyBag::new(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Property> {
        self.properties.get(name)
    }

    pub fn insert(&mut self, name: impl Into<String>, property: Property) {
        self.properties.insert(name.into(), property);
    }

    pub fn with(mut self, name: impl Into<String>, property: Property) -> Self {
        self.insert(name, property);
        self
    }
}

impl Property {
    pub fn indexed(value: PropertyValue) -> Self {
        Self {
            value,
            indexed: true,
        }
    }

    pub fn unindexed(value: PropertyValue) -> Self {
        Self {
            value,
            indexed: false,
        }
    }
}

impl PropertyValue {
    /// The variant name, used in conversion errors.
    pub fn kind(&self) -> &'static str {
        match self {
            PropertyValue::Null => "null",
            PropertyValue::Boolean(_) => "boolean",
            PropertyValue::Integer(_) => "integer",
            PropertyValue::Double(_) => "double",
            PropertyValue::String(_) => "string",
            PropertyValue::Timestamp(_) => "timestamp",
            PropertyValue::Blob(_) => "blob",
            PropertyValue::Key(_) => "key",
            PropertyValue::Entity(_) => "entity",
            PropertyValue::List(_) => "list",
        }
    }
}
