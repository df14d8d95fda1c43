use super::{EnumVariant, Value};
use crate::schema::ModelSchema;

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use rust_decimal::Decimal;

/// The declared type of a field.
#[derive(Debug, Clone)]
pub enum Type {
    Bool,
    I16,
    I32,
    I64,
    F64,
    Decimal,
    String,
    DateTime,
    Bytes,

    /// An enumeration with its variant table
    Enum(&'static [EnumVariant]),

    /// A list of a single type
    List(Box<Type>),

    /// A string-keyed map of a single value type
    Map(Box<Type>),

    /// A nested record described by its own schema
    Record(fn() -> &'static ModelSchema),
}

impl Type {
    pub fn list(ty: impl Into<Self>) -> Self {
        Self::List(Box::new(ty.into()))
    }

    pub fn map(ty: impl Into<Self>) -> Self {
        Self::Map(Box::new(ty.into()))
    }

    pub fn is_bool(&self) -> bool {
        matches!(self, Self::Bool)
    }

    /// Types stored as a single scalar property.
    pub fn is_scalar(&self) -> bool {
        !matches!(self, Self::List(_) | Self::Map(_) | Self::Record(_))
    }

    /// The value a field of this type takes when nothing is stored.
    pub fn zero(&self) -> Value {
        match self {
            Type::Bool => Value::Bool(false),
            Type::I16 => Value::I16(0),
            Type::I32 => Value::I32(0),
            Type::I64 => Value::I64(0),
            Type::F64 => Value::F64(0.0),
            Type::Decimal => Value::Decimal(Decimal::ZERO),
            Type::String => Value::String(String::new()),
            Type::DateTime => Value::DateTime(DateTime::<Utc>::default()),
            Type::Bytes => Value::Bytes(vec![]),
            Type::Enum(variants) => EnumVariant::by_discriminant(variants, 0)
                .or_else(|| variants.first().copied())
                .map(|variant| Value::Enum(variant.into()))
                .unwrap_or(Value::Null),
            Type::List(_) => Value::List(vec![]),
            Type::Map(_) => Value::Map(IndexMap::new()),
            Type::Record(_) => Value::Null,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Type::Bool => "Bool",
            Type::I16 => "I16",
            Type::I32 => "I32",
            Type::I64 => "I64",
            Type::F64 => "F64",
            Type::Decimal => "Decimal",
            Type::String => "String",
            Type::DateTime => "DateTime",
            Type::Bytes => "Bytes",
            Type::Enum(_) => "Enum",
            Type::List(_) => "List",
            Type::Map(_) => "Map",
            Type::Record(_) => "Record",
        }
    }
}
