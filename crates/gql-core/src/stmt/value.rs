use super::*;
use crate::{driver::Key, Error, Result};

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use rust_decimal::Decimal;

/// A dynamically typed value.
///
/// The variant doubles as the declared type tag of a bound query parameter.
#[derive(Debug, Default, Clone, PartialEq)]
pub enum Value {
    /// Null value
    #[default]
    Null,

    /// Boolean value
    Bool(bool),

    /// Signed 16-bit integer
    I16(i16),

    /// Signed 32-bit integer
    I32(i32),

    /// Signed 64-bit integer
    I64(i64),

    /// Double precision float
    F64(f64),

    /// Exact decimal number
    Decimal(Decimal),

    /// String value
    String(String),

    /// Instant in UTC
    DateTime(DateTime<Utc>),

    /// Opaque bytes
    Bytes(Vec<u8>),

    /// Value of an enumerated type
    Enum(ValueEnum),

    /// A reference to a stored entity
    Key(Key),

    /// A list of values of the same type
    List(Vec<Value>),

    /// String-keyed entries, in insertion order
    Map(IndexMap<String, Value>),

    /// A nested record
    Record(ValueRecord),
}

impl Value {
    pub const fn null() -> Self {
        Self::Null
    }

    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub const fn is_bool(&self) -> bool {
        matches!(self, Self::Bool(_))
    }

    pub fn record_from_vec(fields: Vec<Self>) -> Self {
        ValueRecord::from_vec(fields).into()
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(v) => Some(&**v),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match *self {
            Self::Bool(v) => Some(v),
            _ => None,
        }
    }

    /// Widens any integer variant to `i64`.
    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Self::I16(v) => Some(v.into()),
            Self::I32(v) => Some(v.into()),
            Self::I64(v) => Some(v),
            _ => None,
        }
    }

    pub fn to_record(self) -> Result<ValueRecord> {
        match self {
            Self::Record(record) => Ok(record),
            _ => Err(Error::type_conversion(self, "record")),
        }
    }

    pub fn to_list(self) -> Result<Vec<Value>> {
        match self {
            Self::List(items) => Ok(items),
            _ => Err(Error::type_conversion(self, "list")),
        }
    }

    pub fn to_map(self) -> Result<IndexMap<String, Value>> {
        match self {
            Self::Map(entries) => Ok(entries),
            _ => Err(Error::type_conversion(self, "map")),
        }
    }

    /// Returns `true` for null, empty strings and empty collections.
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Null => true,
            Self::String(v) => v.trim().is_empty(),
            Self::List(v) => v.is_empty(),
            Self::Map(v) => v.is_empty(),
            _ => false,
        }
    }
}

macro_rules! impl_value_conversions {
    ($( $ty:ty => $variant:ident, $lit:literal; )*) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Self::$variant(value)
                }
            }

            impl TryFrom<Value> for $ty {
                type Error = Error;

                fn try_from(value: Value) -> Result<Self> {
                    match value {
                        Value::$variant(value) => Ok(value),
                        _ => Err(Error::type_conversion(value, $lit)),
                    }
                }
            }
        )*
    };
}

impl_value_conversions! {
    bool => Bool, "bool";
    i16 => I16, "i16";
    i32 => I32, "i32";
    i64 => I64, "i64";
    f64 => F64, "f64";
    Decimal => Decimal, "Decimal";
    String => String, "String";
    Vec<u8> => Bytes, "Vec<u8>";
    Key => Key, "Key";
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl<T> From<Option<T>> for Value
where
    Value: From<T>,
{
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Value::from(value),
            None => Value::Null,
        }
    }
}
