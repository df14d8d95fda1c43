use base64::{engine::general_purpose::STANDARD, Engine as _};
use chrono::{DateTime, Utc};
use gql_core::{
    driver::{Property, PropertyValue},
    stmt::{EnumVariant, Type, Value},
    Error, Result,
};
use rust_decimal::Decimal;

use std::str::FromStr;

/// Converts a value to its wire form.
///
/// Enums travel as their discriminant and decimals as invariant strings.
/// Maps and records have no scalar wire form; the serializer flattens and
/// nests them.
pub fn to_property_value(value: &Value) -> Result<PropertyValue> {
    use PropertyValue as PV;

    Ok(match value {
        Value::Null => PV::Null,
        Value::Bool(v) => PV::Boolean(*v),
        Value::I16(v) => PV::Integer((*v).into()),
        Value::I32(v) => PV::Integer((*v).into()),
        Value::I64(v) => PV::Integer(*v),
        Value::F64(v) => PV::Double(*v),
        Value::Decimal(v) => PV::String(v.to_string()),
        Value::String(v) => PV::String(v.clone()),
        Value::DateTime(v) => PV::Timestamp(*v),
        Value::Bytes(v) => PV::Blob(STANDARD.encode(v)),
        Value::Enum(v) => PV::Integer(v.discriminant),
        Value::Key(v) => PV::Key(v.clone()),
        Value::List(items) => PV::List(
            items
                .iter()
                .map(|item| Ok(Property::indexed(to_property_value(item)?)))
                .collect::<Result<_>>()?,
        ),
        Value::Map(_) | Value::Record(_) => {
            return Err(Error::type_conversion(value, "property value"))
        }
    })
}

/// Converts a wire value to a value of the declared type.
///
/// Null decodes to the type's zero value.
pub fn from_property_value(ty: &Type, value: &PropertyValue) -> Result<Value> {
    use PropertyValue as PV;

    Ok(match (ty, value) {
        (ty, PV::Null) => ty.zero(),
        (Type::Bool, PV::Boolean(v)) => Value::Bool(*v),
        (Type::I16, PV::Integer(v)) => {
            Value::I16(i16::try_from(*v).map_err(|_| Error::type_conversion(v, "i16"))?)
        }
        (Type::I32, PV::Integer(v)) => {
            Value::I32(i32::try_from(*v).map_err(|_| Error::type_conversion(v, "i32"))?)
        }
        (Type::I64, PV::Integer(v)) => Value::I64(*v),
        (Type::F64, PV::Double(v)) => Value::F64(*v),
        (Type::F64, PV::Integer(v)) => Value::F64(*v as f64),
        (Type::Decimal, PV::String(v)) => Value::Decimal(
            Decimal::from_str(v).map_err(|_| Error::type_conversion(v, "Decimal"))?,
        ),
        (Type::Decimal, PV::Integer(v)) => Value::Decimal(Decimal::from(*v)),
        (Type::Decimal, PV::Double(v)) => Value::Decimal(
            Decimal::try_from(*v).map_err(|_| Error::type_conversion(v, "Decimal"))?,
        ),
        (Type::String, PV::String(v)) => Value::String(v.clone()),
        (Type::String, PV::Key(key)) => Value::String(key.name.clone()),
        (Type::DateTime, PV::Timestamp(v)) => Value::DateTime(*v),
        (Type::Bytes, PV::Blob(v)) => Value::Bytes(
            STANDARD
                .decode(v)
                .map_err(|_| Error::type_conversion(v, "Vec<u8>"))?,
        ),
        (Type::Enum(variants), PV::Integer(v)) => {
            let Some(variant) = EnumVariant::by_discriminant(variants, *v) else {
                return Err(Error::type_conversion(v, "enum variant"));
            };
            Value::Enum(variant.into())
        }
        (Type::Enum(variants), PV::String(v)) => {
            let Some(variant) = EnumVariant::by_name(variants, v) else {
                return Err(Error::type_conversion(v, "enum variant"));
            };
            Value::Enum(variant.into())
        }
        (Type::List(item), PV::List(items)) => Value::List(
            items
                .iter()
                .map(|property| from_property_value(item, &property.value))
                .collect::<Result<_>>()?,
        ),
        (Type::Record(schema), PV::Entity(bag)) => {
            Value::Record(crate::deserialize::deserialize_bag(schema(), bag)?)
        }
        (ty, value) => return Err(Error::type_conversion(value, ty.name())),
    })
}

/// Decodes a projected column. Datetimes may arrive as milliseconds since
/// the epoch.
pub(crate) fn from_column(ty: &Type, value: &PropertyValue) -> Result<Value> {
    match (ty, value) {
        (Type::DateTime, PropertyValue::Integer(millis)) => {
            DateTime::<Utc>::from_timestamp_millis(*millis)
                .map(Value::DateTime)
                .ok_or_else(|| Error::type_conversion(millis, "DateTime<Utc>"))
        }
        _ => from_property_value(ty, value),
    }
}
