use crate::{from_property_value, FLATTEN_DIVIDER, FLATTEN_PREFIX};

use gql_core::{
    driver::{Entity, PropertyBag},
    schema::ModelSchema,
    stmt::{Type, Value, ValueRecord},
    Error, Model, Result,
};
use indexmap::IndexMap;

/// Decode an entity into a record.
pub fn deserialize<M: Model>(entity: &Entity) -> Result<M> {
    M::load(deserialize_record(M::schema(), entity)?)
}

/// Decode an entity into field values aligned with `schema`.
///
/// The key field is filled from the entity key. Unknown properties are
/// ignored and absent ones take their type's zero value.
pub fn deserialize_record(schema: &ModelSchema, entity: &Entity) -> Result<ValueRecord> {
    let mut record = deserialize_bag(schema, &entity.properties)?;

    if let (Some((index, _)), Some(key)) = (schema.key_field(), &entity.key) {
        record[index] = Value::String(key.name.clone());
    }

    Ok(record)
}

pub(crate) fn deserialize_bag(schema: &ModelSchema, bag: &PropertyBag) -> Result<ValueRecord> {
    let mut fields: Vec<Value> = schema.fields.iter().map(|field| field.ty.zero()).collect();

    for (name, property) in bag {
        if name.starts_with(FLATTEN_PREFIX) {
            let (field_name, entry) = split_flattened(name)?;

            let Some((index, field)) = schema.field(field_name) else {
                tracing::trace!(property = %name, "ignoring unknown map entry");
                continue;
            };

            let Type::Map(item) = &field.ty else {
                return Err(Error::type_conversion(name, "map entry"));
            };

            let value = from_property_value(item, &property.value)?;

            match &mut fields[index] {
                Value::Map(entries) => {
                    entries.insert(entry.to_string(), value);
                }
                slot => *slot = Value::Map(IndexMap::from([(entry.to_string(), value)])),
            }

            continue;
        }

        let Some((index, field)) = schema.field(name) else {
            tracing::trace!(property = %name, "ignoring unknown property");
            continue;
        };

        if !field.is_persisted() {
            continue;
        }

        fields[index] = from_property_value(&field.ty, &property.value)?;
    }

    Ok(ValueRecord::from_vec(fields))
}

/// Splits `g/kv_<field>_g/k_<entry>` into its field name and entry key.
///
/// Only the first divider separates the two; an entry key may itself contain
/// the divider.
fn split_flattened(name: &str) -> Result<(&str, &str)> {
    let Some((head, entry)) = name.split_once(FLATTEN_DIVIDER) else {
        return Err(Error::malformed_flattened_key(name));
    };

    let field = head.strip_prefix(FLATTEN_PREFIX).unwrap_or(head);
    if field.trim().is_empty() || entry.trim().is_empty() {
        return Err(Error::malformed_flattened_key(name));
    }

    Ok((field, entry))
}
