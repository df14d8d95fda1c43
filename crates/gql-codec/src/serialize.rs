use crate::{flattened_name, to_property_value, FLATTEN_DIVIDER, FLATTEN_PREFIX};

use gql_core::{
    driver::{Entity, Key, KeyLookup, Property, PropertyBag, PropertyValue},
    schema::{Field, ModelSchema},
    stmt::{Type, Value, ValueRecord},
    Error, Model, Result,
};

/// Serialize a record into an entity.
///
/// The key field is not written as a property; when it holds a non-blank
/// string it becomes the entity key.
pub fn serialize<M: Model>(record: &M) -> Result<Entity> {
    serialize_record(M::schema(), &record.to_record())
}

pub fn serialize_record(schema: &ModelSchema, record: &ValueRecord) -> Result<Entity> {
    let key_index = schema.key_field().map(|(index, _)| index);

    let key = key_index
        .and_then(|index| record.get(index))
        .and_then(|value| match value {
            Value::String(name) if !name.trim().is_empty() => {
                Some(Key::new(schema.name, name.clone()))
            }
            _ => None,
        });

    Ok(Entity {
        key,
        properties: bag(schema, record, key_index)?,
    })
}

/// Serialize records, assigning a key to every record whose key is blank.
///
/// Generated keys are written back onto the records. With `verify_unique`,
/// each candidate is checked against the store and re-rolled until unused.
pub async fn serialize_with_key<M, L>(
    records: &mut [M],
    lookup: &L,
    verify_unique: bool,
) -> Result<Vec<Entity>>
where
    M: Model,
    L: KeyLookup + ?Sized,
{
    let schema = M::schema();
    let (key_index, _) = schema.require_key()?;
    let mut entities = Vec::with_capacity(records.len());

    for record in records.iter_mut() {
        let mut values = record.to_record();

        let blank = values.get(key_index).map_or(true, Value::is_blank);

        if blank {
            let name = generate_key(schema.name, lookup, verify_unique).await?;

            let Some(slot) = values.get_mut(key_index) else {
                return Err(Error::invalid_schema(format!(
                    "record for `{}` has no value for its key field",
                    schema.name
                )));
            };
            *slot = Value::String(name);
            *record = M::load(values.clone())?;
        }

        entities.push(serialize_record(schema, &values)?);
    }

    Ok(entities)
}

async fn generate_key<L>(kind: &str, lookup: &L, verify_unique: bool) -> Result<String>
where
    L: KeyLookup + ?Sized,
{
    loop {
        let name = uuid::Uuid::new_v4().to_string();

        if verify_unique && lookup.exists(&Key::new(kind, name.clone())).await? {
            tracing::trace!(kind, key = %name, "generated key already taken");
            continue;
        }

        tracing::debug!(kind, key = %name, "generated key");
        return Ok(name);
    }
}

pub(crate) fn bag(
    schema: &ModelSchema,
    record: &ValueRecord,
    key_index: Option<usize>,
) -> Result<PropertyBag> {
    check_field_names(schema)?;

    let mut properties = PropertyBag::new();

    for (index, field) in schema.fields.iter().enumerate() {
        if !field.is_persisted() || Some(index) == key_index {
            continue;
        }

        let value = record.get(index).unwrap_or(&Value::Null);
        let indexed = field.is_indexed();

        match (&field.ty, value) {
            (_, Value::Null) => {}
            (Type::List(item), Value::List(items)) => {
                if items.is_empty() {
                    continue;
                }

                let items = items
                    .iter()
                    .map(|value| element(item, value, indexed))
                    .collect::<Result<_>>()?;

                properties.insert(
                    field.name.to_string(),
                    Property {
                        value: PropertyValue::List(items),
                        indexed,
                    },
                );
            }
            (Type::Map(item), Value::Map(entries)) => {
                for (entry, value) in entries {
                    if entry.trim().is_empty() {
                        return Err(Error::malformed_flattened_key(flattened_name(
                            field.name, entry,
                        )));
                    }

                    properties.insert(
                        flattened_name(field.name, entry),
                        element(item, value, indexed)?,
                    );
                }
            }
            (ty, value) => {
                properties.insert(field.name.to_string(), element(ty, value, indexed)?);
            }
        }
    }

    Ok(properties)
}

fn element(ty: &Type, value: &Value, indexed: bool) -> Result<Property> {
    let value = match (ty, value) {
        (Type::Record(nested), Value::Record(record)) => {
            PropertyValue::Entity(bag(nested(), record, None)?)
        }
        (Type::Map(_) | Type::Record(_), value) => {
            return Err(Error::invalid_schema(format!(
                "{value:?} cannot be stored as a {}",
                ty.name()
            )))
        }
        (_, value) => to_property_value(value)?,
    };

    Ok(Property { value, indexed })
}

/// Field names must not be mistaken for flattened map entries.
fn check_field_names(schema: &ModelSchema) -> Result<()> {
    let collides = |field: &&Field| {
        field.name.starts_with(FLATTEN_PREFIX) || field.name.contains(FLATTEN_DIVIDER)
    };

    match schema.fields.iter().find(collides) {
        Some(field) => Err(Error::invalid_schema(format!(
            "field `{}` of `{}` collides with the map flattening scheme",
            field.name, schema.name
        ))),
        None => Ok(()),
    }
}
