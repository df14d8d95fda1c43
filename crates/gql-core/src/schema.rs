use crate::{stmt::Type, Error, Result};

/// The store's intrinsic key column.
pub const KEY_COLUMN: &str = "__key__";

/// Describes a record type: its kind name and ordered field table.
///
/// A schema is built once per record type, usually inside a `OnceLock` in
/// [`Model::schema`](crate::Model::schema), and shared by the translator, the
/// codec and the index advisor.
#[derive(Debug, Clone)]
pub struct ModelSchema {
    /// The store kind the records are persisted under.
    pub name: &'static str,

    /// Fields in declaration order.
    pub fields: Vec<Field>,
}

#[derive(Debug, Clone)]
pub struct Field {
    pub name: &'static str,
    pub ty: Type,
    pub role: FieldRole,
}

/// How the codec treats a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRole {
    Normal,

    /// The field holds the record's key. It is stored in the entity key, not
    /// as a property.
    Key,

    /// Stored, but excluded from the store's indexes.
    NotIndexed,

    /// Never written to the store.
    NotPersisted,
}

impl ModelSchema {
    pub fn new(name: &'static str, fields: Vec<Field>) -> Self {
        Self { name, fields }
    }

    /// Returns the index and descriptor of the field with the given name.
    pub fn field(&self, name: &str) -> Option<(usize, &Field)> {
        self.fields
            .iter()
            .enumerate()
            .find(|(_, field)| field.name == name)
    }

    /// Resolves the key field: the first field marked as the key, else the
    /// first field named `id` (any case).
    pub fn key_field(&self) -> Option<(usize, &Field)> {
        self.fields
            .iter()
            .enumerate()
            .find(|(_, field)| field.role == FieldRole::Key)
            .or_else(|| {
                self.fields
                    .iter()
                    .enumerate()
                    .find(|(_, field)| field.name.eq_ignore_ascii_case("id"))
            })
    }

    /// Like [`ModelSchema::key_field`] but requires a string-typed key.
    pub fn require_key(&self) -> Result<(usize, &Field)> {
        let Some((index, field)) = self.key_field() else {
            return Err(Error::missing_key_definition(self.name));
        };

        if !matches!(field.ty, Type::String) {
            return Err(Error::unsupported_key_type(
                self.name,
                field.ty.name(),
            ));
        }

        Ok((index, field))
    }

    /// Returns `true` if `name` is the key field of this schema.
    pub fn is_key(&self, name: &str) -> bool {
        self.key_field().is_some_and(|(_, field)| field.name == name)
    }
}

impl Field {
    pub fn new(name: &'static str, ty: Type) -> Self {
        Self {
            name,
            ty,
            role: FieldRole::Normal,
        }
    }

    pub fn key(mut self) -> Self {
        self.role = FieldRole::Key;
        self
    }

    pub fn not_indexed(mut self) -> Self {
        self.role = FieldRole::NotIndexed;
        self
    }

    pub fn not_persisted(mut self) -> Self {
        self.role = FieldRole::NotPersisted;
        self
    }

    pub fn is_persisted(&self) -> bool {
        self.role != FieldRole::NotPersisted
    }

    pub fn is_indexed(&self) -> bool {
        !matches!(self.role, FieldRole::NotIndexed | FieldRole::NotPersisted)
    }
}
