#![allow(dead_code)]

use gql::{
    async_trait, driver::Key, EnumVariant, Field, GqlQuery, KeyLookup, Model, ModelSchema, Path,
    Primitive, Result, Transport, Type, Value, ValueRecord,
};
use gql::{Db, Entity};

use chrono::{DateTime, Utc};
use std::sync::OnceLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Color {
    #[default]
    Red,
    Green,
}

pub const COLORS: &[EnumVariant] = &[EnumVariant::new("Red", 0), EnumVariant::new("Green", 1)];

impl Primitive for Color {
    fn ty() -> Type {
        Type::Enum(COLORS)
    }

    fn into_value(self) -> Value {
        Self::variant_value(COLORS[self as usize])
    }

    fn load(value: Value) -> Result<Self> {
        match Self::load_variant(COLORS, value)?.discriminant {
            0 => Ok(Color::Red),
            _ => Ok(Color::Green),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub price: i32,
    pub active: bool,
    pub rating: f64,
    pub color: Color,
    pub created_at: DateTime<Utc>,
}

impl Product {
    pub const ID: Path<Product, String> = Path::new("Id");
    pub const NAME: Path<Product, String> = Path::new("Name");
    pub const PRICE: Path<Product, i32> = Path::new("Price");
    pub const ACTIVE: Path<Product, bool> = Path::new("Active");
    pub const RATING: Path<Product, f64> = Path::new("Rating");
    pub const COLOR: Path<Product, Color> = Path::new("Color");
    pub const CREATED_AT: Path<Product, DateTime<Utc>> = Path::new("CreatedAt");
}

impl Model for Product {
    fn schema() -> &'static ModelSchema {
        static SCHEMA: OnceLock<ModelSchema> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            ModelSchema::new(
                "Product",
                vec![
                    Field::new("Id", Type::String),
                    Field::new("Name", Type::String),
                    Field::new("Price", Type::I32),
                    Field::new("Active", Type::Bool),
                    Field::new("Rating", Type::F64),
                    Field::new("Color", Color::ty()),
                    Field::new("CreatedAt", Type::DateTime),
                ],
            )
        })
    }

    fn to_record(&self) -> ValueRecord {
        ValueRecord::from_vec(vec![
            self.id.clone().into(),
            self.name.clone().into(),
            self.price.into(),
            self.active.into(),
            self.rating.into(),
            self.color.into_value(),
            self.created_at.into(),
        ])
    }

    fn load(mut record: ValueRecord) -> Result<Self> {
        Ok(Product {
            id: String::load(record.take(0))?,
            name: String::load(record.take(1))?,
            price: i32::load(record.take(2))?,
            active: bool::load(record.take(3))?,
            rating: f64::load(record.take(4))?,
            color: Color::load(record.take(5))?,
            created_at: DateTime::<Utc>::load(record.take(6))?,
        })
    }
}

/// A transport that never returns rows.
#[derive(Debug, Default)]
pub struct Empty;

#[async_trait]
impl KeyLookup for Empty {
    async fn exists(&self, _key: &Key) -> Result<bool> {
        Ok(false)
    }
}

#[async_trait]
impl Transport for Empty {
    async fn run_query(&self, _query: &GqlQuery) -> Result<Vec<Entity>> {
        Ok(vec![])
    }
}

pub fn db() -> Db {
    Db::builder().build(Empty).unwrap()
}
