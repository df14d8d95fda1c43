#![allow(dead_code)]

use gql_core::schema::{Field, ModelSchema};
use gql_core::stmt::{EnumVariant, Expr, Pipeline, Stage, Type};

use std::sync::OnceLock;

pub const COLORS: &[EnumVariant] = &[
    EnumVariant::new("Red", 0),
    EnumVariant::new("Green", 1),
    EnumVariant::new("Blue", 2),
];

pub fn nested_schema() -> &'static ModelSchema {
    static SCHEMA: OnceLock<ModelSchema> = OnceLock::new();
    SCHEMA.get_or_init(|| ModelSchema::new("Nested", vec![Field::new("Value", Type::I32)]))
}

pub fn schema() -> &'static ModelSchema {
    static SCHEMA: OnceLock<ModelSchema> = OnceLock::new();
    SCHEMA.get_or_init(|| {
        ModelSchema::new(
            "TestModel",
            vec![
                Field::new("Id", Type::String),
                Field::new("BoolValue", Type::Bool),
                Field::new("OtherBool", Type::Bool),
                Field::new("ShortValue", Type::I16),
                Field::new("IntValue", Type::I32),
                Field::new("LongValue", Type::I64),
                Field::new("DoubleValue", Type::F64),
                Field::new("DecimalValue", Type::Decimal),
                Field::new("StringValue", Type::String),
                Field::new("DateTimeValue", Type::DateTime),
                Field::new("Color", Type::Enum(COLORS)),
                Field::new("Tags", Type::list(Type::String)),
                Field::new("Nested", Type::Record(nested_schema)),
            ],
        )
    })
}

pub fn pipeline(stages: impl IntoIterator<Item = Stage>) -> Pipeline {
    let mut pipeline = Pipeline::new(schema());
    for stage in stages {
        pipeline.push(stage);
    }
    pipeline
}

pub fn m(name: &'static str) -> Expr {
    Expr::member(name)
}

pub fn v(value: impl Into<gql_core::stmt::Value>) -> Expr {
    Expr::value(value)
}
