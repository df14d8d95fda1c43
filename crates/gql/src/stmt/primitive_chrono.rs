use crate::stmt::Primitive;

use chrono::{DateTime, Utc};
use gql_core::{
    stmt::{Type, Value},
    Result,
};

impl Primitive for DateTime<Utc> {
    fn ty() -> Type {
        Type::DateTime
    }

    fn into_value(self) -> Value {
        Value::from(self)
    }

    fn load(value: Value) -> Result<Self> {
        value.try_into()
    }
}
