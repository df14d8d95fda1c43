use gql_core::{
    stmt::{EnumVariant, Type, Value, ValueEnum},
    Error, Result,
};
use rust_decimal::Decimal;

/// A field value type that can be compared against and projected.
pub trait Primitive: Sized {
    fn ty() -> Type;

    fn into_value(self) -> Value;

    fn load(value: Value) -> Result<Self>;

    /// Resolve an enum value against a variant table.
    ///
    /// Used by enum implementations of this trait.
    fn load_variant(variants: &'static [EnumVariant], value: Value) -> Result<EnumVariant> {
        let found = match &value {
            Value::Enum(value) => EnumVariant::by_discriminant(variants, value.discriminant),
            Value::I64(discriminant) => EnumVariant::by_discriminant(variants, *discriminant),
            Value::String(name) => EnumVariant::by_name(variants, name),
            _ => None,
        };

        found.ok_or_else(|| Error::type_conversion(value, "enum"))
    }

    fn variant_value(variant: EnumVariant) -> Value {
        Value::Enum(ValueEnum::from(variant))
    }
}

macro_rules! impl_primitive {
    ( $( $ty:ty => $variant:ident ;)* ) => {
        $(
            impl Primitive for $ty {
                fn ty() -> Type {
                    Type::$variant
                }

                fn into_value(self) -> Value {
                    Value::from(self)
                }

                fn load(value: Value) -> Result<Self> {
                    value.try_into()
                }
            }
        )*
    };
}

impl_primitive! {
    bool => Bool;
    i16 => I16;
    i32 => I32;
    i64 => I64;
    f64 => F64;
    Decimal => Decimal;
    String => String;
    Vec<u8> => Bytes;
}
