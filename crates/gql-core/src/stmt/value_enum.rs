use super::*;

/// A value of an enumerated type, carrying both its variant name and its
/// underlying integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueEnum {
    pub name: &'static str,
    pub discriminant: i64,
}

impl From<EnumVariant> for ValueEnum {
    fn from(variant: EnumVariant) -> Self {
        Self {
            name: variant.name,
            discriminant: variant.discriminant,
        }
    }
}

impl From<ValueEnum> for Value {
    fn from(value: ValueEnum) -> Self {
        Self::Enum(value)
    }
}
