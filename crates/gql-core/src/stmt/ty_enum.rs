/// One variant of an enumerated field type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnumVariant {
    pub name: &'static str,
    pub discriminant: i64,
}

impl EnumVariant {
    pub const fn new(name: &'static str, discriminant: i64) -> Self {
        Self { name, discriminant }
    }

    pub fn by_discriminant(variants: &[EnumVariant], discriminant: i64) -> Option<EnumVariant> {
        variants
            .iter()
            .copied()
            .find(|variant| variant.discriminant == discriminant)
    }

    pub fn by_name(variants: &[EnumVariant], name: &str) -> Option<EnumVariant> {
        variants.iter().copied().find(|variant| variant.name == name)
    }
}
