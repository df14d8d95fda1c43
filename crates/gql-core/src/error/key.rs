use super::Error;

/// Error when a record type declares no key field.
#[derive(Debug)]
pub(super) struct MissingKeyDefinition {
    kind: Box<str>,
}

impl std::error::Error for MissingKeyDefinition {}

impl core::fmt::Display for MissingKeyDefinition {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "`{}` does not contain an `id` field nor any field marked as the key",
            self.kind
        )
    }
}

/// Error when the key field is not string-typed.
#[derive(Debug)]
pub(super) struct UnsupportedKeyType {
    kind: Box<str>,
    ty: Box<str>,
}

impl std::error::Error for UnsupportedKeyType {}

impl core::fmt::Display for UnsupportedKeyType {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "key type `{}` of `{}` is not supported; keys must be strings",
            self.ty, self.kind
        )
    }
}

impl Error {
    /// Creates a missing key definition error for the given kind.
    pub fn missing_key_definition(kind: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::MissingKeyDefinition(MissingKeyDefinition {
            kind: kind.into().into(),
        }))
    }

    /// Returns `true` if this error is a missing key definition error.
    pub fn is_missing_key_definition(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::MissingKeyDefinition(_))
    }

    /// Creates an unsupported key type error.
    pub fn unsupported_key_type(kind: impl Into<String>, ty: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnsupportedKeyType(UnsupportedKeyType {
            kind: kind.into().into(),
            ty: ty.into().into(),
        }))
    }

    /// Returns `true` if this error is an unsupported key type error.
    pub fn is_unsupported_key_type(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnsupportedKeyType(_))
    }
}
