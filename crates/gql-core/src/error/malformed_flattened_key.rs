use super::Error;

/// Error when a flattened map property name does not split into a field name
/// and an entry key.
#[derive(Debug)]
pub(super) struct MalformedFlattenedKey {
    key: Box<str>,
}

impl std::error::Error for MalformedFlattenedKey {}

impl core::fmt::Display for MalformedFlattenedKey {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "`{}` is an invalid flattened map key", self.key)
    }
}

impl Error {
    /// Creates a malformed flattened key error.
    pub fn malformed_flattened_key(key: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::MalformedFlattenedKey(
            MalformedFlattenedKey {
                key: key.into().into(),
            },
        ))
    }

    /// Returns `true` if this error is a malformed flattened key error.
    pub fn is_malformed_flattened_key(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::MalformedFlattenedKey(_))
    }
}
