use super::Error;

/// Error when a query uses a shape the store's query language cannot express.
///
/// This occurs when:
/// - A predicate uses OR or `!=`
/// - Inequality comparisons target more than one field
/// - A predicate reaches through a nested member or calls a method on one
/// - More than one ordering is requested
/// - A terminal operation is nested inside another query
///
/// These errors are raised during translation, before any round trip.
#[derive(Debug)]
pub(super) struct UnsupportedQueryShape {
    message: Box<str>,
}

impl std::error::Error for UnsupportedQueryShape {}

impl core::fmt::Display for UnsupportedQueryShape {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "unsupported query shape: {}", self.message)
    }
}

impl Error {
    /// Creates an unsupported query shape error.
    pub fn unsupported_query_shape(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnsupportedQueryShape(
            UnsupportedQueryShape {
                message: message.into().into(),
            },
        ))
    }

    /// Returns `true` if this error is an unsupported query shape error.
    pub fn is_unsupported_query_shape(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnsupportedQueryShape(_))
    }
}
