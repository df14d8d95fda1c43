use super::Error;

/// Error when a pipeline is assembled incorrectly by the caller.
///
/// This occurs when:
/// - Take or Skip appears twice (strict mode)
/// - A terminal operation is combined with an explicit Take
/// - A terminal operation is requested twice
/// - A filter is unconditionally false, or is a bare non-boolean constant
#[derive(Debug)]
pub(super) struct InvalidPipelineConstruction {
    message: Box<str>,
}

impl std::error::Error for InvalidPipelineConstruction {}

impl core::fmt::Display for InvalidPipelineConstruction {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid pipeline: {}", self.message)
    }
}

impl Error {
    /// Creates an invalid pipeline construction error.
    pub fn invalid_pipeline_construction(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidPipelineConstruction(
            InvalidPipelineConstruction {
                message: message.into().into(),
            },
        ))
    }

    /// Returns `true` if this error is an invalid pipeline construction error.
    pub fn is_invalid_pipeline_construction(&self) -> bool {
        matches!(
            self.kind(),
            super::ErrorKind::InvalidPipelineConstruction(_)
        )
    }
}
