use super::Error;

/// Error when a query fragment that must carry text is empty at render time.
///
/// This indicates a bug in translation rather than a caller mistake.
#[derive(Debug)]
pub(super) struct RenderingIntegrity {
    fragment: Box<str>,
}

impl std::error::Error for RenderingIntegrity {}

impl core::fmt::Display for RenderingIntegrity {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "{} fragment cannot be empty", self.fragment)
    }
}

impl Error {
    /// Creates a rendering integrity error naming the offending fragment.
    pub fn rendering_integrity(fragment: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::RenderingIntegrity(RenderingIntegrity {
            fragment: fragment.into().into(),
        }))
    }

    /// Returns `true` if this error is a rendering integrity error.
    pub fn is_rendering_integrity(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::RenderingIntegrity(_))
    }
}
