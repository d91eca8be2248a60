use super::Error;

/// Error when no dialect is registered under the requested driver name.
///
/// This is an initialization failure: an engine cannot be built without a
/// dialect to map field kinds to column types.
#[derive(Debug)]
pub(super) struct DialectNotFound {
    name: Box<str>,
}

impl std::error::Error for DialectNotFound {}

impl core::fmt::Display for DialectNotFound {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "dialect `{}` not found", self.name)
    }
}

impl Error {
    /// Creates a dialect-not-found error for the given driver name.
    pub fn dialect_not_found(name: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::DialectNotFound(DialectNotFound {
            name: name.into().into(),
        }))
    }

    /// Returns `true` if this error is a dialect-not-found error.
    pub fn is_dialect_not_found(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::DialectNotFound(_)))
    }
}
