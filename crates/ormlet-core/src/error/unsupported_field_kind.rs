use super::Error;
use crate::stmt::Type;

/// Error when a dialect has no column type for a field kind.
///
/// Raised while parsing a model into a schema, so a model with a field the
/// database cannot store is rejected before any statement is generated.
#[derive(Debug)]
pub(super) struct UnsupportedFieldKind {
    dialect: Box<str>,
    ty: Type,
}

impl std::error::Error for UnsupportedFieldKind {}

impl core::fmt::Display for UnsupportedFieldKind {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "unsupported field kind {:?} for dialect `{}`",
            self.ty, self.dialect
        )
    }
}

impl Error {
    pub fn unsupported_field_kind(dialect: impl Into<String>, ty: Type) -> Error {
        Error::from(super::ErrorKind::UnsupportedFieldKind(UnsupportedFieldKind {
            dialect: dialect.into().into(),
            ty,
        }))
    }

    pub fn is_unsupported_field_kind(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::UnsupportedFieldKind(_)))
    }
}
