use super::Error;

/// Error when a session operation needs a table schema but no model was
/// selected with `Session::model` first.
#[derive(Debug)]
pub(super) struct ModelNotSet;

impl std::error::Error for ModelNotSet {}

impl core::fmt::Display for ModelNotSet {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str("model is not set")
    }
}

impl Error {
    pub fn model_not_set() -> Error {
        Error::from(super::ErrorKind::ModelNotSet(ModelNotSet))
    }

    pub fn is_model_not_set(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::ModelNotSet(_)))
    }
}
