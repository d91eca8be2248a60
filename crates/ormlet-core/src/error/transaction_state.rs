use super::Error;

/// Error when transaction control is used out of order: `begin` while a
/// transaction is already open, or `commit`/`rollback` with none open.
#[derive(Debug)]
pub(super) struct TransactionState {
    message: Box<str>,
}

impl std::error::Error for TransactionState {}

impl core::fmt::Display for TransactionState {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid transaction state: {}", self.message)
    }
}

impl Error {
    pub fn transaction_state(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::TransactionState(TransactionState {
            message: message.into().into(),
        }))
    }

    pub fn is_transaction_state(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::TransactionState(_)))
    }
}
