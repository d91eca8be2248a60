use ormlet::Value;
use ormlet_core::driver::{Operation, Transaction};
use std::sync::{Arc, Mutex};

/// Read access to the operations recorded by a
/// [`LoggingDriver`](crate::LoggingDriver).
pub struct ExecLog {
    ops: Arc<Mutex<Vec<Operation>>>,
}

impl ExecLog {
    pub(crate) fn new(ops: Arc<Mutex<Vec<Operation>>>) -> Self {
        Self { ops }
    }

    pub fn len(&self) -> usize {
        self.ops.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.lock().unwrap().is_empty()
    }

    /// Forget everything recorded so far.
    pub fn clear(&self) {
        self.ops.lock().unwrap().clear();
    }

    /// SQL and arguments of every statement, in order. Transaction control
    /// is skipped.
    pub fn statements(&self) -> Vec<(String, Vec<Value>)> {
        self.ops
            .lock()
            .unwrap()
            .iter()
            .filter_map(|op| match op {
                Operation::Exec { sql, params } | Operation::Query { sql, params } => {
                    Some((sql.trim_end().to_string(), params.clone()))
                }
                Operation::Transaction(_) => None,
            })
            .collect()
    }

    /// Transaction control operations, in order.
    pub fn transactions(&self) -> Vec<Transaction> {
        self.ops
            .lock()
            .unwrap()
            .iter()
            .filter_map(|op| match op {
                Operation::Transaction(tx) => Some(*tx),
                _ => None,
            })
            .collect()
    }
}
