use crate::stmt::Value;

/// A unit of work sent to a [`Connection`](super::Connection).
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    /// Run a statement that returns no rows. Responds with the number of
    /// affected rows.
    Exec { sql: String, params: Vec<Value> },

    /// Run a statement that returns rows.
    Query { sql: String, params: Vec<Value> },

    /// Transaction control
    Transaction(Transaction),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transaction {
    Start,
    Commit,
    Rollback,
}

impl Operation {
    pub fn exec(sql: impl Into<String>, params: Vec<Value>) -> Self {
        Self::Exec {
            sql: sql.into(),
            params,
        }
    }

    pub fn query(sql: impl Into<String>, params: Vec<Value>) -> Self {
        Self::Query {
            sql: sql.into(),
            params,
        }
    }
}

impl From<Transaction> for Operation {
    fn from(value: Transaction) -> Self {
        Self::Transaction(value)
    }
}
