use super::{Assignments, Keyword};

use ormlet_core::stmt::Value;

/// The operands of one clause keyword.
#[derive(Debug, Clone, PartialEq)]
pub enum Part {
    /// `INSERT INTO <table> (<columns>)`
    Insert { table: String, columns: Vec<String> },

    /// `VALUES (?, ?), (?, ?)`, one group per row
    Values(Vec<Vec<Value>>),

    /// `SELECT <columns> FROM <table>`
    Select { table: String, columns: Vec<String> },

    /// `LIMIT ?`
    Limit(u64),

    /// `WHERE <predicate>`
    Where { predicate: String, args: Vec<Value> },

    /// `ORDER BY <order>`
    OrderBy(String),

    /// `UPDATE <table> SET k1 = ?, k2 = ?`
    Update {
        table: String,
        assignments: Assignments,
    },

    /// `DELETE FROM <table>`
    Delete { table: String },

    /// `SELECT count(*) FROM <table>`
    Count { table: String },
}

impl Part {
    pub fn insert<I>(table: impl Into<String>, columns: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self::Insert {
            table: table.into(),
            columns: columns.into_iter().map(Into::into).collect(),
        }
    }

    pub fn values(rows: impl IntoIterator<Item = Vec<Value>>) -> Self {
        Self::Values(rows.into_iter().collect())
    }

    pub fn select<I>(table: impl Into<String>, columns: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self::Select {
            table: table.into(),
            columns: columns.into_iter().map(Into::into).collect(),
        }
    }

    pub fn limit(count: u64) -> Self {
        Self::Limit(count)
    }

    pub fn filter(predicate: impl Into<String>, args: impl IntoIterator<Item = Value>) -> Self {
        Self::Where {
            predicate: predicate.into(),
            args: args.into_iter().collect(),
        }
    }

    pub fn order_by(order: impl Into<String>) -> Self {
        Self::OrderBy(order.into())
    }

    pub fn update(table: impl Into<String>, assignments: impl Into<Assignments>) -> Self {
        Self::Update {
            table: table.into(),
            assignments: assignments.into(),
        }
    }

    pub fn delete(table: impl Into<String>) -> Self {
        Self::Delete {
            table: table.into(),
        }
    }

    pub fn count(table: impl Into<String>) -> Self {
        Self::Count {
            table: table.into(),
        }
    }

    pub fn keyword(&self) -> Keyword {
        match self {
            Self::Insert { .. } => Keyword::Insert,
            Self::Values(_) => Keyword::Values,
            Self::Select { .. } => Keyword::Select,
            Self::Limit(_) => Keyword::Limit,
            Self::Where { .. } => Keyword::Where,
            Self::OrderBy(_) => Keyword::OrderBy,
            Self::Update { .. } => Keyword::Update,
            Self::Delete { .. } => Keyword::Delete,
            Self::Count { .. } => Keyword::Count,
        }
    }
}
