use crate::stmt::ValueRecord;

#[derive(Debug)]
pub struct Response {
    pub rows: Rows,
}

#[derive(Debug)]
pub enum Rows {
    /// Number of rows impacted by the operation
    Count(u64),

    /// Rows returned by a query
    Values(RowSet),
}

/// Rows returned by a query, with the result column names.
///
/// `columns` is populated even when no rows match.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RowSet {
    pub columns: Vec<String>,
    pub rows: Vec<ValueRecord>,
}

impl Response {
    pub fn count(count: u64) -> Self {
        Self {
            rows: Rows::Count(count),
        }
    }

    pub fn row_set(rows: RowSet) -> Self {
        Self {
            rows: Rows::Values(rows),
        }
    }
}

impl Rows {
    pub fn is_count(&self) -> bool {
        matches!(self, Self::Count(_))
    }

    pub fn is_values(&self) -> bool {
        matches!(self, Self::Values(_))
    }

    /// Affected-row count. A row set counts its rows.
    pub fn into_count(self) -> u64 {
        match self {
            Rows::Count(count) => count,
            Rows::Values(values) => values.rows.len() as u64,
        }
    }

    /// Returned rows. A count response has no columns and no rows.
    pub fn into_row_set(self) -> RowSet {
        match self {
            Self::Values(values) => values,
            Self::Count(_) => RowSet::default(),
        }
    }
}

impl RowSet {
    pub fn new(columns: Vec<String>, rows: Vec<ValueRecord>) -> Self {
        Self { columns, rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl IntoIterator for RowSet {
    type Item = ValueRecord;
    type IntoIter = std::vec::IntoIter<ValueRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.into_iter()
    }
}
