use super::Statement;

/// `SELECT * FROM <table> LIMIT 1`, run for the column names of the result
/// set rather than its rows.
#[derive(Debug, Clone, PartialEq)]
pub struct ProbeColumns {
    pub table: String,
}

impl Statement {
    pub fn probe_columns(table: impl Into<String>) -> Self {
        ProbeColumns {
            table: table.into(),
        }
        .into()
    }
}

impl From<ProbeColumns> for Statement {
    fn from(value: ProbeColumns) -> Self {
        Self::ProbeColumns(value)
    }
}
