use super::Statement;

/// `CREATE TABLE <name> AS SELECT <columns> FROM <source>`
///
/// Used to rebuild a table with a reduced column set.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateTableAs {
    pub name: String,
    pub columns: Vec<String>,
    pub source: String,
}

impl Statement {
    pub fn create_table_as<I>(name: impl Into<String>, columns: I, source: impl Into<String>) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        CreateTableAs {
            name: name.into(),
            columns: columns.into_iter().map(Into::into).collect(),
            source: source.into(),
        }
        .into()
    }
}

impl From<CreateTableAs> for Statement {
    fn from(value: CreateTableAs) -> Self {
        Self::CreateTableAs(value)
    }
}
