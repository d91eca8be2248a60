use super::Statement;

/// A statement to drop a SQL table.
#[derive(Debug, Clone, PartialEq)]
pub struct DropTable {
    /// Name of the table.
    pub name: String,

    /// Whether or not to add an `IF EXISTS` clause.
    pub if_exists: bool,
}

impl Statement {
    /// Drops a table if it exists.
    ///
    /// This function _does_ add an `IF EXISTS` clause.
    pub fn drop_table(name: impl Into<String>) -> Self {
        DropTable {
            name: name.into(),
            if_exists: true,
        }
        .into()
    }

    /// Drops a table.
    ///
    /// This function _does not_ add an `IF EXISTS` clause.
    pub fn drop_table_strict(name: impl Into<String>) -> Self {
        DropTable {
            name: name.into(),
            if_exists: false,
        }
        .into()
    }
}

impl From<DropTable> for Statement {
    fn from(value: DropTable) -> Self {
        Self::DropTable(value)
    }
}
