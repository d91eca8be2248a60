use super::{ColumnDef, Statement};

use ormlet_core::schema::Field;

/// `ALTER TABLE <table> ADD COLUMN <name> <type>`
#[derive(Debug, Clone, PartialEq)]
pub struct AddColumn {
    pub table: String,

    /// Column definition. The constraint tag is not emitted: SQLite rejects
    /// most constraints on added columns.
    pub column: ColumnDef,
}

impl Statement {
    /// Adds `field` to an existing table.
    pub fn add_column(table: impl Into<String>, field: &Field) -> Self {
        AddColumn {
            table: table.into(),
            column: ColumnDef {
                name: field.name.clone(),
                ty: field.ty.clone(),
                tag: String::new(),
            },
        }
        .into()
    }
}

impl From<AddColumn> for Statement {
    fn from(value: AddColumn) -> Self {
        Self::AddColumn(value)
    }
}
