use super::Statement;

use ormlet_core::{schema::Field, Schema};

/// A statement to create a SQL table.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateTable {
    /// Name of the table.
    pub name: String,

    /// Column definitions, in schema field order.
    pub columns: Vec<ColumnDef>,
}

/// One column: name, database type and constraint tag.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDef {
    pub name: String,
    pub ty: String,
    pub tag: String,
}

impl From<&Field> for ColumnDef {
    fn from(field: &Field) -> Self {
        ColumnDef {
            name: field.name.clone(),
            ty: field.ty.clone(),
            tag: field.tag.clone(),
        }
    }
}

impl Statement {
    /// Creates the table described by `schema`.
    pub fn create_table(schema: &Schema) -> Self {
        CreateTable {
            name: schema.name.clone(),
            columns: schema.fields.iter().map(ColumnDef::from).collect(),
        }
        .into()
    }
}

impl From<CreateTable> for Statement {
    fn from(value: CreateTable) -> Self {
        Self::CreateTable(value)
    }
}
