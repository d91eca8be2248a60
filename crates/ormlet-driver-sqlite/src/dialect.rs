use ormlet_core::{
    stmt::{Type, Value},
    Dialect, Result,
};

/// Column types and catalog queries for SQLite.
#[derive(Debug, Default, Clone, Copy)]
pub struct SqliteDialect;

impl Dialect for SqliteDialect {
    fn name(&self) -> &str {
        crate::Sqlite::NAME
    }

    fn type_of(&self, ty: &Type) -> Result<&'static str> {
        Ok(match ty {
            Type::Bool => "bool",
            Type::I8 | Type::I16 | Type::I32 | Type::U8 | Type::U16 | Type::U32 => "integer",
            Type::I64 | Type::U64 => "bigint",
            Type::F32 | Type::F64 => "real",
            Type::String => "text",
            Type::Bytes => "blob",
            Type::Timestamp => "datetime",
        })
    }

    fn table_exists_sql(&self, table: &str) -> (String, Vec<Value>) {
        (
            "SELECT name FROM sqlite_master WHERE type='table' and name = ?".to_string(),
            vec![Value::from(table)],
        )
    }
}
