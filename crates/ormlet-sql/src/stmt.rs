mod add_column;
pub use add_column::AddColumn;

mod create_table;
pub use create_table::{ColumnDef, CreateTable};

mod create_table_as;
pub use create_table_as::CreateTableAs;

mod drop_table;
pub use drop_table::DropTable;

mod probe_columns;
pub use probe_columns::ProbeColumns;

mod rename_table;
pub use rename_table::RenameTable;

/// A schema statement. Rendered to SQL through its `Display` impl.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    AddColumn(AddColumn),
    CreateTable(CreateTable),
    CreateTableAs(CreateTableAs),
    DropTable(DropTable),
    ProbeColumns(ProbeColumns),
    RenameTable(RenameTable),
}

impl Statement {
    pub fn to_sql(&self) -> String {
        self.to_string()
    }
}
