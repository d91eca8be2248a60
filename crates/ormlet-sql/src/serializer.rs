//! SQL text for schema statements.

use crate::stmt::{
    AddColumn, ColumnDef, CreateTable, CreateTableAs, DropTable, ProbeColumns, RenameTable,
    Statement,
};

use std::fmt::{self, Display, Formatter};

impl Display for Statement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Statement::AddColumn(stmt) => stmt.fmt(f),
            Statement::CreateTable(stmt) => stmt.fmt(f),
            Statement::CreateTableAs(stmt) => stmt.fmt(f),
            Statement::DropTable(stmt) => stmt.fmt(f),
            Statement::ProbeColumns(stmt) => stmt.fmt(f),
            Statement::RenameTable(stmt) => stmt.fmt(f),
        }
    }
}

impl Display for AddColumn {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "ALTER TABLE {} ADD COLUMN {}", self.table, self.column)
    }
}

impl Display for ColumnDef {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.ty)?;
        if !self.tag.is_empty() {
            write!(f, " {}", self.tag)?;
        }
        Ok(())
    }
}

impl Display for CreateTable {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "CREATE TABLE {} (", self.name)?;
        comma(f, &self.columns, ",")?;
        f.write_str(")")
    }
}

impl Display for CreateTableAs {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "CREATE TABLE {} AS SELECT ", self.name)?;
        comma(f, &self.columns, ", ")?;
        write!(f, " FROM {}", self.source)
    }
}

impl Display for DropTable {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("DROP TABLE ")?;
        if self.if_exists {
            f.write_str("IF EXISTS ")?;
        }
        f.write_str(&self.name)
    }
}

impl Display for ProbeColumns {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "SELECT * FROM {} LIMIT 1", self.table)
    }
}

impl Display for RenameTable {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "ALTER TABLE {} RENAME TO {}", self.from, self.to)
    }
}

fn comma<T: Display>(f: &mut Formatter<'_>, items: &[T], sep: &str) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(sep)?;
        }
        item.fmt(f)?;
    }
    Ok(())
}
