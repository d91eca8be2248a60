use super::Session;
use crate::{Result, Value};

use ormlet_sql::Statement;

impl Session {
    /// Create the current model's table.
    pub async fn create_table(&mut self) -> Result<()> {
        let res = self.ref_table();
        let table = self.reset_on_err(res)?;

        self.raw(Statement::create_table(&table).to_sql(), [])
            .exec()
            .await?;
        Ok(())
    }

    /// Drop the current model's table if it exists.
    pub async fn drop_table(&mut self) -> Result<()> {
        let res = self.ref_table();
        let table = self.reset_on_err(res)?;

        self.raw(Statement::drop_table(&table.name).to_sql(), [])
            .exec()
            .await?;
        Ok(())
    }

    /// Returns `true` if the current model's table exists.
    pub async fn has_table(&mut self) -> Result<bool> {
        let res = self.ref_table();
        let table = self.reset_on_err(res)?;

        let (sql, args) = self.db.dialect().table_exists_sql(&table.name);
        let row = self.raw(sql, args).query_row().await?;

        Ok(match row {
            Some(row) => matches!(&row[0], Value::String(name) if *name == table.name),
            None => false,
        })
    }
}
