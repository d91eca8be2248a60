use super::Db;
use crate::{Error, Model, Result, Session};

use ormlet_sql::Statement;

impl Db {
    /// Bring `M`'s table in line with the model.
    ///
    /// Columns the model declares but the table lacks are added. When any
    /// column was added, the table is rebuilt with exactly the model's
    /// columns, dropping the ones the model no longer declares. A table
    /// that only has extra columns is left alone. Does nothing when the
    /// table does not exist. Runs in a single transaction.
    pub async fn migrate<M: Model>(&self) -> Result<()> {
        self.transaction(|session| Box::pin(migrate_table::<M>(session)))
            .await
    }
}

async fn migrate_table<M: Model>(session: &mut Session) -> Result<()> {
    let table = session.model::<M>()?.ref_table()?;

    if !session.has_table().await? {
        log::info!("table {} doesn't exist", table.name);
        return Ok(());
    }

    log::info!("migrate: new table columns = {:?}", table.field_names);

    let columns = session
        .raw(Statement::probe_columns(&table.name).to_sql(), [])
        .query_rows()
        .await?
        .columns;

    log::info!("migrate: old table columns = {columns:?}");

    let add = difference(&table.field_names, &columns);
    let del = difference(&columns, &table.field_names);
    log::info!("migrate: add columns {add:?}, delete columns {del:?}");

    for column in &add {
        let field = table
            .field(column)
            .ok_or_else(|| Error::from_args(format_args!("no field `{column}` in {}", table.name)))?;

        session
            .raw(Statement::add_column(&table.name, field).to_sql(), [])
            .exec()
            .await?;
    }

    if add.is_empty() {
        return Ok(());
    }

    let temp = format!("temp_{}", table.name);

    let rebuild = [
        Statement::create_table_as(&temp, &table.field_names, &table.name),
        Statement::drop_table_strict(&table.name),
        Statement::rename_table(&temp, &table.name),
    ];

    for stmt in rebuild {
        session.raw(stmt.to_sql(), []).exec().await?;
    }

    Ok(())
}

/// Items of `a` missing from `b`, in `a`'s order.
fn difference<'a>(a: &'a [String], b: &[String]) -> Vec<&'a str> {
    a.iter()
        .filter(|item| !b.contains(*item))
        .map(String::as_str)
        .collect()
}
