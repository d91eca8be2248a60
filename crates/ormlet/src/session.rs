mod record;
mod table;
mod transaction;

use crate::{Db, Error, Hooks, Model, Result, Schema, Value, ValueRecord};

use ormlet_core::driver::{Operation, Response, RowSet};
use ormlet_sql::Clause;
use std::{any::TypeId, fmt, mem, sync::Arc};
use tokio::sync::OwnedMutexGuard;

/// A unit of work against a [`Db`]: builds statements, runs them and loads
/// the results back into models.
///
/// Pending SQL, arguments and clauses are reset after every execution,
/// whether it succeeds or not.
pub struct Session {
    db: Db,

    /// Raw SQL accumulated by [`raw`](Session::raw)
    sql: String,

    /// Arguments for the placeholders in `sql`
    args: Vec<Value>,

    /// Model the session currently operates on
    model: Option<RefModel>,

    clause: Clause,

    /// Connection held exclusively while a transaction is open
    tx: Option<OwnedMutexGuard<Box<dyn ormlet_core::Connection>>>,
}

/// Cached mapping for the last model type passed to
/// [`model`](Session::model).
struct RefModel {
    type_id: TypeId,
    schema: Arc<Schema>,

    /// Builds the instance that runs model-level hooks
    prototype: fn() -> Box<dyn Hooks>,
}

fn prototype<M: Model>() -> Box<dyn Hooks> {
    Box::new(M::default())
}

impl Session {
    pub(crate) fn new(db: Db) -> Session {
        Session {
            db,
            sql: String::new(),
            args: vec![],
            model: None,
            clause: Clause::new(),
            tx: None,
        }
    }

    pub fn db(&self) -> &Db {
        &self.db
    }

    /// Append `sql` and its arguments to the pending statement.
    pub fn raw(&mut self, sql: impl AsRef<str>, args: impl IntoIterator<Item = Value>) -> &mut Self {
        self.sql.push_str(sql.as_ref());
        self.sql.push(' ');
        self.args.extend(args);
        self
    }

    /// Drop the pending SQL, arguments and clauses.
    pub fn clear(&mut self) {
        self.sql.clear();
        self.args.clear();
        self.clause.clear();
    }

    /// Run the pending statement, returning the number of affected rows.
    pub async fn exec(&mut self) -> Result<u64> {
        let (sql, args) = self.take_pending();
        let res = self.run(Operation::exec(sql, args)).await?;
        Ok(res.rows.into_count())
    }

    /// Run the pending statement and return its first row, if any.
    pub async fn query_row(&mut self) -> Result<Option<ValueRecord>> {
        let rows = self.query_rows().await?;
        Ok(rows.rows.into_iter().next())
    }

    /// Run the pending statement and return all rows along with the result
    /// column names.
    pub async fn query_rows(&mut self) -> Result<RowSet> {
        let (sql, args) = self.take_pending();
        let res = self.run(Operation::query(sql, args)).await?;
        Ok(res.rows.into_row_set())
    }

    /// Take the pending statement, leaving the session idle.
    fn take_pending(&mut self) -> (String, Vec<Value>) {
        let sql = mem::take(&mut self.sql);
        let args = mem::take(&mut self.args);
        self.clause.clear();
        (sql, args)
    }

    /// Send `op` to the open transaction, or to the shared connection.
    async fn run(&mut self, op: Operation) -> Result<Response> {
        if let Operation::Exec { sql, params } | Operation::Query { sql, params } = &op {
            log::info!("{} {params:?}", sql.trim_end());
        }

        let res = match &mut self.tx {
            Some(conn) => conn.exec(op).await,
            None => self.db.connection().lock().await.exec(op).await,
        };

        res.inspect_err(|err| log::error!("{err}"))
    }

    /// Set the model the session operates on.
    ///
    /// The table schema is derived once and kept until a different model
    /// type is passed.
    pub fn model<M: Model>(&mut self) -> Result<&mut Self> {
        let type_id = TypeId::of::<M>();

        if self.model.as_ref().map(|model| model.type_id) != Some(type_id) {
            let desc = M::describe();
            let schema = Schema::parse(&desc, self.db.dialect().as_ref())
                .inspect_err(|err| log::error!("{err}"))?;

            log::debug!("parsed model {}; table={}", desc.name, schema.name);

            self.model = Some(RefModel {
                type_id,
                schema: Arc::new(schema),
                prototype: prototype::<M>,
            });
        }

        Ok(self)
    }

    /// Schema of the current model.
    pub fn ref_table(&self) -> Result<Arc<Schema>> {
        match &self.model {
            Some(model) => Ok(model.schema.clone()),
            None => {
                log::error!("model is not set");
                Err(Error::model_not_set())
            }
        }
    }

    /// A fresh instance of the current model, for model-level hooks.
    fn prototype(&self) -> Result<Box<dyn Hooks>> {
        match &self.model {
            Some(model) => Ok((model.prototype)()),
            None => {
                log::error!("model is not set");
                Err(Error::model_not_set())
            }
        }
    }

    /// Clear pending state if `res` failed.
    fn reset_on_err<T>(&mut self, res: Result<T>) -> Result<T> {
        if res.is_err() {
            self.clear();
        }
        res
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("sql", &self.sql)
            .field("args", &self.args)
            .field("table", &self.model.as_ref().map(|model| &model.schema.name))
            .field("in_transaction", &self.tx.is_some())
            .finish()
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        let Some(mut conn) = self.tx.take() else {
            return;
        };

        log::warn!("session dropped with an open transaction; rolling back");

        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                handle.spawn(async move {
                    if let Err(err) = conn.exec(ormlet_core::driver::Transaction::Rollback.into()).await {
                        log::error!("rollback of abandoned transaction failed: {err}");
                    }
                });
            }
            Err(_) => log::error!("no runtime to roll back the abandoned transaction"),
        }
    }
}
