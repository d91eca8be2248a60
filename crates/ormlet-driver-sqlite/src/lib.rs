mod dialect;
pub use dialect::SqliteDialect;

mod value;
pub(crate) use value::Value;

use ormlet_core::{
    async_trait,
    driver::{Driver, Operation, Response, RowSet, Transaction},
    stmt, Error, Result,
};
use rusqlite::Connection as RusqliteConnection;
use std::{
    borrow::Cow,
    path::{Path, PathBuf},
};
use url::Url;

#[derive(Debug)]
pub enum Sqlite {
    File(PathBuf),
    InMemory,
}

impl Sqlite {
    /// Name the driver and its dialect are registered under.
    pub const NAME: &'static str = "sqlite";

    /// Create a new SQLite driver from a `sqlite::memory:` or `sqlite:<path>`
    /// connection URL.
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let url_str = url.into();
        let url = Url::parse(&url_str)
            .map_err(|err| Error::invalid_connection_url(format!("{err}; url={url_str}")))?;

        if url.scheme() != Self::NAME {
            return Err(Error::invalid_connection_url(format!(
                "connection URL does not have a `sqlite` scheme; url={url_str}"
            )));
        }

        if url.path() == ":memory:" {
            Ok(Self::InMemory)
        } else if url.path().is_empty() {
            Err(Error::invalid_connection_url(format!(
                "connection URL has no database path; url={url_str}"
            )))
        } else {
            Ok(Self::File(PathBuf::from(url.path())))
        }
    }

    /// Create an in-memory SQLite database
    pub fn in_memory() -> Self {
        Self::InMemory
    }

    /// Open a SQLite database at the specified file path
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        Self::File(path.as_ref().to_path_buf())
    }
}

#[async_trait]
impl Driver for Sqlite {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn url(&self) -> Cow<'_, str> {
        match self {
            Sqlite::InMemory => Cow::Borrowed("sqlite::memory:"),
            Sqlite::File(path) => Cow::Owned(format!("sqlite:{}", path.display())),
        }
    }

    async fn connect(&self) -> Result<Box<dyn ormlet_core::Connection>> {
        let connection = match self {
            Sqlite::File(path) => Connection::open(path)?,
            Sqlite::InMemory => Connection::in_memory()?,
        };
        Ok(Box::new(connection))
    }
}

#[derive(Debug)]
pub struct Connection {
    connection: RusqliteConnection,
}

impl Connection {
    pub fn in_memory() -> Result<Self> {
        let connection =
            RusqliteConnection::open_in_memory().map_err(Error::driver_operation_failed)?;

        Ok(Self { connection })
    }

    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = RusqliteConnection::open(path).map_err(Error::driver_operation_failed)?;

        Ok(Self { connection })
    }

    fn execute(&self, sql: &str, params: Vec<stmt::Value>) -> Result<Response> {
        let params = params.into_iter().map(Value::from).collect::<Vec<_>>();

        let mut stmt = self
            .connection
            .prepare_cached(sql)
            .map_err(Error::driver_operation_failed)?;

        let count = stmt
            .execute(rusqlite::params_from_iter(params.iter()))
            .map_err(Error::driver_operation_failed)?;

        Ok(Response::count(count as _))
    }

    /// Queries are prepared fresh: a cached statement keeps reporting the
    /// columns it had before later DDL until it is stepped again.
    fn query(&self, sql: &str, params: Vec<stmt::Value>) -> Result<Response> {
        let params = params.into_iter().map(Value::from).collect::<Vec<_>>();

        let mut stmt = self
            .connection
            .prepare(sql)
            .map_err(Error::driver_operation_failed)?;

        let columns: Vec<String> = stmt.column_names().into_iter().map(String::from).collect();
        let width = columns.len();

        let mut rows = stmt
            .query(rusqlite::params_from_iter(params.iter()))
            .map_err(Error::driver_operation_failed)?;

        let mut ret = vec![];

        loop {
            match rows.next() {
                Ok(Some(row)) => {
                    let mut items = Vec::with_capacity(width);

                    for index in 0..width {
                        items.push(Value::from_sql(row, index)?.into_inner());
                    }

                    ret.push(stmt::ValueRecord::from_vec(items));
                }
                Ok(None) => break,
                Err(err) => {
                    return Err(Error::driver_operation_failed(err));
                }
            }
        }

        Ok(Response::row_set(RowSet::new(columns, ret)))
    }

    fn transaction(&self, op: Transaction) -> Result<Response> {
        let sql = match op {
            Transaction::Start => "BEGIN",
            Transaction::Commit => "COMMIT",
            Transaction::Rollback => "ROLLBACK",
        };

        self.connection
            .execute(sql, [])
            .map_err(Error::driver_operation_failed)?;

        Ok(Response::count(0))
    }
}

#[async_trait]
impl ormlet_core::driver::Connection for Connection {
    async fn exec(&mut self, op: Operation) -> Result<Response> {
        match op {
            Operation::Exec { sql, params } => self.execute(&sql, params),
            Operation::Query { sql, params } => self.query(&sql, params),
            Operation::Transaction(op) => self.transaction(op),
        }
    }
}
