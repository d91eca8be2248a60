pub mod operation;
pub use operation::{Operation, Transaction};

mod response;
pub use response::{Response, RowSet, Rows};

use crate::async_trait;

use std::{borrow::Cow, fmt::Debug};

/// Opens connections to one kind of database.
#[async_trait]
pub trait Driver: Debug + Send + Sync + 'static {
    /// Name used to look up the driver's dialect in the registry.
    fn name(&self) -> &str;

    /// The connection URL this driver was created from.
    fn url(&self) -> Cow<'_, str>;

    /// Open a new connection.
    async fn connect(&self) -> crate::Result<Box<dyn Connection>>;
}

/// A single database connection: the capability sessions send statements
/// to.
#[async_trait]
pub trait Connection: Debug + Send + 'static {
    /// Execute a database operation
    async fn exec(&mut self, op: Operation) -> crate::Result<Response>;
}
