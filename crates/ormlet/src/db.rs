mod builder;
pub use builder::Builder;

mod connect;
pub use connect::Connect;

mod migrate;

use crate::{BoxFuture, Dialect, Result, Session};

use futures_util::FutureExt;
use ormlet_core::{Connection, Driver};
use std::{panic::AssertUnwindSafe, sync::Arc};
use tokio::sync::Mutex;

/// A database handle: the driver connection plus the dialect used to map
/// models onto tables.
///
/// Cloning is cheap. All clones, and every session opened from them, share
/// one connection. Operations take turns on it, and an open transaction
/// holds it until commit or rollback.
#[derive(Debug, Clone)]
pub struct Db {
    shared: Arc<Shared>,
}

#[derive(Debug)]
struct Shared {
    driver: Box<dyn Driver>,
    dialect: Arc<dyn Dialect>,
    connection: Arc<Mutex<Box<dyn Connection>>>,
}

impl Db {
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Connect with the default builder.
    pub async fn connect(url: &str) -> Result<Db> {
        Builder::default().connect(url).await
    }

    /// Open a new session. Sessions are cheap and hold no connection until
    /// they begin a transaction.
    pub fn session(&self) -> Session {
        Session::new(self.clone())
    }

    pub fn dialect(&self) -> &Arc<dyn Dialect> {
        &self.shared.dialect
    }

    /// The connection URL of the underlying driver.
    pub fn url(&self) -> String {
        self.shared.driver.url().into_owned()
    }

    pub(crate) fn connection(&self) -> &Arc<Mutex<Box<dyn Connection>>> {
        &self.shared.connection
    }

    /// Run `f` inside a transaction on a fresh session.
    ///
    /// The transaction commits when `f` returns `Ok` and rolls back when it
    /// returns `Err`. If `f` panics, the transaction is rolled back and the
    /// panic resumes.
    ///
    /// ```ignore
    /// db.transaction(|s| Box::pin(async move {
    ///     s.model::<User>()?.create_table().await?;
    ///     s.insert(&mut [user]).await
    /// }))
    /// .await?;
    /// ```
    pub async fn transaction<T, F>(&self, f: F) -> Result<T>
    where
        F: for<'a> FnOnce(&'a mut Session) -> BoxFuture<'a, Result<T>>,
    {
        let mut session = self.session();
        session.begin().await?;

        let res = AssertUnwindSafe(f(&mut session)).catch_unwind().await;

        match res {
            Ok(Ok(value)) => {
                session.commit().await?;
                Ok(value)
            }
            Ok(Err(err)) => {
                if let Err(rollback) = session.rollback().await {
                    log::error!("rollback after failed transaction: {rollback}");
                }
                Err(err)
            }
            Err(panic) => {
                if let Err(rollback) = session.rollback().await {
                    log::error!("rollback after panic: {rollback}");
                }
                std::panic::resume_unwind(panic)
            }
        }
    }
}
