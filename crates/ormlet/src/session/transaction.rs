use super::Session;
use crate::{Error, Result};

use ormlet_core::driver::Transaction;

impl Session {
    /// Start a transaction.
    ///
    /// The session takes the database connection for itself until
    /// [`commit`](Session::commit) or [`rollback`](Session::rollback). Other
    /// sessions on the same `Db` wait for it in the meantime.
    pub async fn begin(&mut self) -> Result<()> {
        if self.tx.is_some() {
            log::error!("transaction already started");
            return Err(Error::transaction_state("transaction already started"));
        }

        let mut conn = self.db.connection().clone().lock_owned().await;
        conn.exec(Transaction::Start.into())
            .await
            .inspect_err(|err| log::error!("{err}"))?;

        log::info!("transaction begin");
        self.tx = Some(conn);
        Ok(())
    }

    /// Commit the open transaction.
    ///
    /// If the commit fails the transaction is rolled back and the commit
    /// error is returned. Either way the connection is released.
    pub async fn commit(&mut self) -> Result<()> {
        let Some(mut conn) = self.tx.take() else {
            log::error!("commit without transaction");
            return Err(Error::transaction_state("no transaction in progress"));
        };

        log::info!("transaction commit");

        if let Err(err) = conn.exec(Transaction::Commit.into()).await {
            log::error!("{err}");
            if let Err(rollback) = conn.exec(Transaction::Rollback.into()).await {
                log::error!("rollback after failed commit: {rollback}");
            }
            return Err(err);
        }

        Ok(())
    }

    /// Roll back the open transaction and release the connection.
    pub async fn rollback(&mut self) -> Result<()> {
        let Some(mut conn) = self.tx.take() else {
            log::error!("rollback without transaction");
            return Err(Error::transaction_state("no transaction in progress"));
        };

        log::info!("transaction rollback");

        conn.exec(Transaction::Rollback.into())
            .await
            .inspect_err(|err| log::error!("{err}"))?;
        Ok(())
    }

    /// Returns `true` while a transaction is open.
    pub fn in_transaction(&self) -> bool {
        self.tx.is_some()
    }
}
