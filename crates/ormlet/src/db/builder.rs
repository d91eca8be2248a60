use super::{Connect, Db, Shared};
use crate::{Dialect, Error, Registry, Result};

use ormlet_core::Driver;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Configures and opens a [`Db`].
#[derive(Debug)]
pub struct Builder {
    /// Dialects by driver name
    registry: Registry,

    /// Dialect name to use instead of the driver's own name
    dialect: Option<String>,
}

impl Default for Builder {
    fn default() -> Self {
        Self {
            registry: default_registry(),
            dialect: None,
        }
    }
}

impl Builder {
    /// Replace the dialect registry. The default registry knows the
    /// dialects of the enabled built-in drivers.
    pub fn registry(&mut self, registry: Registry) -> &mut Self {
        self.registry = registry;
        self
    }

    /// Register an additional dialect.
    pub fn register_dialect(&mut self, name: impl Into<String>, dialect: impl Dialect) -> &mut Self {
        self.registry.register(name, dialect);
        self
    }

    /// Look the dialect up under `name` instead of the driver name.
    pub fn dialect(&mut self, name: impl Into<String>) -> &mut Self {
        self.dialect = Some(name.into());
        self
    }

    /// Connect to the database at `url`. The URL scheme selects the driver.
    pub async fn connect(&mut self, url: &str) -> Result<Db> {
        self.build(Connect::new(url)?).await
    }

    pub async fn build(&mut self, driver: impl Driver) -> Result<Db> {
        let name = self.dialect.as_deref().unwrap_or(driver.name());

        let Some(dialect) = self.registry.lookup(name) else {
            log::error!("dialect {name} not found");
            return Err(Error::dialect_not_found(name));
        };

        let connection = driver.connect().await.inspect_err(|err| {
            log::error!("failed to connect; url={}; {err}", driver.url());
        })?;

        log::info!("connected; url={}; dialect={}", driver.url(), dialect.name());

        Ok(Db {
            shared: Arc::new(Shared {
                driver: Box::new(driver),
                dialect,
                connection: Arc::new(Mutex::new(connection)),
            }),
        })
    }
}

#[allow(unused_mut)]
fn default_registry() -> Registry {
    let mut registry = Registry::new();

    #[cfg(feature = "sqlite")]
    registry.register(
        ormlet_driver_sqlite::Sqlite::NAME,
        ormlet_driver_sqlite::SqliteDialect,
    );

    registry
}
