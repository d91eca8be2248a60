use crate::{Error, Result};

use ormlet_core::{async_trait, Connection, Driver};
use std::borrow::Cow;
use url::Url;

/// The built-in driver selected by a connection URL's scheme.
#[derive(Debug)]
pub enum Connect {
    #[cfg(feature = "sqlite")]
    Sqlite(ormlet_driver_sqlite::Sqlite),
}

impl Connect {
    pub fn new(url: &str) -> Result<Self> {
        let parsed = Url::parse(url)
            .map_err(|err| Error::invalid_connection_url(format!("{err}; url={url}")))?;

        match parsed.scheme() {
            "sqlite" => Self::connect_sqlite(url),
            scheme => Err(Error::invalid_connection_url(format!(
                "unsupported database; scheme={scheme}; url={url}"
            ))),
        }
    }

    #[cfg(feature = "sqlite")]
    fn connect_sqlite(url: &str) -> Result<Self> {
        let driver = ormlet_driver_sqlite::Sqlite::new(url)?;
        Ok(Self::Sqlite(driver))
    }

    #[cfg(not(feature = "sqlite"))]
    fn connect_sqlite(url: &str) -> Result<Self> {
        Err(Error::invalid_connection_url(format!(
            "`sqlite` feature not enabled; url={url}"
        )))
    }
}

macro_rules! match_db {
    ($self:expr, $driver:pat => $e:expr) => {
        match *$self {
            #[cfg(feature = "sqlite")]
            Connect::Sqlite($driver) => $e,
        }
    };
}

#[async_trait]
impl Driver for Connect {
    fn name(&self) -> &str {
        match_db!(self, ref driver => driver.name())
    }

    fn url(&self) -> Cow<'_, str> {
        match_db!(self, ref driver => driver.url())
    }

    async fn connect(&self) -> Result<Box<dyn Connection>> {
        match_db!(self, ref driver => driver.connect().await)
    }
}
