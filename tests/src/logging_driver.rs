use ormlet_core::{
    async_trait,
    driver::{Connection, Driver, Operation, Response},
    Result,
};
use std::{
    borrow::Cow,
    sync::{Arc, Mutex},
};

/// Wraps a driver so that every operation its connections run is recorded.
#[derive(Debug)]
pub struct LoggingDriver {
    inner: Box<dyn Driver>,

    /// Operations run so far, shared with the connections and the test
    ops_log: Arc<Mutex<Vec<Operation>>>,
}

impl LoggingDriver {
    pub fn new(driver: Box<dyn Driver>) -> Self {
        Self {
            inner: driver,
            ops_log: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn ops_log_handle(&self) -> Arc<Mutex<Vec<Operation>>> {
        self.ops_log.clone()
    }
}

#[async_trait]
impl Driver for LoggingDriver {
    fn name(&self) -> &str {
        self.inner.name()
    }

    fn url(&self) -> Cow<'_, str> {
        self.inner.url()
    }

    async fn connect(&self) -> Result<Box<dyn Connection>> {
        Ok(Box::new(LoggingConnection {
            inner: self.inner.connect().await?,
            ops_log: self.ops_log_handle(),
        }))
    }
}

#[derive(Debug)]
struct LoggingConnection {
    inner: Box<dyn Connection>,
    ops_log: Arc<Mutex<Vec<Operation>>>,
}

#[async_trait]
impl Connection for LoggingConnection {
    async fn exec(&mut self, operation: Operation) -> Result<Response> {
        self.ops_log
            .lock()
            .expect("Failed to acquire ops log lock")
            .push(operation.clone());

        self.inner.exec(operation).await
    }
}
