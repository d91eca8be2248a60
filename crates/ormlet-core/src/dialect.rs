use crate::{
    stmt::{Type, Value},
    Result,
};

use std::{collections::HashMap, fmt::Debug, sync::Arc};

/// Database-specific vocabulary: column types for field kinds and the query
/// used to check whether a table exists.
pub trait Dialect: Debug + Send + Sync + 'static {
    /// Name the dialect is registered under.
    fn name(&self) -> &str;

    /// Column type for a field kind.
    ///
    /// Returns an unsupported-field-kind error when the database has no
    /// mapping for `ty`.
    fn type_of(&self, ty: &Type) -> Result<&'static str>;

    /// A statement returning a single row with a single column equal to
    /// `table` when the table exists, and no row otherwise.
    fn table_exists_sql(&self, table: &str) -> (String, Vec<Value>);
}

/// Dialects by driver name.
///
/// Built once at startup and handed to the `Db` builder.
#[derive(Debug, Default, Clone)]
pub struct Registry {
    dialects: HashMap<String, Arc<dyn Dialect>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `dialect` under `name`, replacing any previous entry.
    pub fn register(&mut self, name: impl Into<String>, dialect: impl Dialect) -> &mut Self {
        self.dialects.insert(name.into(), Arc::new(dialect));
        self
    }

    pub fn lookup(&self, name: &str) -> Option<Arc<dyn Dialect>> {
        self.dialects.get(name).cloned()
    }
}
