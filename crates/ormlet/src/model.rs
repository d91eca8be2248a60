use crate::{async_trait, Record, Result, Session};

/// A type whose instances a [`Session`] can store and load.
///
/// Implemented for every `Record + Hooks + Default` type; usually obtained
/// through `#[derive(Model)]`.
pub trait Model: Record + Hooks + Default + Send + 'static {}

impl<T> Model for T where T: Record + Hooks + Default + Send + 'static {}

/// Lifecycle callbacks run by the session around each operation.
///
/// Every method defaults to a no-op. `before_insert` and `after_insert` run
/// on each inserted record and `after_query` on each loaded record. The rest
/// run on a `Default` instance of the model the session is operating on.
///
/// A returned error is logged and does not abort the operation.
///
/// Hooks may run statements through the session. The clauses of the
/// operation in flight are set aside while a `before_*` hook runs.
///
/// Derive `Model` with `#[hooks]` to write this impl by hand:
///
/// ```ignore
/// #[derive(Default, ormlet::Model)]
/// #[hooks]
/// struct Account {
///     #[key]
///     id: i64,
///     password: String,
/// }
///
/// #[ormlet::async_trait]
/// impl ormlet::Hooks for Account {
///     async fn after_query(&mut self, _session: &mut ormlet::Session) -> ormlet::Result<()> {
///         self.password = "******".to_string();
///         Ok(())
///     }
/// }
/// ```
#[async_trait]
pub trait Hooks: Send {
    async fn before_query(&mut self, _session: &mut Session) -> Result<()> {
        Ok(())
    }

    async fn after_query(&mut self, _session: &mut Session) -> Result<()> {
        Ok(())
    }

    async fn before_insert(&mut self, _session: &mut Session) -> Result<()> {
        Ok(())
    }

    async fn after_insert(&mut self, _session: &mut Session) -> Result<()> {
        Ok(())
    }

    async fn before_update(&mut self, _session: &mut Session) -> Result<()> {
        Ok(())
    }

    async fn after_update(&mut self, _session: &mut Session) -> Result<()> {
        Ok(())
    }

    async fn before_delete(&mut self, _session: &mut Session) -> Result<()> {
        Ok(())
    }

    async fn after_delete(&mut self, _session: &mut Session) -> Result<()> {
        Ok(())
    }

    async fn before_count(&mut self, _session: &mut Session) -> Result<()> {
        Ok(())
    }

    async fn after_count(&mut self, _session: &mut Session) -> Result<()> {
        Ok(())
    }
}

/// Logs a failed hook. Hook errors never abort the operation.
pub(crate) fn check(hook: &str, res: Result<()>) {
    if let Err(err) = res {
        log::error!("hook {hook} failed: {err}");
    }
}
