pub mod db;
pub use db::{Builder, Db};

mod model;
pub use model::{Hooks, Model};

pub mod session;
pub use session::Session;

pub use ormlet_core::{
    async_trait, bail, err,
    schema::{FieldDesc, ModelDesc, Record, Schema},
    stmt::{Primitive, Type, Value, ValueRecord},
    Dialect, Error, Registry, Result,
};
pub use ormlet_sql::Assignments;

pub use ormlet_macros::Model;

pub use futures_util::future::BoxFuture;

/// Builds a `Vec<Value>` of statement arguments.
///
/// ```
/// let args = ormlet::params!["Tom", 18i64];
/// assert_eq!(args, [ormlet::Value::from("Tom"), ormlet::Value::I64(18)]);
/// ```
#[macro_export]
macro_rules! params {
    () => {
        ::std::vec::Vec::<$crate::Value>::new()
    };
    ($($value:expr),+ $(,)?) => {
        ::std::vec![$($crate::Value::from($value)),+]
    };
}

#[doc(hidden)]
pub mod codegen_support {
    pub use crate::{Error, Hooks, Result};
    pub use ormlet_core::{
        schema::{FieldDesc, ModelDesc, Record},
        stmt::{Primitive, Value, ValueRecord},
    };
    pub use std::{
        clone::Clone,
        default::Default,
        option::Option,
        result::Result::{Err, Ok},
    };
}
