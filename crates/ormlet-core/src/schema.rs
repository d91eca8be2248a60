mod desc;
pub use desc::{FieldDesc, ModelDesc, Record};

mod field;
pub use field::Field;

#[allow(clippy::module_inception)]
mod schema;
pub use schema::Schema;
