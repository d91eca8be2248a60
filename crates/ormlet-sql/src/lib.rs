pub mod clause;
pub use clause::{Assignments, Clause, Keyword, Part};

pub mod serializer;

pub mod stmt;
pub use stmt::Statement;
