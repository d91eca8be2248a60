/// The language-level kind of a model field.
///
/// A [`Dialect`](crate::Dialect) maps each kind to a database column type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    Bool,
    I8,
    I16,
    I32,
    I64,
    U8,
    U16,
    U32,
    U64,
    F32,
    F64,
    String,

    /// Raw bytes (`Vec<u8>`)
    Bytes,

    /// A point in time (`jiff::Timestamp`)
    Timestamp,
}
