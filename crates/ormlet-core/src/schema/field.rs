/// One column of a table, as derived from a model field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Column name
    pub name: String,

    /// Database column type, as returned by the dialect
    pub ty: String,

    /// Constraint annotation, empty when the field has none
    pub tag: String,
}
