use crate::stmt::{Type, Value, ValueRecord};
use crate::Result;

/// Column metadata for one model field, as declared on the Rust type.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDesc {
    /// Column name
    pub name: String,

    /// Field kind, mapped to a column type by the dialect
    pub ty: Type,

    /// Constraint text appended verbatim to the column definition, e.g.
    /// `PRIMARY KEY`.
    pub constraint: Option<String>,
}

impl FieldDesc {
    pub fn new(name: impl Into<String>, ty: Type) -> Self {
        Self {
            name: name.into(),
            ty,
            constraint: None,
        }
    }

    pub fn constraint(mut self, constraint: impl Into<String>) -> Self {
        self.constraint = Some(constraint.into());
        self
    }
}

/// Description of a model type: its name, optional table-name override and
/// fields in declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelDesc {
    /// Bare Rust type name
    pub name: String,

    /// Table name override
    pub table: Option<String>,

    pub fields: Vec<FieldDesc>,
}

impl ModelDesc {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            table: None,
            fields: vec![],
        }
    }

    pub fn table(mut self, table: impl Into<String>) -> Self {
        self.table = Some(table.into());
        self
    }

    pub fn field(mut self, field: FieldDesc) -> Self {
        self.fields.push(field);
        self
    }

    /// The table the model maps to.
    pub fn table_name(&self) -> &str {
        self.table.as_deref().unwrap_or(&self.name)
    }
}

/// A Rust type whose instances map to rows of one table.
///
/// Usually implemented by `#[derive(Model)]`.
pub trait Record {
    /// Describe the table shape of this type.
    fn describe() -> ModelDesc
    where
        Self: Sized;

    /// Value of the field stored in column `name`.
    fn field_value(&self, name: &str) -> Option<Value>;

    /// Build an instance from a row whose fields follow the declared field
    /// order.
    fn load(record: ValueRecord) -> Result<Self>
    where
        Self: Sized;
}
