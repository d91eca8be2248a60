use super::{Field, ModelDesc, Record};
use crate::{stmt::Value, Dialect, Result};

use std::collections::HashMap;

/// The table shape derived from a model type.
#[derive(Debug, Clone)]
pub struct Schema {
    /// Table name
    pub name: String,

    /// Columns in declaration order
    pub fields: Vec<Field>,

    /// Column names in declaration order. Governs INSERT column lists,
    /// value flattening and row loading.
    pub field_names: Vec<String>,

    field_map: HashMap<String, usize>,
}

impl Schema {
    /// Map a model description onto a table schema using `dialect` for the
    /// column types.
    ///
    /// Fails if the dialect cannot store one of the field kinds.
    pub fn parse(desc: &ModelDesc, dialect: &dyn Dialect) -> Result<Schema> {
        let mut fields = Vec::with_capacity(desc.fields.len());
        let mut field_names = Vec::with_capacity(desc.fields.len());
        let mut field_map = HashMap::with_capacity(desc.fields.len());

        for field in &desc.fields {
            let ty = dialect
                .type_of(&field.ty)
                .map_err(|err| err.context(crate::err!("{}.{}", desc.name, field.name)))?;

            field_map.insert(field.name.clone(), fields.len());
            field_names.push(field.name.clone());
            fields.push(Field {
                name: field.name.clone(),
                ty: ty.to_string(),
                tag: field.constraint.clone().unwrap_or_default(),
            });
        }

        Ok(Schema {
            name: desc.table_name().to_string(),
            fields,
            field_names,
            field_map,
        })
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.field_map.get(name).map(|index| &self.fields[*index])
    }

    /// Flatten `record` into values ordered like [`field_names`](Self::field_names).
    pub fn record_values(&self, record: &dyn Record) -> Result<Vec<Value>> {
        self.field_names
            .iter()
            .map(|name| {
                record.field_value(name).ok_or_else(|| {
                    crate::err!("record has no field `{name}` for table `{}`", self.name)
                })
            })
            .collect()
    }
}

impl PartialEq for Schema {
    fn eq(&self, other: &Schema) -> bool {
        self.name == other.name && self.fields == other.fields
    }
}
