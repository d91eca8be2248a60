use super::Value;

use std::ops;

/// An ordered row of values.
///
/// When produced by a query against a model's table, the fields follow the
/// schema's field-name order.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ValueRecord {
    pub fields: Vec<Value>,
}

impl ValueRecord {
    pub fn from_vec(fields: Vec<Value>) -> Self {
        Self { fields }
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Takes the value at `index`, leaving `Null` in its place.
    pub fn take(&mut self, index: usize) -> Value {
        self.fields
            .get_mut(index)
            .map(std::mem::take)
            .unwrap_or_default()
    }

    pub fn into_vec(self) -> Vec<Value> {
        self.fields
    }
}

impl ops::Index<usize> for ValueRecord {
    type Output = Value;

    fn index(&self, index: usize) -> &Value {
        &self.fields[index]
    }
}

impl From<Vec<Value>> for ValueRecord {
    fn from(fields: Vec<Value>) -> Self {
        Self { fields }
    }
}

impl IntoIterator for ValueRecord {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}
