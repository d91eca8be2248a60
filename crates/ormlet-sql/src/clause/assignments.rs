use ormlet_core::{stmt::Value, Error, Result};

use indexmap::IndexMap;

/// Ordered `column = value` pairs for an UPDATE.
///
/// Iteration follows insertion order, so the generated `SET` list is stable
/// across runs. Setting a column twice keeps its first position and the last
/// value.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Assignments {
    entries: IndexMap<String, Value>,
}

impl Assignments {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, column: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.entries.insert(column.into(), value.into());
        self
    }

    /// Build from a flat `key, value, key, value, ...` list. Keys must be
    /// strings and the list must have even length.
    pub fn from_flat(items: impl IntoIterator<Item = Value>) -> Result<Self> {
        let mut assignments = Self::new();
        let mut items = items.into_iter();

        while let Some(key) = items.next() {
            let Value::String(column) = key else {
                return Err(Error::type_conversion(key, "column name"));
            };
            let Some(value) = items.next() else {
                ormlet_core::bail!("no value for column `{column}`");
            };
            assignments.entries.insert(column, value);
        }

        Ok(assignments)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl IntoIterator for Assignments {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl From<IndexMap<String, Value>> for Assignments {
    fn from(entries: IndexMap<String, Value>) -> Self {
        Self { entries }
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for Assignments
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

impl<K, V> From<Vec<(K, V)>> for Assignments
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from(pairs: Vec<(K, V)>) -> Self {
        pairs.into_iter().collect()
    }
}

impl<K, V> FromIterator<(K, V)> for Assignments
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut assignments = Self::new();
        for (column, value) in iter {
            assignments.set(column, value);
        }
        assignments
    }
}
