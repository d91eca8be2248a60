use super::Session;
use crate::{model, Assignments, Error, Model, Primitive, Result, Value};

use ormlet_sql::{Keyword, Part};
use std::mem;

impl Session {
    /// Insert `records` into their table with one statement, returning the
    /// number of inserted rows.
    ///
    /// `before_insert` runs on each record before its values are read and
    /// `after_insert` on each record once the statement succeeded.
    pub async fn insert<M: Model>(&mut self, records: &mut [M]) -> Result<u64> {
        if records.is_empty() {
            return Ok(0);
        }

        let mut rows = Vec::with_capacity(records.len());

        for record in records.iter_mut() {
            model::check("before_insert", record.before_insert(self).await);

            let res = self.model::<M>().and_then(|s| s.ref_table());
            let table = self.reset_on_err(res)?;
            self.clause
                .set(Part::insert(&table.name, &table.field_names));

            let res = table.record_values(&*record);
            rows.push(self.reset_on_err(res)?);
        }

        self.clause.set(Part::values(rows));
        let (sql, args) = self.clause.build(&[Keyword::Insert, Keyword::Values]);
        let affected = self.raw(sql, args).exec().await?;

        for record in records.iter_mut() {
            model::check("after_insert", record.after_insert(self).await);
        }

        Ok(affected)
    }

    /// Load every row matching the pending clauses into `dest`.
    ///
    /// `before_query` runs on a default instance first; `after_query` runs on
    /// each loaded record before it is appended.
    pub async fn find<M: Model>(&mut self, dest: &mut Vec<M>) -> Result<()> {
        let mut prototype = M::default();
        let clause = mem::take(&mut self.clause);
        model::check("before_query", prototype.before_query(self).await);
        self.clause = clause;

        let res = self.model::<M>().and_then(|s| s.ref_table());
        let table = self.reset_on_err(res)?;

        self.clause
            .set(Part::select(&table.name, &table.field_names));
        let (sql, args) = self.clause.build(&[
            Keyword::Select,
            Keyword::Where,
            Keyword::OrderBy,
            Keyword::Limit,
        ]);

        let rows = self.raw(sql, args).query_rows().await?;

        for row in rows {
            let mut record = M::load(row)?;
            model::check("after_query", record.after_query(self).await);
            dest.push(record);
        }

        Ok(())
    }

    /// Load the first matching row into `dest`.
    ///
    /// Returns a record-not-found error, leaving `dest` untouched, when
    /// nothing matches.
    pub async fn first<M: Model>(&mut self, dest: &mut M) -> Result<()> {
        let mut found = Vec::with_capacity(1);
        self.limit(1).find::<M>(&mut found).await?;

        match found.pop() {
            Some(record) => {
                *dest = record;
                Ok(())
            }
            None => {
                let table = self.ref_table()?;
                Err(Error::record_not_found(format!("table={}", table.name)))
            }
        }
    }

    /// Update rows of the current model matching the pending `WHERE`,
    /// returning the number of affected rows.
    ///
    /// Columns are assigned in the order given. Accepts anything convertible
    /// into [`Assignments`]: an array or `Vec` of `(column, value)` pairs,
    /// an `IndexMap`, or [`Assignments::from_flat`].
    pub async fn update(&mut self, assignments: impl Into<Assignments>) -> Result<u64> {
        let assignments = assignments.into();

        let res = self.prototype();
        let mut prototype = self.reset_on_err(res)?;
        let clause = mem::take(&mut self.clause);
        model::check("before_update", prototype.before_update(self).await);
        self.clause = clause;

        if assignments.is_empty() {
            self.clear();
            crate::bail!("update requires at least one assignment");
        }

        let res = self.ref_table();
        let table = self.reset_on_err(res)?;

        self.clause.set(Part::update(&table.name, assignments));
        let (sql, args) = self.clause.build(&[Keyword::Update, Keyword::Where]);
        let affected = self.raw(sql, args).exec().await?;

        model::check("after_update", prototype.after_update(self).await);
        Ok(affected)
    }

    /// Delete rows of the current model matching the pending `WHERE`,
    /// returning the number of deleted rows.
    pub async fn delete(&mut self) -> Result<u64> {
        let res = self.prototype();
        let mut prototype = self.reset_on_err(res)?;
        let clause = mem::take(&mut self.clause);
        model::check("before_delete", prototype.before_delete(self).await);
        self.clause = clause;

        let res = self.ref_table();
        let table = self.reset_on_err(res)?;

        self.clause.set(Part::delete(&table.name));
        let (sql, args) = self.clause.build(&[Keyword::Delete, Keyword::Where]);
        let affected = self.raw(sql, args).exec().await?;

        model::check("after_delete", prototype.after_delete(self).await);
        Ok(affected)
    }

    /// Count rows of the current model matching the pending `WHERE`.
    pub async fn count(&mut self) -> Result<u64> {
        let res = self.prototype();
        let mut prototype = self.reset_on_err(res)?;
        let clause = mem::take(&mut self.clause);
        model::check("before_count", prototype.before_count(self).await);
        self.clause = clause;

        let res = self.ref_table();
        let table = self.reset_on_err(res)?;

        self.clause.set(Part::count(&table.name));
        let (sql, args) = self.clause.build(&[Keyword::Count, Keyword::Where]);

        let Some(mut row) = self.raw(sql, args).query_row().await? else {
            crate::bail!("count returned no rows; table={}", table.name);
        };
        let count = u64::load(row.take(0))?;

        model::check("after_count", prototype.after_count(self).await);
        Ok(count)
    }

    /// Set the `WHERE` clause. `predicate` uses `?` placeholders bound to
    /// `args` in order.
    pub fn filter(&mut self, predicate: impl Into<String>, args: impl IntoIterator<Item = Value>) -> &mut Self {
        self.clause.set(Part::filter(predicate, args));
        self
    }

    /// Set the `ORDER BY` clause, e.g. `"Age DESC"`.
    pub fn order_by(&mut self, order: impl Into<String>) -> &mut Self {
        self.clause.set(Part::order_by(order));
        self
    }

    pub fn limit(&mut self, count: u64) -> &mut Self {
        self.clause.set(Part::limit(count));
        self
    }
}
