use super::Part;

use ormlet_core::stmt::Value;

/// A generated clause: SQL text and the values bound to its placeholders.
#[derive(Debug, Default, Clone, PartialEq)]
pub(super) struct Fragment {
    pub(super) sql: String,
    pub(super) args: Vec<Value>,
}

impl Fragment {
    fn sql(sql: String) -> Self {
        Self { sql, args: vec![] }
    }
}

pub(super) fn generate(part: Part) -> Fragment {
    match part {
        Part::Insert { table, columns } => {
            Fragment::sql(format!("INSERT INTO {table} ({})", columns.join(",")))
        }
        Part::Values(rows) => values(rows),
        Part::Select { table, columns } => select(&table, &columns),
        Part::Limit(count) => Fragment {
            sql: "LIMIT ?".to_string(),
            args: vec![Value::U64(count)],
        },
        Part::Where { predicate, args } => Fragment {
            sql: format!("WHERE {predicate}"),
            args,
        },
        Part::OrderBy(order) => Fragment::sql(format!("ORDER BY {order}")),
        Part::Update { table, assignments } => {
            let mut sets = Vec::with_capacity(assignments.len());
            let mut args = Vec::with_capacity(assignments.len());

            for (column, value) in assignments {
                sets.push(format!("{column} = ?"));
                args.push(value);
            }

            Fragment {
                sql: format!("UPDATE {table} SET {}", sets.join(", ")),
                args,
            }
        }
        Part::Delete { table } => Fragment::sql(format!("DELETE FROM {table}")),
        Part::Count { table } => select(&table, &["count(*)".to_string()]),
    }
}

fn select(table: &str, columns: &[String]) -> Fragment {
    Fragment::sql(format!("SELECT {} FROM {table}", columns.join(",")))
}

/// Every row must be as wide as the first; the first row sets the
/// placeholder group used for all of them.
fn values(rows: Vec<Vec<Value>>) -> Fragment {
    let width = rows.first().map_or(0, Vec::len);
    let group = format!("({})", placeholders(width));

    let mut sql = String::from("VALUES ");
    let mut args = Vec::with_capacity(width * rows.len());

    for (i, row) in rows.into_iter().enumerate() {
        debug_assert_eq!(row.len(), width, "VALUES row {i} has the wrong width");

        if i > 0 {
            sql.push_str(", ");
        }
        sql.push_str(&group);
        args.extend(row);
    }

    Fragment { sql, args }
}

/// `n` comma-separated `?` markers.
fn placeholders(n: usize) -> String {
    vec!["?"; n].join(", ")
}
