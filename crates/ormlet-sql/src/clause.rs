mod assignments;
pub use assignments::Assignments;

mod generator;
use generator::Fragment;

mod part;
pub use part::Part;

use ormlet_core::stmt::Value;

use std::collections::HashMap;

/// Clause categories. Each keyword holds at most one fragment per build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    Insert,
    Values,
    Select,
    Limit,
    Where,
    OrderBy,
    Update,
    Delete,
    Count,
}

/// Per-keyword SQL fragments and their arguments, assembled on demand in
/// the order the caller asks for.
#[derive(Debug, Default, Clone)]
pub struct Clause {
    fragments: HashMap<Keyword, Fragment>,
}

impl Clause {
    pub fn new() -> Self {
        Self::default()
    }

    /// Generate the fragment for `part`, replacing any fragment previously
    /// set for the same keyword.
    pub fn set(&mut self, part: Part) -> &mut Self {
        let keyword = part.keyword();
        let fragment = generator::generate(part);
        log::trace!("clause {keyword:?} -> {:?}", fragment.sql);
        self.fragments.insert(keyword, fragment);
        self
    }

    /// Join the fragments of `order` with single spaces and concatenate their
    /// arguments in the same order.
    ///
    /// Keywords that were never set are skipped. `order` is the only source
    /// of clause precedence, so callers pass keywords in SQL grammar order.
    pub fn build(&self, order: &[Keyword]) -> (String, Vec<Value>) {
        let mut sql = Vec::with_capacity(order.len());
        let mut args = vec![];

        for keyword in order {
            if let Some(fragment) = self.fragments.get(keyword) {
                sql.push(fragment.sql.as_str());
                args.extend(fragment.args.iter().cloned());
            }
        }

        (sql.join(" "), args)
    }

    pub fn clear(&mut self) {
        self.fragments.clear();
    }
}
