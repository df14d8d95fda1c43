//! Composite index bookkeeping.
//!
//! The store builds single-property indexes on its own. A query that filters,
//! orders or projects on more than one property needs a composite index
//! declared ahead of time; an [`IndexAdvisor`] watches compiled queries and
//! records the indexes they need.

mod file;
pub use file::IndexFile;

mod in_memory;
pub use in_memory::InMemoryIndexes;

use gql_core::Result;
use gql_query::Compiled;

use std::fmt::{self, Write};

/// Observes every compiled query before it is executed.
pub trait IndexAdvisor: fmt::Debug + Send + Sync {
    fn advise(&self, compiled: &Compiled) -> Result<()>;
}

/// A composite index over properties of one kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Index {
    pub kind: String,
    pub properties: Vec<String>,
    pub ancestor: bool,
}

impl Index {
    /// The index a compiled query needs, or `None` when the store's
    /// built-in single-property indexes suffice.
    ///
    /// Condition and ordering members come first, followed by projected
    /// columns. A projection counts as one reference no matter how many
    /// columns it lists.
    pub fn required_by(compiled: &Compiled) -> Option<Index> {
        let projection = usize::from(!compiled.plan.is_select_all());

        if compiled.ast.members().count() + projection <= 1 {
            return None;
        }

        Some(Index {
            kind: compiled.kind.to_string(),
            properties: compiled.columns().map(str::to_string).collect(),
            ancestor: false,
        })
    }
}

/// Render indexes in the `index.yaml` layout.
pub fn to_yaml<'a>(indexes: impl IntoIterator<Item = &'a Index>) -> String {
    let mut dst = String::from("indexes:\n");

    for index in indexes {
        let ancestor = if index.ancestor { "yes" } else { "no" };

        // Writing to a String cannot fail.
        let _ = writeln!(dst, "- kind: {}", index.kind);
        let _ = writeln!(dst, "  ancestor: {ancestor}");
        let _ = writeln!(dst, "  properties:");

        for property in &index.properties {
            let _ = writeln!(dst, "  - name: {property}");
        }
    }

    dst
}

/// Whether `text` only contains lines [`to_yaml`] emits. Blank files count.
pub(crate) fn is_generated_yaml(text: &str) -> bool {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .all(|line| {
            matches!(line, "indexes:" | "  ancestor: no" | "  ancestor: yes" | "  properties:")
                || line
                    .strip_prefix("- kind: ")
                    .or_else(|| line.strip_prefix("  - name: "))
                    .is_some_and(|name| !name.trim().is_empty())
        })
}
