use crate::{render, Ast, Inline, ShapeFlags};

use gql_core::{
    stmt::{Expr, TerminalKind, Value},
    Result,
};

/// A bound query parameter. The value's variant is its declared type.
#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    pub name: String,
    pub value: Value,
}

impl Param {
    pub fn new(name: impl Into<String>, value: Value) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// Which columns a query returns and how to shape each row.
#[derive(Debug, Clone)]
pub struct ProjectionPlan {
    /// Source columns in selector order. Empty means every property.
    pub columns: Vec<String>,

    /// The selector evaluated against each returned row.
    pub selector: Expr,
}

impl ProjectionPlan {
    pub fn select_all() -> Self {
        Self {
            columns: vec![],
            selector: Expr::Row,
        }
    }

    pub fn is_select_all(&self) -> bool {
        self.columns.is_empty()
    }
}

/// The executable form of a pipeline.
#[derive(Debug, Clone)]
pub struct Compiled {
    /// The kind being queried
    pub kind: &'static str,

    /// Query text with `@name` placeholders
    pub text: String,

    pub params: Vec<Param>,

    pub plan: ProjectionPlan,

    pub shape: ShapeFlags,

    /// The terminal operation, if any
    pub terminal: Option<TerminalKind>,

    pub ast: Ast,
}

impl Compiled {
    pub fn param(&self, name: &str) -> Option<&Value> {
        self.params
            .iter()
            .find(|param| param.name == name)
            .map(|param| &param.value)
    }

    /// Render the query with parameter values inlined.
    pub fn display_text(&self) -> Result<String> {
        render(&self.ast, &Inline(&self.params))
    }

    /// Properties the query touches: condition and ordering members first,
    /// then projected columns.
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.ast
            .members()
            .chain(self.plan.columns.iter().map(|column| &column[..]))
    }
}
