use gql_core::stmt::{self, Direction};

/// A field and the direction to order results by.
#[derive(Debug, Clone)]
pub struct OrderBy {
    pub(crate) expr: stmt::Expr,
    pub(crate) direction: Direction,
}

impl OrderBy {
    pub(crate) fn new(expr: stmt::Expr, direction: Direction) -> Self {
        Self { expr, direction }
    }
}
