use super::{Expr, IntoExpr, OrderBy, Primitive};

use gql_core::stmt::{self, Direction};
use std::{fmt, marker::PhantomData};

/// A field of model `M` holding a `T`.
///
/// Paths are usually declared as associated constants of the model:
///
/// ```
/// # use gql::Path;
/// # struct User;
/// impl User {
///     pub const NAME: Path<User, String> = Path::new("Name");
/// }
/// ```
pub struct Path<M, T> {
    name: &'static str,
    _p: PhantomData<fn() -> (M, T)>,
}

impl<M, T> Path<M, T> {
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            _p: PhantomData,
        }
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }

    pub fn eq(self, rhs: impl IntoExpr<T>) -> Expr<bool> {
        Expr::from_untyped(stmt::Expr::eq(self.untyped(), rhs.into_expr().untyped))
    }

    pub fn ne(self, rhs: impl IntoExpr<T>) -> Expr<bool> {
        Expr::from_untyped(stmt::Expr::ne(self.untyped(), rhs.into_expr().untyped))
    }

    pub fn gt(self, rhs: impl IntoExpr<T>) -> Expr<bool> {
        Expr::from_untyped(stmt::Expr::gt(self.untyped(), rhs.into_expr().untyped))
    }

    pub fn ge(self, rhs: impl IntoExpr<T>) -> Expr<bool> {
        Expr::from_untyped(stmt::Expr::ge(self.untyped(), rhs.into_expr().untyped))
    }

    pub fn lt(self, rhs: impl IntoExpr<T>) -> Expr<bool> {
        Expr::from_untyped(stmt::Expr::lt(self.untyped(), rhs.into_expr().untyped))
    }

    pub fn le(self, rhs: impl IntoExpr<T>) -> Expr<bool> {
        Expr::from_untyped(stmt::Expr::le(self.untyped(), rhs.into_expr().untyped))
    }

    /// Container-membership test. Always rejected when compiled.
    pub fn contains(self, item: impl Into<stmt::Value>) -> Expr<bool> {
        Expr::from_untyped(stmt::Expr::method(
            self.untyped(),
            "contains",
            vec![stmt::Expr::value(item)],
        ))
    }

    pub fn asc(self) -> OrderBy {
        OrderBy::new(self.untyped(), Direction::Asc)
    }

    pub fn desc(self) -> OrderBy {
        OrderBy::new(self.untyped(), Direction::Desc)
    }

    pub(crate) fn untyped(&self) -> stmt::Expr {
        stmt::Expr::member(self.name)
    }
}

impl<M> Path<M, bool> {
    #[allow(clippy::should_implement_trait)]
    pub fn not(self) -> Expr<bool> {
        Expr::from_untyped(stmt::Expr::not(self.untyped()))
    }
}

impl<M, T> Clone for Path<M, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<M, T> Copy for Path<M, T> {}

impl<M, T: Primitive> IntoExpr<T> for Path<M, T> {
    fn into_expr(self) -> Expr<T> {
        Expr::from_untyped(self.untyped())
    }
}

impl<M, T> fmt::Debug for Path<M, T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Path({})", self.name)
    }
}
