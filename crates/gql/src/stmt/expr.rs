use super::{IntoExpr, Primitive};

use gql_core::stmt;
use std::{marker::PhantomData, ops::Not};

/// An expression evaluating to a `T`.
pub struct Expr<T> {
    /// The un-typed expression
    pub(crate) untyped: stmt::Expr,

    /// `T` is the type of the expression
    _p: PhantomData<fn() -> T>,
}

/// A value read when the query is compiled rather than when it is built.
///
/// The closure runs once per compilation, so a query built once and
/// compiled many times sees the current value every time.
pub fn captured<T, F>(f: F) -> Expr<T>
where
    T: Primitive,
    F: Fn() -> T + Send + Sync + 'static,
{
    Expr::from_untyped(stmt::Expr::captured(move || f().into_value()))
}

impl<T> Expr<T> {
    pub(crate) fn from_value(value: stmt::Value) -> Self {
        Self::from_untyped(stmt::Expr::Value(value))
    }

    pub fn from_untyped(untyped: impl Into<stmt::Expr>) -> Self {
        Self {
            untyped: untyped.into(),
            _p: PhantomData,
        }
    }

    pub fn into_untyped(self) -> stmt::Expr {
        self.untyped
    }
}

impl Expr<bool> {
    pub fn and(self, rhs: impl IntoExpr<bool>) -> Self {
        Self::from_untyped(stmt::Expr::and(self.untyped, rhs.into_expr().untyped))
    }

    /// Disjunction. The store cannot evaluate it, so compiling a query that
    /// contains one fails.
    pub fn or(self, rhs: impl IntoExpr<bool>) -> Self {
        Self::from_untyped(stmt::Expr::or(self.untyped, rhs.into_expr().untyped))
    }

    #[allow(clippy::should_implement_trait)]
    pub fn not(self) -> Self {
        !self
    }
}

impl Not for Expr<bool> {
    type Output = Self;

    fn not(self) -> Self {
        Self::from_untyped(stmt::Expr::not(self.untyped))
    }
}

impl<T> Clone for Expr<T> {
    fn clone(&self) -> Self {
        Self::from_untyped(self.untyped.clone())
    }
}

impl<T> std::fmt::Debug for Expr<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(&self.untyped, f)
    }
}

impl<T> From<Expr<T>> for stmt::Expr {
    fn from(value: Expr<T>) -> Self {
        value.untyped
    }
}
