use super::{Expr, Primitive};

use gql_core::stmt::Value;

/// Types that can stand in for an expression of type `T`.
pub trait IntoExpr<T> {
    fn into_expr(self) -> Expr<T>;
}

impl<T: Primitive> IntoExpr<T> for T {
    fn into_expr(self) -> Expr<T> {
        Expr::from_value(self.into_value())
    }
}

impl<T> IntoExpr<T> for Expr<T> {
    fn into_expr(self) -> Self {
        self
    }
}

impl<T: Primitive + Clone> IntoExpr<T> for &T {
    fn into_expr(self) -> Expr<T> {
        self.clone().into_expr()
    }
}

/// `None` compares against `NULL`.
impl<T: Primitive> IntoExpr<T> for Option<T> {
    fn into_expr(self) -> Expr<T> {
        match self {
            Some(value) => value.into_expr(),
            None => Expr::from_value(Value::Null),
        }
    }
}

impl IntoExpr<String> for &str {
    fn into_expr(self) -> Expr<String> {
        Expr::from_value(Value::from(self))
    }
}
