use super::Primitive;
use crate::Path;

use gql_core::{
    stmt::{self, Value},
    Model, Result,
};
use std::marker::PhantomData;

/// The shape of each result row of a query over `M`.
///
/// A selector lowers to an untyped expression the translator turns into the
/// projected columns, and knows how to load its output from the value the
/// projector produces for each row.
pub trait Selector<M> {
    type Output;

    fn into_selector(self) -> stmt::Expr;

    fn load(value: Value) -> Result<Self::Output>;
}

/// Selects the whole record.
#[derive(Debug, Clone, Copy, Default)]
pub struct Row;

impl<M: Model> Selector<M> for Row {
    type Output = M;

    fn into_selector(self) -> stmt::Expr {
        stmt::Expr::Row
    }

    fn load(value: Value) -> Result<M> {
        M::load(value.to_record()?)
    }
}

impl<M, T: Primitive> Selector<M> for Path<M, T> {
    type Output = T;

    fn into_selector(self) -> stmt::Expr {
        self.untyped()
    }

    fn load(value: Value) -> Result<T> {
        T::load(value)
    }
}

/// A constant returned for every row.
#[derive(Debug, Clone)]
pub struct Literal<T> {
    value: Value,
    _p: PhantomData<fn() -> T>,
}

pub fn literal<T: Primitive>(value: T) -> Literal<T> {
    Literal {
        value: value.into_value(),
        _p: PhantomData,
    }
}

impl<M, T: Primitive> Selector<M> for Literal<T> {
    type Output = T;

    fn into_selector(self) -> stmt::Expr {
        stmt::Expr::Value(self.value)
    }

    fn load(value: Value) -> Result<T> {
        T::load(value)
    }
}

macro_rules! impl_selector_for_tuple {
    ( $( ($($t:ident : $i:tt),+) )* ) => {
        $(
            impl<M, $($t: Selector<M>),+> Selector<M> for ($($t,)+) {
                type Output = ($($t::Output,)+);

                fn into_selector(self) -> stmt::Expr {
                    stmt::Expr::record([$(self.$i.into_selector()),+])
                }

                fn load(value: Value) -> Result<Self::Output> {
                    let mut record = value.to_record()?;
                    Ok(($($t::load(record.take($i))?,)+))
                }
            }
        )*
    };
}

impl_selector_for_tuple! {
    (A: 0, B: 1)
    (A: 0, B: 1, C: 2)
}
