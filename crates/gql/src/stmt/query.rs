use super::{Expr, IntoExpr, OrderBy, Row, Selector};

use gql_core::{
    stmt::{self, Pipeline, Stage, TerminalKind, Value},
    Model, Result,
};
use std::{fmt, marker::PhantomData};

/// A query over records of `M` yielding rows of `O`.
///
/// Every method appends one stage to the pipeline, in call order. Nothing
/// is checked until the query is compiled.
pub struct Query<M, O = M> {
    pipeline: Pipeline,
    load: fn(Value) -> Result<O>,
    _p: PhantomData<fn() -> M>,
}

impl<M: Model> Query<M> {
    /// Every record of `M`.
    pub fn all() -> Self {
        Self {
            pipeline: Pipeline::new(M::schema()),
            load: <Row as Selector<M>>::load,
            _p: PhantomData,
        }
    }
}

impl<M: Model, O> Query<M, O> {
    pub fn filter(self, predicate: impl IntoExpr<bool>) -> Self {
        self.stage(Stage::Filter(predicate.into_expr().untyped))
    }

    pub fn order_by(self, order_by: OrderBy) -> Self {
        self.stage(Stage::OrderBy(order_by.expr, order_by.direction))
    }

    pub fn take(self, count: impl IntoExpr<i64>) -> Self {
        self.stage(Stage::Take(count.into_expr().untyped))
    }

    pub fn skip(self, count: impl IntoExpr<i64>) -> Self {
        self.stage(Stage::Skip(count.into_expr().untyped))
    }

    /// Change the shape of each row.
    pub fn select<S: Selector<M>>(mut self, selector: S) -> Query<M, S::Output> {
        self.pipeline.push(Stage::Project(selector.into_selector()));

        Query {
            pipeline: self.pipeline,
            load: S::load,
            _p: PhantomData,
        }
    }

    /// Append a terminal operation, optionally with its own predicate.
    ///
    /// [`Db`](crate::Db)'s terminal methods append the terminal themselves;
    /// this is for compiling or displaying such a query directly.
    pub fn terminal(self, kind: TerminalKind, predicate: Option<Expr<bool>>) -> Self {
        self.stage(Stage::Terminal(kind, predicate.map(stmt::Expr::from)))
    }

    pub fn pipeline(&self) -> &Pipeline {
        &self.pipeline
    }

    pub fn into_pipeline(self) -> Pipeline {
        self.pipeline
    }

    pub(crate) fn loader(&self) -> fn(Value) -> Result<O> {
        self.load
    }

    fn stage(mut self, stage: Stage) -> Self {
        self.pipeline.push(stage);
        self
    }
}

impl<M, O> Clone for Query<M, O> {
    fn clone(&self) -> Self {
        Self {
            pipeline: self.pipeline.clone(),
            load: self.load,
            _p: PhantomData,
        }
    }
}

impl<M, O> fmt::Debug for Query<M, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Query")
            .field("pipeline", &self.pipeline)
            .finish()
    }
}
