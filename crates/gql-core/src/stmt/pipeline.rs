use super::{Direction, Expr};
use crate::schema::ModelSchema;

/// An ordered, append-only chain of query stages over one record kind.
#[derive(Debug, Clone)]
pub struct Pipeline {
    pub model: &'static ModelSchema,
    pub stages: Vec<Stage>,
}

#[derive(Debug, Clone)]
pub enum Stage {
    Filter(Expr),
    Project(Expr),
    OrderBy(Expr, Direction),
    Take(Expr),
    Skip(Expr),
    Terminal(TerminalKind, Option<Expr>),
}

/// A stage that also constrains the result's cardinality.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalKind {
    First,
    FirstOrDefault,
    Single,
    SingleOrDefault,
    Any,
}

impl Pipeline {
    pub fn new(model: &'static ModelSchema) -> Self {
        Self {
            model,
            stages: vec![],
        }
    }

    pub fn push(&mut self, stage: Stage) {
        self.stages.push(stage);
    }

    pub fn with(mut self, stage: Stage) -> Self {
        self.push(stage);
        self
    }
}

impl TerminalKind {
    /// Whether an empty result is allowed.
    pub fn allows_default(self) -> bool {
        matches!(self, Self::FirstOrDefault | Self::SingleOrDefault)
    }

    pub fn is_single(self) -> bool {
        matches!(self, Self::Single | Self::SingleOrDefault)
    }

    /// The row limit requested from the store. Single variants fetch two rows
    /// so a second match is detected in the same round trip.
    pub fn fetch_limit(self) -> i64 {
        if self.is_single() {
            2
        } else {
            1
        }
    }
}
