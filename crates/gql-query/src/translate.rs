mod cx;
use cx::{Cx, Outcome};

mod predicate;
mod projection;

use crate::{
    render, Ast, Compiled, Fragment, Named, Param, ProjectionPlan, ShapeFlags, SKIP_PARAM,
    TAKE_PARAM,
};

use gql_core::{
    schema::{ModelSchema, KEY_COLUMN},
    stmt::{BinaryOp, Direction, Expr, ExprMember, Pipeline, Stage, TerminalKind, Value},
    Error, Result,
};

/// How repeated Take and Skip stages are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// A repeated Take or Skip is an error.
    Strict,

    /// A repeated Take or Skip is dropped; the first one declared wins.
    Collapsing,
}

/// Translates one pipeline into a [`Compiled`] query.
///
/// A translator is consumed by [`Translator::translate`]; every compilation
/// starts from a fresh one.
#[derive(Debug)]
pub struct Translator<'a> {
    pipeline: &'a Pipeline,
    schema: &'static ModelSchema,
    mode: Mode,
    ast: Ast,
    params: Vec<Param>,

    /// Counter for `p1, p2, ...`
    next_param: usize,

    /// Accumulated shape of the whole query
    shape: ShapeFlags,

    /// The single field inequality comparisons may target, once one is seen
    inequality: Option<(String, BinaryOp)>,

    plan: Option<ProjectionPlan>,
    terminal: Option<TerminalKind>,
}

impl<'a> Translator<'a> {
    pub fn new(pipeline: &'a Pipeline, mode: Mode) -> Self {
        Self {
            pipeline,
            schema: pipeline.model,
            mode,
            ast: Ast::new(),
            params: vec![],
            next_param: 0,
            shape: ShapeFlags::EMPTY,
            inequality: None,
            plan: None,
            terminal: None,
        }
    }

    pub fn translate(mut self) -> Result<Compiled> {
        self.check_structure()?;

        let plan = match self.project_stage() {
            Some(selector) => self.projection(selector)?,
            None => ProjectionPlan::select_all(),
        };

        let projection = if plan.is_select_all() {
            "*".to_string()
        } else {
            plan.columns.join(", ")
        };

        self.ast.push(Fragment::Select);
        self.ast.push(Fragment::Projection(projection));
        self.ast.push(Fragment::From);
        self.ast.push(Fragment::Kind(self.schema.name.to_string()));
        self.plan = Some(plan);

        let pipeline = self.pipeline;
        for stage in &pipeline.stages {
            self.stage(stage)?;
        }

        if self.params.is_empty() && self.shape.contains(ShapeFlags::HAS_CONSTANT_BOOLEAN) {
            self.ast.remove_where();
        }

        let text = render(&self.ast, &Named)?;

        tracing::debug!(
            kind = self.schema.name,
            query = %text,
            params = self.params.len(),
            "compiled query"
        );

        Ok(Compiled {
            kind: self.schema.name,
            text,
            params: self.params,
            plan: self.plan.unwrap_or_else(ProjectionPlan::select_all),
            shape: self.shape,
            terminal: self.terminal,
            ast: self.ast,
        })
    }

    /// Rejects stage combinations before anything is emitted.
    fn check_structure(&self) -> Result<()> {
        let stages = &self.pipeline.stages;

        let projects = stages
            .iter()
            .filter(|stage| matches!(stage, Stage::Project(_)))
            .count();

        if projects > 1 {
            return Err(Error::unsupported_query_shape(
                "only one projection may be applied",
            ));
        }

        let Some(terminal) = stages
            .iter()
            .position(|stage| matches!(stage, Stage::Terminal(..)))
        else {
            return Ok(());
        };

        for stage in &stages[..terminal] {
            if matches!(stage, Stage::Take(_)) {
                return Err(Error::invalid_pipeline_construction(
                    "a terminal operation cannot be combined with Take",
                ));
            }
        }

        for stage in &stages[terminal + 1..] {
            match stage {
                Stage::Take(_) => {
                    return Err(Error::invalid_pipeline_construction(
                        "a terminal operation cannot be combined with Take",
                    ))
                }
                Stage::Terminal(..) => {
                    return Err(Error::invalid_pipeline_construction(
                        "a terminal operation may only be applied once",
                    ))
                }
                _ => {
                    return Err(Error::unsupported_query_shape(
                        "terminal operations cannot be nested inside another query",
                    ))
                }
            }
        }

        Ok(())
    }

    fn project_stage(&self) -> Option<&'a Expr> {
        self.pipeline.stages.iter().find_map(|stage| match stage {
            Stage::Project(selector) => Some(selector),
            _ => None,
        })
    }

    fn stage(&mut self, stage: &Stage) -> Result<()> {
        match stage {
            Stage::Filter(predicate) => self.filter(predicate),
            Stage::Project(_) => Ok(()),
            Stage::OrderBy(expr, direction) => self.order_by(expr, *direction),
            Stage::Take(count) => self.take(count),
            Stage::Skip(count) => self.skip(count),
            Stage::Terminal(kind, predicate) => self.terminal(*kind, predicate.as_ref()),
        }
    }

    /// Walks a predicate and appends it to the `WHERE` clause, joined with
    /// `AND` to any earlier condition.
    fn filter(&mut self, predicate: &Expr) -> Result<()> {
        let mut clause = vec![];
        let outcome = self.predicate(predicate, Cx::root(), &mut clause)?;
        self.shape |= outcome.flags;

        if clause.is_empty() {
            return Ok(());
        }

        if self.ast.has_where() {
            self.ast.push(Fragment::And);
        } else {
            self.ast.push(Fragment::Where);
        }

        self.ast.extend(clause);
        Ok(())
    }

    fn order_by(&mut self, expr: &Expr, direction: Direction) -> Result<()> {
        if self.ast.contains(&Fragment::OrderBy(direction)) {
            return Err(Error::unsupported_query_shape(
                "only one ordering may be applied",
            ));
        }

        let Expr::Member(member) = expr else {
            return Err(Error::unsupported_query_shape(
                "ordering must reference a field of the record",
            ));
        };

        let column = self.column(member)?;
        self.ast.push(Fragment::OrderBy(direction));
        self.ast.push(Fragment::OrderByField(column));
        Ok(())
    }

    fn take(&mut self, count: &Expr) -> Result<()> {
        if self.ast.contains(&Fragment::Take) {
            return self.repeated("Take");
        }

        let count = self.count(count, Cx::root().with(ShapeFlags::IN_TAKE))?;
        self.bind_reserved(TAKE_PARAM, count);
        self.ast.push(Fragment::Take);
        Ok(())
    }

    fn skip(&mut self, count: &Expr) -> Result<()> {
        if self.ast.contains(&Fragment::Skip) {
            return self.repeated("Skip");
        }

        let count = self.count(count, Cx::root().with(ShapeFlags::IN_SKIP))?;
        self.bind_reserved(SKIP_PARAM, count);
        self.ast.push(Fragment::Skip);
        Ok(())
    }

    fn repeated(&self, stage: &str) -> Result<()> {
        match self.mode {
            Mode::Strict => Err(Error::invalid_pipeline_construction(format!(
                "{stage} may only be applied once"
            ))),
            Mode::Collapsing => {
                tracing::trace!(stage, "collapsing repeated stage");
                Ok(())
            }
        }
    }

    fn terminal(&mut self, kind: TerminalKind, predicate: Option<&Expr>) -> Result<()> {
        if let Some(predicate) = predicate {
            self.filter(predicate)?;
        }

        self.shape |= match kind {
            TerminalKind::First => ShapeFlags::IS_FIRST,
            TerminalKind::FirstOrDefault => ShapeFlags::IS_FIRST | ShapeFlags::ALLOW_DEFAULT,
            TerminalKind::Single => ShapeFlags::IS_SINGLE,
            TerminalKind::SingleOrDefault => ShapeFlags::IS_SINGLE | ShapeFlags::ALLOW_DEFAULT,
            TerminalKind::Any => ShapeFlags::IS_ANY,
        };

        self.terminal = Some(kind);
        self.bind_reserved(TAKE_PARAM, kind.fetch_limit());
        self.ast.push(Fragment::Take);
        Ok(())
    }

    /// Evaluates a Take or Skip count to a non-negative integer.
    fn count(&self, expr: &Expr, cx: Cx) -> Result<i64> {
        let stage = if cx.flags.contains(ShapeFlags::IN_TAKE) {
            "Take"
        } else {
            "Skip"
        };

        let value = match expr {
            Expr::Value(value) => value.clone(),
            Expr::Captured(captured) => captured.eval(),
            _ => {
                return Err(Error::invalid_pipeline_construction(format!(
                    "{stage} requires a constant count"
                )))
            }
        };

        match value.as_i64() {
            Some(n) if n >= 0 => Ok(n),
            _ => Err(Error::invalid_pipeline_construction(format!(
                "{stage} requires a non-negative integer count, got {value:?}"
            ))),
        }
    }

    fn bind_reserved(&mut self, name: &str, count: i64) {
        self.params.push(Param::new(name, Value::I64(count)));
    }

    /// Binds the next sequential parameter and returns its name.
    fn bind(&mut self, value: Value) -> String {
        self.next_param += 1;
        let name = format!("p{}", self.next_param);
        self.params.push(Param::new(name.clone(), value));
        name
    }

    /// Resolves a member to the column it reads. The key field maps to the
    /// store's key column.
    fn column(&self, member: &ExprMember) -> Result<String> {
        let Some(name) = member.name() else {
            return Err(Error::unsupported_query_shape(format!(
                "nested member `{}` is not supported",
                member.dotted()
            )));
        };

        if self.schema.field(name).is_none() {
            return Err(Error::unsupported_query_shape(format!(
                "`{name}` is not a field of `{}`",
                self.schema.name
            )));
        }

        if self.schema.is_key(name) {
            Ok(KEY_COLUMN.to_string())
        } else {
            Ok(name.to_string())
        }
    }
}
