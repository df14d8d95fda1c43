use super::{Cx, Outcome, Translator};
use crate::{Fragment, ShapeFlags};

use gql_core::{
    driver::Key,
    stmt::{BinaryOp, Expr, ExprBinaryOp, ExprMember, ExprMethod, Value},
    Error, Result,
};

/// A comparison operand after captured values are folded.
enum Operand<'e> {
    Member(&'e ExprMember),
    Value(Value),
    Other(&'e Expr),
}

impl Translator<'_> {
    /// Walks an expression in condition position, writing its fragments to
    /// `out`. An expression that is always true writes nothing.
    pub(super) fn predicate(
        &mut self,
        expr: &Expr,
        cx: Cx,
        out: &mut Vec<Fragment>,
    ) -> Result<Outcome> {
        match expr {
            Expr::Value(value) => constant(value),
            Expr::Captured(captured) => constant(&captured.eval()),
            Expr::Member(member) => self.bool_member(member, cx, out),
            Expr::Not(operand) => self.not(operand, cx, out),
            Expr::And(and) => {
                let mut outcome = Outcome::default();

                for operand in &and.operands {
                    let mut fragments = vec![];
                    outcome.merge(self.predicate(operand, cx.nested(), &mut fragments)?);

                    if fragments.is_empty() {
                        tracing::trace!(depth = cx.depth, "dropping constant AND operand");
                        continue;
                    }

                    if !out.is_empty() {
                        out.push(Fragment::And);
                    }
                    out.extend(fragments);
                }

                Ok(outcome)
            }
            Expr::Or(_) => Err(Error::unsupported_query_shape("OR is not supported")),
            Expr::BinaryOp(expr) => self.comparison(expr, out),
            Expr::Method(method) => Err(method_error(method)),
            Expr::Row | Expr::Record(_) => Err(Error::unsupported_query_shape(
                "a condition must compare a field of the record",
            )),
        }
    }

    /// A boolean member used as a whole condition. Outside of NOT it is
    /// completed with `= @True`.
    fn bool_member(
        &mut self,
        member: &ExprMember,
        cx: Cx,
        out: &mut Vec<Fragment>,
    ) -> Result<Outcome> {
        let column = self.column(member)?;

        if !self.is_bool(member) {
            return Err(Error::unsupported_query_shape(format!(
                "`{}` is not a boolean field and cannot be used as a condition",
                member.dotted()
            )));
        }

        out.push(Fragment::Member(column));

        let mut outcome = Outcome {
            flags: ShapeFlags::HAS_MEMBER,
            uncompleted_bool: true,
        };

        if !cx.flags.contains(ShapeFlags::IN_NOT) {
            self.complete(out, true);
            outcome.uncompleted_bool = false;
        }

        Ok(outcome)
    }

    fn not(&mut self, operand: &Expr, cx: Cx, out: &mut Vec<Fragment>) -> Result<Outcome> {
        match operand {
            Expr::Member(member) => {
                let mut outcome = self.bool_member(member, cx.with(ShapeFlags::IN_NOT), out)?;
                if outcome.uncompleted_bool {
                    self.complete(out, false);
                    outcome.uncompleted_bool = false;
                }
                Ok(outcome)
            }
            Expr::Value(Value::Bool(value)) => constant(&Value::Bool(!value)),
            Expr::Captured(captured) => match captured.eval() {
                Value::Bool(value) => constant(&Value::Bool(!value)),
                value => constant(&value),
            },
            _ => Err(Error::unsupported_query_shape(
                "NOT is only supported over a boolean field",
            )),
        }
    }

    fn comparison(&mut self, expr: &ExprBinaryOp, out: &mut Vec<Fragment>) -> Result<Outcome> {
        if expr.op.is_ne() {
            return Err(Error::unsupported_query_shape(
                "`!=` comparisons are not supported",
            ));
        }

        let mut op = expr.op;

        let (member, value) = match (operand(&expr.lhs), operand(&expr.rhs)) {
            (Operand::Member(member), Operand::Value(value)) => (member, value),
            (Operand::Value(value), Operand::Member(member)) => {
                op.reverse();
                (member, value)
            }
            (Operand::Member(lhs), Operand::Member(rhs)) => {
                return Err(Error::unsupported_query_shape(format!(
                    "comparing two fields (`{}` and `{}`) is not supported",
                    lhs.dotted(),
                    rhs.dotted()
                )))
            }
            (Operand::Other(Expr::Method(method)), _) | (_, Operand::Other(Expr::Method(method))) => {
                return Err(method_error(method))
            }
            _ => {
                return Err(Error::unsupported_query_shape(
                    "a comparison must be between a field and a constant",
                ))
            }
        };

        let column = self.column(member)?;
        let mut flags = ShapeFlags::HAS_MEMBER;

        if op.is_inequality() {
            self.track_inequality(&column, op)?;
            flags |= ShapeFlags::HAS_INEQUALITY;
        }

        out.push(Fragment::Member(column));
        out.push(Fragment::Operator(op));

        if value.is_null() {
            out.push(Fragment::Constant("NULL".to_string()));
        } else {
            let value = self.key_value(member, value)?;
            let name = self.bind(value);
            out.push(Fragment::Param(name));
        }

        Ok(Outcome::flagged(flags))
    }

    /// Appends `= @<value>` to a boolean member.
    fn complete(&mut self, out: &mut Vec<Fragment>, value: bool) {
        let name = self.bind(Value::Bool(value));
        out.push(Fragment::Operator(BinaryOp::Eq));
        out.push(Fragment::Param(name));
    }

    fn track_inequality(&mut self, column: &str, op: BinaryOp) -> Result<()> {
        match &self.inequality {
            Some((field, _)) if field != column => Err(Error::unsupported_query_shape(format!(
                "inequality comparisons must all target one field; found `{field}` and `{column}`"
            ))),
            _ => {
                self.inequality = Some((column.to_string(), op));
                Ok(())
            }
        }
    }

    /// Comparisons against the key field bind a key rather than a string.
    fn key_value(&self, member: &ExprMember, value: Value) -> Result<Value> {
        let is_key = member.name().is_some_and(|name| self.schema.is_key(name));
        if !is_key {
            return Ok(value);
        }

        match value {
            Value::String(name) => Ok(Value::Key(Key::new(self.schema.name, name))),
            Value::Key(key) => Ok(Value::Key(key)),
            value => Err(Error::type_conversion(value, "String key")),
        }
    }

    fn is_bool(&self, member: &ExprMember) -> bool {
        member
            .name()
            .and_then(|name| self.schema.field(name))
            .is_some_and(|(_, field)| field.ty.is_bool())
    }
}

/// A constant in condition position. Only `true` is accepted, and it
/// contributes nothing.
fn constant(value: &Value) -> Result<Outcome> {
    match value {
        Value::Bool(true) => Ok(Outcome::flagged(ShapeFlags::HAS_CONSTANT_BOOLEAN)),
        Value::Bool(false) => Err(Error::invalid_pipeline_construction(
            "filter is always false",
        )),
        value => Err(Error::invalid_pipeline_construction(format!(
            "constant {value:?} cannot be used as a condition"
        ))),
    }
}

fn operand(expr: &Expr) -> Operand<'_> {
    match expr {
        Expr::Member(member) => Operand::Member(member),
        Expr::Value(value) => Operand::Value(value.clone()),
        Expr::Captured(captured) => Operand::Value(captured.eval()),
        expr => Operand::Other(expr),
    }
}

pub(super) fn method_error(method: &ExprMethod) -> Error {
    let receiver = match &*method.receiver {
        Expr::Member(member) => member.dotted(),
        _ => "expression".to_string(),
    };

    Error::unsupported_query_shape(format!(
        "method `{}` on `{receiver}` is not supported",
        method.name
    ))
}
