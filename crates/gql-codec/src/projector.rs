use crate::{deserialize_record, value::from_column};

use gql_core::{
    driver::Entity,
    schema::ModelSchema,
    stmt::{Expr, ExprMember, Type, Value, ValueRecord},
    Error, Result,
};
use gql_query::ProjectionPlan;

/// Lazily decodes rows through a projection plan.
///
/// Each row is decoded when it is pulled; a decoding failure is yielded in
/// place of that row.
#[derive(Debug)]
pub struct Projector<I> {
    rows: I,
    plan: ProjectionPlan,
    schema: &'static ModelSchema,
}

/// Project rows returned for a query over `schema`.
pub fn project<I>(
    rows: I,
    plan: ProjectionPlan,
    schema: &'static ModelSchema,
) -> Projector<I::IntoIter>
where
    I: IntoIterator<Item = Entity>,
{
    Projector {
        rows: rows.into_iter(),
        plan,
        schema,
    }
}

impl<I: Iterator<Item = Entity>> Iterator for Projector<I> {
    type Item = Result<Value>;

    fn next(&mut self) -> Option<Self::Item> {
        let row = self.rows.next()?;
        Some(self.eval(&self.plan.selector, &row))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.rows.size_hint()
    }
}

impl<I> Projector<I> {
    fn eval(&self, expr: &Expr, row: &Entity) -> Result<Value> {
        match expr {
            Expr::Row => Ok(Value::Record(deserialize_record(self.schema, row)?)),
            Expr::Value(value) => Ok(value.clone()),
            Expr::Captured(captured) => Ok(captured.eval()),
            Expr::Member(member) => self.column(member, row),
            Expr::Record(record) => Ok(Value::Record(ValueRecord::from_vec(
                record
                    .fields
                    .iter()
                    .map(|field| self.eval(field, row))
                    .collect::<Result<_>>()?,
            ))),
            _ => Err(Error::unsupported_query_shape(
                "a projection may only select fields, constants or records of them",
            )),
        }
    }

    fn column(&self, member: &ExprMember, row: &Entity) -> Result<Value> {
        let Some((index, field)) = member.name().and_then(|name| self.schema.field(name)) else {
            return Err(Error::invalid_result(format!(
                "`{}` is not a column of `{}`",
                member.dotted(),
                self.schema.name
            )));
        };

        if self.schema.is_key(field.name) {
            return match &row.key {
                Some(key) => Ok(Value::String(key.name.clone())),
                None => Err(Error::invalid_result(format!(
                    "row of `{}` has no key",
                    self.schema.name
                ))),
            };
        }

        if let Type::Map(_) = field.ty {
            let mut record = deserialize_record(self.schema, row)?;
            return Ok(record.take(index));
        }

        let Some(property) = row.get(field.name) else {
            return Err(Error::invalid_result(format!(
                "column `{}` is missing from the row",
                field.name
            )));
        };

        from_column(&field.ty, &property.value)
    }
}
