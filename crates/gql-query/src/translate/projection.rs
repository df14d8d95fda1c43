use super::{predicate::method_error, Translator};
use crate::ProjectionPlan;

use gql_core::{stmt::Expr, Error, Result};

impl Translator<'_> {
    /// Builds the projection plan for a selector. Nested records flatten
    /// depth-first into one column list; a selector that needs the whole row
    /// or reads no column selects everything.
    pub(super) fn projection(&mut self, selector: &Expr) -> Result<ProjectionPlan> {
        let mut columns = vec![];
        let whole_row = self.selector_columns(selector, &mut columns)?;

        if whole_row {
            columns.clear();
        }

        Ok(ProjectionPlan {
            columns,
            selector: selector.clone(),
        })
    }

    /// Returns `true` if the selector reads the whole row.
    fn selector_columns(&self, expr: &Expr, columns: &mut Vec<String>) -> Result<bool> {
        match expr {
            Expr::Row => Ok(true),
            Expr::Value(_) | Expr::Captured(_) => Ok(false),
            Expr::Member(member) => {
                let column = self.column(member)?;
                if !columns.contains(&column) {
                    columns.push(column);
                }
                Ok(false)
            }
            Expr::Record(record) => {
                let mut whole_row = false;
                for field in &record.fields {
                    whole_row |= self.selector_columns(field, columns)?;
                }
                Ok(whole_row)
            }
            Expr::Method(method) => Err(method_error(method)),
            _ => Err(Error::unsupported_query_shape(
                "a projection may only select fields, constants or records of them",
            )),
        }
    }
}
