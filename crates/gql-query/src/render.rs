use crate::{display_value, Ast, Fragment, Param, SKIP_PARAM, TAKE_PARAM};

use gql_core::{stmt::Direction, Error, Result};

/// Decides how a parameter placeholder is written.
pub trait Params {
    fn placeholder(&self, name: &str) -> Result<String>;
}

/// Writes `@name`; the values travel separately as named arguments.
#[derive(Debug, Clone, Copy, Default)]
pub struct Named;

/// Writes `@value` by looking the parameter up by name.
#[derive(Debug, Clone, Copy)]
pub struct Inline<'a>(pub &'a [Param]);

impl Params for Named {
    fn placeholder(&self, name: &str) -> Result<String> {
        Ok(format!("@{name}"))
    }
}

impl Params for Inline<'_> {
    fn placeholder(&self, name: &str) -> Result<String> {
        let Some(param) = self.0.iter().find(|param| param.name == name) else {
            return Err(Error::rendering_integrity(format!("parameter `{name}`")));
        };

        Ok(format!("@{}", display_value(&param.value)))
    }
}

struct Formatter<'a, P> {
    /// Where to write the query text
    dst: String,

    /// Placeholder style
    params: &'a P,

    order_by: Option<Direction>,
    order_by_field: Option<&'a str>,
    take: bool,
    skip: bool,
}

/// Render an AST to query text.
///
/// Condition fragments are written in sequence. `ORDER BY`, `LIMIT` and
/// `OFFSET` are written last, in that order, wherever their markers sit.
pub fn render<P: Params>(ast: &Ast, params: &P) -> Result<String> {
    let mut f = Formatter {
        dst: String::new(),
        params,
        order_by: None,
        order_by_field: None,
        take: false,
        skip: false,
    };

    for fragment in ast.fragments() {
        f.fragment(fragment)?;
    }

    f.trailing()?;

    Ok(f.dst.trim().to_string())
}

impl<'a, P: Params> Formatter<'a, P> {
    fn fragment(&mut self, fragment: &'a Fragment) -> Result<()> {
        match fragment {
            Fragment::Select => self.dst.push_str("SELECT "),
            Fragment::Projection(columns) => self.text("projection", columns)?,
            Fragment::From => self.dst.push_str(" FROM "),
            Fragment::Kind(kind) => self.text("kind", kind)?,
            Fragment::Where => self.dst.push_str(" WHERE "),
            Fragment::And => self.dst.push_str(" AND "),
            Fragment::Operator(op) => {
                self.dst.push(' ');
                self.dst.push_str(&op.to_string());
                self.dst.push(' ');
            }
            Fragment::Member(name) => self.text("member", name)?,
            Fragment::Param(name) => self.param(name)?,
            Fragment::Constant(text) => self.text("constant", text)?,
            Fragment::Take => self.take = true,
            Fragment::Skip => self.skip = true,
            Fragment::OrderBy(direction) => self.order_by = Some(*direction),
            Fragment::OrderByField(field) => {
                if field.is_empty() {
                    return Err(Error::rendering_integrity("order by"));
                }
                self.order_by_field = Some(field);
            }
        }

        Ok(())
    }

    fn trailing(&mut self) -> Result<()> {
        match (self.order_by, self.order_by_field) {
            (Some(direction), Some(field)) => {
                self.dst.push_str(" ORDER BY ");
                self.dst.push_str(field);
                self.dst.push(' ');
                self.dst.push_str(&direction.to_string());
            }
            (None, None) => {}
            _ => return Err(Error::rendering_integrity("order by")),
        }

        if self.take {
            self.dst.push_str(" LIMIT ");
            self.param(TAKE_PARAM)?;
        }

        if self.skip {
            self.dst.push_str(" OFFSET ");
            self.param(SKIP_PARAM)?;
        }

        Ok(())
    }

    fn text(&mut self, fragment: &str, text: &str) -> Result<()> {
        if text.is_empty() {
            return Err(Error::rendering_integrity(fragment));
        }
        self.dst.push_str(text);
        Ok(())
    }

    fn param(&mut self, name: &str) -> Result<()> {
        if name.is_empty() {
            return Err(Error::rendering_integrity("parameter"));
        }
        let placeholder = self.params.placeholder(name)?;
        self.dst.push_str(&placeholder);
        Ok(())
    }
}
